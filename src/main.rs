//! repolens CLI - summarize a GitHub repository

use clap::Parser;
use log::{LevelFilter, debug};

use repolens::Result;
use repolens::cli::{self, Cli, CommandContext, Commands, GlobalOptions};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = GlobalOptions::from_cli(&cli);

    if let Commands::Version = cli.command {
        println!("repolens version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = cli::context::load_config(&opts)?;
    init_logging(config.debug);
    debug!("Debug mode enabled");

    if let Commands::Status = cli.command {
        return cli::status::run(&opts, &config);
    }

    let ctx = CommandContext::new(config, opts.format)?;

    match cli.command {
        Commands::Analyze { repository } => cli::analyze::run(&ctx, &repository).await,
        Commands::Stats { repository } => cli::repo::stats(&ctx, &repository).await,
        Commands::Contributors { repository } => cli::repo::contributors(&ctx, &repository).await,
        Commands::Commits { repository } => cli::repo::commits(&ctx, &repository).await,
        Commands::Health => cli::health::run(&ctx),
        Commands::Status | Commands::Version => Ok(()),
    }
}

/// `warn` by default, `debug` for this crate with `--debug`; `RUST_LOG` still applies.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("repolens", LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
