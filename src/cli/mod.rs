//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

use crate::client::RepositoryIdentity;

pub mod analyze;
pub mod args;
pub mod context;
pub mod health;
pub mod repo;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// repolens - summarize a GitHub repository
#[derive(Parser, Debug)]
#[command(name = "repolens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "REPOLENS_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "REPOLENS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Override the GitHub API base URL
    #[arg(long, global = true, hide = true)]
    pub api_host: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a repository: stats, languages, activity, contributors and insights
    #[command(after_help = "EXAMPLES:\n  \
            repolens analyze octocat/Hello-World\n  \
            repolens analyze https://github.com/rust-lang/rust --format json")]
    Analyze {
        /// Repository as <owner>/<repo> or a github.com URL
        repository: RepositoryIdentity,
    },

    /// Show repository statistics only
    Stats {
        /// Repository as <owner>/<repo>
        repository: RepositoryIdentity,
    },

    /// Show contributor totals and top contributors
    Contributors {
        /// Repository as <owner>/<repo>
        repository: RepositoryIdentity,
    },

    /// Show weekly commit activity
    Commits {
        /// Repository as <owner>/<repo>
        repository: RepositoryIdentity,
    },

    /// Report liveness and insight availability
    Health,

    /// Show configuration status
    Status,

    /// Display version information
    Version,
}
