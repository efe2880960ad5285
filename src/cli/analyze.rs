//! Analyze command implementation

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::RepositoryIdentity;
use crate::error::{Error, Result};
use crate::output::Formattable;

/// Run the full analysis and print it.
///
/// Pretty output shows a spinner on stderr while the facts and insights are
/// gathered; table and JSON output stay silent so they can be piped.
pub async fn run(ctx: &CommandContext, repo: &RepositoryIdentity) -> Result<()> {
    let spinner = match ctx.format {
        OutputFormat::Pretty => Some(spinner(&format!("Analyzing {}...", repo))?),
        _ => None,
    };

    let outcome = ctx.analyzer.analyze(repo).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let result = outcome?;
    debug!(
        "Analysis of {} complete: {} languages, {} contributors",
        repo,
        result.languages.languages.len(),
        result.contributors.total_contributors
    );

    result.print(ctx.format)
}

fn spinner(message: &str) -> Result<ProgressBar> {
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .map_err(|e| Error::Internal(format!("Invalid progress template: {}", e)))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}
