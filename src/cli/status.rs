//! Status command implementation

use std::path::Path;

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::client::insight::is_usable_key;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display the resolved configuration.
///
/// Credentials are reported as configured or missing, never printed.
pub fn run(opts: &GlobalOptions, config: &Config) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    println!("{}", render(&path, config));
    Ok(())
}

fn render(path: &Path, config: &Config) -> String {
    let mut lines = vec![format!("{}\n", "repolens Configuration Status".bold())];

    let file_note = if path.exists() {
        String::new()
    } else {
        format!(" {}", "(not found, using defaults)".dimmed())
    };
    lines.push(format!(
        "Config file: {}{}",
        path.display().to_string().cyan(),
        file_note
    ));
    lines.push(String::new());

    lines.push(format!("{} GitHub API: {}", "○".dimmed(), config.github_base().cyan()));
    if config.github_token.is_some() {
        lines.push(format!("{} GitHub token configured", "✓".green()));
    } else {
        lines.push(format!(
            "{} GitHub token not configured (60 requests/hour)",
            "⚠".yellow()
        ));
        lines.push("  → Set GITHUB_TOKEN for higher rate limits".to_string());
    }

    if is_usable_key(config.insight_api_key.as_deref()) {
        lines.push(format!(
            "{} Insight API key configured ({})",
            "✓".green(),
            config.insight_model
        ));
    } else {
        lines.push(format!("{} Insight API key not configured", "✗".red()));
        lines.push("  → Set GROQ_API_KEY to enable generated insights".to_string());
    }
    lines.push(format!(
        "{} Insight API: {}",
        "○".dimmed(),
        config.insight_base().cyan()
    ));

    if config.debug {
        lines.push(format!("{} Debug logging enabled", "○".dimmed()));
    }

    lines.join("\n")
}
