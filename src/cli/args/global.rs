//! Global CLI options shared across all commands
//!
//! Collects the global flags once so handlers and configuration loading take a
//! single value instead of a growing parameter list.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to configuration loading and command handlers.
///
/// # Precedence
///
/// Flag > environment variable > config file > default. This struct holds the
/// flag layer; the rest is resolved in [`crate::cli::context::load_config`].
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.repolens/config.yaml)
    pub config: Option<String>,

    /// Force debug logging
    pub debug: bool,

    /// Custom GitHub API host for testing or GitHub Enterprise
    pub api_host: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            debug: cli.debug,
            api_host: cli.api_host.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
