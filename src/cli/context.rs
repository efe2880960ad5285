//! Command execution context
//!
//! Resolves configuration once and wires the gateways into a
//! [`RepoAnalyzer`] for the command handlers.

use log::debug;

use crate::analysis::RepoAnalyzer;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{GitHubClient, InsightClient};
use crate::config::Config;
use crate::error::Result;

/// Analyzer over the real HTTP gateways
pub type Analyzer = RepoAnalyzer<GitHubClient, InsightClient>;

/// Resolve configuration: file, then environment, then global flags.
pub fn load_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load_at(opts.config_ref())?;
    apply_flags(&mut config, opts);
    Ok(config)
}

fn apply_flags(config: &mut Config, opts: &GlobalOptions) {
    if let Some(host) = opts.api_host_ref() {
        config.github_api_url = host.to_string();
    }
    if opts.debug {
        config.debug = true;
    }
}

/// Context for command execution: resolved config, analyzer and output format.
pub struct CommandContext {
    pub config: Config,
    pub analyzer: Analyzer,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Build both gateways from `config`.
    ///
    /// No network call is made here; a missing insight key only marks the
    /// generator unavailable.
    pub fn new(config: Config, format: OutputFormat) -> Result<Self> {
        debug!(
            "GitHub API: {} (token {})",
            config.github_base(),
            if config.github_token.is_some() {
                "configured"
            } else {
                "not configured"
            }
        );

        let github = GitHubClient::new(config.github_base(), config.github_token.clone())?;
        let insight = InsightClient::new(
            config.insight_base(),
            config.insight_api_key.clone(),
            config.insight_model.clone(),
        )?;

        Ok(Self {
            analyzer: RepoAnalyzer::new(github, insight),
            config,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(api_host: Option<&str>, debug: bool) -> GlobalOptions {
        GlobalOptions {
            format: OutputFormat::Pretty,
            config: None,
            debug,
            api_host: api_host.map(str::to_string),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config {
            github_api_url: "https://from-env.example".to_string(),
            ..Config::default()
        };

        apply_flags(&mut config, &opts(Some("http://127.0.0.1:9999"), true));

        assert_eq!(config.github_api_url, "http://127.0.0.1:9999");
        assert!(config.debug);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let mut config = Config {
            debug: true,
            ..Config::default()
        };

        apply_flags(&mut config, &opts(None, false));

        assert_eq!(config, Config {
            debug: true,
            ..Config::default()
        });
    }

    #[test]
    fn test_context_without_insight_key() {
        let ctx = CommandContext::new(Config::default(), OutputFormat::Json).unwrap();
        assert!(!ctx.analyzer.health().ai_available);
        assert_eq!(ctx.format, OutputFormat::Json);
    }

    #[test]
    fn test_context_with_insight_key() {
        let config = Config {
            insight_api_key: Some("gsk_live".to_string()),
            ..Config::default()
        };
        let ctx = CommandContext::new(config, OutputFormat::Pretty).unwrap();
        assert!(ctx.analyzer.health().ai_available);
    }
}
