//! Readme models

use serde::Deserialize;

/// Text used wherever the readme could not be retrieved
pub const README_UNAVAILABLE: &str = "README not available";

/// Response of `GET /repos/{owner}/{repo}/readme`
#[derive(Debug, Clone, Deserialize)]
pub struct ReadmeLocation {
    /// Raw content URL
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Readme text, or the explicit unavailable state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Readme {
    Available(String),
    #[default]
    Unavailable,
}

impl Readme {
    /// Readme text, or [`README_UNAVAILABLE`]
    pub fn as_text(&self) -> &str {
        match self {
            Readme::Available(text) => text,
            Readme::Unavailable => README_UNAVAILABLE,
        }
    }

    /// At most `max_chars` characters of [`Readme::as_text`]
    pub fn excerpt(&self, max_chars: usize) -> String {
        self.as_text().chars().take(max_chars).collect()
    }
}
