//! repolens - summarize a GitHub repository
//!
//! Fans out concurrent fact fetches against the GitHub REST API, derives
//! composite metrics from whatever succeeded, and optionally enriches the
//! result with narrative insights from an OpenAI-compatible text provider.

pub mod analysis;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use analysis::{AnalysisResult, RepoAnalyzer};
pub use client::RepositoryIdentity;
pub use error::{Error, Result};
