//! Composed analysis results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::models::{CommitActivity, ContributorSummary, RepoMetadata, RepositoryIdentity};

use super::fallback::NOT_CONFIGURED;
use super::metrics::LanguagePercentages;

/// Counts and dates from the repository metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoStats {
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub license: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&RepoMetadata> for RepoStats {
    fn from(meta: &RepoMetadata) -> Self {
        Self {
            stars: meta.stargazers_count,
            forks: meta.forks_count,
            open_issues: meta.open_issues_count,
            license: meta.license_name().map(str::to_string),
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageData {
    pub languages: LanguagePercentages,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoLinks {
    pub repo_url: String,
    pub owner_url: String,
}

/// One piece of narrative text and when it was produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightItem {
    pub content: String,
    pub generated_at: DateTime<Utc>,
}

impl InsightItem {
    pub fn now(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            generated_at: Utc::now(),
        }
    }
}

/// The three independent insights
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightSet {
    pub repository_summary: InsightItem,
    pub language_analysis: InsightItem,
    pub contribution_patterns: InsightItem,
}

impl InsightSet {
    /// Static records used when no generator credential is configured.
    pub fn not_configured() -> Self {
        Self {
            repository_summary: InsightItem::now(NOT_CONFIGURED),
            language_analysis: InsightItem::now(NOT_CONFIGURED),
            contribution_patterns: InsightItem::now(NOT_CONFIGURED),
        }
    }
}

/// Everything known about one repository, composed once per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub owner: String,
    pub repo: String,
    pub stats: RepoStats,
    pub languages: LanguageData,
    pub commit_activity: CommitActivity,
    pub contributors: ContributorSummary,
    pub links: RepoLinks,
    pub ai_insights: InsightSet,
}

impl AnalysisResult {
    pub fn identity(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    pub(crate) fn links_for(meta: &RepoMetadata, repo: &RepositoryIdentity) -> RepoLinks {
        RepoLinks {
            repo_url: meta.repo_url(repo),
            owner_url: meta.owner_url(repo),
        }
    }
}

/// Liveness report; computed without network calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub ai_available: bool,
}
