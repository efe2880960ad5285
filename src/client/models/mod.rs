//! GitHub data models
//!
//! Wire types returned by the GitHub REST API, together with the normalized
//! facts the gateway hands to the orchestrator. Organized by resource type.

mod activity;
mod contributor;
mod readme;
mod repo;

// Re-export all models for convenient access
pub use activity::{CommitActivity, CommitRef, MAX_WEEKS, WeeklyCommitStat, WeeklyCommits};
pub use contributor::{
    ACTIVE_CONTRIBUTION_THRESHOLD, ContributorSummary, GitHubContributor, TOP_CONTRIBUTOR_LIMIT,
    TopContributor,
};
pub use readme::{README_UNAVAILABLE, Readme, ReadmeLocation};
pub use repo::{LanguageBytes, License, RepoMetadata, RepoOwner, RepositoryIdentity};
