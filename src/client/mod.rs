//! Outbound API clients
//!
//! - [`RepositoryApi`] - data provider gateway (implemented by [`GitHubClient`])
//! - [`InsightApi`] - insight generation gateway (implemented by [`InsightClient`])
//! - [`ResilientClient`] - retry, backoff and pacing for insight calls

use async_trait::async_trait;

use crate::error::ApiResult;

pub mod github;
pub mod insight;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod retry;

pub use github::GitHubClient;
pub use insight::{ContributionFacts, InsightApi, InsightClient, LanguageFacts, SummaryFacts};
#[cfg(test)]
pub use mock::{MockInsightClient, MockRepositoryClient};
pub use models::{
    CommitActivity, ContributorSummary, LanguageBytes, Readme, RepoMetadata, RepositoryIdentity,
};
pub use retry::{Reply, ResilientClient, RetryPolicy, UNAVAILABLE_MARKER};

/// Data provider gateway: one independent read per repository fact.
///
/// Every operation is an independent suspension point. Only
/// [`fetch_readme`](RepositoryApi::fetch_readme) is infallible; it degrades to
/// [`Readme::Unavailable`] instead of returning an error.
#[async_trait]
pub trait RepositoryApi: Send + Sync {
    /// Repository metadata. `NotFound` for a missing repository,
    /// `Unauthorized`/`Forbidden` on access failure.
    async fn fetch_metadata(&self, repo: &RepositoryIdentity) -> ApiResult<RepoMetadata>;

    /// Language byte counts; an empty map is a valid result.
    async fn fetch_languages(&self, repo: &RepositoryIdentity) -> ApiResult<LanguageBytes>;

    /// Weekly statistics plus the 30-day commit count.
    async fn fetch_commit_activity(&self, repo: &RepositoryIdentity)
    -> ApiResult<CommitActivity>;

    /// Contributor totals, active count and top contributors.
    async fn fetch_contributors(&self, repo: &RepositoryIdentity)
    -> ApiResult<ContributorSummary>;

    /// Readme text, resolved in two steps.
    async fn fetch_readme(&self, repo: &RepositoryIdentity) -> Readme;
}
