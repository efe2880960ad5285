//! Mock gateways for testing
//!
//! In-memory implementations of [`RepositoryApi`] and [`InsightApi`] so the
//! orchestrator can be exercised without real HTTP calls.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::insight::{ContributionFacts, InsightApi, LanguageFacts, SummaryFacts};
use super::models::{
    CommitActivity, ContributorSummary, LanguageBytes, Readme, RepoMetadata, RepositoryIdentity,
};
use super::retry::Reply;
use crate::error::{ApiError, ApiResult};

/// Mock data provider.
///
/// Configure facts and failures via builder methods, then hand the mock to a
/// [`RepoAnalyzer`](crate::analysis::RepoAnalyzer).
///
/// # Example
/// ```ignore
/// let github = MockRepositoryClient::new()
///     .with_metadata(metadata)
///     .await
///     .with_languages_error(ApiError::Timeout)
///     .await;
/// ```
pub struct MockRepositoryClient {
    /// Metadata to return; `None` means the repository does not exist
    metadata: Arc<Mutex<Option<RepoMetadata>>>,
    languages: Arc<Mutex<LanguageBytes>>,
    activity: Arc<Mutex<CommitActivity>>,
    contributors: Arc<Mutex<ContributorSummary>>,
    readme: Arc<Mutex<Readme>>,
    /// Persistent per-fact failures
    errors: Arc<Mutex<FactErrors>>,
    /// Simulated latency applied to every call
    latency: Arc<Mutex<Duration>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

impl Default for MockRepositoryClient {
    fn default() -> Self {
        Self {
            metadata: Arc::new(Mutex::new(None)),
            languages: Arc::new(Mutex::new(LanguageBytes::new())),
            activity: Arc::new(Mutex::new(CommitActivity::default())),
            contributors: Arc::new(Mutex::new(ContributorSummary::default())),
            readme: Arc::new(Mutex::new(Readme::Unavailable)),
            errors: Arc::new(Mutex::new(FactErrors::default())),
            latency: Arc::new(Mutex::new(Duration::ZERO)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
        }
    }
}

#[derive(Default)]
struct FactErrors {
    metadata: Option<ApiError>,
    languages: Option<ApiError>,
    activity: Option<ApiError>,
    contributors: Option<ApiError>,
}

/// Tracks gateway call counts for test verification
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CallCounts {
    pub metadata: usize,
    pub languages: usize,
    pub commit_activity: usize,
    pub contributors: usize,
    pub readme: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.metadata + self.languages + self.commit_activity + self.contributors + self.readme
    }
}

impl MockRepositoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_metadata(self, metadata: RepoMetadata) -> Self {
        *self.metadata.lock().await = Some(metadata);
        self
    }

    pub async fn with_languages(self, languages: LanguageBytes) -> Self {
        *self.languages.lock().await = languages;
        self
    }

    pub async fn with_activity(self, activity: CommitActivity) -> Self {
        *self.activity.lock().await = activity;
        self
    }

    pub async fn with_contributors(self, contributors: ContributorSummary) -> Self {
        *self.contributors.lock().await = contributors;
        self
    }

    pub async fn with_readme(self, text: &str) -> Self {
        *self.readme.lock().await = Readme::Available(text.to_string());
        self
    }

    /// Fail every metadata lookup with `error`.
    pub async fn with_metadata_error(self, error: ApiError) -> Self {
        self.errors.lock().await.metadata = Some(error);
        self
    }

    pub async fn with_languages_error(self, error: ApiError) -> Self {
        self.errors.lock().await.languages = Some(error);
        self
    }

    pub async fn with_activity_error(self, error: ApiError) -> Self {
        self.errors.lock().await.activity = Some(error);
        self
    }

    pub async fn with_contributors_error(self, error: ApiError) -> Self {
        self.errors.lock().await.contributors = Some(error);
        self
    }

    /// Delay every call by `latency` before answering.
    pub async fn with_latency(self, latency: Duration) -> Self {
        *self.latency.lock().await = latency;
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    async fn simulate_latency(&self) {
        let latency = *self.latency.lock().await;
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl super::RepositoryApi for MockRepositoryClient {
    async fn fetch_metadata(&self, repo: &RepositoryIdentity) -> ApiResult<RepoMetadata> {
        self.call_count.lock().await.metadata += 1;
        self.simulate_latency().await;

        if let Some(e) = self.errors.lock().await.metadata.clone() {
            return Err(e);
        }
        self.metadata
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::NotFound(format!("repos/{}", repo)))
    }

    async fn fetch_languages(&self, _repo: &RepositoryIdentity) -> ApiResult<LanguageBytes> {
        self.call_count.lock().await.languages += 1;
        self.simulate_latency().await;

        if let Some(e) = self.errors.lock().await.languages.clone() {
            return Err(e);
        }
        Ok(self.languages.lock().await.clone())
    }

    async fn fetch_commit_activity(
        &self,
        _repo: &RepositoryIdentity,
    ) -> ApiResult<CommitActivity> {
        self.call_count.lock().await.commit_activity += 1;
        self.simulate_latency().await;

        if let Some(e) = self.errors.lock().await.activity.clone() {
            return Err(e);
        }
        Ok(self.activity.lock().await.clone())
    }

    async fn fetch_contributors(
        &self,
        _repo: &RepositoryIdentity,
    ) -> ApiResult<ContributorSummary> {
        self.call_count.lock().await.contributors += 1;
        self.simulate_latency().await;

        if let Some(e) = self.errors.lock().await.contributors.clone() {
            return Err(e);
        }
        Ok(self.contributors.lock().await.clone())
    }

    async fn fetch_readme(&self, _repo: &RepositoryIdentity) -> Readme {
        self.call_count.lock().await.readme += 1;
        self.simulate_latency().await;

        self.readme.lock().await.clone()
    }
}

/// Mock insight generator.
///
/// Each operation answers with a configured [`Reply`] (canned text by
/// default) and records its name, so tests can check which insights were
/// requested and in what order.
pub struct MockInsightClient {
    available: bool,
    summary: Arc<Mutex<Reply>>,
    languages: Arc<Mutex<Reply>>,
    contributions: Arc<Mutex<Reply>>,
    /// Operation names in call order
    calls: Arc<Mutex<Vec<&'static str>>>,
    /// Primary language passed to the language analysis
    seen_primary_language: Arc<Mutex<Option<String>>>,
}

impl Default for MockInsightClient {
    fn default() -> Self {
        Self {
            available: true,
            summary: Arc::new(Mutex::new(Reply::Text("mock summary".to_string()))),
            languages: Arc::new(Mutex::new(Reply::Text("mock languages".to_string()))),
            contributions: Arc::new(Mutex::new(Reply::Text(
                "mock contributions".to_string(),
            ))),
            calls: Arc::new(Mutex::new(Vec::new())),
            seen_primary_language: Arc::new(Mutex::new(None)),
        }
    }
}

impl MockInsightClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator with no usable credential.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub async fn with_summary(self, reply: Reply) -> Self {
        *self.summary.lock().await = reply;
        self
    }

    pub async fn with_languages(self, reply: Reply) -> Self {
        *self.languages.lock().await = reply;
        self
    }

    pub async fn with_contributions(self, reply: Reply) -> Self {
        *self.contributions.lock().await = reply;
        self
    }

    /// Operation names in the order they were invoked.
    pub async fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().await.clone()
    }

    pub async fn seen_primary_language(&self) -> Option<String> {
        self.seen_primary_language.lock().await.clone()
    }
}

#[async_trait]
impl InsightApi for MockInsightClient {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn repository_summary(&self, _facts: SummaryFacts<'_>) -> Reply {
        self.calls.lock().await.push("repository_summary");
        self.summary.lock().await.clone()
    }

    async fn language_analysis(&self, facts: LanguageFacts<'_>) -> Reply {
        self.calls.lock().await.push("language_analysis");
        *self.seen_primary_language.lock().await = Some(facts.primary_language.to_string());
        self.languages.lock().await.clone()
    }

    async fn contribution_analysis(&self, _facts: ContributionFacts<'_>) -> Reply {
        self.calls.lock().await.push("contribution_analysis");
        self.contributions.lock().await.clone()
    }
}
