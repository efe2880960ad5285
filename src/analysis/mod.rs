//! Aggregation orchestrator
//!
//! [`RepoAnalyzer`] fans out the five repository fact fetches concurrently,
//! substitutes defaults for every optional fact that failed, derives the
//! composite metrics and drives the insight generator sequentially.
//!
//! Only a failed metadata lookup aborts an analysis.

use chrono::Utc;
use log::{debug, warn};

use crate::client::models::{CommitActivity, ContributorSummary, RepoMetadata};
use crate::client::{
    ContributionFacts, InsightApi, LanguageFacts, RepositoryApi, RepositoryIdentity, SummaryFacts,
};
use crate::error::{ApiResult, Error, Result};

pub mod fallback;
pub mod metrics;
mod result;

pub use metrics::{LanguagePercentages, language_percentages, primary_language};
pub use result::{
    AnalysisResult, HealthReport, InsightItem, InsightSet, LanguageData, RepoLinks, RepoStats,
};

/// Repository analyzer over an injected data provider and insight generator
pub struct RepoAnalyzer<G, I> {
    github: G,
    insight: I,
}

impl<G: RepositoryApi, I: InsightApi> RepoAnalyzer<G, I> {
    pub fn new(github: G, insight: I) -> Self {
        Self { github, insight }
    }

    /// Full analysis: facts, derived metrics and insights.
    pub async fn analyze(&self, repo: &RepositoryIdentity) -> Result<AnalysisResult> {
        debug!("Analyzing {}", repo);

        let (metadata, languages, activity, contributors, readme) = tokio::join!(
            self.github.fetch_metadata(repo),
            self.github.fetch_languages(repo),
            self.github.fetch_commit_activity(repo),
            self.github.fetch_contributors(repo),
            self.github.fetch_readme(repo),
        );

        let metadata = require_metadata(repo, metadata)?;
        let languages = or_default(repo, "languages", languages);
        let commit_activity = or_default(repo, "commit activity", activity);
        let contributors = or_default(repo, "contributors", contributors);

        let percentages = language_percentages(&languages);
        let main_language = primary_language(&languages, metadata.language.as_deref());

        let ai_insights = if self.insight.is_available() {
            self.generate_insights(
                SummaryFacts {
                    metadata: &metadata,
                    readme: &readme,
                },
                LanguageFacts {
                    primary_language: main_language,
                    percentages: &percentages,
                },
                ContributionFacts {
                    metadata: &metadata,
                    contributors: &contributors,
                },
            )
            .await
        } else {
            debug!("Insight generator not configured; using static insights");
            InsightSet::not_configured()
        };

        Ok(AnalysisResult {
            owner: repo.owner().to_string(),
            repo: repo.name().to_string(),
            stats: RepoStats::from(&metadata),
            languages: LanguageData {
                languages: percentages,
            },
            commit_activity,
            contributors,
            links: AnalysisResult::links_for(&metadata, repo),
            ai_insights,
        })
    }

    /// Metadata counts and dates only.
    pub async fn stats(&self, repo: &RepositoryIdentity) -> Result<RepoStats> {
        let metadata = require_metadata(repo, self.github.fetch_metadata(repo).await)?;
        Ok(RepoStats::from(&metadata))
    }

    /// Contributor totals and top contributors.
    ///
    /// Provider failures propagate here; there is no mandatory fact to fall
    /// back on.
    pub async fn contributors(&self, repo: &RepositoryIdentity) -> Result<ContributorSummary> {
        Ok(self.github.fetch_contributors(repo).await?)
    }

    /// Weekly commit series and the 30-day count.
    pub async fn commit_activity(&self, repo: &RepositoryIdentity) -> Result<CommitActivity> {
        Ok(self.github.fetch_commit_activity(repo).await?)
    }

    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            ai_available: self.insight.is_available(),
        }
    }

    /// Summary, language and contribution insights, in that order.
    ///
    /// The generator paces and retries each call; a call that still fails
    /// gets a fact-derived fallback and does not affect the others.
    async fn generate_insights(
        &self,
        summary: SummaryFacts<'_>,
        languages: LanguageFacts<'_>,
        contributions: ContributionFacts<'_>,
    ) -> InsightSet {
        let repository_summary = self
            .insight
            .repository_summary(summary)
            .await
            .text()
            .unwrap_or_else(|| {
                warn!("Repository summary unavailable; using fallback");
                fallback::repository_summary(summary.metadata, languages.primary_language)
            });

        let language_analysis = self
            .insight
            .language_analysis(languages)
            .await
            .text()
            .unwrap_or_else(|| {
                warn!("Language analysis unavailable; using fallback");
                fallback::language_analysis(languages.primary_language)
            });

        let contribution_patterns = self
            .insight
            .contribution_analysis(contributions)
            .await
            .text()
            .unwrap_or_else(|| {
                warn!("Contribution analysis unavailable; using fallback");
                fallback::contribution_patterns(contributions.contributors)
            });

        InsightSet {
            repository_summary: InsightItem::now(repository_summary),
            language_analysis: InsightItem::now(language_analysis),
            contribution_patterns: InsightItem::now(contribution_patterns),
        }
    }
}

fn require_metadata(
    repo: &RepositoryIdentity,
    metadata: ApiResult<RepoMetadata>,
) -> Result<RepoMetadata> {
    metadata.map_err(|source| Error::RepositoryNotFound {
        repository: repo.to_string(),
        source,
    })
}

fn or_default<T: Default>(repo: &RepositoryIdentity, fact: &str, result: ApiResult<T>) -> T {
    result.unwrap_or_else(|e| {
        warn!("Failed to fetch {} for {}: {}; using defaults", fact, repo, e);
        T::default()
    })
}
