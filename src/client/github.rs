//! GitHub REST API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::{debug, warn};
use reqwest::header::{ACCEPT, HeaderMap};
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::RepositoryApi;
use super::models::{
    CommitActivity, CommitRef, ContributorSummary, GitHubContributor, LanguageBytes, Readme,
    ReadmeLocation, RepoMetadata, RepositoryIdentity, WeeklyCommitStat,
};
use super::retry::retry_after;
use crate::error::{ApiError, ApiResult};

/// Per-request timeout for data calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client-wide request quota
const RATE_LIMIT_PER_SECOND: u32 = 10;

/// Page size for the contributor list and the 30-day commit window
pub const PAGE_SIZE: usize = 100;

/// Length of the recent-commit window
const RECENT_WINDOW_DAYS: i64 = 30;

/// Wait assumed when GitHub signals a rate limit without saying for how long
const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

const USER_AGENT: &str = concat!("repolens/", env!("CARGO_PKG_VERSION"));

/// GitHub REST API client
pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl GitHubClient {
    /// Create a new GitHub client against `base_url` (e.g. `https://api.github.com`)
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota =
            Quota::per_second(NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN));

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }

    /// Issue a GET and map non-success statuses to [`ApiError`].
    ///
    /// The bearer token is only attached to API calls, never to raw content URLs.
    async fn get(&self, url: &str, query: &[(&str, String)], authenticated: bool) -> ApiResult<Response> {
        self.rate_limiter.until_ready().await;

        let mut request = self
            .http
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .query(query);
        if authenticated {
            if let Some(ref token) = self.token {
                request = request.bearer_auth(token);
            }
        }

        debug!("GET {}", url);
        let response = request.send().await.map_err(ApiError::from)?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// GET an API path and decode JSON.
    ///
    /// Returns `None` for `202 Accepted` (statistics still being computed) and
    /// `204 No Content` (empty repository).
    async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.get(&url, query, true).await?;

        match response.status() {
            StatusCode::ACCEPTED | StatusCode::NO_CONTENT => {
                debug!("{} returned {} - treating as empty", path, response.status());
                Ok(None)
            }
            _ => response.json::<T>().await.map(Some).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", path, e))
            }),
        }
    }

    /// GET an API path that must return a body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        self.get_optional(path, query)
            .await?
            .ok_or_else(|| ApiError::InvalidResponse(format!("Empty response from {}", path)))
    }

    async fn weekly_activity(&self, repo: &RepositoryIdentity) -> ApiResult<Vec<WeeklyCommitStat>> {
        let path = format!("{}/stats/commit_activity", repo.api_path());
        Ok(self.get_optional(&path, &[]).await?.unwrap_or_default())
    }

    async fn recent_commit_count(&self, repo: &RepositoryIdentity) -> ApiResult<u64> {
        let since = (Utc::now() - chrono::Duration::days(RECENT_WINDOW_DAYS))
            .to_rfc3339_opts(SecondsFormat::Secs, true);
        let path = format!("{}/commits", repo.api_path());
        let query = [("since", since), ("per_page", PAGE_SIZE.to_string())];

        let commits: Vec<CommitRef> = self.get_optional(&path, &query).await?.unwrap_or_default();
        Ok(commits.len() as u64)
    }

    async fn readme_text(&self, repo: &RepositoryIdentity) -> ApiResult<String> {
        let path = format!("{}/readme", repo.api_path());
        let location: ReadmeLocation = self.get_json(&path, &[]).await?;
        let url = location
            .download_url
            .ok_or_else(|| ApiError::InvalidResponse("Readme has no download_url".to_string()))?;

        let response = self.get(&url, &[], false).await?;
        response.text().await.map_err(ApiError::from)
    }
}

#[async_trait]
impl RepositoryApi for GitHubClient {
    async fn fetch_metadata(&self, repo: &RepositoryIdentity) -> ApiResult<RepoMetadata> {
        self.get_json(&repo.api_path(), &[]).await
    }

    async fn fetch_languages(&self, repo: &RepositoryIdentity) -> ApiResult<LanguageBytes> {
        let path = format!("{}/languages", repo.api_path());
        Ok(self.get_optional(&path, &[]).await?.unwrap_or_default())
    }

    async fn fetch_commit_activity(
        &self,
        repo: &RepositoryIdentity,
    ) -> ApiResult<CommitActivity> {
        let (weeks, recent) =
            futures::join!(self.weekly_activity(repo), self.recent_commit_count(repo));

        // GitHub answers 409 for empty repositories; the weekly series still stands
        let recent = recent.unwrap_or_else(|err| {
            warn!("Recent commit count unavailable for {}: {}", repo, err);
            0
        });
        Ok(CommitActivity::from_parts(weeks?, recent))
    }

    async fn fetch_contributors(
        &self,
        repo: &RepositoryIdentity,
    ) -> ApiResult<ContributorSummary> {
        let path = format!("{}/contributors", repo.api_path());
        let query = [("per_page", PAGE_SIZE.to_string())];

        let contributors: Vec<GitHubContributor> =
            self.get_optional(&path, &query).await?.unwrap_or_default();
        Ok(ContributorSummary::from_contributors(contributors))
    }

    async fn fetch_readme(&self, repo: &RepositoryIdentity) -> Readme {
        match self.readme_text(repo).await {
            Ok(text) => Readme::Available(text),
            Err(err) => {
                debug!("Readme unavailable for {}: {}", repo, err);
                Readme::Unavailable
            }
        }
    }
}

/// Map a non-success response to an [`ApiError`].
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.text().await.unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN if rate_limit_exhausted(&headers) => {
            ApiError::RateLimit(rate_limit_reset(&headers).unwrap_or(DEFAULT_RATE_LIMIT_WAIT))
        }
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(message_or(&body, "Resource not found")),
        StatusCode::TOO_MANY_REQUESTS => {
            ApiError::RateLimit(retry_after(&headers).unwrap_or(DEFAULT_RATE_LIMIT_WAIT))
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(message_or(&body, "Bad request"))
        }
        status if status.is_server_error() => {
            ApiError::ServerError(message_or(&body, &format!("Server error: {}", status)))
        }
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}

/// GitHub's `{"message": "..."}` error body, falling back to `default`
fn message_or(body: &str, default: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| default.to_string())
}

fn rate_limit_exhausted(headers: &HeaderMap) -> bool {
    headers
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0")
}

/// Time until `x-ratelimit-reset` (Unix seconds)
fn rate_limit_reset(headers: &HeaderMap) -> Option<Duration> {
    let reset = headers
        .get("x-ratelimit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<i64>().ok())?;
    let remaining = (reset - Utc::now().timestamp()).max(0);
    Some(Duration::from_secs(remaining as u64))
}
