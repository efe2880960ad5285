//! Insight generation gateway
//!
//! Builds bounded prompts from structured repository facts and sends them to
//! an OpenAI-compatible chat completions endpoint (Groq by default) through a
//! [`ResilientClient`].

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};

use super::models::{ContributorSummary, Readme, RepoMetadata};
use super::retry::{Reply, ResilientClient, RetryPolicy, retry_after};
use crate::analysis::metrics::LanguagePercentages;
use crate::error::{ApiError, ApiResult};

/// Per-request timeout for generation calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Character budget for the readme excerpt in the summary prompt
pub const README_EXCERPT_CHARS: usize = 500;

/// Topics included in the summary prompt
const MAX_PROMPT_TOPICS: usize = 5;

/// Languages included in the language prompt
const MAX_PROMPT_LANGUAGES: usize = 10;

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1000;

/// Values shipped in sample configs; never treated as real keys
const PLACEHOLDER_KEYS: [&str; 2] = ["your_groq_api_key_here", "your_gemini_api_key_here"];

/// Facts for the repository summary
#[derive(Debug, Clone, Copy)]
pub struct SummaryFacts<'a> {
    pub metadata: &'a RepoMetadata,
    pub readme: &'a Readme,
}

/// Facts for the language analysis
#[derive(Debug, Clone, Copy)]
pub struct LanguageFacts<'a> {
    pub primary_language: &'a str,
    pub percentages: &'a LanguagePercentages,
}

/// Facts for the contribution analysis
#[derive(Debug, Clone, Copy)]
pub struct ContributionFacts<'a> {
    pub metadata: &'a RepoMetadata,
    pub contributors: &'a ContributorSummary,
}

/// Insight generation gateway.
///
/// Generation operations never fail; a provider that cannot be reached
/// yields [`Reply::Unavailable`].
#[async_trait]
pub trait InsightApi: Send + Sync {
    /// True iff a usable credential is configured
    fn is_available(&self) -> bool;

    async fn repository_summary(&self, facts: SummaryFacts<'_>) -> Reply;

    async fn language_analysis(&self, facts: LanguageFacts<'_>) -> Reply;

    async fn contribution_analysis(&self, facts: ContributionFacts<'_>) -> Reply;
}

/// Whether `key` is a real credential rather than empty or a placeholder
pub fn is_usable_key(key: Option<&str>) -> bool {
    match key.map(str::trim) {
        Some(k) if !k.is_empty() => !PLACEHOLDER_KEYS.contains(&k),
        _ => false,
    }
}

/// Prompt for the repository summary
pub fn summary_prompt(facts: SummaryFacts<'_>) -> String {
    let meta = facts.metadata;
    let topics = if meta.topics.is_empty() {
        "None".to_string()
    } else {
        meta.topics
            .iter()
            .take(MAX_PROMPT_TOPICS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let readme = facts.readme.excerpt(README_EXCERPT_CHARS);

    format!(
        "Analyze this GitHub repository and provide a detailed summary in bullet point format:

Repository: {name}
Description: {description}
Primary Language: {language}
Stars: {stars}
Topics: {topics}
README snippet: {readme}

Provide a comprehensive repository summary with the following bullet points:
• What this repository is (purpose and functionality)
• Key features and capabilities
• Target audience or use cases
• Notable achievements (if high stars/popularity)
• Overall assessment of the project

Keep each bullet point detailed but concise. Focus on technical aspects and project significance.",
        name = meta.name,
        description = meta.description.as_deref().unwrap_or(""),
        language = meta.language.as_deref().unwrap_or("Unknown"),
        stars = meta.stargazers_count,
    )
}

/// Prompt for the language analysis
pub fn language_prompt(facts: LanguageFacts<'_>) -> String {
    let breakdown = if facts.percentages.is_empty() {
        "No data".to_string()
    } else {
        let mut entries: Vec<(&String, &f64)> = facts.percentages.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(a.1));
        entries
            .into_iter()
            .take(MAX_PROMPT_LANGUAGES)
            .map(|(lang, pct)| format!("{}: {:.2}%", lang, pct))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Analyze the technology stack and programming languages used in this repository:

Primary Language: {primary}
Language Breakdown: {breakdown}

Provide a detailed technical analysis with the following bullet points:
• Technology Stack Overview (what the language choices indicate)
• Development Focus (web, mobile, backend, data science, etc.)
• Architecture Implications (based on language mix)
• Modern Development Practices (type safety, frameworks, etc.)
• Ecosystem and Tooling (what this tech stack enables)

Keep each point informative and specific to the language composition.",
        primary = facts.primary_language,
    )
}

/// Prompt for the contribution analysis
pub fn contribution_prompt(facts: ContributionFacts<'_>) -> String {
    let contributors = facts.contributors;
    let top_three = contributors.top_commits(3);
    let average_top_three = if contributors.top_contributors.len() >= 3 {
        top_three as f64 / 3.0
    } else {
        0.0
    };
    let created = facts
        .metadata
        .created_at
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    format!(
        "Analyze the collaboration and contribution patterns for this repository:

Total Contributors: {total}
Active Contributors (5+ commits): {active}
Top Contributors: {top}
Top 3 Contributors Commits: {top_three}
Average Commits (Top 3): {average_top_three:.0}
Repository Created: {created}

Provide a detailed collaboration analysis with the following bullet points:
• Project Scale and Community Size (what the numbers indicate)
• Collaboration Health (active vs total contributor ratio)
• Development Leadership (concentration of contributions)
• Community Engagement Level (based on contributor patterns)
• Project Maturity Assessment (what this contribution pattern suggests)

Make each point specific to the contribution data provided.",
        total = contributors.total_contributors,
        active = contributors.active_contributors,
        top = contributors.top_contributors.len(),
    )
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completions insight client
pub struct InsightClient {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
    model: String,
    caller: ResilientClient,
}

impl InsightClient {
    /// Create a client with the default retry policy.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            model: model.into(),
            caller: ResilientClient::default(),
        })
    }

    /// Replace the retry and pacing policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.caller = ResilientClient::new(policy);
        self
    }

    /// One chat completion request, no retries.
    async fn complete(&self, prompt: &str) -> ApiResult<String> {
        let api_key = self.api_key.as_deref().ok_or(ApiError::Unauthorized)?;
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        debug!("POST {} ({} prompt chars)", url, prompt.len());
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let parsed: ChatResponse = response.json().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse completion: {}", e))
                })?;
                parsed
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|c| c.message.content)
                    .filter(|text| !text.trim().is_empty())
                    .ok_or_else(|| {
                        ApiError::InvalidResponse("Completion contained no text".to_string())
                    })
            }
            StatusCode::TOO_MANY_REQUESTS => Err(ApiError::RateLimit(
                retry_after(response.headers()).unwrap_or(Duration::ZERO),
            )),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let text = response.text().await.unwrap_or_default();
                Err(ApiError::BadRequest(text))
            }
            status if status.is_server_error() => {
                Err(ApiError::ServerError(format!("Server error: {}", status)))
            }
            _ => Err(ApiError::InvalidResponse(format!(
                "Unexpected status code: {}",
                status
            ))),
        }
    }

    async fn generate(&self, label: &str, prompt: String) -> Reply {
        self.caller.call(label, || self.complete(&prompt)).await
    }
}

#[async_trait]
impl InsightApi for InsightClient {
    fn is_available(&self) -> bool {
        is_usable_key(self.api_key.as_deref())
    }

    async fn repository_summary(&self, facts: SummaryFacts<'_>) -> Reply {
        self.generate("repository summary", summary_prompt(facts)).await
    }

    async fn language_analysis(&self, facts: LanguageFacts<'_>) -> Reply {
        self.generate("language analysis", language_prompt(facts)).await
    }

    async fn contribution_analysis(&self, facts: ContributionFacts<'_>) -> Reply {
        self.generate("contribution analysis", contribution_prompt(facts))
            .await
    }
}
