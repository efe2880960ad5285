//! Repository identity and metadata models

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Owner/name pair identifying a repository on the data provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryIdentity {
    owner: String,
    name: String,
}

impl RepositoryIdentity {
    /// Create an identity from trimmed parts, rejecting empty parts and inner whitespace.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, Error> {
        let owner = owner.into();
        let name = name.into();
        let (trimmed_owner, trimmed_name) = (owner.trim(), name.trim());
        if !is_valid_part(trimmed_owner) || !is_valid_part(trimmed_name) {
            return Err(Error::InvalidIdentity(format!("{}/{}", owner, name)));
        }
        Ok(Self {
            owner: trimmed_owner.to_string(),
            name: trimmed_name.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// API path prefix for this repository (`/repos/{owner}/{name}`)
    pub fn api_path(&self) -> String {
        format!("/repos/{}/{}", self.owner, self.name)
    }
}

fn is_valid_part(part: &str) -> bool {
    !part.is_empty() && !part.chars().any(char::is_whitespace)
}

impl FromStr for RepositoryIdentity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('/');
        let trimmed = trimmed
            .strip_prefix("https://github.com/")
            .unwrap_or(trimmed);

        match trimmed.split_once('/') {
            Some((owner, name)) if !name.contains('/') => Self::new(owner, name),
            _ => Err(Error::InvalidIdentity(s.to_string())),
        }
    }
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Repository metadata from `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoMetadata {
    /// Repository name
    pub name: String,

    /// Description (may be null)
    #[serde(default)]
    pub description: Option<String>,

    /// Primary language as reported by GitHub
    #[serde(default)]
    pub language: Option<String>,

    /// Repository topics
    #[serde(default)]
    pub topics: Vec<String>,

    #[serde(default)]
    pub stargazers_count: u64,

    #[serde(default)]
    pub forks_count: u64,

    #[serde(default)]
    pub open_issues_count: u64,

    /// License (absent for unlicensed repositories)
    #[serde(default)]
    pub license: Option<License>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Canonical web URL
    #[serde(default)]
    pub html_url: Option<String>,

    /// Owning user or organization
    #[serde(default)]
    pub owner: Option<RepoOwner>,
}

impl RepoMetadata {
    /// License display name, if any
    pub fn license_name(&self) -> Option<&str> {
        self.license.as_ref().map(|l| l.name.as_str())
    }

    /// Canonical URL, falling back to the github.com form of the identity
    pub fn repo_url(&self, repo: &RepositoryIdentity) -> String {
        self.html_url
            .clone()
            .unwrap_or_else(|| format!("https://github.com/{}", repo))
    }

    /// Owner URL, falling back to the github.com form of the owner
    pub fn owner_url(&self, repo: &RepositoryIdentity) -> String {
        self.owner
            .as_ref()
            .and_then(|o| o.html_url.clone())
            .unwrap_or_else(|| format!("https://github.com/{}", repo.owner()))
    }
}

/// License block of the repository response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    pub name: String,
}

/// Owner block of the repository response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoOwner {
    pub login: String,

    #[serde(default)]
    pub html_url: Option<String>,
}

/// Language name to byte count, from `GET /repos/{owner}/{repo}/languages`
pub type LanguageBytes = BTreeMap<String, u64>;
