//! Contributor models

use serde::{Deserialize, Serialize};

/// Contribution count at or above which a contributor is considered active
pub const ACTIVE_CONTRIBUTION_THRESHOLD: u64 = 5;

/// Number of contributors kept in the top list
pub const TOP_CONTRIBUTOR_LIMIT: usize = 5;

/// One entry of `GET /repos/{owner}/{repo}/contributors`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubContributor {
    pub login: String,

    #[serde(default)]
    pub contributions: u64,

    #[serde(default)]
    pub avatar_url: String,
}

/// A contributor in the top list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopContributor {
    pub username: String,
    pub commits: u64,
    pub avatar_url: String,
}

impl From<GitHubContributor> for TopContributor {
    fn from(c: GitHubContributor) -> Self {
        Self {
            username: c.login,
            commits: c.contributions,
            avatar_url: c.avatar_url,
        }
    }
}

/// Contributor totals and the leading contributors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorSummary {
    pub total_contributors: usize,
    pub active_contributors: usize,
    pub top_contributors: Vec<TopContributor>,
}

impl ContributorSummary {
    /// Summarize one page of contributors.
    ///
    /// The provider already orders by descending contributions; that order
    /// (including ties) is kept as-is.
    pub fn from_contributors(contributors: Vec<GitHubContributor>) -> Self {
        let total_contributors = contributors.len();
        let active_contributors = contributors
            .iter()
            .filter(|c| c.contributions >= ACTIVE_CONTRIBUTION_THRESHOLD)
            .count();
        let top_contributors = contributors
            .into_iter()
            .take(TOP_CONTRIBUTOR_LIMIT)
            .map(TopContributor::from)
            .collect();

        Self {
            total_contributors,
            active_contributors,
            top_contributors,
        }
    }

    /// Commits by the first `n` top contributors
    pub fn top_commits(&self, n: usize) -> u64 {
        self.top_contributors.iter().take(n).map(|c| c.commits).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contributor(login: &str, contributions: u64) -> GitHubContributor {
        GitHubContributor {
            login: login.to_string(),
            contributions,
            avatar_url: format!("https://avatars.example/{}", login),
        }
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(
            ContributorSummary::from_contributors(vec![]),
            ContributorSummary::default()
        );
    }

    #[test]
    fn test_active_threshold_boundary() {
        let summary = ContributorSummary::from_contributors(vec![
            contributor("five", 5),
            contributor("four", 4),
        ]);
        assert_eq!(summary.total_contributors, 2);
        assert_eq!(summary.active_contributors, 1);
    }

    #[test]
    fn test_top_list_truncated_in_provider_order() {
        let summary = ContributorSummary::from_contributors(vec![
            contributor("a", 90),
            contributor("b", 40),
            contributor("c", 40),
            contributor("d", 12),
            contributor("e", 6),
            contributor("f", 5),
            contributor("g", 1),
        ]);

        assert_eq!(summary.total_contributors, 7);
        assert_eq!(summary.active_contributors, 6);
        let names: Vec<&str> = summary
            .top_contributors
            .iter()
            .map(|c| c.username.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(summary.top_commits(3), 170);
    }

    #[test]
    fn test_top_list_shorter_than_limit() {
        let summary = ContributorSummary::from_contributors(vec![
            contributor("solo", 3),
            contributor("duo", 2),
        ]);
        assert_eq!(summary.top_contributors.len(), 2);
        assert_eq!(summary.active_contributors, 0);
    }
}
