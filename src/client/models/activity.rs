//! Commit activity models

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of most recent weeks kept in the weekly series
pub const MAX_WEEKS: usize = 52;

/// One entry of `GET /repos/{owner}/{repo}/stats/commit_activity`
#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyCommitStat {
    /// Start of the week (Unix seconds, Sunday 00:00 UTC)
    pub week: i64,

    /// Commits in the week
    #[serde(default)]
    pub total: u64,
}

/// Minimal commit entry; only counted, never inspected
#[derive(Debug, Clone, Deserialize)]
pub struct CommitRef {
    pub sha: String,
}

/// Commit count for a single week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCommits {
    /// Week start date (YYYY-MM-DD)
    pub week: NaiveDate,

    /// Commits in that week
    pub commits: u64,
}

/// Commit history summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitActivity {
    /// Commits across the weekly window
    pub total_commits: u64,

    /// Commits in the last 30 days (bounded by one page)
    pub last_30_days: u64,

    /// Chronological weekly series, at most [`MAX_WEEKS`] entries
    pub weekly_data: Vec<WeeklyCommits>,
}

impl CommitActivity {
    /// Combine the weekly statistics and the 30-day window count.
    pub fn from_parts(mut weeks: Vec<WeeklyCommitStat>, last_30_days: u64) -> Self {
        weeks.sort_by_key(|w| w.week);
        let skip = weeks.len().saturating_sub(MAX_WEEKS);

        let weekly_data: Vec<WeeklyCommits> = weeks
            .into_iter()
            .skip(skip)
            .filter_map(|w| {
                DateTime::from_timestamp(w.week, 0).map(|dt| WeeklyCommits {
                    week: dt.date_naive(),
                    commits: w.total,
                })
            })
            .collect();

        let total_commits = weekly_data.iter().map(|w| w.commits).sum();

        Self {
            total_commits,
            last_30_days,
            weekly_data,
        }
    }
}
