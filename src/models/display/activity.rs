//! Commit activity view

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::{HEADER_RULE, RepoReport};
use crate::cli::OutputFormat;
use crate::client::models::{CommitActivity, WeeklyCommits};
use crate::error::Result;
use crate::output::Formattable;
use crate::output::json::format_json;
use crate::output::table::format_table;

/// Weeks shown in the pretty sparkline
const SPARK_WEEKS: usize = 12;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One week of commits as a table row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct WeekRow {
    #[tabled(rename = "WEEK")]
    pub week: String,

    #[tabled(rename = "COMMITS")]
    pub commits: u64,
}

impl From<&WeeklyCommits> for WeekRow {
    fn from(w: &WeeklyCommits) -> Self {
        Self {
            week: w.week.format("%Y-%m-%d").to_string(),
            commits: w.commits,
        }
    }
}

/// Sparkline over the most recent weeks, scaled to the busiest one
pub(crate) fn sparkline(activity: &CommitActivity, weeks: usize) -> String {
    let recent = &activity.weekly_data[activity.weekly_data.len().saturating_sub(weeks)..];
    let max = recent.iter().map(|w| w.commits).max().unwrap_or(0);
    if max == 0 {
        return String::new();
    }

    recent
        .iter()
        .map(|w| {
            let level = (w.commits * (SPARK_LEVELS.len() as u64 - 1)).div_ceil(max) as usize;
            SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}

/// Totals and recent trend, shared with the analysis view
pub(crate) fn pretty_activity(activity: &CommitActivity) -> String {
    let mut output = format!(
        "{} commits over {} weeks, {} in the last 30 days\n",
        activity.total_commits.to_string().bold(),
        activity.weekly_data.len(),
        activity.last_30_days.to_string().bold()
    );

    let spark = sparkline(activity, SPARK_WEEKS);
    if spark.is_empty() {
        output.push_str(&format!("{}\n", "No weekly activity".dimmed()));
    } else {
        let weeks = spark.chars().count();
        output.push_str(&format!("Last {} weeks: {}\n", weeks, spark.green()));
    }

    output
}

impl Formattable for RepoReport<CommitActivity> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => format_json(self)?,
            OutputFormat::Table => {
                let rows: Vec<WeekRow> = self.data.weekly_data.iter().map(WeekRow::from).collect();
                format!(
                    "Commits: {} total, {} in the last 30 days\n{}",
                    self.data.total_commits,
                    self.data.last_30_days,
                    format_table(&rows)
                )
            }
            OutputFormat::Pretty => format!(
                "{}\n{}\n{}",
                format!("{} commit activity", self.repository).bold(),
                HEADER_RULE,
                pretty_activity(&self.data)
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RepositoryIdentity;
    use crate::client::models::WeeklyCommitStat;

    const WEEK: i64 = 7 * 24 * 60 * 60;

    fn activity(totals: &[u64]) -> CommitActivity {
        let weeks = totals
            .iter()
            .enumerate()
            .map(|(i, total)| WeeklyCommitStat {
                week: 1_704_585_600 + i as i64 * WEEK,
                total: *total,
            })
            .collect();
        CommitActivity::from_parts(weeks, 4)
    }

    #[test]
    fn test_sparkline_scales_to_max() {
        assert_eq!(sparkline(&activity(&[0, 7, 14]), 12), "▁▅█");
    }

    #[test]
    fn test_sparkline_keeps_recent_weeks() {
        let spark = sparkline(&activity(&[1; 20]), 12);
        assert_eq!(spark.chars().count(), 12);
    }

    #[test]
    fn test_sparkline_empty() {
        assert_eq!(sparkline(&CommitActivity::default(), 12), "");
        assert_eq!(sparkline(&activity(&[0, 0]), 12), "");
    }

    #[test]
    fn test_table_lists_weeks() {
        let repo: RepositoryIdentity = "octocat/Hello-World".parse().unwrap();
        let out = RepoReport::new(&repo, activity(&[3, 5]))
            .format(OutputFormat::Table)
            .unwrap();

        assert!(out.starts_with("Commits: 8 total, 4 in the last 30 days\n"));
        assert!(out.contains("2024-01-07"));
        assert!(out.contains("2024-01-14"));
    }

    #[test]
    fn test_pretty_labels_actual_week_count() {
        let short = pretty_activity(&activity(&[3, 5, 2]));
        assert!(short.contains("Last 3 weeks:"));

        let long = pretty_activity(&activity(&[1; 20]));
        assert!(long.contains("Last 12 weeks:"));
    }

    #[test]
    fn test_pretty_without_weeks() {
        let repo: RepositoryIdentity = "octocat/Hello-World".parse().unwrap();
        let out = RepoReport::new(&repo, CommitActivity::default())
            .format(OutputFormat::Pretty)
            .unwrap();

        assert!(out.contains("No weekly activity"));
    }
}
