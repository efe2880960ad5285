//! Contributor view

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::{HEADER_RULE, RepoReport};
use crate::cli::OutputFormat;
use crate::client::models::{ContributorSummary, TopContributor};
use crate::error::Result;
use crate::output::Formattable;
use crate::output::json::format_json;
use crate::output::table::format_table;

/// One top contributor as a table row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ContributorRow {
    #[tabled(rename = "#")]
    pub rank: usize,

    #[tabled(rename = "USERNAME")]
    pub username: String,

    #[tabled(rename = "COMMITS")]
    pub commits: u64,
}

impl ContributorRow {
    pub(crate) fn ranked(contributors: &[TopContributor]) -> Vec<Self> {
        contributors
            .iter()
            .enumerate()
            .map(|(i, c)| Self {
                rank: i + 1,
                username: c.username.clone(),
                commits: c.commits,
            })
            .collect()
    }
}

/// Totals line plus ranked list, shared with the analysis view
pub(crate) fn pretty_contributors(summary: &ContributorSummary) -> String {
    let mut output = format!(
        "{} total, {} active (5+ commits)\n",
        summary.total_contributors.to_string().bold(),
        summary.active_contributors.to_string().bold()
    );

    if summary.top_contributors.is_empty() {
        output.push_str(&format!("{}\n", "No contributors".dimmed()));
        return output;
    }

    let width = summary
        .top_contributors
        .iter()
        .map(|c| c.username.chars().count())
        .max()
        .unwrap_or(0);
    for row in ContributorRow::ranked(&summary.top_contributors) {
        output.push_str(&format!(
            "  {}. {:<width$}  {} commits\n",
            row.rank,
            row.username,
            row.commits,
            width = width
        ));
    }

    output
}

impl Formattable for RepoReport<ContributorSummary> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => format_json(self)?,
            OutputFormat::Table => format!(
                "Contributors: {} total, {} active\n{}",
                self.data.total_contributors,
                self.data.active_contributors,
                format_table(&ContributorRow::ranked(&self.data.top_contributors))
            ),
            OutputFormat::Pretty => format!(
                "{}\n{}\n{}",
                format!("{} contributors", self.repository).bold(),
                HEADER_RULE,
                pretty_contributors(&self.data)
            ),
        })
    }
}
