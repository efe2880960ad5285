//! Repository statistics view

use colored::Colorize;

use super::{HEADER_RULE, RepoReport};
use crate::analysis::RepoStats;
use crate::analysis::metrics::group_thousands;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::formatters::{format_timestamp, or_none};
use crate::output::json::format_json;
use crate::output::table::{FieldRow, format_table};
use crate::output::Formattable;

/// Label/value pairs shared by the stats view and the analysis overview
pub(crate) fn stats_rows(stats: &RepoStats) -> Vec<FieldRow> {
    vec![
        FieldRow::new("Stars", group_thousands(stats.stars)),
        FieldRow::new("Forks", group_thousands(stats.forks)),
        FieldRow::new("Open issues", group_thousands(stats.open_issues)),
        FieldRow::new("License", or_none(stats.license.as_deref())),
        FieldRow::new("Created", format_timestamp(stats.created_at)),
        FieldRow::new("Updated", format_timestamp(stats.updated_at)),
    ]
}

/// Pretty `Label:    value` lines for the stats fields
pub(crate) fn pretty_stats(stats: &RepoStats) -> String {
    stats_rows(stats)
        .into_iter()
        .map(|row| {
            let label = format!("{:<12}", format!("{}:", row.field));
            format!("{} {}\n", label.dimmed(), row.value)
        })
        .collect()
}

impl Formattable for RepoReport<RepoStats> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => format_json(self)?,
            OutputFormat::Table => format_table(&stats_rows(&self.data)),
            OutputFormat::Pretty => format!(
                "{}\n{}\n{}",
                self.repository.bold(),
                HEADER_RULE,
                pretty_stats(&self.data)
            ),
        })
    }
}
