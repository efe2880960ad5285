//! Full analysis view

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::activity::pretty_activity;
use super::contributor::{ContributorRow, pretty_contributors};
use super::stats::{pretty_stats, stats_rows};
use super::{HEADER_RULE, SECTION_RULE};
use crate::analysis::{AnalysisResult, InsightItem, LanguagePercentages};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::Formattable;
use crate::output::formatters::{format_percent, percent_bar};
use crate::output::json::format_json;
use crate::output::table::{FieldRow, format_table};

const BAR_WIDTH: usize = 20;

/// One language share as a table row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct LanguageRow {
    #[tabled(rename = "LANGUAGE")]
    pub language: String,

    #[tabled(rename = "SHARE")]
    pub share: String,
}

impl LanguageRow {
    /// Rows ordered by descending share, then by name
    pub(crate) fn sorted(percentages: &LanguagePercentages) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> = percentages
            .iter()
            .map(|(lang, pct)| (lang.clone(), *pct))
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    fn rows(percentages: &LanguagePercentages) -> Vec<Self> {
        Self::sorted(percentages)
            .into_iter()
            .map(|(language, pct)| Self {
                language,
                share: format_percent(pct),
            })
            .collect()
    }
}

fn section(title: &str) -> String {
    format!("\n{}\n{}\n", title.bold(), SECTION_RULE)
}

fn pretty_languages(percentages: &LanguagePercentages) -> String {
    let entries = LanguageRow::sorted(percentages);
    let width = entries
        .iter()
        .map(|(lang, _)| lang.chars().count())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|(lang, pct)| {
            format!(
                "  {:<width$}  {} {:>7}\n",
                lang,
                percent_bar(*pct, BAR_WIDTH).cyan(),
                format_percent(*pct),
                width = width
            )
        })
        .collect()
}

fn pretty_insight(item: &InsightItem) -> String {
    format!("{}\n", item.content.trim_end())
}

fn pretty(result: &AnalysisResult) -> String {
    let mut output = format!("{}\n{}\n", result.identity().bold(), HEADER_RULE);
    output.push_str(&pretty_stats(&result.stats));
    let label = format!("{:<12}", "URL:");
    output.push_str(&format!("{} {}\n", label.dimmed(), result.links.repo_url.cyan()));

    output.push_str(&section("Languages"));
    output.push_str(&pretty_languages(&result.languages.languages));

    output.push_str(&section("Commit Activity"));
    output.push_str(&pretty_activity(&result.commit_activity));

    output.push_str(&section("Contributors"));
    output.push_str(&pretty_contributors(&result.contributors));

    let insights = &result.ai_insights;
    output.push_str(&section("Summary"));
    output.push_str(&pretty_insight(&insights.repository_summary));
    output.push_str(&section("Technology Stack"));
    output.push_str(&pretty_insight(&insights.language_analysis));
    output.push_str(&section("Collaboration"));
    output.push_str(&pretty_insight(&insights.contribution_patterns));

    output
}

fn table(result: &AnalysisResult) -> String {
    let mut overview = vec![FieldRow::new("Repository", result.identity())];
    overview.extend(stats_rows(&result.stats));
    overview.push(FieldRow::new(
        "Commits (weekly window)",
        result.commit_activity.total_commits,
    ));
    overview.push(FieldRow::new(
        "Commits (last 30 days)",
        result.commit_activity.last_30_days,
    ));
    overview.push(FieldRow::new(
        "Contributors",
        format!(
            "{} ({} active)",
            result.contributors.total_contributors, result.contributors.active_contributors
        ),
    ));
    overview.push(FieldRow::new("URL", &result.links.repo_url));

    [
        format_table(&overview),
        format_table(&LanguageRow::rows(&result.languages.languages)),
        format_table(&ContributorRow::ranked(
            &result.contributors.top_contributors,
        )),
    ]
    .join("\n")
}

impl Formattable for AnalysisResult {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => format_json(self)?,
            OutputFormat::Table => table(self),
            OutputFormat::Pretty => pretty(self),
        })
    }
}
