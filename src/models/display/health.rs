//! Health view

use colored::Colorize;

use crate::analysis::HealthReport;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::Formattable;
use crate::output::json::format_json;
use crate::output::table::{FieldRow, format_table};

impl Formattable for HealthReport {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => format_json(self)?,
            OutputFormat::Table => format_table(&[
                FieldRow::new("Status", &self.status),
                FieldRow::new("Timestamp", self.timestamp.to_rfc3339()),
                FieldRow::new("AI available", self.ai_available),
            ]),
            OutputFormat::Pretty => {
                let insights = if self.ai_available {
                    format!("{} Insight generation available", "✓".green())
                } else {
                    format!(
                        "{} Insight generation not configured\n  → Set GROQ_API_KEY to enable it",
                        "○".dimmed()
                    )
                };
                format!("{} {}\n{}", "✓".green(), self.status, insights)
            }
        })
    }
}
