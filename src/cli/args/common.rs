//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - colored sections for reading in a terminal
    #[default]
    Pretty,
    /// Table format - one row per field, contributor or week
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}
