//! Display models for CLI output
//!
//! Converts analysis results into pretty, table and JSON renderings.

pub mod display;

pub use display::{ContributorRow, LanguageRow, RepoReport, WeekRow};
