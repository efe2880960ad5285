//! Display model implementations for pretty, table and JSON output
//!
//! Each view implements [`Formattable`](crate::output::Formattable): JSON
//! serializes the domain value inside the `{data, meta}` envelope, table output
//! flattens it into `tabled` rows, and pretty output renders colored sections.

use serde::Serialize;

use crate::client::RepositoryIdentity;

mod activity;
mod analysis;
mod contributor;
mod health;
mod stats;

pub use activity::WeekRow;
pub use analysis::LanguageRow;
pub use contributor::ContributorRow;

/// Section rule under pretty headers
pub(crate) const HEADER_RULE: &str = "══════════════════════════════════════════════════════";

/// Rule under pretty subsections
pub(crate) const SECTION_RULE: &str = "──────────────────────────────────────────────────────";

/// A read-only sub-view of one repository
#[derive(Debug, Clone, Serialize)]
pub struct RepoReport<T> {
    pub repository: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T> RepoReport<T> {
    pub fn new(repo: &RepositoryIdentity, data: T) -> Self {
        Self {
            repository: repo.to_string(),
            data,
        }
    }
}
