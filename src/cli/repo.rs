//! Read-only repository sub-views: stats, contributors and commits
//!
//! None of these call the insight generator.

use log::debug;

use crate::cli::CommandContext;
use crate::client::RepositoryIdentity;
use crate::error::Result;
use crate::models::RepoReport;
use crate::output::Formattable;

/// Run the stats command
pub async fn stats(ctx: &CommandContext, repo: &RepositoryIdentity) -> Result<()> {
    debug!("Fetching stats for {}", repo);

    let stats = ctx.analyzer.stats(repo).await?;
    RepoReport::new(repo, stats).print(ctx.format)
}

/// Run the contributors command
pub async fn contributors(ctx: &CommandContext, repo: &RepositoryIdentity) -> Result<()> {
    debug!("Fetching contributors for {}", repo);

    let summary = ctx.analyzer.contributors(repo).await?;
    debug!("Fetched {} contributors", summary.total_contributors);

    RepoReport::new(repo, summary).print(ctx.format)
}

/// Run the commits command
pub async fn commits(ctx: &CommandContext, repo: &RepositoryIdentity) -> Result<()> {
    debug!("Fetching commit activity for {}", repo);

    let activity = ctx.analyzer.commit_activity(repo).await?;
    debug!("Fetched {} weeks of activity", activity.weekly_data.len());

    RepoReport::new(repo, activity).print(ctx.format)
}
