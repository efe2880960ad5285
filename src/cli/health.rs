//! Health command implementation

use crate::cli::CommandContext;
use crate::error::Result;
use crate::output::Formattable;

/// Print liveness and insight availability. Makes no network calls.
pub fn run(ctx: &CommandContext) -> Result<()> {
    ctx.analyzer.health().print(ctx.format)
}
