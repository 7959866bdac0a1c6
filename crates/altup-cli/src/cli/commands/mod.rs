//! Subcommand implementations.

mod completions;
mod exec;
mod split;
mod top;
mod up;

pub use completions::run_completions;
pub use exec::run_exec;
pub use split::run_split;
pub use top::run_top;
pub use up::run_up;

use anyhow::Result;

use altup_core::ascend::Part;

/// Parse `--part` values into engine filters.
pub(crate) fn parse_parts(parts: &[String]) -> Result<Vec<Part>> {
    let mut filters = Vec::with_capacity(parts.len());
    for part in parts {
        filters.push(part.parse::<Part>()?);
    }
    Ok(filters)
}
