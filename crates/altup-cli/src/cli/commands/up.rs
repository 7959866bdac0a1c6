//! `altup up <url>` – ascend a fixed number of levels.

use anyhow::Result;

use altup_core::ascend;
use altup_core::config::AltupConfig;

use super::parse_parts;

/// Prints the destination, or nothing when there is nothing to do.
pub fn run_up(cfg: &AltupConfig, url: &str, levels: Option<i32>, parts: &[String]) -> Result<()> {
    let filters = parse_parts(parts)?;
    let levels = levels.unwrap_or(cfg.default_levels);
    if let Some(dest) = ascend::destination(url, levels, &filters)? {
        println!("{dest}");
    }
    Ok(())
}
