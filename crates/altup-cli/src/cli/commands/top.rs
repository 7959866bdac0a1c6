//! `altup top <url>` – ascend as far as the rules allow.

use anyhow::Result;

use altup_core::ascend;

use super::parse_parts;

pub fn run_top(url: &str, parts: &[String]) -> Result<()> {
    let filters = parse_parts(parts)?;
    if let Some(dest) = ascend::destination(url, -1, &filters)? {
        println!("{dest}");
    }
    Ok(())
}
