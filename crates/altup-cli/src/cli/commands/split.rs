//! `altup split <url>` – show the decomposition.

use anyhow::Result;

use altup_core::url_model;

pub fn run_split(url: &str) -> Result<()> {
    let parsed = url_model::decompose(url)?;
    println!("scheme:    {}", parsed.scheme);
    println!("authority: {}", parsed.authority);
    println!("path:      {}", parsed.path);
    Ok(())
}
