//! `altup exec <url> <directive>` – run a directive token or shortcut.

use anyhow::{bail, Result};

use altup_core::ascend;
use altup_core::command::Directive;
use altup_core::config::AltupConfig;

pub fn run_exec(cfg: &AltupConfig, url: &str, directive: &str) -> Result<()> {
    let token = if directive.starts_with("up:") {
        directive
    } else {
        match cfg.shortcuts.get(directive) {
            Some(token) => token.as_str(),
            None => bail!("unknown shortcut: {directive}"),
        }
    };

    let parsed: Directive = token.parse()?;
    tracing::debug!("exec {} as {:?}", directive, parsed);
    if let Some(dest) = ascend::destination(url, parsed.levels, &parsed.filters)? {
        println!("{dest}");
    }
    Ok(())
}
