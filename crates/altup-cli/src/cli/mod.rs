//! CLI for the altup address navigator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use altup_core::config;

use commands::{run_completions, run_exec, run_split, run_top, run_up};

/// Top-level CLI for the altup address navigator.
#[derive(Debug, Parser)]
#[command(name = "altup")]
#[command(about = "altup: compute the parent of a URL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Go up a fixed number of levels from a URL.
    Up {
        /// Address to ascend from.
        url: String,

        /// Levels to go up; negative means "as far as possible". Defaults to
        /// the configured `default_levels`.
        #[arg(long, short = 'l', value_name = "N", allow_hyphen_values = true)]
        levels: Option<i32>,

        /// Restrict reduction to the given part (`path` or `host`). Repeatable.
        #[arg(long = "part", value_name = "PART")]
        parts: Vec<String>,
    },

    /// Go up as far as the reduction rules allow.
    Top {
        /// Address to ascend from.
        url: String,

        /// Restrict reduction to the given part (`path` or `host`). Repeatable.
        #[arg(long = "part", value_name = "PART")]
        parts: Vec<String>,
    },

    /// Run an ascend directive (`up:<levels>[:<parts>]`) or a configured
    /// shortcut name against a URL.
    Exec {
        /// Address to ascend from.
        url: String,

        /// Directive token, or a name from the config `shortcuts` table.
        directive: String,
    },

    /// Show the scheme/authority/path decomposition of a URL.
    Split {
        /// Address to decompose.
        url: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Up { url, levels, parts } => run_up(&cfg, &url, levels, &parts)?,
            CliCommand::Top { url, parts } => run_top(&url, &parts)?,
            CliCommand::Exec { url, directive } => run_exec(&cfg, &url, &directive)?,
            CliCommand::Split { url } => run_split(&url)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
