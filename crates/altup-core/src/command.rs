//! Parsing of the textual ascend instruction.
//!
//! Hosts encode an ascension as `up:<levels>[:<comma-separated parts>]`,
//! e.g. `up:1`, `up:-1:path`, or `up:2:path,host`. The level count is a
//! signed integer; an absent or empty part list means "all parts".

use std::str::FromStr;

use thiserror::Error;

use crate::ascend::{Part, UnknownPart};

/// Parse failure for an ascend instruction token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("directive {0:?} must start with `up:`")]
    MissingPrefix(String),
    #[error("invalid level count {0:?}")]
    InvalidLevels(String),
    #[error(transparent)]
    UnknownPart(#[from] UnknownPart),
}

/// A parsed ascend instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Levels to go up; negative means "as far as possible".
    pub levels: i32,
    /// Eligible parts; empty means all.
    pub filters: Vec<Part>,
}

impl FromStr for Directive {
    type Err = DirectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix("up:")
            .ok_or_else(|| DirectiveError::MissingPrefix(s.to_string()))?;

        let (levels, parts) = match rest.split_once(':') {
            Some((levels, parts)) => (levels, Some(parts)),
            None => (rest, None),
        };

        let levels: i32 = levels
            .parse()
            .map_err(|_| DirectiveError::InvalidLevels(levels.to_string()))?;

        let mut filters = Vec::new();
        if let Some(parts) = parts {
            // Stray commas are tolerated; `up:1:` is the same as `up:1`.
            for name in parts.split(',').filter(|n| !n.is_empty()) {
                filters.push(name.parse::<Part>()?);
            }
        }

        Ok(Directive { levels, filters })
    }
}
