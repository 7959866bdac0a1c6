//! The reduction rule table.
//!
//! Order is significant: per iteration the engine applies the first rule
//! whose reduction changes its targeted part, so earlier rules win ties.

use std::str::FromStr;

use thiserror::Error;

/// The URL component a rule reduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Path,
    Host,
}

/// Error for a part name that is neither `path` nor `host`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown part name {0:?} (expected `path` or `host`)")]
pub struct UnknownPart(pub String);

impl FromStr for Part {
    type Err = UnknownPart;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "path" => Ok(Part::Path),
            "host" => Ok(Part::Host),
            other => Err(UnknownPart(other.to_string())),
        }
    }
}

/// A single reduction: the part it targets plus the reduction itself.
///
/// `reduce` returns the (possibly unchanged) new value of that part; the
/// engine treats an unchanged value as "rule did not fire".
#[derive(Debug)]
pub struct Rule {
    pub part: Part,
    pub reduce: fn(&str) -> String,
}

/// Ordered rule table. At most one rule fires per level.
pub const RULES: &[Rule] = &[
    Rule { part: Part::Path, reduce: strip_fragment },
    Rule { part: Part::Path, reduce: strip_query },
    Rule { part: Part::Path, reduce: strip_last_segment },
    Rule { part: Part::Host, reduce: strip_subdomain },
];

/// Cuts everything from the first `#` onward.
fn strip_fragment(path: &str) -> String {
    match path.find('#') {
        Some(i) => path[..i].to_string(),
        None => path.to_string(),
    }
}

/// Cuts everything from the first `?` onward.
fn strip_query(path: &str) -> String {
    match path.find('?') {
        Some(i) => path[..i].to_string(),
        None => path.to_string(),
    }
}

/// Drops the final slash-delimited segment, trailing slash included.
fn strip_last_segment(path: &str) -> String {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    match trimmed.rfind('/') {
        Some(i) => trimmed[..=i].to_string(),
        None => String::new(),
    }
}

/// Drops the left-most label of the authority, but never below a two-label
/// domain. Ports are not understood; they travel inside the last label.
fn strip_subdomain(authority: &str) -> String {
    let labels: Vec<&str> = authority.split('.').collect();
    if labels.len() >= 3 && labels.iter().all(|l| !l.is_empty()) {
        authority[labels[0].len() + 1..].to_string()
    } else {
        authority.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_from_str() {
        assert_eq!("path".parse::<Part>(), Ok(Part::Path));
        assert_eq!("host".parse::<Part>(), Ok(Part::Host));
        assert_eq!(
            "query".parse::<Part>(),
            Err(UnknownPart("query".to_string()))
        );
    }

    #[test]
    fn fragment_cut_at_first_hash() {
        assert_eq!(strip_fragment("a/b#c"), "a/b");
        assert_eq!(strip_fragment("a/#b#c"), "a/");
        assert_eq!(strip_fragment("a/b"), "a/b");
    }

    #[test]
    fn query_cut_at_first_question_mark() {
        assert_eq!(strip_query("a?q=1"), "a");
        assert_eq!(strip_query("a/b?x=1&y=2"), "a/b");
        assert_eq!(strip_query("a/b"), "a/b");
    }

    #[test]
    fn last_segment_dropped_with_trailing_slash() {
        assert_eq!(strip_last_segment("x/y/z"), "x/y/");
        assert_eq!(strip_last_segment("x/y/"), "x/");
        assert_eq!(strip_last_segment("x/"), "");
        assert_eq!(strip_last_segment("abc"), "");
        assert_eq!(strip_last_segment(""), "");
    }

    #[test]
    fn subdomain_dropped_only_above_two_labels() {
        assert_eq!(strip_subdomain("a.b.example.com"), "b.example.com");
        assert_eq!(strip_subdomain("b.example.com"), "example.com");
        assert_eq!(strip_subdomain("example.com"), "example.com");
        assert_eq!(strip_subdomain("localhost"), "localhost");
    }

    #[test]
    fn subdomain_guard_rejects_empty_labels() {
        assert_eq!(strip_subdomain("a..com"), "a..com");
        assert_eq!(strip_subdomain(".example.com"), ".example.com");
        assert_eq!(strip_subdomain("a.example.com."), "a.example.com.");
    }

    #[test]
    fn subdomain_port_travels_with_last_label() {
        assert_eq!(strip_subdomain("a.b.example.com:8080"), "b.example.com:8080");
    }
}
