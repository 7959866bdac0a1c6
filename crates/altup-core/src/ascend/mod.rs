//! URL ascension: ordered reduction rules and the level-counting loop.
//!
//! Each level strips one trailing component from the address: a fragment, a
//! query string, a path segment, or a leading subdomain label.

mod rules;
mod run;

pub use rules::{Part, Rule, UnknownPart, RULES};
pub use run::{ascend, destination};

use crate::url_model::Url;

/// One ascension computation: starting address, level count, and the parts
/// whose rules are eligible.
#[derive(Debug, Clone)]
pub struct AscendRequest {
    pub url: Url,
    /// Number of levels to go up; negative means "as far as possible".
    pub max_levels: i32,
    /// Parts whose rules may fire; empty means all parts.
    pub filters: Vec<Part>,
}

/// Returns the rules eligible under `filters`, table order preserved.
pub fn filtered_rules(filters: &[Part]) -> impl Iterator<Item = &'static Rule> + '_ {
    RULES
        .iter()
        .filter(move |rule| filters.is_empty() || filters.contains(&rule.part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_keeps_whole_table() {
        assert_eq!(filtered_rules(&[]).count(), RULES.len());
    }

    #[test]
    fn filter_preserves_order() {
        let parts: Vec<Part> = filtered_rules(&[Part::Path, Part::Host])
            .map(|r| r.part)
            .collect();
        assert_eq!(parts, vec![Part::Path, Part::Path, Part::Path, Part::Host]);
    }

    #[test]
    fn host_filter_selects_only_host_rules() {
        let rules: Vec<&Rule> = filtered_rules(&[Part::Host]).collect();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].part, Part::Host);
    }
}
