//! The ascension loop.

use super::{filtered_rules, AscendRequest, Part};
use crate::url_model::{decompose, UrlError};

/// Walks `request.url` upward, one rule application per level.
///
/// Returns the last address produced, or an empty string when no rule ever
/// fired. An empty result means "nothing to do" and callers must treat it
/// as a silent no-op, not a failure.
pub fn ascend(request: &AscendRequest) -> String {
    let mut remaining = request.max_levels;
    let mut current = request.url.clone();
    let mut destination = String::new();
    let mut reduced = true;

    // One loop for both modes: a positive count runs down to zero, a
    // negative count runs until an iteration changes nothing.
    while remaining > 0 || (remaining < 0 && reduced) {
        remaining = remaining.saturating_sub(1);

        reduced = false;
        for rule in filtered_rules(&request.filters) {
            let target = match rule.part {
                Part::Path => &mut current.path,
                Part::Host => &mut current.authority,
            };
            // A rule fires on value inequality only; a reduction that
            // returns the part unchanged does not count.
            let next = (rule.reduce)(target);
            if next != *target {
                *target = next;
                destination = current.compose();
                reduced = true;
                break;
            }
        }

        if !reduced {
            break;
        }
    }

    destination
}

/// Invocation boundary for hosts: decomposes `raw`, ascends `levels`, and
/// maps the "nothing to do" result to `None`.
pub fn destination(raw: &str, levels: i32, filters: &[Part]) -> Result<Option<String>, UrlError> {
    let request = AscendRequest {
        url: decompose(raw)?,
        max_levels: levels,
        filters: filters.to_vec(),
    };
    let dest = ascend(&request);
    tracing::debug!("ascend {} by {} -> {:?}", raw, levels, dest);
    if dest.is_empty() {
        Ok(None)
    } else {
        Ok(Some(dest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(raw: &str, max_levels: i32, filters: &[Part]) -> AscendRequest {
        AscendRequest {
            url: decompose(raw).unwrap(),
            max_levels,
            filters: filters.to_vec(),
        }
    }

    #[test]
    fn zero_levels_is_a_noop() {
        assert_eq!(ascend(&request("https://example.com/a/b", 0, &[])), "");
    }

    #[test]
    fn fragment_rule_wins_over_segment_rule() {
        assert_eq!(
            ascend(&request("https://example.com/path#frag", 1, &[])),
            "https://example.com/path"
        );
    }

    #[test]
    fn query_rule_wins_over_segment_rule() {
        assert_eq!(
            ascend(&request("https://example.com/a?q=1", 1, &[])),
            "https://example.com/a"
        );
    }

    #[test]
    fn one_level_per_iteration() {
        assert_eq!(
            ascend(&request("https://example.com/a?q=1", 2, &[])),
            "https://example.com/"
        );
    }

    #[test]
    fn surplus_levels_return_last_reachable() {
        assert_eq!(
            ascend(&request("https://example.com/a/b", 10, &[])),
            "https://example.com/"
        );
    }

    #[test]
    fn host_filter_skips_path_rules() {
        assert_eq!(
            ascend(&request("https://a.b.example.com/x/y/z", 1, &[Part::Host])),
            "https://b.example.com/x/y/z"
        );
    }

    #[test]
    fn unbounded_runs_until_irreducible() {
        assert_eq!(
            ascend(&request("https://a.b.example.com/x/y", -1, &[])),
            "https://example.com/"
        );
    }

    #[test]
    fn unbounded_with_no_possible_reduction_is_empty() {
        assert_eq!(
            ascend(&request("https://example.com/", -1, &[Part::Path])),
            ""
        );
    }

    #[test]
    fn destination_maps_empty_to_none() {
        assert_eq!(destination("https://example.com/", -1, &[Part::Path]), Ok(None));
        assert_eq!(
            destination("https://example.com/a", 1, &[]),
            Ok(Some("https://example.com/".to_string()))
        );
    }

    #[test]
    fn destination_propagates_invalid_url() {
        assert!(destination("not a url", 1, &[]).is_err());
    }
}
