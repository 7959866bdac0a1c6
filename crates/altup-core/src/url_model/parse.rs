//! Address splitting on the scheme/authority boundary.

use super::{Url, UrlError};

/// Splits `raw` into scheme, authority, and path.
///
/// The scheme is the ASCII-alphabetic run before the first `://` (kept with
/// its trailing `:`); the authority is everything up to the next `/`; the
/// path is the remainder after that slash, possibly empty. An address with
/// no `://`, a non-alphabetic scheme, or an empty authority is rejected.
pub fn decompose(raw: &str) -> Result<Url, UrlError> {
    let invalid = || UrlError::InvalidUrl(raw.to_string());

    let (scheme, rest) = raw.split_once("://").ok_or_else(invalid)?;
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }

    let (authority, path) = match rest.split_once('/') {
        Some((authority, path)) => (authority, path),
        None => (rest, ""),
    };
    if authority.is_empty() {
        return Err(invalid());
    }

    Ok(Url {
        scheme: format!("{scheme}:"),
        authority: authority.to_string(),
        path: path.to_string(),
    })
}
