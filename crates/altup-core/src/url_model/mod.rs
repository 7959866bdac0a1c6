//! Minimal URL decomposition into scheme, authority, and path.
//!
//! Deliberately not an RFC 3986 parser: ascension only needs the
//! `scheme://authority/path` shape, and reassembly must reproduce the
//! original address modulo the reductions applied to its parts.

mod parse;

pub use parse::decompose;

use thiserror::Error;

/// Error returned when an address has no recognizable
/// `scheme://authority/path` structure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("invalid URL {0:?}: expected scheme://authority/path")]
    InvalidUrl(String),
}

/// A decomposed address.
///
/// `scheme` keeps its trailing `:`; `authority` is `host[:port]` with no
/// trailing slash; `path` is everything after the authority's slash and may
/// be empty. Values are immutable from the engine's point of view: each
/// reduction step builds a new part value rather than editing in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    pub scheme: String,
    pub authority: String,
    pub path: String,
}

impl Url {
    /// Reassembles the address. Inverse of [`decompose`] for any `Url` it
    /// produced.
    pub fn compose(&self) -> String {
        format!("{}//{}/{}", self.scheme, self.authority, self.path)
    }
}
