/// Error types for pattern compilation and route matching

use thiserror::Error;

/// Compile-time pattern failure, reported synchronously at registration
#[derive(Debug, Error)]
pub enum PatternError {
    /// A `:` or `*` marker with no identifier behind it, e.g. `/item/:`
    #[error("route pattern `{pattern}` has a `:` or `*` marker with no parameter name")]
    DanglingToken { pattern: String },

    /// The pattern compiled to an expression the regex engine rejects
    #[error("route pattern `{pattern}` compiled to an invalid matching expression")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Capture-group count disagrees with the extracted token count; such a
    /// matcher could never decompose its captures correctly at match time
    #[error(
        "route pattern `{pattern}` produced {captures} capture groups for {tokens} parameter tokens"
    )]
    CaptureMismatch {
        pattern: String,
        captures: usize,
        tokens: usize,
    },
}

/// Match-time failure. Never reaches stream consumers: the event degrades to
/// "no result" and the stream stays alive.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A wildcard capture split into an odd number of key/value tokens
    #[error(
        "wildcard capture `{captured}` for pattern `{pattern}` splits into an odd number of key/value tokens"
    )]
    OddSpread { pattern: String, captured: String },
}
