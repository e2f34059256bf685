//! Error types for URL rewriting.
//!
//! Almost everything that can go wrong here resolves silently to "do not
//! rewrite". The one exception is a character-encoding failure while
//! absolutizing a relative URL, which the caller has to see.

use thiserror::Error;

/// Error surfaced by the encode entry points.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// A relative URL could not be made absolute because the directory
    /// portion of the request URI is not representable in the response's
    /// character encoding. Carries the original location for diagnostics.
    #[error("cannot absolutize {location:?}")]
    Absolutize {
        location: String,
        #[source]
        source: CharsetError,
    },
}

/// Character-encoding failure during directory-path percent-encoding.
#[derive(Debug, Error)]
pub enum CharsetError {
    /// The response declared a charset this crate cannot encode to.
    #[error("unsupported character encoding {0:?}")]
    Unsupported(String),
    /// A character in the request URI has no representation in the charset.
    #[error("character {ch:?} is not representable in {charset}")]
    Unrepresentable { ch: char, charset: String },
}
