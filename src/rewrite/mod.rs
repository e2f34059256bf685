//! URL rewriting helpers.
//!
//! Free functions for the three string transforms the encoder is built from:
//! absolutizing a possibly-relative URL against the current request,
//! percent-encoding a path under a response charset, and splicing the
//! session token into a URL's path component.

mod absolute;
mod charset;
mod token;

pub use absolute::{has_scheme, is_scheme_char, to_absolute};
pub use charset::encode_path;
pub use token::to_encoded;
