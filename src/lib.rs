//! Session ID URL rewriting for cookieless session tracking.
//!
//! When a client refuses cookies, the session id has to travel inside the
//! URLs the server hands out. This crate decides, for a candidate outbound
//! URL, whether it should carry the session token as a matrix-style path
//! parameter (`;jsessionid=...`), and performs the rewrite correctly across
//! paths, query strings, and fragments. Session creation, cookie handling,
//! and the rest of the HTTP response surface stay with the embedding server.

pub mod config;
pub mod encoder;
pub mod error;
pub mod logging;
pub mod request;
pub mod response;
pub mod rewrite;

pub use config::{RewriteConfig, DEFAULT_SESSION_PARAM};
pub use encoder::SessionUrlEncoder;
pub use error::{CharsetError, RewriteError};
pub use request::{RequestContext, ResponseContext};
pub use response::SessionResponse;
