//! Read-only request/response capabilities consumed by the encoder.
//!
//! The encoder never talks to a real server object; it sees the current
//! exchange through these two traits, so it can be exercised with plain
//! structs in tests.

/// Read-only view of the current HTTP request and its session state.
///
/// Implementations are owned by the embedding server; one instance per
/// request. Nothing here may mutate the request or create a session.
pub trait RequestContext {
    /// Request scheme, e.g. `"http"` or `"https"`.
    fn scheme(&self) -> &str;

    /// Server host name as the request addressed it.
    fn server_name(&self) -> &str;

    /// Server port, or `None` when the request did not state one.
    fn server_port(&self) -> Option<u16>;

    /// Request URI path, e.g. `"/app/dir/page.jsp"`.
    fn request_uri(&self) -> &str;

    /// Context path of the web application (`"/app"`), or `None` when the
    /// request is not scoped to one.
    fn context_path(&self) -> Option<&str>;

    /// Id of the current session, or `None` when no session exists.
    /// Must never create a session as a side effect.
    fn session_id(&self) -> Option<&str>;

    /// True when the session id on this request arrived via a cookie.
    /// Cookie delivery makes URL rewriting redundant.
    fn session_id_from_cookie(&self) -> bool;
}

/// Read-only view of the response being produced.
pub trait ResponseContext {
    /// Character encoding of the response body, e.g. `"UTF-8"`. Drives the
    /// percent-encoding of the request-URI directory during absolutization.
    fn character_encoding(&self) -> &str;
}

/// Resolves the port actually in effect: an unspecified port defaults to
/// 443 for `https` and 80 for everything else. Applied symmetrically to the
/// request and to candidate URLs during eligibility checks.
pub fn effective_port(scheme: &str, port: Option<u16>) -> u16 {
    match port {
        Some(p) => p,
        None if scheme.eq_ignore_ascii_case("https") => 443,
        None => 80,
    }
}
