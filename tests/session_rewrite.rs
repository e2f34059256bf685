//! End-to-end URL rewriting through the response decorator.

use std::borrow::Cow;

use session_url::{
    CharsetError, RequestContext, ResponseContext, RewriteConfig, RewriteError, SessionResponse,
};

#[derive(Clone)]
struct MockRequest {
    scheme: String,
    server_name: String,
    server_port: Option<u16>,
    request_uri: String,
    context_path: Option<String>,
    session_id: Option<String>,
    from_cookie: bool,
}

impl Default for MockRequest {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            server_name: "example.com".to_string(),
            server_port: None,
            request_uri: "/app/page.jsp".to_string(),
            context_path: Some("/app".to_string()),
            session_id: Some("ABC123".to_string()),
            from_cookie: false,
        }
    }
}

impl RequestContext for MockRequest {
    fn scheme(&self) -> &str {
        &self.scheme
    }
    fn server_name(&self) -> &str {
        &self.server_name
    }
    fn server_port(&self) -> Option<u16> {
        self.server_port
    }
    fn request_uri(&self) -> &str {
        &self.request_uri
    }
    fn context_path(&self) -> Option<&str> {
        self.context_path.as_deref()
    }
    fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }
    fn session_id_from_cookie(&self) -> bool {
        self.from_cookie
    }
}

struct MockResponse {
    encoding: String,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self {
            encoding: "UTF-8".to_string(),
        }
    }
}

impl ResponseContext for MockResponse {
    fn character_encoding(&self) -> &str {
        &self.encoding
    }
}

fn wrap(request: MockRequest) -> SessionResponse<MockRequest, MockResponse> {
    SessionResponse::new(MockResponse::default(), request)
}

#[test]
fn worked_example_from_inbound_docs() {
    let resp = wrap(MockRequest::default());
    assert_eq!(
        resp.encode_url("/app/page.jsp").unwrap(),
        "/app/page.jsp;jsessionid=ABC123"
    );
}

#[test]
fn fragment_references_never_rewritten() {
    let resp = wrap(MockRequest::default());
    for url in ["#top", "#", "#a/b?c"] {
        assert_eq!(resp.encode_url(url).unwrap(), url);
    }
}

#[test]
fn foreign_origin_unchanged() {
    let resp = wrap(MockRequest::default());
    assert_eq!(
        resp.encode_url("http://other.com/x").unwrap(),
        "http://other.com/x"
    );
    assert_eq!(
        resp.encode_url("https://example.com/app/x").unwrap(),
        "https://example.com/app/x"
    );
    assert_eq!(
        resp.encode_url("http://example.com:8443/app/x").unwrap(),
        "http://example.com:8443/app/x"
    );
}

#[test]
fn no_session_or_cookie_session_unchanged() {
    let resp = wrap(MockRequest {
        session_id: None,
        ..MockRequest::default()
    });
    assert_eq!(resp.encode_url("/app/page.jsp").unwrap(), "/app/page.jsp");

    let resp = wrap(MockRequest {
        from_cookie: true,
        ..MockRequest::default()
    });
    assert_eq!(resp.encode_url("/app/page.jsp").unwrap(), "/app/page.jsp");
}

#[test]
fn query_and_fragment_ordering() {
    let resp = wrap(MockRequest::default());
    assert_eq!(
        resp.encode_url("/app/page.jsp?x=1#top").unwrap(),
        "/app/page.jsp;jsessionid=ABC123?x=1#top"
    );
    assert_eq!(
        resp.encode_url("/app/page.jsp#top?x=1").unwrap(),
        "/app/page.jsp;jsessionid=ABC123#top?x=1"
    );
}

#[test]
fn encoding_is_idempotent() {
    let resp = wrap(MockRequest::default());
    let once = resp.encode_url("/app/page.jsp?q=2").unwrap().into_owned();
    let twice = resp.encode_url(&once).unwrap();
    assert_eq!(twice, once);
    assert!(matches!(twice, Cow::Borrowed(_)));
}

#[test]
fn port_equivalence_both_directions() {
    // Unspecified request port vs explicit default on the URL.
    let resp = wrap(MockRequest {
        scheme: "https".to_string(),
        ..MockRequest::default()
    });
    assert_eq!(
        resp.encode_url("https://example.com:443/app/x").unwrap(),
        "https://example.com:443/app/x;jsessionid=ABC123"
    );

    // Explicit default request port vs portless URL.
    let resp = wrap(MockRequest {
        server_port: Some(80),
        ..MockRequest::default()
    });
    assert_eq!(
        resp.encode_url("http://example.com/app/x").unwrap(),
        "http://example.com/app/x;jsessionid=ABC123"
    );
}

#[test]
fn redirect_empty_location_points_at_current_resource() {
    let resp = wrap(MockRequest::default());
    assert_eq!(
        resp.encode_redirect_url("").unwrap(),
        "http://example.com/app/;jsessionid=ABC123"
    );
    // The plain entry point keeps the empty string empty.
    assert_eq!(resp.encode_url("").unwrap(), "");
}

#[test]
fn relative_url_resolved_against_request_directory() {
    let resp = wrap(MockRequest {
        request_uri: "/app/dir/page.jsp".to_string(),
        ..MockRequest::default()
    });
    assert_eq!(
        resp.encode_url("next.jsp").unwrap(),
        "next.jsp;jsessionid=ABC123"
    );
}

#[test]
fn custom_param_name_from_config() {
    let config = RewriteConfig::from_toml(r#"session_param_name = "sid""#).unwrap();
    let resp = SessionResponse::with_config(MockResponse::default(), MockRequest::default(), config);
    assert_eq!(
        resp.encode_url("/app/page.jsp").unwrap(),
        "/app/page.jsp;sid=ABC123"
    );
}

#[test]
fn charset_failure_surfaces_with_location() {
    let resp = SessionResponse::new(
        MockResponse {
            encoding: "US-ASCII".to_string(),
        },
        MockRequest {
            request_uri: "/app/caf\u{e9}/page.jsp".to_string(),
            ..MockRequest::default()
        },
    );
    let err = resp.encode_url("next.jsp").unwrap_err();
    let RewriteError::Absolutize { location, .. } = err;
    assert_eq!(location, "next.jsp");
}

#[test]
fn unsupported_charset_surfaces_through_encode() {
    let resp = SessionResponse::new(
        MockResponse {
            encoding: "UTF-7".to_string(),
        },
        MockRequest {
            request_uri: "/app/dir/page.jsp".to_string(),
            ..MockRequest::default()
        },
    );
    let err = resp.encode_url("next.jsp").unwrap_err();
    let RewriteError::Absolutize { location, source } = err;
    assert_eq!(location, "next.jsp");
    assert!(matches!(source, CharsetError::Unsupported(name) if name == "UTF-7"));
}

#[test]
fn decorator_forwards_character_encoding() {
    let resp = wrap(MockRequest::default());
    assert_eq!(resp.character_encoding(), "UTF-8");
}
