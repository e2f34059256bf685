//! Relative-URL absolutization against the current request.

use std::borrow::Cow;

use crate::error::RewriteError;
use crate::request::RequestContext;
use crate::rewrite::charset::encode_path;

/// Converts a possibly-relative `location` into an absolute URL using the
/// request's scheme, server name, and port. Already-absolute URLs come back
/// borrowed and unchanged.
///
/// A leading `/` resolves against the server root. A location with no URI
/// scheme and no leading slash resolves against the directory portion of the
/// current request URI (everything before its last `/`), percent-encoded
/// with the response's character encoding. The port is printed only when it
/// is explicit and not the scheme default.
///
/// Fails only when the directory portion cannot be encoded in the response
/// charset; the error keeps the original `location`.
pub fn to_absolute<'u>(
    location: &'u str,
    request: &dyn RequestContext,
    encoding: &str,
) -> Result<Cow<'u, str>, RewriteError> {
    let leading_slash = location.starts_with('/');
    if !leading_slash && has_scheme(location) {
        return Ok(Cow::Borrowed(location));
    }

    let scheme = request.scheme();
    let mut buf = String::with_capacity(location.len() + 32);
    buf.push_str(scheme);
    buf.push_str("://");
    buf.push_str(request.server_name());
    if let Some(port) = request.server_port() {
        let is_default = (scheme == "http" && port == 80) || (scheme == "https" && port == 443);
        if !is_default {
            buf.push(':');
            buf.push_str(&port.to_string());
        }
    }
    if !leading_slash {
        let uri = request.request_uri();
        let dir = match uri.rfind('/') {
            Some(pos) => &uri[..pos],
            None => "",
        };
        let encoded = encode_path(dir, encoding).map_err(|source| RewriteError::Absolutize {
            location: location.to_string(),
            source,
        })?;
        buf.push_str(&encoded);
        buf.push('/');
    }
    buf.push_str(location);
    Ok(Cow::Owned(buf))
}

/// True when `c` is allowed in the scheme of a URI (RFC 2396, section 3.1).
pub fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// True when `uri` starts with a scheme component: a `:` preceded by one or
/// more scheme characters. Any other character before the colon, or no
/// colon at all, means no scheme.
pub fn has_scheme(uri: &str) -> bool {
    for (i, c) in uri.chars().enumerate() {
        if c == ':' {
            return i > 0;
        }
        if !is_scheme_char(c) {
            return false;
        }
    }
    false
}
