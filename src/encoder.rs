//! The session URL encoder: eligibility decision plus rewrite.
//!
//! Call-scoped and stateless: an encoder borrows the request/response
//! contexts of one HTTP exchange and makes an independent decision per URL.

use std::borrow::Cow;

use url::Url;

use crate::error::RewriteError;
use crate::request::{effective_port, RequestContext, ResponseContext};
use crate::rewrite::{to_absolute, to_encoded};

/// Decides whether an outbound URL should carry the session token and
/// performs the rewrite.
pub struct SessionUrlEncoder<'a> {
    request: &'a dyn RequestContext,
    response: &'a dyn ResponseContext,
    param_name: &'a str,
}

impl<'a> SessionUrlEncoder<'a> {
    pub fn new(
        request: &'a dyn RequestContext,
        response: &'a dyn ResponseContext,
        param_name: &'a str,
    ) -> Self {
        Self {
            request,
            response,
            param_name,
        }
    }

    /// Encodes the session id into `url` if the URL points back into this
    /// web application and the session is not already cookie-tracked.
    /// Ineligible URLs come back borrowed and unchanged.
    ///
    /// The only error is a charset failure while absolutizing a relative
    /// URL; a malformed URL just means "no rewrite".
    #[doc(alias = "encodeURL")]
    #[doc(alias = "encodeUrl")]
    pub fn encode<'u>(&self, url: &'u str) -> Result<Cow<'u, str>, RewriteError> {
        self.encode_with(url, false)
    }

    /// Redirect flavor of [`encode`](Self::encode): an empty `url` is
    /// replaced by the absolute form of the current request before
    /// rewriting, per the W3C rule that an empty redirect location means
    /// "this resource".
    #[doc(alias = "encodeRedirectURL")]
    #[doc(alias = "encodeRedirectUrl")]
    pub fn encode_redirect<'u>(&self, url: &'u str) -> Result<Cow<'u, str>, RewriteError> {
        self.encode_with(url, true)
    }

    fn encode_with<'u>(&self, url: &'u str, redirect: bool) -> Result<Cow<'u, str>, RewriteError> {
        let absolute = to_absolute(url, self.request, self.response.character_encoding())?;
        if !self.is_eligible(&absolute) {
            tracing::trace!(url, "url not eligible for session rewriting");
            return Ok(Cow::Borrowed(url));
        }
        let session_id = match self.request.session_id() {
            Some(id) => id,
            None => return Ok(Cow::Borrowed(url)),
        };
        let target = if redirect && url.is_empty() {
            absolute.as_ref()
        } else {
            url
        };
        let encoded = to_encoded(target, session_id, self.param_name);
        if encoded.len() > target.len() {
            tracing::debug!(url = target, "embedding session id into url");
        }
        Ok(Cow::Owned(encoded))
    }

    /// True when `absolute_url` should be rewritten with the session id:
    /// not a pure fragment reference, a session exists whose id did not
    /// arrive via cookie, and the URL points back into this application
    /// (same scheme, host, and effective port, path under the context path,
    /// not already carrying this session's token).
    pub fn is_eligible(&self, absolute_url: &str) -> bool {
        if absolute_url.starts_with('#') {
            return false;
        }
        let session_id = match self.request.session_id() {
            Some(id) => id,
            None => return false,
        };
        if self.request.session_id_from_cookie() {
            return false;
        }

        let parsed = match Url::parse(absolute_url) {
            Ok(u) => u,
            Err(_) => return false,
        };
        if !parsed.scheme().eq_ignore_ascii_case(self.request.scheme()) {
            return false;
        }
        let host = match parsed.host_str() {
            Some(h) => h,
            None => return false,
        };
        if !host.eq_ignore_ascii_case(self.request.server_name()) {
            return false;
        }
        if effective_port(self.request.scheme(), self.request.server_port())
            != effective_port(parsed.scheme(), parsed.port())
        {
            return false;
        }

        if let Some(context_path) = self.request.context_path() {
            // path + query, the way inbound parsing sees it
            let file = match parsed.query() {
                Some(q) => format!("{}?{}", parsed.path(), q),
                None => parsed.path().to_string(),
            };
            if !file.starts_with(context_path) {
                return false;
            }
            let token = format!(";{}={}", self.param_name, session_id);
            if file[context_path.len()..].contains(&token) {
                return false;
            }
        }

        true
    }
}
