//! Response decorator exposing the rewrite operations.
//!
//! The rewriting logic does not subclass a response type; it wraps one.
//! `SessionResponse` owns the request context and the underlying response,
//! adds the two encode operations, and forwards everything else to the
//! wrapped response untouched.

use std::borrow::Cow;

use crate::config::RewriteConfig;
use crate::encoder::SessionUrlEncoder;
use crate::error::RewriteError;
use crate::request::{RequestContext, ResponseContext};

/// A response wrapper scoped to one HTTP exchange. New behavior is limited
/// to [`encode_url`](Self::encode_url) and
/// [`encode_redirect_url`](Self::encode_redirect_url).
pub struct SessionResponse<R, W> {
    request: R,
    inner: W,
    config: RewriteConfig,
}

impl<R, W> SessionResponse<R, W>
where
    R: RequestContext,
    W: ResponseContext,
{
    pub fn new(inner: W, request: R) -> Self {
        Self::with_config(inner, request, RewriteConfig::default())
    }

    pub fn with_config(inner: W, request: R, config: RewriteConfig) -> Self {
        Self {
            request,
            inner,
            config,
        }
    }

    /// Encodes the session id into `url` if necessary.
    #[doc(alias = "encodeURL")]
    #[doc(alias = "encodeUrl")]
    pub fn encode_url<'u>(&self, url: &'u str) -> Result<Cow<'u, str>, RewriteError> {
        self.encoder().encode(url)
    }

    /// Encodes the session id into a redirect location if necessary.
    #[doc(alias = "encodeRedirectURL")]
    #[doc(alias = "encodeRedirectUrl")]
    pub fn encode_redirect_url<'u>(&self, url: &'u str) -> Result<Cow<'u, str>, RewriteError> {
        self.encoder().encode_redirect(url)
    }

    pub fn request(&self) -> &R {
        &self.request
    }

    pub fn inner(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn encoder(&self) -> SessionUrlEncoder<'_> {
        SessionUrlEncoder::new(&self.request, &self.inner, &self.config.session_param_name)
    }
}

impl<R, W> ResponseContext for SessionResponse<R, W>
where
    R: RequestContext,
    W: ResponseContext,
{
    fn character_encoding(&self) -> &str {
        self.inner.character_encoding()
    }
}
