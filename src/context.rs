use crate::error::Error;
use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::request::Parts,
};
use edgestash_headers::{
    EdgestashLink, HeaderMapAppendExt as _, HeaderMapExt as _, SurrogateCapability,
    SurrogateControl,
};
use http::HeaderMap;
use itertools::Itertools as _;
use std::{
    convert::Infallible,
    fmt,
    sync::{Arc, Mutex, PoisonError},
};
use tracing::{debug, instrument};

/// Edgestash state of a single request.
///
/// Created by [`crate::edgestash_middleware`] before the handler runs and
/// stored in the request extensions. Clones share the same URL list, so URLs
/// recorded while rendering the page are visible to the middleware when it
/// finalizes the response.
#[derive(Clone)]
pub struct EdgestashContext(Arc<Inner>);

struct Inner {
    active: bool,
    urls: Mutex<Vec<String>>,
}

impl EdgestashContext {
    pub fn new(active: bool) -> Self {
        Self(Arc::new(Inner {
            active,
            urls: Mutex::new(Vec::new()),
        }))
    }

    /// Decide from the request headers if the edge in front of us can
    /// process edgestash placeholders.
    ///
    /// A missing header, a non-matching token or unreadable values all
    /// resolve to an inactive context.
    pub fn negotiate(headers: &HeaderMap) -> Self {
        let active = headers
            .typed_get::<SurrogateCapability>()
            .is_some_and(|capability| capability.supports_edgestash());

        debug!(active, "negotiated edgestash capability");

        Self::new(active)
    }

    pub fn is_active(&self) -> bool {
        self.0.active
    }

    /// Remember a JSON document the edge has to fetch for this page.
    ///
    /// Duplicates are kept here, they are only removed when the headers are
    /// written. Empty URLs are ignored.
    pub fn record_url(&self, url: impl Into<String>) {
        let url = url.into();
        if url.is_empty() {
            return;
        }

        self.0
            .urls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url);
    }

    /// all recorded URLs in the order they were recorded.
    pub fn collected_urls(&self) -> Vec<String> {
        self.0
            .urls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// recorded URLs without duplicates, first occurrence wins.
    pub fn unique_urls(&self) -> Vec<String> {
        self.0
            .urls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .unique()
            .cloned()
            .collect()
    }

    /// Add the edgestash response headers.
    ///
    /// Nothing is written for inactive requests, even when URLs were recorded.
    /// Existing `Surrogate-Control` and `Link` lines are never replaced.
    #[instrument(skip_all, fields(active = self.is_active()))]
    pub fn finalize(&self, headers: &mut HeaderMap) {
        if !self.is_active() {
            return;
        }

        headers.typed_append(&SurrogateControl::edgestash());

        let urls = self.unique_urls();
        for url in &urls {
            headers.typed_append(&EdgestashLink::new(url.as_str()));
        }

        debug!(links = urls.len(), "added edgestash response headers");
    }
}

impl fmt::Debug for EdgestashContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgestashContext")
            .field("active", &self.is_active())
            .field("urls", &self.collected_urls())
            .finish()
    }
}

impl<S> FromRequestParts<S> for EdgestashContext
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or(Error::MissingContext)
    }
}

impl<S> OptionalFromRequestParts<S> for EdgestashContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<Self>().cloned())
    }
}
