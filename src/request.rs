// Copyright 2025 Icinga Web Response Project Authors. Licensed under Apache-2.0.

use http::header::{HeaderMap, HeaderName};

const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

/// The request-side facts the response pipeline conditions on.
///
/// Whether the current request came from the client side script layer
/// (XHR) decides between the `X-Icinga-*` header protocol and plain
/// browser navigation. Whether it is an API call decides if cookies are
/// transmitted at all. API-ness is a routing decision of the embedding
/// application, so it is carried as a plain flag instead of being
/// sniffed here.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    xhr: bool,
    api: bool,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the context from request headers.
    ///
    /// Recognizes `X-Requested-With: XMLHttpRequest` the way the client
    /// side script layer sends it.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let xhr = headers
            .get(X_REQUESTED_WITH)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.eq_ignore_ascii_case("xmlhttprequest"))
            .unwrap_or(false);

        Self { xhr, api: false }
    }

    pub fn xhr(mut self, xhr: bool) -> Self {
        self.xhr = xhr;
        self
    }

    pub fn api(mut self, api: bool) -> Self {
        self.api = api;
        self
    }

    #[inline]
    pub fn is_xhr(&self) -> bool {
        self.xhr
    }

    #[inline]
    pub fn is_api(&self) -> bool {
        self.api
    }
}
