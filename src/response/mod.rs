// Copyright 2025 Icinga Web Response Project Authors. Licensed under Apache-2.0.

mod json;

use std::mem;
use std::time::Duration;

use cookie::Cookie;
use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, LOCATION, SET_COOKIE};
use http::{StatusCode, Uri};
pub use json::JsonResponse;
use tracing::{debug, trace};

use crate::config::CookieDefaults;
use crate::cookies::CookieSet;
use crate::errors::{Error, Result};
use crate::request::RequestContext;
use crate::session::Session;
use crate::util::raw_url_encode;

/// Tells the client side script layer where to navigate instead of
/// following a `Location` header.
pub const X_ICINGA_REDIRECT: HeaderName = HeaderName::from_static("x-icinga-redirect");
/// Tells the client side script layer to rerender the full layout.
pub const X_ICINGA_RERENDER_LAYOUT: HeaderName = HeaderName::from_static("x-icinga-rerender-layout");
/// Names the container the delivered fragment belongs into.
pub const X_ICINGA_CONTAINER: HeaderName = HeaderName::from_static("x-icinga-container");
/// Tells the client side script layer to reload the stylesheet.
pub const X_ICINGA_RELOAD_CSS: HeaderName = HeaderName::from_static("x-icinga-reload-css");
/// Auto-refresh interval in seconds.
pub const X_ICINGA_REFRESH: HeaderName = HeaderName::from_static("x-icinga-refresh");

/// A HTTP response in the making.
///
/// Collects status, headers, body, cookies and the navigation hints of a
/// single request/response cycle, then seals into an [`http::Response`]
/// via [`finish`]. Which headers actually go out depends on the
/// [`RequestContext`]: an XHR request gets the `X-Icinga-*` header
/// protocol, a plain browser request gets ordinary redirect semantics.
///
/// [`finish`]: Response::finish
#[derive(Debug, Default)]
pub struct Response {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
    content_type: Option<String>,
    auto_refresh_interval: Option<Duration>,
    redirect_url: Option<Uri>,
    reload_css: bool,
    rerender_layout: bool,
    cookies: CookieSet,
    cookie_defaults: CookieDefaults,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response status.
    ///
    /// Defaults to `200 OK`, or `302 Found` when a redirect is handled
    /// for a non-XHR request.
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the response body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the content type of this response.
    ///
    /// Defaults to `text/html`. An explicitly set `Content-Type` header
    /// always wins over this.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set a header, replacing any previous value of the same name.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        let _ = self.headers.insert(name, value);
        self
    }

    /// Set the auto-refresh interval the client should reload with.
    pub fn auto_refresh_interval(mut self, interval: Duration) -> Self {
        self.auto_refresh_interval = Some(interval);
        self
    }

    /// Set whether to instruct client side script code to reload CSS.
    pub fn reload_css(mut self, reload_css: bool) -> Self {
        self.reload_css = reload_css;
        self
    }

    /// Set whether the layout should be rerendered on XHR.
    pub fn rerender_layout(mut self, rerender_layout: bool) -> Self {
        self.rerender_layout = rerender_layout;
        self
    }

    /// Record the redirect target for later handling.
    ///
    /// Unlike a plain `Location` header this only records the target;
    /// [`finish`](Response::finish) decides between the `X-Icinga-Redirect`
    /// protocol and an ordinary `302` depending on the request.
    pub fn redirect(mut self, target: impl AsRef<str>) -> Result<Self> {
        let target = target.as_ref();
        let url = target
            .parse::<Uri>()
            .map_err(|source| Error::InvalidRedirect {
                target: target.to_string(),
                source,
            })?;

        self.redirect_url = Some(url);
        Ok(self)
    }

    /// Record an already parsed redirect target.
    pub fn redirect_uri(mut self, target: Uri) -> Self {
        self.redirect_url = Some(target);
        self
    }

    /// Get the recorded redirect target.
    pub fn redirect_url(&self) -> Option<&Uri> {
        self.redirect_url.as_ref()
    }

    /// Set the defaults applied to queued cookies.
    pub fn cookie_defaults(mut self, defaults: CookieDefaults) -> Self {
        self.cookie_defaults = defaults;
        self
    }

    /// Queue the given cookie for sending it to the client.
    pub fn cookie(mut self, mut cookie: Cookie<'static>) -> Self {
        self.cookie_defaults.apply(&mut cookie);
        self.cookies.add(cookie);
        self
    }

    /// Get the set of cookies which are to be sent to the client.
    pub fn cookies(&self) -> &CookieSet {
        &self.cookies
    }

    /// Switch to the json flavor of this response.
    ///
    /// Carries over status, headers and queued cookies; the content type
    /// becomes `application/json` regardless of what was set before.
    pub fn json(self) -> JsonResponse {
        JsonResponse::from_response(self)
    }

    /// Emit the conditional headers this response is about.
    fn prepare(&mut self, ctx: &RequestContext) -> Result<()> {
        if ctx.is_xhr() {
            if let Some(url) = &self.redirect_url {
                let encoded = raw_url_encode(&url.to_string());
                let _ = self
                    .headers
                    .insert(X_ICINGA_REDIRECT, HeaderValue::from_str(&encoded)?);
                if self.rerender_layout {
                    let _ = self
                        .headers
                        .insert(X_ICINGA_RERENDER_LAYOUT, HeaderValue::from_static("yes"));
                }
            }

            if self.rerender_layout {
                let _ = self
                    .headers
                    .insert(X_ICINGA_CONTAINER, HeaderValue::from_static("layout"));
            }

            if self.reload_css {
                let _ = self
                    .headers
                    .insert(X_ICINGA_RELOAD_CSS, HeaderValue::from_static("now"));
            }

            if let Some(interval) = self.auto_refresh_interval {
                let _ = self
                    .headers
                    .insert(X_ICINGA_REFRESH, HeaderValue::from(interval.as_secs()));
            }
        } else if let Some(url) = &self.redirect_url {
            trace!(target = %url, "redirecting via location header");
            let _ = self
                .headers
                .insert(LOCATION, HeaderValue::from_str(&url.to_string())?);
            self.status = Some(StatusCode::FOUND);
        }

        // An explicitly set Content-Type header is not clobbered.
        if !self.headers.contains_key(CONTENT_TYPE) {
            let content_type = self.content_type.as_deref().unwrap_or("text/html");
            let _ = self
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_str(content_type)?);
        }

        Ok(())
    }

    /// Seal this response into an [`http::Response`].
    ///
    /// Runs the conditional header emission and appends the queued
    /// cookies as `Set-Cookie` headers. Cookies are never transmitted
    /// for API requests.
    pub fn finish(mut self, ctx: &RequestContext) -> Result<http::Response<Vec<u8>>> {
        self.prepare(ctx)?;

        if !ctx.is_api() {
            for value in self.cookies.to_header_values()? {
                self.headers.append(SET_COOKIE, value);
            }
        }

        let mut sealed = http::Response::new(mem::take(&mut self.body));
        *sealed.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *sealed.headers_mut() = self.headers;
        Ok(sealed)
    }

    /// Redirect to `target` and seal this response immediately.
    ///
    /// The session is persisted first when it reports unsaved changes,
    /// so state written during this request survives the navigation.
    /// The sealed response carries headers only; any body set earlier is
    /// dropped, request handling ends with the returned value.
    pub async fn redirect_and_finish(
        mut self,
        target: impl AsRef<str>,
        ctx: &RequestContext,
        session: &dyn Session,
    ) -> Result<http::Response<Vec<u8>>> {
        self = self.redirect(target)?;

        if session.has_changed() {
            debug!("writing changed session before redirect");
            session.write().await?;
        }

        self.body.clear();
        self.finish(ctx)
    }
}
