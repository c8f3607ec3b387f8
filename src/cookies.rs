// Copyright 2025 Icinga Web Response Project Authors. Licensed under Apache-2.0.

//! [CookieSet] batching the cookies queued on a response

use std::collections::BTreeMap;

use cookie::Cookie;
use http::header::HeaderValue;

use crate::errors::Result;

/// The set of cookies which are to be sent to the client.
///
/// Keyed by cookie name, so queueing a cookie with a name already in the
/// set replaces the earlier one. Iteration order is the name order, which
/// keeps header emission deterministic.
#[derive(Clone, Debug, Default)]
pub struct CookieSet {
    // cookies' traversing should have definite order
    cookies: BTreeMap<String, Cookie<'static>>,
}

impl CookieSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `cookie`, replacing any queued cookie of the same name.
    pub fn add(&mut self, cookie: Cookie<'static>) {
        let name = cookie.name().to_owned();
        let _ = self.cookies.insert(name, cookie);
    }

    /// Get the queued cookie with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&Cookie<'static>> {
        self.cookies.get(name)
    }

    /// Drop the queued cookie with the given name.
    pub fn remove(&mut self, name: &str) -> Option<Cookie<'static>> {
        self.cookies.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cookie<'static>> {
        self.cookies.values()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Render every queued cookie as a `Set-Cookie` header value.
    pub(crate) fn to_header_values(&self) -> Result<Vec<HeaderValue>> {
        self.cookies
            .values()
            .map(|cookie| HeaderValue::from_str(&cookie.to_string()).map_err(Into::into))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_replaces_by_name() {
        let mut set = CookieSet::new();
        set.add(Cookie::new("theme", "light"));
        set.add(Cookie::new("icingaweb2-session", "abc"));
        set.add(Cookie::new("theme", "dark"));

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("theme").map(Cookie::value), Some("dark"));
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let mut set = CookieSet::new();
        set.add(Cookie::new("zoom", "1"));
        set.add(Cookie::new("auth", "x"));
        set.add(Cookie::new("theme", "dark"));

        let names: Vec<_> = set.iter().map(Cookie::name).collect();
        assert_eq!(names, vec!["auth", "theme", "zoom"]);
    }

    #[test]
    fn test_header_values_carry_attributes() {
        let mut set = CookieSet::new();
        let cookie = Cookie::build(("icingaweb2-session", "abc"))
            .path("/icingaweb2")
            .http_only(true)
            .build();
        set.add(cookie);

        let values = set.to_header_values().unwrap();
        assert_eq!(values.len(), 1);

        let rendered = values[0].to_str().unwrap();
        assert!(rendered.starts_with("icingaweb2-session=abc"));
        assert!(rendered.contains("Path=/icingaweb2"));
        assert!(rendered.contains("HttpOnly"));
    }

    #[test]
    fn test_remove() {
        let mut set = CookieSet::new();
        set.add(Cookie::new("theme", "dark"));

        assert!(set.remove("theme").is_some());
        assert!(set.remove("theme").is_none());
        assert!(set.is_empty());
    }
}
