// Copyright 2025 Icinga Web Response Project Authors. Licensed under Apache-2.0.

use cookie::Cookie;

/// Defaults applied to cookies queued on a response.
///
/// The embedding application derives these from its deployment: the base
/// path it is served under, whether it sits behind TLS. A cookie that sets
/// any of these attributes explicitly wins over the default.
#[derive(Debug, Clone)]
pub struct CookieDefaults {
    /// Default cookie path.
    ///
    /// Usually the base path the application is mounted under.
    pub path: Option<String>,
    /// Default cookie domain.
    pub domain: Option<String>,
    /// Mark cookies as secure by default.
    ///
    /// Should be enabled when the application is served over TLS only.
    pub secure: bool,
    /// Mark cookies as http-only by default.
    ///
    /// Enabled by default, client side script code has no business
    /// reading session state.
    pub http_only: bool,
}

impl Default for CookieDefaults {
    fn default() -> Self {
        Self {
            path: None,
            domain: None,
            secure: false,
            http_only: true,
        }
    }
}

impl CookieDefaults {
    /// Fill in the attributes `cookie` left unset.
    pub fn apply(&self, cookie: &mut Cookie<'static>) {
        if cookie.path().is_none() {
            if let Some(path) = &self.path {
                cookie.set_path(path.clone());
            }
        }

        if cookie.domain().is_none() {
            if let Some(domain) = &self.domain {
                cookie.set_domain(domain.clone());
            }
        }

        if cookie.secure().is_none() && self.secure {
            cookie.set_secure(true);
        }

        if cookie.http_only().is_none() && self.http_only {
            cookie.set_http_only(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_unset_attributes() {
        let defaults = CookieDefaults {
            path: Some("/icingaweb2".to_string()),
            domain: None,
            secure: true,
            http_only: true,
        };

        let mut cookie = Cookie::new("icingaweb2-session", "abc123");
        defaults.apply(&mut cookie);

        assert_eq!(cookie.path(), Some("/icingaweb2"));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn test_explicit_attributes_win() {
        let defaults = CookieDefaults {
            path: Some("/icingaweb2".to_string()),
            domain: Some("monitoring.example.com".to_string()),
            secure: true,
            http_only: true,
        };

        let mut cookie = Cookie::build(("theme", "dark"))
            .path("/custom")
            .secure(false)
            .build();
        defaults.apply(&mut cookie);

        assert_eq!(cookie.path(), Some("/custom"));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.domain(), Some("monitoring.example.com"));
    }
}
