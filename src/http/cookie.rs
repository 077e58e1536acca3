//! Cookie serialization module
//!
//! Builds a single `Set-Cookie` header value from a name, a value and
//! optional attributes.

use std::fmt;

/// `SameSite` cookie policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional cookie attributes
///
/// An attribute is emitted only when it is set to something meaningful: a
/// zero `max_age`, an empty `domain`/`path` and `false` flags are skipped.
///
/// ```
/// use fetch_helper::http::cookie::{serialize, CookieOptions, SameSite};
///
/// let options = CookieOptions::new().path("/").http_only(true).same_site(SameSite::Lax);
/// assert_eq!(serialize("sid", "abc", &options), "sid=abc; Path=/; HttpOnly; SameSite=Lax");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieOptions {
    /// Lifetime in seconds
    pub max_age: Option<i64>,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: Option<SameSite>,
}

impl CookieOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub const fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    #[must_use]
    pub const fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    #[must_use]
    pub const fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }
}

/// Serialize one `Set-Cookie` value
///
/// Segments are emitted in a fixed order: `name=value`, `Max-Age`, `Domain`,
/// `Path`, `Secure`, `HttpOnly`, `SameSite`, joined with `"; "`.
pub fn serialize(name: &str, value: &str, options: &CookieOptions) -> String {
    let mut segments = vec![format!("{name}={value}")];

    if let Some(max_age) = options.max_age.filter(|&age| age != 0) {
        segments.push(format!("Max-Age={max_age}"));
    }
    if let Some(domain) = non_empty(options.domain.as_deref()) {
        segments.push(format!("Domain={domain}"));
    }
    if let Some(path) = non_empty(options.path.as_deref()) {
        segments.push(format!("Path={path}"));
    }
    if options.secure {
        segments.push("Secure".to_string());
    }
    if options.http_only {
        segments.push("HttpOnly".to_string());
    }
    if let Some(same_site) = options.same_site {
        segments.push(format!("SameSite={same_site}"));
    }

    segments.join("; ")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_value_only() {
        assert_eq!(serialize("a", "1", &CookieOptions::default()), "a=1");
    }

    #[test]
    fn test_max_age_and_secure() {
        let options = CookieOptions::new().max_age(60).secure(true);
        assert_eq!(serialize("a", "1", &options), "a=1; Max-Age=60; Secure");
    }

    #[test]
    fn test_fixed_emission_order() {
        let options = CookieOptions {
            same_site: Some(SameSite::Strict),
            http_only: true,
            secure: true,
            path: Some("/app".to_string()),
            domain: Some("example.com".to_string()),
            max_age: Some(3600),
        };
        assert_eq!(
            serialize("session", "xyz", &options),
            "session=xyz; Max-Age=3600; Domain=example.com; Path=/app; Secure; HttpOnly; SameSite=Strict"
        );
    }

    #[test]
    fn test_falsy_attributes_skipped() {
        let options = CookieOptions::new()
            .max_age(0)
            .domain("")
            .path("")
            .secure(false)
            .http_only(false);
        assert_eq!(serialize("a", "1", &options), "a=1");
    }

    #[test]
    fn test_negative_max_age_emitted() {
        let options = CookieOptions::new().max_age(-1);
        assert_eq!(serialize("a", "1", &options), "a=1; Max-Age=-1");
    }

    #[test]
    fn test_same_site_values() {
        assert_eq!(SameSite::Strict.to_string(), "Strict");
        assert_eq!(SameSite::Lax.to_string(), "Lax");
        assert_eq!(SameSite::None.to_string(), "None");
    }
}
