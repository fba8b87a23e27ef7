//! Strongly-typed URL path patterns for route declarations.
//!
//! A [`RoutePath`] is a literal path such as `/` or `/about`. Matching an
//! incoming location against a path is non-strict: the query string and
//! fragment are ignored, one trailing slash is optional, and comparison is
//! ASCII case-insensitive.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Error returned when a string is not a valid route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRoutePath {
    /// The rejected input.
    pub path: String,
    /// Why the input was rejected.
    pub reason: &'static str,
}

impl fmt::Display for InvalidRoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid route path '{}': {}", self.path, self.reason)
    }
}

impl std::error::Error for InvalidRoutePath {}

/// A literal URL path a route is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath(Cow<'static, str>);

impl RoutePath {
    /// Wraps a path literal without validating it.
    ///
    /// Intended for compiled-in tables; tables built this way are checked
    /// when they are validated.
    #[must_use]
    pub const fn from_static(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Parses and validates a route path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not start with `/` or contains a
    /// query marker, fragment marker, or whitespace.
    pub fn parse(path: impl Into<String>) -> Result<Self, InvalidRoutePath> {
        let path = path.into();
        if let Some(reason) = Self::check(&path) {
            return Err(InvalidRoutePath { path, reason });
        }
        Ok(Self(Cow::Owned(path)))
    }

    /// Re-checks a path, which matters for paths made with [`Self::from_static`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::parse`].
    pub fn validate(&self) -> Result<(), InvalidRoutePath> {
        match Self::check(&self.0) {
            Some(reason) => Err(InvalidRoutePath {
                path: self.0.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }

    fn check(path: &str) -> Option<&'static str> {
        if !path.starts_with('/') {
            Some("must start with '/'")
        } else if path.contains('?') {
            Some("must not contain a query string")
        } else if path.contains('#') {
            Some("must not contain a fragment")
        } else if path.chars().any(char::is_whitespace) {
            Some("must not contain whitespace")
        } else {
            None
        }
    }

    /// Returns the path as declared.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `location` addresses this path.
    #[must_use]
    pub fn matches(&self, location: &str) -> bool {
        match_key(self.as_str()).eq_ignore_ascii_case(match_key(location))
    }

    /// Returns true if both paths would match the same locations.
    #[must_use]
    pub fn overlaps(&self, other: &RoutePath) -> bool {
        self.matches(other.as_str())
    }
}

/// Reduces a location to the part compared during matching.
fn match_key(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    let path = path.strip_prefix('/').unwrap_or(path);
    path.strip_suffix('/').unwrap_or(path)
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RoutePath {
    type Err = InvalidRoutePath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RoutePath {
    type Error = InvalidRoutePath;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RoutePath> for String {
    fn from(path: RoutePath) -> Self {
        path.0.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_literal_paths() {
        assert_eq!(RoutePath::parse("/").expect("valid").as_str(), "/");
        assert_eq!(
            RoutePath::parse("/about").expect("valid").as_str(),
            "/about"
        );
    }

    #[test]
    fn parse_rejects_relative_path() {
        let err = RoutePath::parse("about").unwrap_err();
        assert_eq!(err.path, "about");
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn parse_rejects_query_fragment_and_whitespace() {
        assert!(RoutePath::parse("/about?x=1").is_err());
        assert!(RoutePath::parse("/#/about").is_err());
        assert!(RoutePath::parse("/ab out").is_err());
    }

    #[test]
    fn static_paths_are_checked_on_validate() {
        assert!(RoutePath::from_static("/about").validate().is_ok());
        assert!(RoutePath::from_static("about").validate().is_err());
    }

    #[test]
    fn root_matches_empty_and_slash() {
        let root = RoutePath::from_static("/");
        assert!(root.matches("/"));
        assert!(root.matches(""));
        assert!(root.matches("/?ref=home"));
        assert!(!root.matches("/about"));
    }

    #[test]
    fn matching_is_non_strict() {
        let about = RoutePath::from_static("/about");
        assert!(about.matches("/about"));
        assert!(about.matches("/about/"));
        assert!(about.matches("/About"));
        assert!(about.matches("/about?tab=team"));
        assert!(about.matches("/about#contact"));
        assert!(about.matches("about"));
        assert!(!about.matches("/about/team"));
        assert!(!about.matches("/abouts"));
    }

    #[test]
    fn overlapping_paths_are_detected() {
        let a = RoutePath::from_static("/about");
        let b = RoutePath::from_static("/About/");
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&RoutePath::from_static("/")));
    }

    #[test]
    fn deserialize_validates() {
        let ok: RoutePath = serde_json::from_str("\"/about\"").expect("valid path");
        assert_eq!(ok, RoutePath::from_static("/about"));
        assert!(serde_json::from_str::<RoutePath>("\"about\"").is_err());
    }
}
