//! Error types for the routing crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `RouteTableError`: a route list that breaks the table invariants
//! - `UnknownHistoryMode`: an unrecognised history mode name

use crate::route::RouteId;
use std::fmt;

/// Errors from validating a route list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    /// Two entries resolve the same URL.
    DuplicatePath { path: String },
    /// Two entries share a name.
    DuplicateName { name: String },
    /// A route identifier is declared more than once.
    DuplicateRoute { id: RouteId },
    /// A route identifier has no entry.
    MissingRoute { id: RouteId },
    /// An entry has an empty name.
    EmptyName { path: String },
    /// An entry has a malformed path.
    InvalidPath { path: String, reason: String },
}

impl fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePath { path } => write!(f, "duplicate route path: {path}"),
            Self::DuplicateName { name } => write!(f, "duplicate route name: {name}"),
            Self::DuplicateRoute { id } => write!(f, "route declared more than once: {id}"),
            Self::MissingRoute { id } => write!(f, "route has no entry: {id}"),
            Self::EmptyName { path } => write!(f, "route at '{path}' has an empty name"),
            Self::InvalidPath { path, reason } => {
                write!(f, "invalid route path '{path}': {reason}")
            }
        }
    }
}

impl std::error::Error for RouteTableError {}

/// Error returned when parsing a history mode name fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHistoryMode {
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for UnknownHistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown history mode '{}', expected 'hash' or 'history'",
            self.value
        )
    }
}

impl std::error::Error for UnknownHistoryMode {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_table_error_display() {
        let err = RouteTableError::DuplicatePath {
            path: "/about".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate route path: /about");

        let err = RouteTableError::MissingRoute { id: RouteId::About };
        assert!(err.to_string().contains("About"));
    }

    #[test]
    fn unknown_history_mode_display() {
        let err = UnknownHistoryMode {
            value: "abstract".to_string(),
        };
        assert!(err.to_string().contains("'abstract'"));
    }
}
