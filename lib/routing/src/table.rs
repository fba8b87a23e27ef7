//! The application route table.

use crate::error::RouteTableError;
use crate::route::{RouteEntry, RouteId};
use serde::Serialize;
use signpost_core::{Result, RoutePath};
use std::collections::HashSet;
use tracing::debug;

/// Ordered, immutable list of declared routes.
///
/// Paths and names are unique, and every [`RouteId`] has exactly one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Builds the application's route table.
    ///
    /// Performs no I/O. Two calls return equal tables.
    #[must_use]
    pub fn build() -> Self {
        let table = Self {
            entries: vec![
                RouteEntry::new(RoutePath::from_static("/"), "Hello", RouteId::Hello),
                RouteEntry::new(RoutePath::from_static("/about"), "About", RouteId::About),
            ],
        };
        debug!(routes = table.entries.len(), "route table built");
        table
    }

    /// Builds a table from an arbitrary route list, checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is malformed, a name is empty, two entries
    /// match the same URL or share a name, or a route identifier is declared
    /// twice or not at all.
    pub fn from_entries(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    /// Checks the table invariants.
    ///
    /// # Errors
    ///
    /// See [`Self::from_entries`].
    pub fn validate(&self) -> Result<(), RouteTableError> {
        let mut names = HashSet::new();
        let mut ids = HashSet::new();

        for (index, entry) in self.entries.iter().enumerate() {
            entry
                .path()
                .validate()
                .map_err(|e| RouteTableError::InvalidPath {
                    path: e.path,
                    reason: e.reason.to_string(),
                })?;

            if entry.name().trim().is_empty() {
                return Err(RouteTableError::EmptyName {
                    path: entry.path().to_string(),
                }
                .into());
            }

            if self.entries[..index]
                .iter()
                .any(|earlier| earlier.path().overlaps(entry.path()))
            {
                return Err(RouteTableError::DuplicatePath {
                    path: entry.path().to_string(),
                }
                .into());
            }

            if !names.insert(entry.name()) {
                return Err(RouteTableError::DuplicateName {
                    name: entry.name().to_string(),
                }
                .into());
            }

            if !ids.insert(entry.id()) {
                return Err(RouteTableError::DuplicateRoute { id: entry.id() }.into());
            }
        }

        if let Some(id) = RouteId::ALL.into_iter().find(|id| !ids.contains(id)) {
            return Err(RouteTableError::MissingRoute { id }.into());
        }

        Ok(())
    }

    /// Returns the entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Returns the number of declared routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no routes are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the route addressed by a URL path.
    ///
    /// Returns `None` for unmatched paths; rendering a fallback is up to the
    /// caller.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path().matches(path))
    }

    /// Finds a route by name, for named navigation.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Finds the entry for a route identifier.
    #[must_use]
    pub fn by_id(&self, id: RouteId) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::build()
    }
}
