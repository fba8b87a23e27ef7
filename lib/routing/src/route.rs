//! Route identifiers and route entries.

use serde::{Deserialize, Serialize};
use signpost_core::RoutePath;
use std::fmt;

/// Every route the application can render.
///
/// The UI layer maps each variant to a view with an exhaustive `match`,
/// so adding a variant without a view does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteId {
    /// The landing page.
    Hello,
    /// The about page.
    About,
}

impl RouteId {
    /// All route identifiers, in declaration order.
    pub const ALL: [RouteId; 2] = [RouteId::Hello, RouteId::About];

    /// Returns the identifier as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hello => "Hello",
            Self::About => "About",
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declared route: path, name, and the view it renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    path: RoutePath,
    name: String,
    id: RouteId,
}

impl RouteEntry {
    /// Creates a route entry.
    #[must_use]
    pub fn new(path: RoutePath, name: impl Into<String>, id: RouteId) -> Self {
        Self {
            path,
            name: name.into(),
            id,
        }
    }

    /// Returns the URL path the route is registered under.
    #[must_use]
    pub fn path(&self) -> &RoutePath {
        &self.path
    }

    /// Returns the route name used for named navigation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the view this route renders.
    #[must_use]
    pub fn id(&self) -> RouteId {
        self.id
    }
}
