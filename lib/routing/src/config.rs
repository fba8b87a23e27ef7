//! Router configuration handed from the composition root to the UI layer.

use crate::mode::HistoryMode;
use crate::route::{RouteEntry, RouteId};
use crate::table::RouteTable;
use std::sync::Arc;
use tracing::debug;

/// The route table paired with the history mode it is served in.
///
/// Built once by the application entry point and passed down explicitly.
/// Cloning is cheap; the table is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    mode: HistoryMode,
    table: Arc<RouteTable>,
}

impl RouterConfig {
    /// Creates a configuration for the application route table.
    #[must_use]
    pub fn new(mode: HistoryMode) -> Self {
        Self::with_table(mode, RouteTable::build())
    }

    /// Creates a configuration for a specific route table.
    #[must_use]
    pub fn with_table(mode: HistoryMode, table: RouteTable) -> Self {
        Self {
            mode,
            table: Arc::new(table),
        }
    }

    /// Returns the history mode.
    #[must_use]
    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// Returns the route table.
    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Returns the link target for a route in this mode.
    #[must_use]
    pub fn href(&self, id: RouteId) -> Option<String> {
        self.table.by_id(id).map(|entry| self.entry_href(entry))
    }

    /// Returns the link target for a route name in this mode.
    #[must_use]
    pub fn href_by_name(&self, name: &str) -> Option<String> {
        self.table.by_name(name).map(|entry| self.entry_href(entry))
    }

    /// Returns the link target for a table entry in this mode.
    #[must_use]
    pub fn entry_href(&self, entry: &RouteEntry) -> String {
        let path = entry.path().as_str();
        match self.mode {
            HistoryMode::Hash => format!("/#{path}"),
            HistoryMode::History => path.to_string(),
        }
    }

    /// Extracts the route path from the browser location.
    ///
    /// In hash mode the path is the fragment with its leading `#` removed;
    /// an empty fragment addresses `/`. In history mode it is the pathname.
    #[must_use]
    pub fn route_path<'a>(&self, pathname: &'a str, hash: &'a str) -> &'a str {
        match self.mode {
            HistoryMode::Hash => {
                let fragment = hash.strip_prefix('#').unwrap_or(hash);
                if fragment.is_empty() { "/" } else { fragment }
            }
            HistoryMode::History => pathname,
        }
    }

    /// Resolves the browser location to a declared route.
    #[must_use]
    pub fn resolve_location(&self, pathname: &str, hash: &str) -> Option<&RouteEntry> {
        let path = self.route_path(pathname, hash);
        let entry = self.table.resolve(path);
        if entry.is_none() {
            debug!(path, mode = %self.mode, "no route matched");
        }
        entry
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new(HistoryMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_hash_mode_and_built_table() {
        let config = RouterConfig::default();
        assert_eq!(config.mode(), HistoryMode::Hash);
        assert_eq!(config.table(), &RouteTable::build());
    }

    #[test]
    fn construction_is_deterministic() {
        assert_eq!(
            RouterConfig::new(HistoryMode::History),
            RouterConfig::new(HistoryMode::History)
        );
        assert_ne!(
            RouterConfig::new(HistoryMode::History),
            RouterConfig::new(HistoryMode::Hash)
        );
    }

    #[test]
    fn href_in_hash_mode_uses_fragment() {
        let config = RouterConfig::new(HistoryMode::Hash);
        assert_eq!(config.href(RouteId::Hello).as_deref(), Some("/#/"));
        assert_eq!(config.href(RouteId::About).as_deref(), Some("/#/about"));
    }

    #[test]
    fn href_in_history_mode_uses_path() {
        let config = RouterConfig::new(HistoryMode::History);
        assert_eq!(config.href(RouteId::Hello).as_deref(), Some("/"));
        assert_eq!(config.href_by_name("About").as_deref(), Some("/about"));
        assert!(config.href_by_name("Contact").is_none());
    }

    #[test]
    fn hash_mode_reads_fragment() {
        let config = RouterConfig::new(HistoryMode::Hash);
        assert_eq!(config.route_path("/", "#/about"), "/about");
        assert_eq!(config.route_path("/", "/about"), "/about");
        assert_eq!(config.route_path("/ignored", ""), "/");
        assert_eq!(config.route_path("/", "#"), "/");
    }

    #[test]
    fn history_mode_reads_pathname() {
        let config = RouterConfig::new(HistoryMode::History);
        assert_eq!(config.route_path("/about", "#section"), "/about");
    }

    #[test]
    fn resolve_location_per_mode() {
        let hash = RouterConfig::new(HistoryMode::Hash);
        assert_eq!(
            hash.resolve_location("/", "#/about").map(RouteEntry::id),
            Some(RouteId::About)
        );
        assert_eq!(
            hash.resolve_location("/about", "").map(RouteEntry::id),
            Some(RouteId::Hello)
        );

        let history = RouterConfig::new(HistoryMode::History);
        assert_eq!(
            history.resolve_location("/about", "").map(RouteEntry::id),
            Some(RouteId::About)
        );
        assert!(history.resolve_location("/missing", "").is_none());
    }

    #[test]
    fn clones_share_the_table() {
        let config = RouterConfig::default();
        let clone = config.clone();
        assert!(std::ptr::eq(config.table(), clone.table()));
    }
}
