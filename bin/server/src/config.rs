//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables.

use serde::Deserialize;
use signpost_routing::{HistoryMode, RouterConfig};

/// Server configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ServerConfig {
    /// Client-side routing configuration.
    #[serde(default)]
    pub router: RouterSettings,
}

/// Router-related configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouterSettings {
    /// How routes are carried in the browser URL (`hash` or `history`).
    /// History mode needs every route path to be served the app shell,
    /// which this server does; other hosts may not.
    #[serde(default)]
    pub mode: HistoryMode,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// `ROUTER__MODE=history` selects history mode.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is present but invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Builds the router configuration handed to the application.
    #[must_use]
    pub fn router_config(&self) -> RouterConfig {
        RouterConfig::new(self.router.mode)
    }
}
