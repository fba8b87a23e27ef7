//! Browser history modes.

use crate::error::UnknownHistoryMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the current route is carried in the browser URL.
///
/// `Hash` works with any static file server. `History` produces clean URLs
/// but the server must answer every route path with the application shell,
/// otherwise reloading a deep link returns a 404.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Route path lives in the URL fragment, e.g. `/#/about`.
    #[default]
    Hash,
    /// Route path is the URL pathname, e.g. `/about`.
    History,
}

impl HistoryMode {
    /// Returns the configuration name of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::History => "history",
        }
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryMode {
    type Err = UnknownHistoryMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hash" => Ok(Self::Hash),
            "history" => Ok(Self::History),
            _ => Err(UnknownHistoryMode {
                value: s.to_string(),
            }),
        }
    }
}
