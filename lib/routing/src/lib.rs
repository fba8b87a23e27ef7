//! Route table for the signpost front-end.
//!
//! This crate provides:
//!
//! - **Route Table**: the ordered, immutable list of declared routes
//! - **History Mode**: how the current route is encoded in the browser URL
//! - **Router Config**: the table paired with its mode, built once by the
//!   composition root and handed to the UI layer

pub mod config;
pub mod error;
pub mod mode;
pub mod route;
pub mod table;

pub use config::RouterConfig;
pub use error::{RouteTableError, UnknownHistoryMode};
pub use mode::HistoryMode;
pub use route::{RouteEntry, RouteId};
pub use table::RouteTable;
