//! Core types and utilities for the signpost front-end.
//!
//! This crate provides the strongly-typed route path and the error handling
//! foundation shared by the routing and server crates.

pub mod error;
pub mod path;

pub use error::Result;
pub use path::{InvalidRoutePath, RoutePath};
