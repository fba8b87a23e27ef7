//! Page components for the application.
//!
//! Each page is a Leptos component rendered by exactly one route.

pub mod about;
pub mod hello;

pub use about::AboutPage;
pub use hello::HelloPage;
