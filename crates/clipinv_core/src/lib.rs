//! clipinv core - project settings and media inventory logic.
//!
//! This crate contains all business logic with zero UI dependencies.
//! It can be driven by a settings dialog in the editor or by the `clipinv`
//! command line tool.

pub mod cache;
pub mod config;
pub mod dialog;
pub mod inventory;
pub mod logging;
pub mod models;
pub mod profile;
pub mod project;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
