//! Project settings dialog state.
//!
//! Toolkit-independent state and actions behind the dialog:
//! - Settings (profile, project folder, tracks, thumbnails, proxies)
//! - Files (categorised inventory, unused clip removal, export)
//! - Cache (thumbnail cache size and clearing)
//!
//! A front end feeds widget edits to [`SettingsSession::handle`] as
//! [`SettingsMsg`] values and calls the session's actions from its buttons.
//! Destructive steps ask through [`Confirm`].

mod messages;
mod model;
mod session;

pub use messages::{AcceptOutcome, Confirm, Prompt, SettingsEffect, SettingsMsg};
pub use model::SettingsModel;
pub use session::SettingsSession;
