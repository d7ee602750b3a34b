//! Data models for clipinv.
//!
//! - Enums for clip types and display categories
//! - Clip records read from the project

mod clip;
mod enums;

pub use clip::{Clip, ClipId, XML_DATA_PROPERTY};
pub use enums::{ClipType, FileCategory};
