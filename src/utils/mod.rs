//! Shared utility modules.

pub mod date;
pub mod html;
pub mod mime;
pub mod path;
pub mod plural;
