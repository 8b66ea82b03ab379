//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Command`]s. There is no
//! key-repeat logic here: the terminal's own auto-repeat produces repeated
//! presses, and each press is one discrete command.

pub mod map;

pub use blockfall_types as types;

pub use map::{command_for_key, should_quit};
