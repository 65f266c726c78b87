//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] values; the
//! cursor and game state live with the caller.

pub mod map;

pub use memory_match_types as types;

pub use map::{handle_key_event, should_quit};
