//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It renders into a simple framebuffer that can be flushed to a terminal
//! backend, keeping the view logic pure and unit-testable.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw the card grid with pluggable face providers (themes)
//! - Own the one real piece of scheduling: the mismatch flip-back timer

pub mod faces;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod timer;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use faces::{faces_for, CardFaces, LetterFaces, ThemedFaces};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use timer::MismatchTimer;
