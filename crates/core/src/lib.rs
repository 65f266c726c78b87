//! Board engine - pure, deterministic, and testable
//!
//! This crate contains the complete memory-match game logic. It has **zero
//! dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: same seed deals the same board
//! - **Testable**: every transition can be driven from a unit test
//! - **Portable**: can run under any front-end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid of symbol cells with matched flags
//! - [`game`]: the selection/match/resolve state machine
//! - [`rng`]: seeded shuffling and the pair deal
//! - [`snapshot`]: the render contract handed to front-ends
//!
//! # Game Rules
//!
//! Eight symbols are dealt twice each onto a face-down 4x4 grid. Flipping
//! two cards with the same symbol locks them face-up; flipping two different
//! cards leaves them revealed until the caller's scheduler fires the
//! mismatch resolution, which turns them face-down again. Every completed
//! two-card comparison counts as one attempt. The game is won when all
//! sixteen cells are matched.
//!
//! # Example
//!
//! ```
//! use memory_match_core::{Game, SelectOutcome};
//! use memory_match_types::GridPos;
//!
//! let mut game = Game::new(12345);
//! let result = game.select_card(GridPos::new(0, 0));
//! assert_eq!(result.outcome, SelectOutcome::FirstRevealed);
//! assert_eq!(result.attempts, 0); // attempts count completed comparisons
//! ```
//!
//! # Timing
//!
//! The engine never owns a clock. A mismatch returns a [`game::FlipToken`];
//! the caller schedules [`Game::resolve_mismatch`] after
//! `MISMATCH_HIDE_MS` (1000 ms). Restarting invalidates outstanding tokens,
//! so a stale timer can never touch a new game.

pub mod board;
pub mod game;
pub mod rng;
pub mod snapshot;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use game::{FlipToken, Game, Phase, SelectOutcome, SelectionResult};
pub use rng::{deal, SimpleRng};
pub use snapshot::{BoardSnapshot, CellSnapshot};
