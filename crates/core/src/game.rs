//! Game module - the selection/match/resolve state machine.
//!
//! All mutation flows through [`Game::select_card`], [`Game::resolve_mismatch`],
//! and [`Game::restart`]. The caller drives these from a single event stream,
//! so the engine needs no locking; the `Resolving` phase alone rejects input
//! during the mismatch display window.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::snapshot::{BoardSnapshot, CellSnapshot};
use crate::types::{GridPos, Symbol, GRID_SIZE};

/// Where the turn currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No cards selected.
    Idle,
    /// One card revealed, awaiting the second.
    OneSelected,
    /// A mismatched pair is displayed; input is rejected until the caller
    /// fires [`Game::resolve_mismatch`].
    Resolving,
    /// All pairs found. Terminal.
    Won,
}

/// Proof that a mismatch is pending resolution.
///
/// Stamped with the game epoch at mismatch time: a token outlives its game
/// (restart, theme change) silently stops resolving anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipToken {
    epoch: u32,
}

/// What a `select_card` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The click was ignored: matched cell, repeated cell, mid-resolve, or
    /// the game is already won. Never changes state or counters.
    NoOp,
    /// First card of a turn revealed.
    FirstRevealed,
    /// Second card revealed and it paired with the first.
    Matched { won: bool },
    /// Second card revealed and it did not pair. Schedule
    /// [`Game::resolve_mismatch`] with the token after `MISMATCH_HIDE_MS`.
    Mismatched { token: FlipToken },
}

/// Result of a `select_card` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub outcome: SelectOutcome,
    /// Positions whose rendered state changed (revealed faces or freshly
    /// set matched flags). Empty on a no-op.
    pub changed: ArrayVec<GridPos, 2>,
    /// Attempt counter after this call.
    pub attempts: u32,
    pub won: bool,
}

/// Complete game state: board, selection, counters, phase.
///
/// Replaced wholesale on restart; nothing carries over between games except
/// the RNG stream (so consecutive deals differ) and the epoch counter.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    selection: ArrayVec<GridPos, 2>,
    attempts: u32,
    phase: Phase,
    epoch: u32,
    rng: SimpleRng,
}

impl Game {
    /// Create a game with a freshly dealt board from the given seed.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::deal(&mut rng);
        Self {
            board,
            selection: ArrayVec::new(),
            attempts: 0,
            phase: Phase::Idle,
            epoch: 0,
            rng,
        }
    }

    /// Create a game over an explicit layout, for deterministic tests and
    /// demos. A subsequent [`Game::restart`] deals randomly as usual.
    pub fn from_rows(rows: [[Symbol; GRID_SIZE as usize]; GRID_SIZE as usize]) -> Self {
        let mut game = Self::new(1);
        game.board = Board::from_rows(rows);
        game
    }

    /// Discard the current game and deal a fresh board.
    ///
    /// Bumps the epoch, so any [`FlipToken`] handed out before the restart
    /// can no longer mutate state.
    pub fn restart(&mut self) {
        self.board = Board::deal(&mut self.rng);
        self.selection.clear();
        self.attempts = 0;
        self.phase = Phase::Idle;
        self.epoch = self.epoch.wrapping_add(1);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// True while a mismatched pair is displayed awaiting resolution.
    pub fn checking(&self) -> bool {
        self.phase == Phase::Resolving
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Handle a click on the cell at `pos`.
    ///
    /// Panics if `pos` is off the grid (caller bug). Every in-range click
    /// that the rules reject is a silent no-op: clicking a matched cell,
    /// re-clicking the selected cell, clicking during `Resolving`, or
    /// clicking after the game is won.
    pub fn select_card(&mut self, pos: GridPos) -> SelectionResult {
        assert!(pos.in_bounds(), "select_card off the grid: {:?}", pos);

        match self.phase {
            Phase::Resolving | Phase::Won => return self.no_op(),
            Phase::Idle | Phase::OneSelected => {}
        }

        if self.board.get(pos).matched() {
            return self.no_op();
        }

        match self.selection.len() {
            0 => {
                self.selection.push(pos);
                self.phase = Phase::OneSelected;
                let mut changed = ArrayVec::new();
                changed.push(pos);
                SelectionResult {
                    outcome: SelectOutcome::FirstRevealed,
                    changed,
                    attempts: self.attempts,
                    won: false,
                }
            }
            1 => {
                let first = self.selection[0];
                if first == pos {
                    return self.no_op();
                }

                self.selection.push(pos);
                // One completed comparison, match or not.
                self.attempts += 1;

                if self.board.get(first).symbol() == self.board.get(pos).symbol() {
                    self.board.set_matched(first);
                    self.board.set_matched(pos);
                    self.selection.clear();

                    let won = self.board.all_matched();
                    self.phase = if won { Phase::Won } else { Phase::Idle };

                    let mut changed = ArrayVec::new();
                    changed.push(first);
                    changed.push(pos);
                    SelectionResult {
                        outcome: SelectOutcome::Matched { won },
                        changed,
                        attempts: self.attempts,
                        won,
                    }
                } else {
                    self.phase = Phase::Resolving;
                    let mut changed = ArrayVec::new();
                    changed.push(pos);
                    SelectionResult {
                        outcome: SelectOutcome::Mismatched {
                            token: FlipToken { epoch: self.epoch },
                        },
                        changed,
                        attempts: self.attempts,
                        won: false,
                    }
                }
            }
            // Two selections only exist in Resolving, handled above.
            _ => unreachable!("selection cannot exceed one card outside Resolving"),
        }
    }

    /// Flip a mismatched pair back face-down.
    ///
    /// Invoked by the caller's scheduler after the display delay. Returns
    /// the positions that turned face-down, or `None` if the token is stale
    /// (the game restarted, or resolution already happened).
    pub fn resolve_mismatch(&mut self, token: FlipToken) -> Option<[GridPos; 2]> {
        if self.phase != Phase::Resolving || token.epoch != self.epoch {
            return None;
        }

        let hidden = [self.selection[0], self.selection[1]];
        self.selection.clear();
        self.phase = Phase::Idle;
        Some(hidden)
    }

    /// Observable state for renderers: faces for matched and selected
    /// cells, face-down everywhere else.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::default();
        for (idx, cell) in self.board.cells().iter().enumerate() {
            let pos = GridPos::from_index(idx);
            let revealed = cell.matched() || self.selection.contains(&pos);
            snap.cells[idx] = CellSnapshot {
                face: revealed.then(|| cell.symbol()),
                matched: cell.matched(),
            };
        }
        snap.attempts = self.attempts;
        snap.checking = self.checking();
        snap.won = self.won();
        snap
    }

    fn no_op(&self) -> SelectionResult {
        SelectionResult {
            outcome: SelectOutcome::NoOp,
            changed: ArrayVec::new(),
            attempts: self.attempts,
            won: self.won(),
        }
    }
}
