//! Render contract handed to front-ends.
//!
//! A snapshot is plain `Copy` data: sixteen card faces plus the game-level
//! counters. Renderers never see the board itself, so a face-down cell's
//! symbol cannot leak into a UI layer by accident.

use crate::types::{GridPos, Symbol, CELL_COUNT};

/// One rendered cell: `face` is `None` while the card is face-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSnapshot {
    pub face: Option<Symbol>,
    pub matched: bool,
}

/// Observable game state, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub cells: [CellSnapshot; CELL_COUNT],
    /// Completed two-card comparisons so far.
    pub attempts: u32,
    /// True while a mismatched pair is displayed awaiting the flip-back.
    pub checking: bool,
    pub won: bool,
}

impl BoardSnapshot {
    pub fn get(&self, pos: GridPos) -> CellSnapshot {
        assert!(pos.in_bounds(), "position off the grid: {:?}", pos);
        self.cells[pos.index()]
    }

    pub fn clear(&mut self) {
        self.cells = [CellSnapshot::default(); CELL_COUNT];
        self.attempts = 0;
        self.checking = false;
        self.won = false;
    }

    /// Count of cells currently showing a face (matched or selected).
    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.face.is_some()).count()
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        let mut s = Self {
            cells: [CellSnapshot::default(); CELL_COUNT],
            attempts: 0,
            checking: false,
            won: false,
        };
        s.clear();
        s
    }
}
