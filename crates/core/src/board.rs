//! Board module - manages the card grid
//!
//! The board is a 4x4 grid where each cell holds a dealt symbol and a
//! matched flag. Uses a flat array for cheap copies and zero allocation.
//! Coordinates: (row, col), both ranging 0..3, row-major storage.

use crate::rng::{deal, SimpleRng};
use crate::types::{GridPos, Symbol, CELL_COUNT, GRID_SIZE};

/// One grid position: the symbol it hides and whether its pair was found.
/// The symbol is immutable once dealt; `matched` is terminal once set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    symbol: Symbol,
    matched: bool,
}

impl Cell {
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn matched(&self) -> bool {
        self.matched
    }
}

/// The card grid - 4x4 cells in a flat row-major array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Deal a new all-face-down board from the given RNG stream.
    pub fn deal(rng: &mut SimpleRng) -> Self {
        Self::from_symbols(deal(rng))
    }

    /// Build a board from an explicit row-major symbol layout.
    ///
    /// The layout must contain each symbol exactly twice; this is asserted
    /// because an unpaired board can never be won.
    pub fn from_symbols(symbols: [Symbol; CELL_COUNT]) -> Self {
        let mut counts = [0usize; Symbol::ALL.len()];
        for symbol in symbols {
            counts[symbol.index()] += 1;
        }
        assert!(
            counts.iter().all(|&n| n == 2),
            "board layout must contain every symbol exactly twice"
        );

        let cells = symbols.map(|symbol| Cell {
            symbol,
            matched: false,
        });
        Self { cells }
    }

    /// Build a board from rows, for deterministic layouts in tests/demos.
    pub fn from_rows(rows: [[Symbol; GRID_SIZE as usize]; GRID_SIZE as usize]) -> Self {
        let mut flat = [Symbol::A; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            for (c, &symbol) in row.iter().enumerate() {
                flat[r * GRID_SIZE as usize + c] = symbol;
            }
        }
        Self::from_symbols(flat)
    }

    /// Get the cell at a position. Panics on out-of-grid positions: that is
    /// a caller bug, not a game-state condition.
    pub fn get(&self, pos: GridPos) -> Cell {
        assert!(pos.in_bounds(), "position off the grid: {:?}", pos);
        self.cells[pos.index()]
    }

    /// Mark the cell at `pos` as matched. Matched is terminal: there is no
    /// way to unset it within a game.
    pub fn set_matched(&mut self, pos: GridPos) {
        assert!(pos.in_bounds(), "position off the grid: {:?}", pos);
        self.cells[pos.index()].matched = true;
    }

    /// Win predicate: true iff every cell is matched.
    pub fn all_matched(&self) -> bool {
        self.cells.iter().all(|cell| cell.matched)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
