//! Shared types for the memory match game.
//!
//! This crate contains pure data types and constants with no external
//! dependencies, usable in any context (core logic, UI rendering, tests).

/// Board dimensions: the grid is GRID_SIZE x GRID_SIZE.
pub const GRID_SIZE: u8 = 4;

/// Number of distinct symbols; each appears exactly twice on the board.
pub const PAIR_COUNT: usize = 8;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// How long a mismatched pair stays revealed before flipping back (ms).
pub const MISMATCH_HIDE_MS: u64 = 1000;

/// Card symbols. Eight distinct values, dealt in pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Symbol {
    /// All symbols, in declaration order.
    pub const ALL: [Symbol; PAIR_COUNT] = [
        Symbol::A,
        Symbol::B,
        Symbol::C,
        Symbol::D,
        Symbol::E,
        Symbol::F,
        Symbol::G,
        Symbol::H,
    ];

    /// The letter shown when no themed art is available.
    pub fn as_char(&self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::B => 'B',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::E => 'E',
            Symbol::F => 'F',
            Symbol::G => 'G',
            Symbol::H => 'H',
        }
    }

    /// Index into [`Symbol::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Symbol::A => 0,
            Symbol::B => 1,
            Symbol::C => 2,
            Symbol::D => 3,
            Symbol::E => 4,
            Symbol::F => 5,
            Symbol::G => 6,
            Symbol::H => 7,
        }
    }
}

/// A position on the grid. `row` and `col` range over `0..GRID_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub row: u8,
    pub col: u8,
}

impl GridPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether this position lies on the grid.
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Flat row-major index. Caller must ensure the position is in bounds.
    pub fn index(&self) -> usize {
        (self.row as usize) * (GRID_SIZE as usize) + (self.col as usize)
    }

    /// Inverse of [`GridPos::index`].
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / GRID_SIZE as usize) as u8,
            col: (idx % GRID_SIZE as usize) as u8,
        }
    }
}

/// Player actions, produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Flip the card under the cursor.
    Flip,
    /// Discard the current game and deal a fresh board.
    Restart,
    /// Switch to the next card theme (also deals a fresh board).
    NextTheme,
}

/// Card art themes. `Letters` is the minimal front-end; the others map
/// symbols to themed glyphs in the term crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Letters,
    Fruits,
    Garden,
    EasterEgg,
    Toys,
    Vehicles,
}

impl Theme {
    /// Display name for the status panel.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Letters => "Letters",
            Theme::Fruits => "Fruits",
            Theme::Garden => "Garden",
            Theme::EasterEgg => "Easter Egg",
            Theme::Toys => "Toys",
            Theme::Vehicles => "Vehicles",
        }
    }

    /// Next theme in the cycle (wraps around).
    pub fn next(&self) -> Self {
        match self {
            Theme::Letters => Theme::Fruits,
            Theme::Fruits => Theme::Garden,
            Theme::Garden => Theme::EasterEgg,
            Theme::EasterEgg => Theme::Toys,
            Theme::Toys => Theme::Vehicles,
            Theme::Vehicles => Theme::Letters,
        }
    }
}
