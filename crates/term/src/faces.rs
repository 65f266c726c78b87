//! Card face providers - the pluggable asset strategy.
//!
//! The original desktop game shipped five image themes and fell back to
//! drawing the raw letter when an image was missing. In a terminal the
//! "assets" are glyph-and-color pairs; the fallback behavior is the same
//! and lives entirely here, never in the engine.

use crate::fb::Rgb;
use crate::types::{Symbol, Theme};

/// Maps symbols to what a revealed card shows.
///
/// Implementations are stateless; the view queries one per frame.
pub trait CardFaces {
    fn name(&self) -> &'static str;

    /// Themed glyph for a symbol, or `None` to fall back to the letter.
    fn glyph(&self, symbol: Symbol) -> Option<char>;

    /// Face color for a symbol.
    fn color(&self, symbol: Symbol) -> Rgb;

    /// Card-back glyph and color for face-down cells.
    fn back(&self) -> (char, Rgb);
}

/// Minimal front-end: plain letters, no art at all.
pub struct LetterFaces;

impl CardFaces for LetterFaces {
    fn name(&self) -> &'static str {
        Theme::Letters.name()
    }

    fn glyph(&self, _symbol: Symbol) -> Option<char> {
        None
    }

    fn color(&self, symbol: Symbol) -> Rgb {
        // A fixed hue per symbol so pairs read at a glance.
        PALETTE[symbol.index()]
    }

    fn back(&self) -> (char, Rgb) {
        ('░', Rgb::new(110, 110, 125))
    }
}

/// Themed front-end: per-theme glyph set and card back.
pub struct ThemedFaces {
    theme: Theme,
}

impl ThemedFaces {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl CardFaces for ThemedFaces {
    fn name(&self) -> &'static str {
        self.theme.name()
    }

    fn glyph(&self, symbol: Symbol) -> Option<char> {
        let set: &[char; 8] = match self.theme {
            Theme::Letters => return None,
            Theme::Fruits => &['♥', '●', '◆', '✿', '★', '♠', '▲', '☘'],
            Theme::Garden => &['✿', '❀', '☘', '♣', '✤', '✱', '⚘', '♠'],
            Theme::EasterEgg => &['◯', '◉', '●', '◐', '◑', '◒', '◓', '◍'],
            Theme::Toys => &['■', '▲', '●', '◆', '★', '♦', '♪', '♫'],
            Theme::Vehicles => &['►', '◄', '▲', '▼', '◆', '■', '●', '★'],
        };
        Some(set[symbol.index()])
    }

    fn color(&self, symbol: Symbol) -> Rgb {
        PALETTE[symbol.index()]
    }

    fn back(&self) -> (char, Rgb) {
        match self.theme {
            Theme::Letters => LetterFaces.back(),
            Theme::Fruits => ('▒', Rgb::new(200, 120, 80)),
            Theme::Garden => ('▒', Rgb::new(100, 180, 100)),
            Theme::EasterEgg => ('▒', Rgb::new(200, 160, 210)),
            Theme::Toys => ('▒', Rgb::new(220, 190, 90)),
            Theme::Vehicles => ('▒', Rgb::new(120, 150, 210)),
        }
    }
}

/// Construct the face provider for a theme.
pub fn faces_for(theme: Theme) -> Box<dyn CardFaces> {
    match theme {
        Theme::Letters => Box::new(LetterFaces),
        other => Box::new(ThemedFaces::new(other)),
    }
}

/// One distinct hue per symbol, shared across themes.
const PALETTE: [Rgb; 8] = [
    Rgb::new(220, 80, 80),
    Rgb::new(255, 165, 0),
    Rgb::new(240, 220, 80),
    Rgb::new(100, 220, 120),
    Rgb::new(80, 220, 220),
    Rgb::new(80, 120, 220),
    Rgb::new(200, 120, 220),
    Rgb::new(220, 150, 170),
];
