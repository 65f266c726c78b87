//! GameView: maps a `core::BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::BoardSnapshot;
use crate::faces::CardFaces;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GridPos, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the card grid.
pub struct GameView {
    /// Card width in terminal columns.
    card_w: u16,
    /// Card height in terminal rows.
    card_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps cards roughly square under typical glyph aspect ratio.
        Self {
            card_w: 7,
            card_h: 3,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self { card_w, card_h }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// `cursor` is the cell the player would flip next; `faces` supplies
    /// the active theme's glyphs and colors.
    pub fn render_into(
        &self,
        snap: &BoardSnapshot,
        cursor: GridPos,
        faces: &dyn CardFaces,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid_px_w = (GRID_SIZE as u16) * self.card_w;
        let grid_px_h = (GRID_SIZE as u16) * self.card_h;
        let frame_w = grid_px_w + 2;
        let frame_h = grid_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 3) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let pos = GridPos::new(row, col);
                self.draw_card(fb, snap, pos, pos == cursor, faces, start_x, start_y);
            }
        }

        // Status lines under the grid.
        let status_y = start_y + frame_h;
        let status = CellStyle::default();
        let mut line = String::with_capacity(frame_w as usize);
        line.push_str("Tries: ");
        line.push_str(&snap.attempts.to_string());
        line.push_str("   Theme: ");
        line.push_str(faces.name());
        fb.put_str(start_x, status_y, &line, status);

        let help = CellStyle {
            fg: Rgb::new(140, 140, 140),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };
        fb.put_str(
            start_x,
            status_y + 1,
            "[space] flip  [r] restart  [t] theme  [q] quit",
            help,
        );

        if snap.won {
            let banner = format!(" You matched all pairs in {} tries! ", snap.attempts);
            let bx = viewport.width.saturating_sub(banner.len() as u16) / 2;
            let by = start_y + frame_h / 2;
            let style = CellStyle {
                fg: Rgb::new(0, 0, 0),
                bg: Rgb::new(240, 220, 80),
                bold: true,
                dim: false,
            };
            fb.put_str(bx, by, &banner, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &BoardSnapshot,
        cursor: GridPos,
        faces: &dyn CardFaces,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, faces, viewport, &mut fb);
        fb
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        pos: GridPos,
        under_cursor: bool,
        faces: &dyn CardFaces,
        start_x: u16,
        start_y: u16,
    ) {
        let x = start_x + 1 + (pos.col as u16) * self.card_w;
        let y = start_y + 1 + (pos.row as u16) * self.card_h;

        let cell = snap.get(pos);
        let bg = if under_cursor {
            Rgb::new(60, 60, 95)
        } else {
            Rgb::new(25, 25, 35)
        };

        match cell.face {
            None => {
                let (back_ch, back_fg) = faces.back();
                let style = CellStyle {
                    fg: back_fg,
                    bg,
                    bold: false,
                    dim: !under_cursor,
                };
                fb.fill_rect(x, y, self.card_w, self.card_h, back_ch, style);
            }
            Some(symbol) => {
                let face_style = CellStyle {
                    fg: faces.color(symbol),
                    bg,
                    bold: !cell.matched,
                    dim: cell.matched,
                };
                fb.fill_rect(x, y, self.card_w, self.card_h, ' ', face_style);

                // Themed glyph, or the raw letter when the theme has none.
                let glyph = faces.glyph(symbol).unwrap_or_else(|| symbol.as_char());
                let gx = x + self.card_w / 2;
                let gy = y + self.card_h / 2;
                fb.put_char(gx, gy, glyph, face_style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}
