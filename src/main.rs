//! Terminal memory match runner (default binary).
//!
//! Drives the board engine from a single crossterm event stream: key
//! presses move the cursor and flip cards, and the mismatch timer is the
//! one scheduled callback, bounded by the input poll timeout.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use memory_match::core::{Game, SelectOutcome};
use memory_match::input::{handle_key_event, should_quit};
use memory_match::term::{faces_for, GameView, MismatchTimer, TerminalRenderer, Viewport};
use memory_match::types::{GameAction, GridPos, Theme, GRID_SIZE};

/// Poll timeout while no flip-back is pending.
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(time_seed());
    let mut theme = Theme::Letters;
    let mut faces = faces_for(theme);
    let mut cursor = GridPos::new(0, 0);
    let mut timer = MismatchTimer::new();
    let view = GameView::default();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), cursor, faces.as_ref(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Fire the flip-back if its deadline passed while we were busy.
        let now = Instant::now();
        if let Some(token) = timer.fire_due(now) {
            game.resolve_mismatch(token);
            continue;
        }

        // Input, bounded so a pending flip-back fires on time.
        let timeout = timer
            .time_until_due(now)
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }

                let Some(action) = handle_key_event(key) else {
                    continue;
                };

                match action {
                    GameAction::CursorUp => cursor.row = cursor.row.saturating_sub(1),
                    GameAction::CursorDown => cursor.row = (cursor.row + 1).min(GRID_SIZE - 1),
                    GameAction::CursorLeft => cursor.col = cursor.col.saturating_sub(1),
                    GameAction::CursorRight => cursor.col = (cursor.col + 1).min(GRID_SIZE - 1),
                    GameAction::Flip => {
                        if let SelectOutcome::Mismatched { token } =
                            game.select_card(cursor).outcome
                        {
                            timer.arm(Instant::now(), token);
                        }
                    }
                    GameAction::Restart => {
                        timer.cancel();
                        game.restart();
                    }
                    GameAction::NextTheme => {
                        // Theme change deals a fresh board, like the restart.
                        timer.cancel();
                        theme = theme.next();
                        faces = faces_for(theme);
                        game.restart();
                    }
                }
            }
        }
    }
}

/// Seed the first deal from wall-clock time; restarts reuse the engine's
/// own RNG stream.
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
