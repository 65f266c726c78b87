//! Engine integration tests - full state-machine scenarios.

use memory_match::core::{Game, Phase, SelectOutcome};
use memory_match::types::{GridPos, Symbol};

fn layout() -> [[Symbol; 4]; 4] {
    [
        [Symbol::A, Symbol::B, Symbol::C, Symbol::D],
        [Symbol::A, Symbol::B, Symbol::C, Symbol::D],
        [Symbol::E, Symbol::F, Symbol::G, Symbol::H],
        [Symbol::E, Symbol::F, Symbol::G, Symbol::H],
    ]
}

fn expect_mismatch(game: &mut Game, pos: GridPos) -> memory_match::core::FlipToken {
    match game.select_card(pos).outcome {
        SelectOutcome::Mismatched { token } => token,
        other => panic!("expected mismatch at {:?}, got {:?}", pos, other),
    }
}

#[test]
fn scenario_match_then_mismatch_then_timeout() {
    let mut game = Game::from_rows(layout());

    // Select (0,0) then (1,0): both A -> match, attempts=1.
    game.select_card(GridPos::new(0, 0));
    let result = game.select_card(GridPos::new(1, 0));
    assert_eq!(result.outcome, SelectOutcome::Matched { won: false });
    assert_eq!(result.attempts, 1);
    assert!(game.board().get(GridPos::new(0, 0)).matched());
    assert!(game.board().get(GridPos::new(1, 0)).matched());

    // Select (0,1)=B then (2,0)=E: mismatch, attempts=2, both revealed.
    game.select_card(GridPos::new(0, 1));
    let token = expect_mismatch(&mut game, GridPos::new(2, 0));
    assert_eq!(game.attempts(), 2);

    let snap = game.snapshot();
    assert_eq!(snap.get(GridPos::new(0, 1)).face, Some(Symbol::B));
    assert_eq!(snap.get(GridPos::new(2, 0)).face, Some(Symbol::E));
    assert!(snap.checking);

    // After the timeout both flip face-down; the matched pair is untouched.
    let hidden = game.resolve_mismatch(token).expect("pending mismatch");
    assert_eq!(hidden, [GridPos::new(0, 1), GridPos::new(2, 0)]);

    let snap = game.snapshot();
    assert_eq!(snap.get(GridPos::new(0, 1)).face, None);
    assert_eq!(snap.get(GridPos::new(2, 0)).face, None);
    assert_eq!(snap.get(GridPos::new(0, 0)).face, Some(Symbol::A));
    assert!(!snap.checking);
}

#[test]
fn scenario_perfect_game_wins_in_eight_attempts() {
    let mut game = Game::from_rows(layout());

    for (top, bottom) in [(0u8, 1u8), (2, 3)] {
        for col in 0..4u8 {
            game.select_card(GridPos::new(top, col));
            game.select_card(GridPos::new(bottom, col));
        }
    }

    let snap = game.snapshot();
    assert!(snap.won);
    assert_eq!(snap.attempts, 8);
    assert!(snap.cells.iter().all(|cell| cell.matched));
}

#[test]
fn scenario_mismatches_also_count_toward_attempts() {
    let mut game = Game::from_rows(layout());

    // Two mismatches before clearing the board.
    for _ in 0..2 {
        game.select_card(GridPos::new(0, 0));
        let token = expect_mismatch(&mut game, GridPos::new(0, 1));
        game.resolve_mismatch(token).unwrap();
    }

    for (top, bottom) in [(0u8, 1u8), (2, 3)] {
        for col in 0..4u8 {
            game.select_card(GridPos::new(top, col));
            game.select_card(GridPos::new(bottom, col));
        }
    }

    assert!(game.won());
    assert_eq!(game.attempts(), 10);
}

#[test]
fn no_op_clicks_never_touch_state() {
    let mut game = Game::from_rows(layout());

    // Repeat click on the selected cell.
    game.select_card(GridPos::new(0, 0));
    assert_eq!(
        game.select_card(GridPos::new(0, 0)).outcome,
        SelectOutcome::NoOp
    );

    // Click during Resolving.
    let token = expect_mismatch(&mut game, GridPos::new(0, 1));
    assert_eq!(
        game.select_card(GridPos::new(3, 3)).outcome,
        SelectOutcome::NoOp
    );
    assert_eq!(game.attempts(), 1);
    game.resolve_mismatch(token).unwrap();

    // Click on a matched cell.
    game.select_card(GridPos::new(0, 0));
    game.select_card(GridPos::new(1, 0));
    assert_eq!(
        game.select_card(GridPos::new(1, 0)).outcome,
        SelectOutcome::NoOp
    );
    assert_eq!(game.attempts(), 2);
}

#[test]
fn restart_mid_resolving_defuses_stale_timeout() {
    let mut game = Game::from_rows(layout());

    game.select_card(GridPos::new(0, 0));
    let stale = expect_mismatch(&mut game, GridPos::new(0, 1));

    // Restart before the timeout fires.
    game.restart();
    assert_eq!(game.phase(), Phase::Idle);

    // Reveal a card in the new game, then let the stale timeout arrive.
    game.select_card(GridPos::new(2, 2));
    assert_eq!(game.resolve_mismatch(stale), None);

    // The new game's selection survived untouched.
    assert_eq!(game.phase(), Phase::OneSelected);
    assert_eq!(game.snapshot().revealed_count(), 1);
}

#[test]
fn won_game_ignores_all_input() {
    let mut game = Game::from_rows(layout());
    for (top, bottom) in [(0u8, 1u8), (2, 3)] {
        for col in 0..4u8 {
            game.select_card(GridPos::new(top, col));
            game.select_card(GridPos::new(bottom, col));
        }
    }
    assert!(game.won());

    for idx in 0..16 {
        let result = game.select_card(GridPos::from_index(idx));
        assert_eq!(result.outcome, SelectOutcome::NoOp);
        assert!(result.won);
    }
    assert_eq!(game.attempts(), 8);
}

#[test]
fn consecutive_games_deal_different_boards() {
    let mut game = Game::new(2024);
    let mut layouts = Vec::new();
    for _ in 0..3 {
        layouts.push(
            game.board()
                .cells()
                .iter()
                .map(|c| c.symbol())
                .collect::<Vec<_>>(),
        );
        game.restart();
    }
    assert_ne!(layouts[0], layouts[1]);
    assert_ne!(layouts[1], layouts[2]);
}
