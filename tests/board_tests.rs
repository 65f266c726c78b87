//! Board tests - deal distribution and matched-flag bookkeeping.

use memory_match::core::{deal, Board, SimpleRng};
use memory_match::types::{GridPos, Symbol, CELL_COUNT, PAIR_COUNT};

fn paired_layout() -> [[Symbol; 4]; 4] {
    [
        [Symbol::A, Symbol::B, Symbol::C, Symbol::D],
        [Symbol::A, Symbol::B, Symbol::C, Symbol::D],
        [Symbol::E, Symbol::F, Symbol::G, Symbol::H],
        [Symbol::E, Symbol::F, Symbol::G, Symbol::H],
    ]
}

#[test]
fn test_deal_is_a_pair_multiset() {
    // Every deal: exactly 8 distinct symbols, each exactly twice.
    for seed in [1u32, 7, 12345, 0xDEAD_BEEF] {
        let mut rng = SimpleRng::new(seed);
        let board = Board::deal(&mut rng);

        let mut counts = [0usize; PAIR_COUNT];
        for cell in board.cells() {
            counts[cell.symbol().index()] += 1;
        }
        assert_eq!(counts, [2; PAIR_COUNT], "seed {}", seed);
    }
}

#[test]
fn test_deals_from_one_stream_differ() {
    let mut rng = SimpleRng::new(99);
    let first = deal(&mut rng);
    let second = deal(&mut rng);
    assert_ne!(first, second);
}

#[test]
fn test_from_rows_places_row_major() {
    let board = Board::from_rows(paired_layout());
    assert_eq!(board.get(GridPos::new(0, 3)).symbol(), Symbol::D);
    assert_eq!(board.get(GridPos::new(2, 0)).symbol(), Symbol::E);
    assert_eq!(board.get(GridPos::new(3, 2)).symbol(), Symbol::G);
}

#[test]
fn test_all_matched_requires_every_cell() {
    let mut board = Board::from_rows(paired_layout());

    for idx in 0..CELL_COUNT - 1 {
        board.set_matched(GridPos::from_index(idx));
        assert!(!board.all_matched());
    }
    board.set_matched(GridPos::from_index(CELL_COUNT - 1));
    assert!(board.all_matched());
}

#[test]
fn test_matched_flag_never_clears() {
    let mut board = Board::from_rows(paired_layout());
    let pos = GridPos::new(1, 2);
    board.set_matched(pos);

    // Marking other cells does not disturb it.
    board.set_matched(GridPos::new(3, 3));
    assert!(board.get(pos).matched());
}

#[test]
#[should_panic(expected = "off the grid")]
fn test_out_of_grid_access_is_loud() {
    let board = Board::from_rows(paired_layout());
    let _ = board.get(GridPos::new(0, 4));
}
