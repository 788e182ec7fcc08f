//! Board integration tests: occupancy and row clearing through the public API.

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(!board.is_occupied(x, y), "cell ({x}, {y}) should be empty");
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();

    assert!(!board.is_row_full(5));

    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 5, Some(PieceKind::T));
    }
    assert!(board.is_row_full(5));

    // One gap keeps a row from being full.
    for x in 0..BOARD_WIDTH - 1 {
        board.set(x as i8, 6, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(6));

    // Out-of-range rows are never full.
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_clear_single_full_row() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 19, Some(PieceKind::O));
    }
    board.set(0, 18, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 1);
    assert_eq!(cleared[0], 19);

    // The row above dropped into the cleared row; the top row is empty.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(0, 18), Some(None));
    for x in 0..BOARD_WIDTH as i8 {
        assert_eq!(board.get(x, 0), Some(None));
    }
}

#[test]
fn test_clear_two_adjacent_rows() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 18, Some(PieceKind::I));
        board.set(x as i8, 19, Some(PieceKind::O));
    }
    board.set(0, 17, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);
    assert!(cleared.contains(&18));
    assert!(cleared.contains(&19));

    // The marker dropped by two rows.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(0, 17), Some(None));
}

#[test]
fn test_clear_scattered_rows_shift_independently() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 5, Some(PieceKind::T));
        board.set(x as i8, 10, Some(PieceKind::I));
        board.set(x as i8, 15, Some(PieceKind::O));
    }
    board.set(0, 4, Some(PieceKind::J)); // above all three
    board.set(0, 9, Some(PieceKind::L)); // above two
    board.set(0, 14, Some(PieceKind::S)); // above one

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 3);

    // Each marker drops by the number of cleared rows below it.
    assert_eq!(board.get(0, 7), Some(Some(PieceKind::J)));
    assert_eq!(board.get(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 15), Some(Some(PieceKind::S)));
}

#[test]
fn test_clear_more_than_four_rows_at_once() {
    let mut board = Board::new();

    // More full rows than one lock can produce; the board API allows it.
    for y in 15..20 {
        for x in 0..BOARD_WIDTH {
            board.set(x as i8, y, Some(PieceKind::I));
        }
    }
    board.set(0, 14, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 5);

    // The marker dropped by five rows; nothing else remains.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_clear_completely_full_board() {
    let mut board = Board::new();

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(PieceKind::O));
        }
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), BOARD_HEIGHT as usize);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_full_top_row_is_cleared_too() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 0, Some(PieceKind::Z));
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[0]);
    for x in 0..BOARD_WIDTH as i8 {
        assert_eq!(board.get(x, 0), Some(None));
    }
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 5, Some(PieceKind::T));
    }
    board.clear();

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}
