//! Pieces module - tetromino shapes and rotation states.
//!
//! Each kind carries a small table of rotation states derived from square
//! bitmaps: S, Z and I have two states, O has one, T, J and L have four.
//! A state is stored as the four (dx, dy) offsets of its occupied cells
//! relative to the piece's top-left anchor. Rotation walks the table
//! cyclically.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Offset of a single cell relative to the piece anchor.
pub type CellOffset = (i8, i8);

/// One rotation state - 4 cell offsets from the piece anchor.
pub type PieceShape = [CellOffset; 4];

/// Spawn anchor for new pieces (x, y).
///
/// The y is negative: pieces enter the board from above the visible grid.
pub const SPAWN_POSITION: (i8, i8) = (3, -2);

const I_STATES: [PieceShape; 2] = [
    // horizontal, on bitmap row 1
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    // vertical, on bitmap column 2
    [(2, 0), (2, 1), (2, 2), (2, 3)],
];

const O_STATES: [PieceShape; 1] = [[(1, 1), (2, 1), (1, 2), (2, 2)]];

const T_STATES: [PieceShape; 4] = [
    [(0, 0), (1, 0), (2, 0), (1, 1)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
];

const S_STATES: [PieceShape; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

const Z_STATES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

const J_STATES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_STATES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

fn states(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Number of rotation states for a kind.
pub fn rotation_count(kind: PieceKind) -> u8 {
    states(kind).len() as u8
}

/// Get the shape for a kind and rotation index.
///
/// The index is taken modulo the kind's state count, so callers can pass a
/// cyclically incremented value directly.
pub fn shape(kind: PieceKind, rotation: u8) -> PieceShape {
    let table = states(kind);
    table[(rotation as usize) % table.len()]
}

/// Horizontal kick to try when a rotation collides in place.
///
/// One cell, away from the nearer wall: anchors right of board center kick
/// left, everything else kicks right.
pub fn kick_offset(anchor_x: i8) -> i8 {
    if anchor_x > (BOARD_WIDTH / 2) as i8 {
        -1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_has_four_cells_in_bitmap_bounds() {
        for kind in PieceKind::ALL {
            for rotation in 0..rotation_count(kind) {
                let cells = shape(kind, rotation);
                assert_eq!(cells.len(), 4);
                for (dx, dy) in cells {
                    assert!((0..4).contains(&dx), "{kind:?} r{rotation} dx={dx}");
                    assert!((0..4).contains(&dy), "{kind:?} r{rotation} dy={dy}");
                }
            }
        }
    }

    #[test]
    fn test_rotation_index_wraps() {
        for kind in PieceKind::ALL {
            let n = rotation_count(kind);
            assert_eq!(shape(kind, 0), shape(kind, n));
            assert_eq!(shape(kind, 1), shape(kind, n + 1));
        }
    }

    #[test]
    fn test_state_counts_match_bitmap_tables() {
        assert_eq!(rotation_count(PieceKind::O), 1);
        assert_eq!(rotation_count(PieceKind::I), 2);
        assert_eq!(rotation_count(PieceKind::S), 2);
        assert_eq!(rotation_count(PieceKind::Z), 2);
        assert_eq!(rotation_count(PieceKind::T), 4);
        assert_eq!(rotation_count(PieceKind::J), 4);
        assert_eq!(rotation_count(PieceKind::L), 4);
    }

    #[test]
    fn test_kick_direction_depends_on_board_center() {
        assert_eq!(kick_offset(8), -1);
        assert_eq!(kick_offset(6), -1);
        assert_eq!(kick_offset(5), 1);
        assert_eq!(kick_offset(0), 1);
    }
}
