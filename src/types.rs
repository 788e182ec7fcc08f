//! Core types shared across the application.
//! This module contains pure data types with no external dependencies.

/// Board dimensions.
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Game timing constants (in milliseconds).
pub const TICK_MS: u32 = 16;
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Points awarded per cleared row.
pub const SCORE_PER_ROW: u32 = 10;

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in a fixed order usable as a lookup index.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Cell on the board (None = empty, Some = filled with piece kind).
///
/// The kind is what the view maps to a concrete color.
pub type Cell = Option<PieceKind>;

/// Player commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Restart,
}

/// Events emitted by the core for the presentation layer.
///
/// Replaces any blocking notification: the loop drains these each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece locked into the board.
    PieceLocked { rows_cleared: u32, score_delta: u32 },
    /// A locked piece had cells above the visible grid; the game is over.
    GameOver,
}
