//! Core module - pure game logic.
//!
//! This module contains all the game rules and state management.
//! It has zero dependencies on UI or I/O.

pub mod board;
pub mod game;
pub mod pieces;
pub mod rng;

// Re-export commonly used types
pub use board::Board;
pub use game::{GameState, Piece};
pub use pieces::{kick_offset, rotation_count, shape, SPAWN_POSITION};
pub use rng::SimpleRng;
