//! blockfall: a falling-block puzzle game for the terminal.
//!
//! The crate is split the same way the binary uses it: `core` holds the pure
//! game logic (board, pieces, gravity, scoring), `input` maps key events to
//! game actions, and `term` renders the game state into a terminal.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
