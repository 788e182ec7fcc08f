//! Game state module - ties together board, pieces, RNG and scoring.
//!
//! All mutable game state (board, active piece, score, game-over flag) lives
//! in one `GameState` owned by the drive loop. Gravity is driven by
//! `tick(elapsed_ms)` with injected elapsed time, so tests never need real
//! delays.

use arrayvec::ArrayVec;

use crate::core::pieces::PieceShape;
use crate::core::{kick_offset, rotation_count, shape, Board, SimpleRng, SPAWN_POSITION};
use crate::types::{
    GameAction, GameEvent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MS, SCORE_PER_ROW,
};

/// Active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Cyclic index into the kind's rotation-state table.
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a new piece at the spawn anchor, above the visible grid.
    pub fn new(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            rotation: 0,
            x,
            y,
        }
    }

    /// Cell offsets for the current rotation state.
    pub fn shape(&self) -> PieceShape {
        shape(self.kind, self.rotation)
    }
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    score: u32,
    game_over: bool,
    /// Elapsed time since the last gravity drop.
    drop_timer_ms: u32,
    rng: SimpleRng,
    /// Pending events for the presentation layer, drained each frame.
    events: ArrayVec<GameEvent, 8>,
}

impl GameState {
    /// Create a new game with the given RNG seed and spawn the first piece.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let first = Piece::new(rng.next_kind());

        Self {
            board: Board::new(),
            active: Some(first),
            score: 0,
            game_over: false,
            drop_timer_ms: 0,
            rng,
            events: ArrayVec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }

    /// Take all pending events.
    pub fn drain_events(&mut self) -> ArrayVec<GameEvent, 8> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: GameEvent) {
        // Dropping an event under pathological backlog is harmless; the view
        // re-reads the full state every frame.
        let _ = self.events.try_push(event);
    }

    /// Check whether `cells`, offset by (dx, dy) from the active anchor,
    /// collides with a wall, the floor, or the locked stack.
    ///
    /// Cells above the top of the grid (y < 0) are ignored: a piece entering
    /// from above may move and rotate freely while partially hidden.
    fn collides(&self, dx: i8, dy: i8, cells: PieceShape) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        for (cx, cy) in cells {
            let x = active.x + cx + dx;
            let y = active.y + cy + dy;

            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return true;
            }
            if y < 0 {
                continue;
            }
            if self.board.is_occupied(x, y) {
                return true;
            }
        }
        false
    }

    /// Shift the active piece one column left if collision-free.
    pub fn move_left(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if self.collides(-1, 0, active.shape()) {
            return false;
        }
        self.active = Some(Piece {
            x: active.x - 1,
            ..active
        });
        true
    }

    /// Shift the active piece one column right if collision-free.
    pub fn move_right(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if self.collides(1, 0, active.shape()) {
            return false;
        }
        self.active = Some(Piece {
            x: active.x + 1,
            ..active
        });
        true
    }

    /// Advance the active piece one row, or lock it if it cannot move.
    ///
    /// Locking clears full rows, updates the score, and spawns the next
    /// piece (or ends the game). Returns true if the piece moved.
    pub fn step_down(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self.collides(0, 1, active.shape()) {
            self.lock();
            return false;
        }

        self.active = Some(Piece {
            y: active.y + 1,
            ..active
        });
        true
    }

    /// Rotate the active piece to its next state, with a one-cell kick.
    ///
    /// If the rotated shape collides in place, a single horizontal kick away
    /// from the nearer wall is tried; the rotation applies only if the
    /// kicked position is collision-free. Otherwise nothing changes.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let next_rotation = (active.rotation + 1) % rotation_count(active.kind);
        let next_shape = shape(active.kind, next_rotation);

        let kick = if self.collides(0, 0, next_shape) {
            kick_offset(active.x)
        } else {
            0
        };

        if self.collides(kick, 0, next_shape) {
            return false;
        }

        self.active = Some(Piece {
            rotation: next_rotation,
            x: active.x + kick,
            ..active
        });
        true
    }

    /// Lock the active piece into the board.
    ///
    /// Cells above the visible grid cannot be stored; any such cell means the
    /// stack has outgrown the board and the game is over. Visible cells are
    /// written, full rows cleared and scored, and the next piece spawned
    /// unless the game ended.
    fn lock(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        for (cx, cy) in active.shape() {
            let x = active.x + cx;
            let y = active.y + cy;
            if y < 0 {
                self.game_over = true;
                continue;
            }
            self.board.set(x, y, Some(active.kind));
        }

        let rows_cleared = self.board.clear_full_rows().len() as u32;
        let score_delta = rows_cleared * SCORE_PER_ROW;
        self.score += score_delta;

        self.emit(GameEvent::PieceLocked {
            rows_cleared,
            score_delta,
        });

        if self.game_over {
            self.emit(GameEvent::GameOver);
        } else {
            self.active = Some(Piece::new(self.rng.next_kind()));
        }
    }

    /// Advance timers by `elapsed_ms`; drop the piece one row whenever the
    /// accumulated time reaches the drop interval. Returns true if gravity
    /// acted this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < DROP_INTERVAL_MS {
            return false;
        }

        self.drop_timer_ms = 0;
        self.step_down();
        true
    }

    /// Apply a player command.
    ///
    /// Left, right and rotate reset the gravity reference point so a manual
    /// action is not followed by an immediate extra drop. A soft drop is
    /// itself a drop and leaves the timer alone.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over && action != GameAction::Restart {
            return false;
        }

        match action {
            GameAction::MoveLeft => {
                let moved = self.move_left();
                self.drop_timer_ms = 0;
                moved
            }
            GameAction::MoveRight => {
                let moved = self.move_right();
                self.drop_timer_ms = 0;
                moved
            }
            GameAction::Rotate => {
                let rotated = self.rotate();
                self.drop_timer_ms = 0;
                rotated
            }
            GameAction::SoftDrop => self.step_down(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Reinitialize the whole game, continuing the RNG stream.
    pub fn restart(&mut self) {
        let seed = self.rng.state();
        *self = Self::new(seed);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
