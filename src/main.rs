//! Terminal runner for blockfall.
//!
//! One timing mechanism drives the whole game: the loop polls for input with
//! a timeout until the next fixed tick, then feeds the elapsed time into
//! `GameState::tick`, which applies gravity whenever the drop interval has
//! accumulated. Gravity stops once the game is over; the loop keeps
//! rendering and still accepts restart and quit.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameEvent, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(seed_from_clock());
    let view = GameView::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render after every state change; once per iteration is enough.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }

        for event in game.drain_events() {
            match event {
                GameEvent::PieceLocked { rows_cleared, .. } if rows_cleared > 0 => {
                    // The stack shifted wholesale; a full redraw avoids
                    // leftover diff artifacts on slow terminals.
                    term.invalidate();
                }
                GameEvent::PieceLocked { .. } => {}
                GameEvent::GameOver => term.invalidate(),
            }
        }
    }
}

fn seed_from_clock() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
