use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Board, GameState};
use blockfall::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
            if state.game_over() {
                state.apply_action(GameAction::Restart);
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            state.move_right();
            state.move_left();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });
}

criterion_group!(benches, bench_tick, bench_line_clear, bench_move, bench_rotate);
criterion_main!(benches);
