use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameSnapshot, GameState};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{Color, Command};

fn bench_game_loop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("process_game_loop_16ms", |b| {
        b.iter(|| {
            state.process_game_loop(black_box(0.016));
            state.drain_events().for_each(drop);
        })
    });
}

fn bench_clear_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 15..19 {
                board.fill_row(y, Some(Color::BlueLight));
            }
            black_box(board.clear_rows());
        })
    });
}

fn bench_drop_and_respawn(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("drop_and_respawn", |b| {
        b.iter(|| {
            state.apply_command(Command::Drop);
            state.process_game_loop(0.0);
            state.drain_events().for_each(drop);
        })
    });
}

fn bench_attempt_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("attempt_move", |b| {
        b.iter(|| {
            state.attempt_move(black_box(1), 0);
            state.attempt_move(black_box(-1), 0);
        })
    });
}

fn bench_attempt_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("attempt_rotate", |b| {
        b.iter(|| {
            state.attempt_rotate();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render_80x24", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
            black_box(fb.get(0, 0));
        })
    });
}

criterion_group!(
    benches,
    bench_game_loop,
    bench_clear_rows,
    bench_drop_and_respawn,
    bench_attempt_move,
    bench_attempt_rotate,
    bench_render
);
criterion_main!(benches);
