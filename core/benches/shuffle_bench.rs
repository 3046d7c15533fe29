use criterion::{criterion_group, criterion_main, Criterion};
use thinktank_core::games::sliding_puzzle::{Board, SlidingPuzzleGameState};
use thinktank_core::games::SessionRng;

fn bench_shuffle_3x3(c: &mut Criterion) {
    c.bench_function("shuffle_3x3", |b| {
        let mut rng = SessionRng::new(42);
        b.iter(|| Board::shuffled(3, &mut rng));
    });
}

fn bench_shuffle_6x6(c: &mut Criterion) {
    c.bench_function("shuffle_6x6", |b| {
        let mut rng = SessionRng::new(42);
        b.iter(|| Board::shuffled(6, &mut rng));
    });
}

fn bench_random_walk_500_moves(c: &mut Criterion) {
    c.bench_function("random_walk_500_moves_4x4", |b| {
        b.iter(|| {
            let mut rng = SessionRng::new(7);
            let mut state = SlidingPuzzleGameState::new(4, &mut rng).unwrap();
            for _ in 0..500 {
                let position = rng.random_range(0..16);
                state.attempt_move(position);
            }
            state.moves_made()
        });
    });
}

criterion_group!(
    benches,
    bench_shuffle_3x3,
    bench_shuffle_6x6,
    bench_random_walk_500_moves
);
criterion_main!(benches);
