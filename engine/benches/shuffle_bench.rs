use criterion::{Criterion, criterion_group, criterion_main};
use puzzle_engine::{
    GameSession, GameSettings, LevelId, SessionRng, attempt_move, save::save_to_bytes, shuffle,
};

fn bench_generate_level() {
    let mut rng = SessionRng::from_random();
    shuffle::generate(3, 50, 100, &mut rng);
}

fn bench_move_storm() {
    let mut rng = SessionRng::from_random();
    let mut board = shuffle::generate(3, 50, 100, &mut rng);

    for _ in 0..1000 {
        let neighbors = board.blank_neighbors();
        if let Some(&target) = rng.pick(&neighbors) {
            attempt_move(&mut board, target);
        }
    }
}

fn bench_session_playout_with_saves() {
    let mut session = GameSession::new(&GameSettings::default(), SessionRng::from_random());
    session.new_level(LevelId::Random);

    for _ in 0..50 {
        let target = session.board().blank_neighbors()[0];
        session.request_move(target);
        session.take_events();
        let _ = save_to_bytes(&session.snapshot());
    }
}

fn shuffle_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    group.bench_function("generate_level", |b| b.iter(bench_generate_level));

    group.bench_function("move_storm", |b| b.iter(bench_move_storm));

    group.bench_function("session_playout_with_saves", |b| {
        b.iter(bench_session_playout_with_saves)
    });

    group.finish();
}

criterion_group!(benches, shuffle_bench);
criterion_main!(benches);
