use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snakes_ladders::{Game, GameConfig, RandomDice};

fn bench_classic_game(c: &mut Criterion) {
    let config = GameConfig::classic();

    c.bench_function("classic_full_game", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut game = Game::from_config(&config).unwrap();
            let result = game
                .run(&mut RandomDice::new(seed), &mut std::io::sink())
                .unwrap();
            black_box(result)
        })
    });
}

criterion_group!(benches, bench_classic_game);
criterion_main!(benches);
