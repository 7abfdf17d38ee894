use criterion::{black_box, criterion_group, criterion_main, Criterion};

use snakes_ladders::board::presets;
use snakes_ladders::{EngineConfig, GameBuilder, Player, PlayerId, RuleChain, TurnEngine};

fn bench_execute_move(c: &mut Criterion) {
    let board = presets::with_coins().unwrap();
    let engine = TurnEngine::new(board, RuleChain::with_coins(), EngineConfig::default()).unwrap();
    let mut player = Player::new(PlayerId::new(0), "bench");
    let mut started = engine.clone();
    started.execute_move(6, &mut player).unwrap();

    c.bench_function("execute_move_advance", |b| {
        b.iter_batched(
            || (started.clone(), player.clone()),
            |(mut engine, mut player)| engine.execute_move(black_box(4), &mut player),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_4_players", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut game = GameBuilder::new()
                .player_count(4)
                .board(presets::with_coins().unwrap())
                .rules(RuleChain::with_coins())
                .build_seeded(black_box(seed))
                .unwrap();
            game.run().unwrap()
        })
    });
}

fn bench_engine_snapshot(c: &mut Criterion) {
    let mut game = GameBuilder::new().player_count(4).build_seeded(7).unwrap();
    for _ in 0..200 {
        if game.is_over() {
            break;
        }
        game.play_turn().unwrap();
    }
    let engine = game.engine().clone();

    c.bench_function("engine_clone_mid_game", |b| b.iter(|| black_box(&engine).clone()));
}

criterion_group!(benches, bench_execute_move, bench_full_game, bench_engine_snapshot);
criterion_main!(benches);
