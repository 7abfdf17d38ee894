//! Game loop rotation tests.
//!
//! Verify who rolls next after each outcome, with wraparound, for
//! 1-8 players under both same-player policies.

use snakes_ladders::{
    Board, EngineConfig, EngineError, GameBuilder, GameConfig, MoveOutcome, NoMovePolicy,
    OverflowPolicy, PlayerId, ScriptedDice, StartedPolicy,
};

fn dice(rolls: &[u8]) -> ScriptedDice {
    ScriptedDice::new(rolls.to_vec()).unwrap()
}

/// Test the default policies: a start re-rolls, an advance rotates.
#[test]
fn test_default_rotation_n_players() {
    for n in 1..=8usize {
        let mut game = GameBuilder::new()
            .player_count(n)
            .board(Board::plain(1_000).unwrap())
            .build(dice(&[6]))
            .unwrap();

        // Each player: Started then Advanced, in roster order.
        for i in 0..n {
            let expected = PlayerId::new(i as u8);

            let start = game.play_turn().unwrap();
            assert_eq!(start.player, expected);
            assert_eq!(start.outcome, Some(MoveOutcome::Started));
            assert_eq!(start.next, expected);

            let advance = game.play_turn().unwrap();
            assert_eq!(advance.player, expected);
            assert_eq!(advance.outcome, Some(MoveOutcome::Advanced));
            assert_eq!(advance.next, PlayerId::new(((i + 1) % n) as u8));
        }

        // Wraparound: one advance each, twice round.
        for i in 0..2 * n {
            let report = game.play_turn().unwrap();
            assert_eq!(report.player, PlayerId::new((i % n) as u8));
            assert_eq!(report.outcome, Some(MoveOutcome::Advanced));
        }
    }
}

/// Test a failed start re-rolls for the same player by default.
#[test]
fn test_no_move_rolls_again() {
    let mut game = GameBuilder::new()
        .player_count(3)
        .build(dice(&[1, 2, 3, 6, 4]))
        .unwrap();

    let players: Vec<_> = (0..5).map(|_| game.play_turn().unwrap().player).collect();
    assert_eq!(players, vec![PlayerId::new(0); 5]);
    assert_eq!(game.current_player().id(), PlayerId::new(1));
    assert_eq!(game.position_of(PlayerId::new(0)), 4);
}

/// Test both end-turn policies rotate after every roll.
#[test]
fn test_end_turn_policies() {
    let config = GameConfig::default()
        .with_started_policy(StartedPolicy::EndTurn)
        .with_no_move_policy(NoMovePolicy::EndTurn);

    for n in 1..=8usize {
        let mut game = GameBuilder::new()
            .player_count(n)
            .config(config.clone())
            .build(dice(&[2, 6]))
            .unwrap();

        for i in 0..3 * n {
            let report = game.play_turn().unwrap();
            assert_eq!(report.player, PlayerId::new((i % n) as u8));
            assert_eq!(report.next, PlayerId::new(((i + 1) % n) as u8));
        }
    }
}

/// Test a forfeited overshoot passes play on.
#[test]
fn test_overshoot_rotates() {
    let mut game = GameBuilder::new()
        .player_count(3)
        .board(Board::plain(7).unwrap())
        .engine_config(EngineConfig::default().with_overflow(OverflowPolicy::ExactLanding))
        .build(dice(&[6, 5, 6, 6, 6, 5, 3]))
        .unwrap();

    // P0: start, 5. P1: start, 6. P2: start, 5. Back to P0 at 5 rolling 3.
    for _ in 0..6 {
        game.play_turn().unwrap();
    }
    let report = game.play_turn().unwrap();
    assert_eq!(report.player, PlayerId::new(0));
    assert_eq!(report.outcome, None);
    assert_eq!(report.next, PlayerId::new(1));

    // P1 at 6 rolls 6: also overshoots.
    let report = game.play_turn().unwrap();
    assert_eq!(report.outcome, None);
    assert_eq!(report.next, PlayerId::new(2));
}

/// Test the game stops at the first winner.
#[test]
fn test_first_winner_ends_game() {
    let mut game = GameBuilder::new()
        .player_count(4)
        .board(Board::plain(6).unwrap())
        .build(dice(&[6]))
        .unwrap();

    let summary = game.run().unwrap();
    assert_eq!(summary.winner, Some(PlayerId::new(0)));
    assert_eq!(summary.rolls, 2);
    assert!(game.is_over());
    assert_eq!(game.play_turn(), Err(EngineError::InvalidState("game is already over")));
}

/// Test seeded games are reproducible end to end.
#[test]
fn test_seeded_games_reproducible() {
    let play = |seed| {
        GameBuilder::new()
            .player_count(4)
            .build_seeded(seed)
            .unwrap()
            .run()
            .unwrap()
    };

    for seed in [1, 7, 42, 1234] {
        let a = play(seed);
        let b = play(seed);
        assert_eq!(a, b);
        assert!(a.winner.is_some());
    }
}
