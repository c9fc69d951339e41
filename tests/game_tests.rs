//! End-to-end games with scripted and seeded dice.

use snakes_ladders::{
    Game, GameConfig, GameError, PlayerId, RandomDice, ScriptedDice, Transition,
};

// =============================================================================
// Scripted Scenarios
// =============================================================================

#[test]
fn test_ladder_overshoot_snake_sequence() {
    let mut game = Game::new(10);
    game.add_player("Solo");
    game.add_snake(9, 3);
    game.add_ladder(2, 8);

    let mut dice = ScriptedDice::new([2, 5, 1]);

    let first = game.play_turn(&mut dice).unwrap();
    assert_eq!(first.to, 8);
    assert_eq!(first.transition, Some(Transition::Ladder { start: 2, end: 8 }));

    let second = game.play_turn(&mut dice).unwrap();
    assert!(second.overshoot);
    assert_eq!(second.to, 8);
    assert_eq!(second.to_string(), "Solo rolled 5 and moved to 8");

    let third = game.play_turn(&mut dice).unwrap();
    assert_eq!(third.to, 3);
    assert_eq!(third.transition, Some(Transition::Snake { start: 9, end: 3 }));

    assert!(!game.is_game_over());
    assert_eq!(game.current_player_index(), 0);
}

#[test]
fn test_constant_sixes_stall_below_the_end() {
    let config = GameConfig::new(100)
        .with_player("Alice")
        .with_player("Bob")
        .with_max_turns(60);
    let mut game = Game::from_config(&config).unwrap();

    let mut out = Vec::new();
    let err = game.run(&mut ScriptedDice::constant(6), &mut out);

    assert!(matches!(err, Err(GameError::TurnLimitReached { turns: 60 })));
    // 16 sixes put each player on 96; every roll after that overshoots
    for player in game.players() {
        assert_eq!(player.position(), 96);
    }
    assert!(game.winner().is_none());
}

#[test]
fn test_sixes_then_exact_four_wins() {
    let mut game = Game::new(100);
    game.add_player("Alice");
    game.add_player("Bob");

    // 32 sixes: both on 96. Two more sixes: both stall. Then Alice rolls 4.
    let mut faces = vec![6; 34];
    faces.push(4);
    let mut dice = ScriptedDice::new(faces);

    let mut records = Vec::new();
    while !game.is_game_over() {
        records.push(game.play_turn(&mut dice).unwrap());
    }

    assert_eq!(records.len(), 35);
    for (i, record) in records.iter().enumerate().take(32) {
        assert_eq!(record.to, 6 * (i as u32 / 2 + 1));
    }
    assert!(records[32].overshoot && records[33].overshoot);
    assert_eq!(records[32].to, 96);
    assert_eq!(records[33].to, 96);

    let last = records.last().unwrap();
    assert!(last.won);
    assert_eq!(last.player, PlayerId::new(0));
    assert_eq!(game.winner().unwrap().name(), "Alice");
    assert_eq!(game.player(PlayerId::new(1)).unwrap().position(), 96);
    assert_eq!(game.current_player_index(), 0);
}

#[test]
fn test_duplicate_snake_last_insert_wins() {
    let mut game = Game::new(30);
    game.add_player("Solo");
    game.add_snake(12, 2);
    game.add_snake(12, 7);

    let record = game.play_turn(&mut ScriptedDice::new([6, 6])).unwrap();
    assert_eq!(record.to, 6);
    let record = game.play_turn(&mut ScriptedDice::new([6])).unwrap();
    assert_eq!(record.to, 7);
}

#[test]
fn test_three_player_rotation() {
    let mut game = Game::new(50);
    for name in ["Ann", "Ben", "Cat"] {
        game.add_player(name);
    }

    let mut dice = ScriptedDice::new([1, 2, 3]);
    let order: Vec<_> = (0..7)
        .map(|_| game.play_turn(&mut dice).unwrap().name)
        .collect();

    assert_eq!(order, vec!["Ann", "Ben", "Cat", "Ann", "Ben", "Cat", "Ann"]);
    let positions: Vec<_> = game.players().iter().map(|p| p.position()).collect();
    assert_eq!(positions, vec![3, 4, 6]);
}

// =============================================================================
// Classic Layout
// =============================================================================

#[test]
fn test_classic_game_finishes() {
    let mut game = Game::from_config(&GameConfig::classic()).unwrap();
    let mut out = Vec::new();
    let result = game.run(&mut RandomDice::new(7), &mut out).unwrap();

    let winner = game.player(result.winner).unwrap();
    assert_eq!(winner.position(), 100);
    assert_eq!(winner.name(), result.name);
    for player in game.players() {
        if player.name() != result.name {
            assert!(player.position() < 100);
        }
    }

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "Game started!");
    assert_eq!(lines.len() as u64, result.turns + 3);
    assert_eq!(lines[lines.len() - 2], "");
    assert_eq!(lines[lines.len() - 1], format!("{} wins the game!", result.name));
    assert!(lines[1..=result.turns as usize]
        .iter()
        .all(|line| line.contains(" rolled ") && line.contains(" and moved to ")));
}

#[test]
fn test_classic_game_replays_from_seed() {
    let play = |seed| {
        let mut game = Game::from_config(&GameConfig::classic()).unwrap();
        let mut out = Vec::new();
        game.run(&mut RandomDice::new(seed), &mut out).unwrap();
        out
    };

    assert_eq!(play(1234), play(1234));
}

#[test]
fn test_resume_dice_mid_game() {
    let mut game = Game::from_config(&GameConfig::classic()).unwrap();
    let mut dice = RandomDice::new(99);
    for _ in 0..10 {
        if game.is_game_over() {
            break;
        }
        game.play_turn(&mut dice).unwrap();
    }

    let mut branch = game.clone();
    let mut resumed = RandomDice::from_state(&dice.state());

    let a = game.run(&mut dice, &mut std::io::sink()).unwrap();
    let b = branch.run(&mut resumed, &mut std::io::sink()).unwrap();
    assert_eq!(a, b);
}
