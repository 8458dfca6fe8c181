//! Full round lifecycle tests for the 3-door game.

use monty_hall::{DoorContent, DoorGame, GameError, MontyHallGame, OptionId, Phase};

/// The canonical scripted round: winner behind door 2, player on door 1.
/// The host has exactly one legal door to open.
#[test]
fn test_forced_reveal_scenario() {
    let mut game = DoorGame::with_winning(123, OptionId::new(2)).unwrap();
    game.select(OptionId::new(1)).unwrap();
    assert_eq!(game.choice(), Some(OptionId::new(1)));

    let opened = game.reveal_door().unwrap();
    assert_eq!(opened, OptionId::new(3));
    assert_eq!(game.phase(), Phase::Deciding);

    assert_eq!(game.remaining_door().unwrap(), OptionId::new(2));

    game.switch_choice().unwrap();
    assert_eq!(game.phase(), Phase::Resolved);
    assert!(game.check_victory());
}

/// When the player starts on the winner, the host picks between two goats
/// and keeping wins while switching loses.
#[test]
fn test_player_on_winner_switching_loses() {
    for seed in 0..50 {
        let mut game = DoorGame::with_winning(seed, OptionId::new(1)).unwrap();
        game.select(OptionId::new(1)).unwrap();

        let opened = game.reveal_door().unwrap();
        assert!(opened == OptionId::new(2) || opened == OptionId::new(3));

        let final_choice = game.switch_choice().unwrap();
        assert_ne!(final_choice, OptionId::new(1));
        assert!(!game.check_victory());
    }
}

#[test]
fn test_phase_guards_cover_whole_lifecycle() {
    let mut game = DoorGame::new(42);

    // Nothing but select works while selecting
    assert_eq!(game.reveal_door(), Err(GameError::NoSelection));
    assert!(matches!(
        game.switch_choice(),
        Err(GameError::OutOfPhase { .. })
    ));

    game.select(OptionId::new(2)).unwrap();
    assert_eq!(
        game.select(OptionId::new(3)),
        Err(GameError::AlreadySelected)
    );

    game.reveal_door().unwrap();
    // Reveal is once per round
    assert!(matches!(game.reveal_door(), Err(GameError::OutOfPhase { .. })));

    game.keep_choice().unwrap();
    // Resolved round accepts no further decisions
    assert!(matches!(
        game.switch_choice(),
        Err(GameError::OutOfPhase { .. })
    ));
    assert!(matches!(
        game.select(OptionId::new(1)),
        Err(GameError::OutOfPhase { .. })
    ));
}

#[test]
fn test_victory_agrees_with_door_content() {
    for seed in 0..100 {
        let mut game = DoorGame::new(seed);
        game.select(OptionId::new(2)).unwrap();
        game.reveal_door().unwrap();
        let final_choice = game.switch_choice().unwrap();

        let content = game.door_content(final_choice).unwrap();
        assert_eq!(game.check_victory(), content == DoorContent::Car);
    }
}

#[test]
fn test_exactly_one_car() {
    let game = DoorGame::new(42);
    let cars = OptionId::all(3)
        .filter(|&d| game.door_content(d).unwrap() == DoorContent::Car)
        .count();
    assert_eq!(cars, 1);
}

#[test]
fn test_reset_allows_indefinite_replay() {
    let mut game = DoorGame::new(42);

    for round in 0..20u8 {
        let pick = OptionId::new(round % 3 + 1);
        game.select(pick).unwrap();
        let opened = game.reveal_door().unwrap();

        assert_ne!(opened, pick);
        assert_ne!(opened, game.winning_option());

        game.switch_choice().unwrap();
        game.reset();
        assert_eq!(game.choice(), None);
        assert!(game.revealed().is_empty());
    }
}

#[test]
fn test_same_seed_replays_identically() {
    let play = |seed: u64| {
        let mut game = DoorGame::new(seed);
        let mut outcomes = Vec::new();
        for round in 0..50u8 {
            game.select(OptionId::new(round % 3 + 1)).unwrap();
            let opened = game.reveal_door().unwrap();
            game.switch_choice().unwrap();
            outcomes.push((opened, game.check_victory()));
            game.reset();
        }
        outcomes
    };

    assert_eq!(play(7), play(7));
}
