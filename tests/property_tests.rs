//! Property tests over arbitrary seeds and picks.

use proptest::prelude::*;

use monty_hall::{CardGame, DoorGame, MontyHallGame, OptionId};

proptest! {
    /// Selecting any valid door stores exactly that door.
    #[test]
    fn prop_select_stores_choice(seed in any::<u64>(), pick in 1u8..=3) {
        let mut game = DoorGame::new(seed);
        game.select(OptionId::new(pick)).unwrap();
        prop_assert_eq!(game.choice(), Some(OptionId::new(pick)));
    }

    /// The opened door is never the player's pick and never the winner.
    #[test]
    fn prop_opened_door_is_losing_and_unselected(seed in any::<u64>(), pick in 1u8..=3) {
        let mut game = DoorGame::new(seed);
        game.select(OptionId::new(pick)).unwrap();
        let opened = game.reveal_door().unwrap();

        prop_assert_ne!(opened, OptionId::new(pick));
        prop_assert_ne!(opened, game.winning_option());
    }

    /// Switching and the remaining door agree, and victory is exactly
    /// "final choice is the winner".
    #[test]
    fn prop_switch_lands_on_remaining_door(seed in any::<u64>(), pick in 1u8..=3) {
        let mut game = DoorGame::new(seed);
        game.select(OptionId::new(pick)).unwrap();
        game.reveal_door().unwrap();

        let remaining = game.remaining_door().unwrap();
        let final_choice = game.switch_choice().unwrap();

        prop_assert_eq!(final_choice, remaining);
        prop_assert_eq!(game.check_victory(), final_choice == game.winning_option());
    }

    /// The card reveal always flips exactly 50 positions, never the pick or
    /// the hidden card, and hides the winner whenever the pick is a loser.
    #[test]
    fn prop_card_reveal_invariants(seed in any::<u64>(), pick in 1u8..=52) {
        let mut game = CardGame::new(seed);
        let pick = OptionId::new(pick);
        game.select(pick).unwrap();

        let reveal = game.reveal_cards().unwrap();
        prop_assert_eq!(reveal.revealed.len(), 50);
        prop_assert!(!reveal.revealed.contains(&pick));
        prop_assert!(!reveal.revealed.contains(&reveal.alternative));
        prop_assert!(!reveal.revealed.contains(&game.winning_option()));

        if pick != game.winning_option() {
            prop_assert_eq!(reveal.alternative, game.winning_option());
        }
    }

    /// A reset round replays cleanly regardless of how the previous round
    /// went.
    #[test]
    fn prop_reset_round_trip(seed in any::<u64>(), first in 1u8..=52, second in 1u8..=52, switch in any::<bool>()) {
        let mut game = CardGame::new(seed);
        game.select(OptionId::new(first)).unwrap();
        game.reveal_cards().unwrap();
        if switch {
            game.switch_choice().unwrap();
        } else {
            game.keep_choice().unwrap();
        }

        game.reset();
        prop_assert_eq!(game.choice(), None);
        prop_assert!(game.revealed().is_empty());

        game.select(OptionId::new(second)).unwrap();
        let reveal = game.reveal_cards().unwrap();
        prop_assert_eq!(reveal.revealed.len(), 50);
    }
}
