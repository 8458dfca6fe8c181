//! The 52-card extended game.
//!
//! Same paradox, sharper odds: the player picks one of 52 face-down cards,
//! the host flips 50 of the remaining 51, and the player switches to the one
//! card left face down or keeps their pick. Switching wins 50/51 of the time.
//!
//! The reveal rule is deliberately asymmetric: the hidden card is the winner
//! whenever the player does not already hold it. Only when the player's pick
//! is the winner (all 51 others are losers) is the hidden card drawn
//! uniformly at random.

use crate::core::{GameError, GameRng, OptionId, Result, RoundState};
use crate::deck::{Card, Color, Deck, DECK_SIZE};

use super::traits::{MontyHallGame, Reveal};

/// The 52-card Monty Hall game.
#[derive(Clone, Debug)]
pub struct CardGame {
    round: RoundState,
    /// Fixed position-to-card table; persists across resets.
    deck: Deck,
}

impl CardGame {
    /// Create a game with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create a game from an already-constructed RNG stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            round: RoundState::new(DECK_SIZE, rng),
            deck: Deck::standard(),
        }
    }

    /// Create a game with a fixed winning position, for scripted rounds.
    pub fn with_winning(seed: u64, winning: OptionId) -> Result<Self> {
        let mut game = Self::new(seed);
        game.round.force_winner(winning)?;
        Ok(game)
    }

    /// The card identity at a 1-based position. Pure lookup.
    pub fn card(&self, position: OptionId) -> Result<Card> {
        self.deck
            .card(position)
            .ok_or(GameError::InvalidOption {
                option: position.get(),
                total: DECK_SIZE,
            })
    }

    /// The color of the card at a position. Pure lookup.
    pub fn card_color(&self, position: OptionId) -> Result<Color> {
        Ok(self.card(position)?.color())
    }

    /// Flip 50 of the 51 non-chosen cards, leaving one face down.
    ///
    /// The hidden card is the winner unless the player already chose the
    /// winner, in which case a uniformly random non-chosen card stays hidden.
    /// Advances the round to deciding.
    pub fn reveal_cards(&mut self) -> Result<Reveal> {
        let choice = self.round.begin_reveal()?;
        let winning = self.round.winning_option();

        let non_chosen: Vec<OptionId> = OptionId::all(DECK_SIZE)
            .filter(|&position| position != choice)
            .collect();

        let hidden = if choice == winning {
            *self
                .round
                .rng_mut()
                .choose(&non_chosen)
                .ok_or(GameError::NoRemainingOption)?
        } else {
            winning
        };

        let revealed: Vec<OptionId> = non_chosen
            .into_iter()
            .filter(|&position| position != hidden)
            .collect();

        self.round.finish_reveal(revealed.iter().copied(), hidden);
        Ok(Reveal {
            revealed,
            alternative: hidden,
        })
    }

    /// Resolve the round with an explicit new choice.
    ///
    /// The caller normally passes the hidden position from
    /// [`reveal_cards`](CardGame::reveal_cards); any in-range position is
    /// accepted. Use [`switch_choice`](MontyHallGame::switch_choice) to
    /// switch to the hidden card without tracking it.
    pub fn switch_to(&mut self, new_choice: OptionId) -> Result<OptionId> {
        self.round.decide_explicit(new_choice)
    }
}

impl MontyHallGame for CardGame {
    fn round(&self) -> &RoundState {
        &self.round
    }

    fn round_mut(&mut self) -> &mut RoundState {
        &mut self.round
    }

    fn reveal(&mut self) -> Result<Reveal> {
        self.reveal_cards()
    }
}
