//! The classic 3-door game.
//!
//! The player picks a door, the host opens one losing door they did not
//! pick, and the player switches or keeps. Switching wins 2/3 of the time.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng, OptionId, Phase, Result, RoundState};

use super::traits::{MontyHallGame, Reveal};

/// Number of doors in the classic game.
pub const DOOR_COUNT: u8 = 3;

/// What stands behind a door.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorContent {
    /// The prize.
    Car,
    /// A losing door.
    Goat,
}

impl std::fmt::Display for DoorContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DoorContent::Car => write!(f, "car"),
            DoorContent::Goat => write!(f, "goat"),
        }
    }
}

/// The 3-door Monty Hall game.
#[derive(Clone, Debug)]
pub struct DoorGame {
    round: RoundState,
}

impl DoorGame {
    /// Create a game with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create a game from an already-constructed RNG stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            round: RoundState::new(DOOR_COUNT, rng),
        }
    }

    /// Create a game with a fixed winning door, for scripted rounds.
    pub fn with_winning(seed: u64, winning: OptionId) -> Result<Self> {
        let mut game = Self::new(seed);
        game.round.force_winner(winning)?;
        Ok(game)
    }

    /// Open one losing door the player did not pick.
    ///
    /// With the player on the winner there are two candidates and one is
    /// drawn uniformly; otherwise the single remaining losing door opens.
    /// Returns the opened door and advances the round to deciding.
    pub fn reveal_door(&mut self) -> Result<OptionId> {
        let choice = self.round.begin_reveal()?;

        let candidates: Vec<OptionId> = self
            .round
            .losing_options()
            .into_iter()
            .filter(|&door| door != choice)
            .collect();
        let opened = *self
            .round
            .rng_mut()
            .choose(&candidates)
            .ok_or(GameError::NoRemainingOption)?;

        let remaining = remaining_of(choice, opened)?;
        self.round.finish_reveal([opened], remaining);
        Ok(opened)
    }

    /// The door that is neither chosen nor open.
    ///
    /// Valid only while the round is deciding; after resolution the choice
    /// may have moved onto this door, so the question no longer makes sense.
    pub fn remaining_door(&self) -> Result<OptionId> {
        if !self.round.phase().is_deciding() {
            return Err(GameError::OutOfPhase {
                expected: Phase::Deciding,
                actual: self.round.phase(),
            });
        }
        let choice = self.round.choice().ok_or(GameError::NoSelection)?;
        OptionId::all(DOOR_COUNT)
            .find(|&door| door != choice && !self.round.revealed().contains(&door))
            .ok_or(GameError::NoRemainingOption)
    }

    /// What stands behind `door`. Pure lookup, usable at any phase.
    pub fn door_content(&self, door: OptionId) -> Result<DoorContent> {
        if !door.in_range(DOOR_COUNT) {
            return Err(GameError::InvalidOption {
                option: door.get(),
                total: DOOR_COUNT,
            });
        }
        if door == self.round.winning_option() {
            Ok(DoorContent::Car)
        } else {
            Ok(DoorContent::Goat)
        }
    }
}

impl MontyHallGame for DoorGame {
    fn round(&self) -> &RoundState {
        &self.round
    }

    fn round_mut(&mut self) -> &mut RoundState {
        &mut self.round
    }

    fn reveal(&mut self) -> Result<Reveal> {
        let opened = self.reveal_door()?;
        let alternative = self.remaining_door()?;
        Ok(Reveal {
            revealed: vec![opened],
            alternative,
        })
    }
}

/// Of the three doors, the one that is neither `choice` nor `opened`.
fn remaining_of(choice: OptionId, opened: OptionId) -> Result<OptionId> {
    OptionId::all(DOOR_COUNT)
        .find(|&door| door != choice && door != opened)
        .ok_or(GameError::NoRemainingOption)
}
