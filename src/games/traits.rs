//! The capability surface shared by both game variants.
//!
//! The two variants share no inheritance chain; each implements
//! [`MontyHallGame`] over its own [`RoundState`] and supplies only the
//! variant-specific reveal step. A presentation layer or simulation harness
//! drives either variant through this trait alone.

use serde::{Deserialize, Serialize};

use crate::core::{OptionId, Phase, Result, RoundState};

/// Outcome of the host's reveal step.
///
/// One opened door plus the remaining closed door, or fifty flipped cards
/// plus the one card kept face down.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    /// Options disclosed as non-winning, in ascending order for cards.
    pub revealed: Vec<OptionId>,
    /// The one option left unselected and unrevealed; switching moves the
    /// player's choice here.
    pub alternative: OptionId,
}

/// A Monty Hall game variant.
///
/// Provided methods cover the common round lifecycle; implementors supply
/// access to their round state and the variant-specific [`reveal`].
///
/// [`reveal`]: MontyHallGame::reveal
pub trait MontyHallGame {
    /// The round state backing this game.
    fn round(&self) -> &RoundState;

    /// Mutable round state access.
    fn round_mut(&mut self) -> &mut RoundState;

    /// Disclose losing options per the variant's rule and advance the round
    /// to [`Phase::Deciding`].
    ///
    /// Requires a prior successful [`select`](MontyHallGame::select).
    fn reveal(&mut self) -> Result<Reveal>;

    /// Number of options in this variant.
    fn total_options(&self) -> u8 {
        self.round().total_options()
    }

    /// Current round phase.
    fn phase(&self) -> Phase {
        self.round().phase()
    }

    /// Register the player's initial pick.
    fn select(&mut self, option: OptionId) -> Result<()> {
        self.round_mut().select(option)
    }

    /// The player's current choice.
    fn choice(&self) -> Option<OptionId> {
        self.round().choice()
    }

    /// Options revealed so far.
    fn revealed(&self) -> &[OptionId] {
        self.round().revealed()
    }

    /// The winning option. Honest consumers read this only after resolution.
    fn winning_option(&self) -> OptionId {
        self.round().winning_option()
    }

    /// Abandon the initial pick for the reveal's alternative and resolve the
    /// round. Returns the final choice.
    fn switch_choice(&mut self) -> Result<OptionId> {
        self.round_mut().decide(true)
    }

    /// Keep the initial pick and resolve the round. Returns the final choice.
    fn keep_choice(&mut self) -> Result<OptionId> {
        self.round_mut().decide(false)
    }

    /// Whether the player's choice holds the prize. `false` while no choice
    /// has been made.
    fn check_victory(&self) -> bool {
        self.round().check_victory()
    }

    /// Start a fresh round in place.
    fn reset(&mut self) {
        self.round_mut().reset();
    }
}
