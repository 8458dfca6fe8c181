//! Shared round state for all game variants.
//!
//! `RoundState` is the model behind both the 3-door and the 52-card game:
//! the option universe, the winning option, the player's choice, the revealed
//! options, and the phase machine. Variant-specific behavior (what exactly a
//! reveal discloses) lives in the `games` module; everything else is here.
//!
//! ## Invariants
//!
//! - The player's current choice is never in the revealed set.
//! - The winning option is only revealed at resolution time, never by the
//!   host's reveal step, except in the card variant when the player already
//!   holds the winner (then all 51 other positions are losers and one
//!   arbitrary loser stays hidden instead).

use smallvec::SmallVec;

use super::error::{GameError, Result};
use super::option::OptionId;
use super::phase::Phase;
use super::rng::GameRng;

/// State of a single Monty Hall round.
///
/// Created per game and reused across rounds via [`RoundState::reset`];
/// `total_options` is fixed at construction.
#[derive(Clone, Debug)]
pub struct RoundState {
    /// Number of options in the universe. Fixed at construction.
    total_options: u8,
    /// The option holding the prize. Redrawn on every reset.
    winning: OptionId,
    /// The player's current choice.
    choice: Option<OptionId>,
    /// Options disclosed as non-winning. One for doors, fifty for cards.
    revealed: SmallVec<[OptionId; 2]>,
    /// The one unselected, unrevealed option recorded by the reveal step.
    /// Switching moves the choice here.
    alternative: Option<OptionId>,
    /// Current phase of the round.
    phase: Phase,
    /// Injected RNG; all draws for this round come from it.
    rng: GameRng,
}

impl RoundState {
    /// Create a new round over `total_options` options, drawing the winner
    /// uniformly from the injected RNG.
    ///
    /// Panics if `total_options < 2` (a one-option round has no paradox).
    #[must_use]
    pub fn new(total_options: u8, mut rng: GameRng) -> Self {
        assert!(total_options >= 2, "a round needs at least 2 options");
        let winning = draw_winner(total_options, &mut rng);
        Self {
            total_options,
            winning,
            choice: None,
            revealed: SmallVec::new(),
            alternative: None,
            phase: Phase::Selecting,
            rng,
        }
    }

    /// Number of options in this round's universe.
    #[must_use]
    pub fn total_options(&self) -> u8 {
        self.total_options
    }

    /// The winning option.
    ///
    /// Exposed so a presentation layer can draw the final board; honest
    /// players consult it only after resolution.
    #[must_use]
    pub fn winning_option(&self) -> OptionId {
        self.winning
    }

    /// The player's current choice, if one has been made.
    #[must_use]
    pub fn choice(&self) -> Option<OptionId> {
        self.choice
    }

    /// Options disclosed as non-winning so far.
    #[must_use]
    pub fn revealed(&self) -> &[OptionId] {
        &self.revealed
    }

    /// The option a switch would move to, recorded by the reveal step.
    #[must_use]
    pub fn alternative(&self) -> Option<OptionId> {
        self.alternative
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Register the player's initial pick.
    ///
    /// Valid once per round, during [`Phase::Selecting`]. Out-of-range
    /// options are rejected with the state unchanged.
    pub fn select(&mut self, option: OptionId) -> Result<()> {
        if !self.phase.is_selecting() {
            return Err(GameError::OutOfPhase {
                expected: Phase::Selecting,
                actual: self.phase,
            });
        }
        if self.choice.is_some() {
            return Err(GameError::AlreadySelected);
        }
        if !option.in_range(self.total_options) {
            return Err(GameError::InvalidOption {
                option: option.get(),
                total: self.total_options,
            });
        }

        log::trace!("player selected option {}", option);
        self.choice = Some(option);
        Ok(())
    }

    /// All options except the winner, in ascending order.
    pub(crate) fn losing_options(&self) -> Vec<OptionId> {
        OptionId::all(self.total_options)
            .filter(|&o| o != self.winning)
            .collect()
    }

    /// Check whether the player's choice holds the prize.
    ///
    /// Total: while no choice exists this is `false`.
    #[must_use]
    pub fn check_victory(&self) -> bool {
        self.choice == Some(self.winning)
    }

    /// Start a fresh round in place: redraw the winner, clear the choice and
    /// the revealed set, return to [`Phase::Selecting`].
    ///
    /// The option universe is untouched, so variant data keyed by position
    /// (the card table) stays valid across resets.
    pub fn reset(&mut self) {
        self.winning = draw_winner(self.total_options, &mut self.rng);
        self.choice = None;
        self.revealed.clear();
        self.alternative = None;
        self.phase = Phase::Selecting;
        log::debug!("round reset, {} options back in play", self.total_options);
    }

    /// Validate that a reveal may happen now and return the player's choice.
    pub(crate) fn begin_reveal(&self) -> Result<OptionId> {
        if !self.phase.is_selecting() {
            return Err(GameError::OutOfPhase {
                expected: Phase::Selecting,
                actual: self.phase,
            });
        }
        self.choice.ok_or(GameError::NoSelection)
    }

    /// Record the outcome of a reveal and advance to [`Phase::Deciding`].
    pub(crate) fn finish_reveal<I>(&mut self, revealed: I, alternative: OptionId)
    where
        I: IntoIterator<Item = OptionId>,
    {
        self.revealed = revealed.into_iter().collect();
        self.alternative = Some(alternative);
        self.phase = Phase::Deciding;
        log::debug!(
            "revealed {} losing option(s), alternative is {}",
            self.revealed.len(),
            alternative
        );
    }

    /// Finalize the round from [`Phase::Deciding`].
    ///
    /// On `switch` the choice moves to the recorded alternative. Returns the
    /// final choice.
    pub(crate) fn decide(&mut self, switch: bool) -> Result<OptionId> {
        if !self.phase.is_deciding() {
            return Err(GameError::OutOfPhase {
                expected: Phase::Deciding,
                actual: self.phase,
            });
        }
        if switch {
            let alternative = self.alternative.ok_or(GameError::NoRemainingOption)?;
            self.choice = Some(alternative);
        }
        self.phase = Phase::Resolved;
        let choice = self.choice.ok_or(GameError::NoSelection)?;
        log::debug!(
            "round resolved: final choice {}, {}",
            choice,
            if self.check_victory() { "win" } else { "loss" }
        );
        Ok(choice)
    }

    /// Finalize the round with an explicit new choice (card variant's
    /// unconditional switch). The caller normally passes the hidden position.
    pub(crate) fn decide_explicit(&mut self, new_choice: OptionId) -> Result<OptionId> {
        if !self.phase.is_deciding() {
            return Err(GameError::OutOfPhase {
                expected: Phase::Deciding,
                actual: self.phase,
            });
        }
        if !new_choice.in_range(self.total_options) {
            return Err(GameError::InvalidOption {
                option: new_choice.get(),
                total: self.total_options,
            });
        }
        self.choice = Some(new_choice);
        self.phase = Phase::Resolved;
        log::debug!("round resolved: final choice {}", new_choice);
        Ok(new_choice)
    }

    /// Force the winner to a known option, for scripted rounds and tests.
    pub(crate) fn force_winner(&mut self, winning: OptionId) -> Result<()> {
        if !winning.in_range(self.total_options) {
            return Err(GameError::InvalidOption {
                option: winning.get(),
                total: self.total_options,
            });
        }
        self.winning = winning;
        Ok(())
    }

    /// Mutable access to the round's RNG for variant-specific draws.
    pub(crate) fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }
}

fn draw_winner(total_options: u8, rng: &mut GameRng) -> OptionId {
    OptionId::new(rng.gen_range_inclusive(1..=total_options))
}
