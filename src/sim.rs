//! Strategy simulation harness.
//!
//! Plays many rounds of a variant under a fixed strategy and tallies the win
//! rate. This is what makes the paradox visible: always switching converges
//! to 2/3 on the doors and 50/51 on the cards, always keeping to 1/3 and
//! 1/51.
//!
//! ## Example
//!
//! ```
//! use monty_hall::sim::{run_doors, SimulationConfig, Strategy};
//!
//! let config = SimulationConfig::default()
//!     .with_rounds(10_000)
//!     .with_strategy(Strategy::Switch);
//! let report = run_doors(&config).unwrap();
//!
//! assert!(report.win_rate() > 0.6);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, OptionId, Result};
use crate::games::{CardGame, DoorGame, MontyHallGame};

/// Decision strategy for a simulated player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Keep the initial pick.
    Keep,
    /// Switch to the reveal's alternative.
    Switch,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Keep => write!(f, "keep"),
            Strategy::Switch => write!(f, "switch"),
        }
    }
}

/// Simulation parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Rounds to play.
    pub rounds: u32,

    /// Seed for both the game's draws and the player's picks.
    /// Same seed produces identical tallies.
    pub seed: u64,

    /// Decision strategy applied every round.
    pub strategy: Strategy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 10_000,
            seed: 42,
            strategy: Strategy::Switch,
        }
    }
}

impl SimulationConfig {
    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Tally of a finished simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Rounds played.
    pub rounds: u32,
    /// Rounds won.
    pub wins: u32,
}

impl SimulationReport {
    /// Rounds lost.
    #[must_use]
    pub fn losses(&self) -> u32 {
        self.rounds - self.wins
    }

    /// Fraction of rounds won, 0.0 when nothing was played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.rounds)
        }
    }
}

/// Play `config.rounds` rounds on `game`, resetting it between rounds.
///
/// The player's picks come from a stream forked off `config.seed`,
/// independent of the game's own draws. The game must be at the start of a
/// round (fresh or reset).
pub fn run<G: MontyHallGame>(config: &SimulationConfig, game: &mut G) -> Result<SimulationReport> {
    let mut picks = GameRng::new(config.seed).fork();
    let total = game.total_options();
    let mut wins = 0;

    for _ in 0..config.rounds {
        let pick = OptionId::new(picks.gen_range_inclusive(1..=total));
        game.select(pick)?;
        game.reveal()?;
        match config.strategy {
            Strategy::Switch => game.switch_choice()?,
            Strategy::Keep => game.keep_choice()?,
        };
        if game.check_victory() {
            wins += 1;
        }
        game.reset();
    }

    let report = SimulationReport {
        rounds: config.rounds,
        wins,
    };
    log::info!(
        "{} strategy over {} rounds of {} options: {:.1}% wins",
        config.strategy,
        report.rounds,
        total,
        report.win_rate() * 100.0
    );
    Ok(report)
}

/// Simulate the 3-door game.
pub fn run_doors(config: &SimulationConfig) -> Result<SimulationReport> {
    let mut game = DoorGame::new(config.seed);
    run(config, &mut game)
}

/// Simulate the 52-card game.
pub fn run_cards(config: &SimulationConfig) -> Result<SimulationReport> {
    let mut game = CardGame::new(config.seed);
    run(config, &mut game)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_math() {
        let report = SimulationReport { rounds: 100, wins: 66 };
        assert_eq!(report.losses(), 34);
        assert!((report.win_rate() - 0.66).abs() < 1e-9);

        assert_eq!(SimulationReport::default().win_rate(), 0.0);
    }

    #[test]
    fn test_config_builders() {
        let config = SimulationConfig::default()
            .with_rounds(500)
            .with_seed(7)
            .with_strategy(Strategy::Keep);
        assert_eq!(config.rounds, 500);
        assert_eq!(config.seed, 7);
        assert_eq!(config.strategy, Strategy::Keep);
    }

    #[test]
    fn test_same_seed_same_tally() {
        let config = SimulationConfig::default().with_rounds(1_000);
        let a = run_doors(&config).unwrap();
        let b = run_doors(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_switching_beats_keeping() {
        let rounds = 2_000;
        let switch =
            run_doors(&SimulationConfig::default().with_rounds(rounds)).unwrap();
        let keep = run_doors(
            &SimulationConfig::default()
                .with_rounds(rounds)
                .with_strategy(Strategy::Keep),
        )
        .unwrap();

        assert!(switch.wins > keep.wins);
    }
}
