//! # monty-hall
//!
//! An educational Monty Hall paradox game model and simulation engine.
//!
//! ## Design Principles
//!
//! 1. **Model only**: No widgets, drawing, or click wiring. A presentation
//!    layer (GUI, CLI, or test harness) drives a game through the narrow
//!    method surface of [`MontyHallGame`].
//!
//! 2. **Strategy variants over inheritance**: The 3-door and 52-card games
//!    are independent implementations of one capability trait backed by a
//!    shared [`RoundState`]; the only variant-specific step is the reveal.
//!
//! 3. **Explicit phases**: A round moves `Selecting -> Deciding -> Resolved`
//!    and the model rejects out-of-order calls instead of trusting the
//!    caller's sequencing.
//!
//! 4. **Deterministic randomness**: All draws flow through an injected,
//!    seedable [`GameRng`]; the same seed replays the same rounds.
//!
//! ## Modules
//!
//! - `core`: Option identifiers, RNG, phases, errors, shared round state
//! - `deck`: The fixed 52-card identity table
//! - `games`: The capability trait and the two game variants
//! - `sim`: Strategy simulation and win-rate statistics
//!
//! ## Example
//!
//! ```
//! use monty_hall::{DoorGame, MontyHallGame, OptionId};
//!
//! let mut game = DoorGame::new(42);
//! game.select(OptionId::new(1)).unwrap();
//! let opened = game.reveal_door().unwrap();
//! assert_ne!(opened, OptionId::new(1));
//!
//! game.switch_choice().unwrap();
//! let won = game.check_victory();
//! # let _ = won;
//! ```

pub mod core;
pub mod deck;
pub mod games;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, GameRngState, OptionId, Phase, Result, RoundState};

pub use crate::deck::{Card, Color, Deck, Rank, Suit, DECK_SIZE};

pub use crate::games::{CardGame, DoorContent, DoorGame, MontyHallGame, Reveal, DOOR_COUNT};

pub use crate::sim::{SimulationConfig, SimulationReport, Strategy};
