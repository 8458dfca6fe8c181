//! Core round model: option identifiers, RNG, phases, errors, shared state.
//!
//! This module is variant-agnostic. The 3-door and 52-card behaviors are
//! built on top of it in the `games` module.

pub mod error;
pub mod option;
pub mod phase;
pub mod rng;
pub mod round;

pub use error::{GameError, Result};
pub use option::OptionId;
pub use phase::Phase;
pub use rng::{GameRng, GameRngState};
pub use round::RoundState;
