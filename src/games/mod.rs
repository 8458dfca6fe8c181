//! Game variants: the 3-door classic and the 52-card extension.

pub mod cards;
pub mod doors;
pub mod traits;

pub use cards::CardGame;
pub use doors::{DoorContent, DoorGame, DOOR_COUNT};
pub use traits::{MontyHallGame, Reveal};
