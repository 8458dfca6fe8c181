//! Error types for round operations.

use thiserror::Error;

use super::phase::Phase;

/// Errors returned by round operations.
///
/// Every failing operation leaves the round state unchanged.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Selection or lookup outside the option universe.
    #[error("option {option} is out of range 1..={total}")]
    InvalidOption {
        /// The rejected option number.
        option: u8,
        /// Total options in this round.
        total: u8,
    },

    /// A second `select` in the same round. The initial pick can only be
    /// changed through the switch decision.
    #[error("an option was already selected for this round")]
    AlreadySelected,

    /// Reveal attempted before the player picked an option.
    #[error("no option has been selected yet")]
    NoSelection,

    /// Operation invoked in the wrong round phase.
    #[error("operation requires the {expected} phase, round is {actual}")]
    OutOfPhase {
        /// Phase the operation is valid in.
        expected: Phase,
        /// Phase the round is actually in.
        actual: Phase,
    },

    /// Internal consistency failure: every option is either chosen or
    /// revealed, so no alternative remains to switch to.
    #[error("no unselected, unrevealed option remains")]
    NoRemainingOption,
}

/// Result alias for round operations.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidOption { option: 7, total: 3 };
        assert_eq!(format!("{}", err), "option 7 is out of range 1..=3");

        let err = GameError::OutOfPhase {
            expected: Phase::Deciding,
            actual: Phase::Selecting,
        };
        assert_eq!(
            format!("{}", err),
            "operation requires the deciding phase, round is selecting"
        );
    }
}
