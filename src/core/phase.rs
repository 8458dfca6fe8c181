//! Round phase machine.
//!
//! A round always moves `Selecting -> Deciding -> Resolved`. The phase lives
//! in the model itself, so calls made out of order are rejected with a
//! descriptive error instead of relying on the presentation layer's
//! discipline.

use serde::{Deserialize, Serialize};

/// Phase of a Monty Hall round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player's initial pick. Ends when the host reveals.
    Selecting,
    /// Losing options are on the table; the player must switch or keep.
    Deciding,
    /// The decision is final; the outcome can be checked.
    Resolved,
}

impl Phase {
    /// Check if the round is waiting for the initial pick.
    #[must_use]
    pub const fn is_selecting(self) -> bool {
        matches!(self, Self::Selecting)
    }

    /// Check if the round is waiting for the switch/keep decision.
    #[must_use]
    pub const fn is_deciding(self) -> bool {
        matches!(self, Self::Deciding)
    }

    /// Check if the round is over.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Selecting
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Selecting => "selecting",
            Self::Deciding => "deciding",
            Self::Resolved => "resolved",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_selecting() {
        assert_eq!(Phase::default(), Phase::Selecting);
        assert!(Phase::default().is_selecting());
    }

    #[test]
    fn test_predicates() {
        assert!(Phase::Deciding.is_deciding());
        assert!(Phase::Resolved.is_resolved());
        assert!(!Phase::Resolved.is_deciding());
        assert!(!Phase::Selecting.is_resolved());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Phase::Selecting), "selecting");
        assert_eq!(format!("{}", Phase::Deciding), "deciding");
        assert_eq!(format!("{}", Phase::Resolved), "resolved");
    }
}
