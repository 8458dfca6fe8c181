//! Option identifiers.
//!
//! An "option" is a selectable slot in a round: a door in the 3-door game,
//! a card position in the 52-card game. Options are numbered from 1, matching
//! how a presentation layer labels them.

use serde::{Deserialize, Serialize};

/// 1-based identifier for a selectable option (door or card position).
///
/// ## Example
///
/// ```
/// use monty_hall::core::OptionId;
///
/// let door = OptionId::new(3);
/// assert_eq!(door.get(), 3);
/// assert_eq!(door.index(), 2); // 0-based, for table lookup
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OptionId(pub u8);

impl OptionId {
    /// Create a new option ID. Option numbers start at 1.
    #[must_use]
    pub const fn new(option: u8) -> Self {
        Self(option)
    }

    /// Get the raw 1-based option number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Get the 0-based index for lookup tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Check that this option lies in `[1, total]`.
    #[must_use]
    pub const fn in_range(self, total: u8) -> bool {
        self.0 >= 1 && self.0 <= total
    }

    /// Iterate over all option IDs for a round with `total` options.
    ///
    /// ```
    /// use monty_hall::core::OptionId;
    ///
    /// let doors: Vec<_> = OptionId::all(3).collect();
    /// assert_eq!(doors, vec![OptionId::new(1), OptionId::new(2), OptionId::new(3)]);
    /// ```
    pub fn all(total: u8) -> impl Iterator<Item = OptionId> {
        (1..=total).map(OptionId)
    }
}

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_id_basics() {
        let opt = OptionId::new(52);
        assert_eq!(opt.get(), 52);
        assert_eq!(opt.index(), 51);
        assert_eq!(format!("{}", opt), "52");
    }

    #[test]
    fn test_in_range() {
        assert!(OptionId::new(1).in_range(3));
        assert!(OptionId::new(3).in_range(3));
        assert!(!OptionId::new(0).in_range(3));
        assert!(!OptionId::new(4).in_range(3));
    }

    #[test]
    fn test_all_is_ordered() {
        let all: Vec<_> = OptionId::all(5).collect();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0], OptionId::new(1));
        assert_eq!(all[4], OptionId::new(5));
    }

    #[test]
    fn test_all_covers_full_universe() {
        // The whole u8 range is usable, including the 255-option maximum.
        let all: Vec<_> = OptionId::all(255).collect();
        assert_eq!(all.len(), 255);
        assert_eq!(all[254], OptionId::new(255));
    }

    #[test]
    fn test_serde_round_trip() {
        let opt = OptionId::new(7);
        let json = serde_json::to_string(&opt).unwrap();
        let back: OptionId = serde_json::from_str(&json).unwrap();
        assert_eq!(opt, back);
    }
}
