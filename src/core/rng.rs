//! Deterministic random number generation.
//!
//! All randomness in a round flows through an injected `GameRng` rather than
//! an ambient thread-local source, so the same seed replays the same winning
//! options, the same revealed doors, and the same hidden cards.
//!
//! ## Usage
//!
//! ```
//! use monty_hall::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork an independent stream, e.g. for simulated player picks
//! let mut player = rng.fork();
//!
//! // Original and fork produce different sequences
//! let hosts: Vec<u8> = (0..10).map(|_| rng.gen_range(1..100)).collect();
//! let picks: Vec<u8> = (0..10).map(|_| player.gen_range(1..100)).collect();
//! assert_ne!(hosts, picks);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing a game round.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
/// Supports forking for independent streams and O(1) state capture.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. Used to
    /// separate randomness domains, e.g. the host's draws from a simulated
    /// player's picks.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random option number in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<u8>) -> u8 {
        self.inner.gen_range(range)
    }

    /// Generate a random option number in the given inclusive range.
    ///
    /// Option draws use this so a 255-option universe needs no overflowing
    /// `total + 1` upper bound.
    pub fn gen_range_inclusive(&mut self, range: std::ops::RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
