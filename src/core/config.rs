//! Engine configuration.
//!
//! Hosts configure the engine at startup by providing:
//! - the turn budget (`max_turns`)
//! - the `WordBank` words are drawn from
//! - an optional seed for reproducible games
//!
//! The defaults reproduce the classic game: six turns, the standard
//! 20-word bank, entropy-seeded.

use serde::{Deserialize, Serialize};

use crate::words::WordBank;

/// Default number of wrong guesses allowed per session.
pub const DEFAULT_MAX_TURNS: u8 = 6;

/// Complete engine configuration.
///
/// ## Example
///
/// ```
/// use hangman_engine::core::HangmanConfig;
///
/// let config = HangmanConfig::new().with_seed(7).with_max_turns(8);
/// assert_eq!(config.max_turns, 8);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HangmanConfig {
    /// Turns a session starts with. Must be 2-26.
    pub max_turns: u8,

    /// Words to draw from.
    pub word_bank: WordBank,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            word_bank: WordBank::standard(),
            seed: None,
        }
    }
}

impl HangmanConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the turn budget.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u8) -> Self {
        assert!(max_turns >= 2, "Must allow at least 2 turns");
        assert!(max_turns <= 26, "At most 26 turns supported");
        self.max_turns = max_turns;
        self
    }

    /// Set the word bank.
    #[must_use]
    pub fn with_word_bank(mut self, word_bank: WordBank) -> Self {
        self.word_bank = word_bank;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
