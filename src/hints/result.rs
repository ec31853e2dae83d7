//! Hint results and their user-facing messages.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::LetterSet;

/// A hint that was granted.
#[derive(Clone, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Hint {
    /// Stage 0: the word's category (empty if the word is not in the bank).
    #[display("Hint: {_0}")]
    Category(String),

    /// Stage 1: wrong letters made unselectable.
    #[display("Hint: Disabled some incorrect letters")]
    LettersDisabled(LetterSet),

    /// Stage 2: every unrevealed vowel of the word, now guessed.
    #[display("Hint: Revealed all vowels")]
    VowelsRevealed(LetterSet),
}

/// Why a hint was not granted. Refusals never change state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum HintRefusal {
    /// The hint would cost the last remaining turn.
    #[display("Hint not available")]
    NotAvailable,

    /// Every wrong letter is already guessed.
    #[display("No letters to disable")]
    NoLettersToDisable,

    /// Every vowel of the word is already revealed.
    #[display("No unrevealed vowels")]
    NoUnrevealedVowels,

    /// All three hints were used.
    #[display("No more hints available")]
    Exhausted,

    /// The session already ended.
    #[display("Game is over")]
    GameOver,
}

/// Result of a hint request.
#[derive(Clone, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum HintResult {
    #[display("{_0}")]
    Granted(Hint),
    #[display("{_0}")]
    Refused(HintRefusal),
}

impl HintResult {
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, HintResult::Granted(_))
    }

    /// The message to show the player.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Letters the hint disabled or revealed; empty otherwise.
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        match self {
            HintResult::Granted(Hint::LettersDisabled(set) | Hint::VowelsRevealed(set)) => *set,
            _ => LetterSet::empty(),
        }
    }

    /// The category label, if this was a stage-0 hint.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            HintResult::Granted(Hint::Category(category)) => Some(category),
            _ => None,
        }
    }

    /// The refusal reason, if any.
    #[must_use]
    pub fn refusal(&self) -> Option<HintRefusal> {
        match self {
            HintResult::Refused(reason) => Some(*reason),
            HintResult::Granted(_) => None,
        }
    }
}
