//! Letter guess results.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Letter, Outcome};

/// What a guess did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessStatus {
    /// The letter is in the word; its positions were revealed.
    Hit,
    /// The letter is not in the word; one turn was spent.
    Miss,
    /// Already guessed. No change.
    Repeated,
    /// Disabled by a hint. No change.
    Unavailable,
    /// The session already ended. No change.
    GameOver,
}

impl GuessStatus {
    /// Did the guess change the session?
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, GuessStatus::Hit | GuessStatus::Miss)
    }
}

/// Result of `GameEngine::guess_letter`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    /// The normalized letter.
    pub letter: Letter,

    pub status: GuessStatus,

    /// Outcome after the guess.
    pub outcome: Outcome,

    /// Newly revealed positions (0-based). Empty unless `status` is `Hit`.
    pub revealed: SmallVec<[usize; 4]>,
}
