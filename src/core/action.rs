//! Recorded player actions.
//!
//! Every state-changing call on the engine is logged as an `ActionRecord`
//! in the session history. Replaying the history against the same target
//! word and random stream reproduces the session exactly.

use serde::{Deserialize, Serialize};

use super::letter::Letter;

/// A state-changing player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A letter guess that was applied (hit or miss).
    Guess(Letter),
    /// A hint that was granted at the given stage (0-2).
    Hint(u8),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Guess(letter) => write!(f, "Guess({letter})"),
            Action::Hint(stage) => write!(f, "Hint({stage})"),
        }
    }
}

/// A recorded action with its position in the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Sequence number within the session (starts at 0).
    pub sequence: u32,

    /// Turns remaining after the action was applied.
    pub remaining_turns: u8,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, sequence: u32, remaining_turns: u8) -> Self {
        Self {
            action,
            sequence,
            remaining_turns,
        }
    }
}
