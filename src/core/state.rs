//! Session state: one playthrough from word selection to win or loss.
//!
//! ## Letter sets
//!
//! A session tracks two disjoint sets:
//! - `guessed`: letters the player guessed or a hint revealed. Drives the
//!   masked display and the win condition.
//! - `hint_disabled`: letters a hint made unselectable without guessing
//!   them. Never in the target word.
//!
//! A letter is selectable while it is in neither set.
//!
//! ## Turns
//!
//! `remaining_turns` starts at `max_turns` and only ever decreases by
//! saturating subtraction, so it stays within `[0, max_turns]`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::letter::{Letter, LetterSet};
use super::word::Word;

/// Highest hint stage. Once reached, no further hints are granted.
pub const MAX_HINT_STAGE: u8 = 3;

/// Session outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// Has the session ended?
    #[must_use]
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Outcome::InProgress => "in progress",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        };
        f.write_str(s)
    }
}

/// The mutable game state of one session.
///
/// Uses an `im` vector for the history so cloning a session is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    target: Word,
    guessed: LetterSet,
    hint_disabled: LetterSet,
    remaining_turns: u8,
    max_turns: u8,
    hint_stage: u8,
    outcome: Outcome,
    history: Vector<ActionRecord>,
}

impl Session {
    /// Start a fresh session for `target` with a full turn budget.
    #[must_use]
    pub fn new(target: Word, max_turns: u8) -> Self {
        Self {
            target,
            guessed: LetterSet::empty(),
            hint_disabled: LetterSet::empty(),
            remaining_turns: max_turns,
            max_turns,
            hint_stage: 0,
            outcome: Outcome::InProgress,
            history: Vector::new(),
        }
    }

    /// Rebuild a session from raw parts, recomputing the outcome.
    ///
    /// Callers validate the parts first; see `SessionSnapshot::restore`.
    pub(crate) fn from_parts(
        target: Word,
        guessed: LetterSet,
        hint_disabled: LetterSet,
        remaining_turns: u8,
        max_turns: u8,
        hint_stage: u8,
    ) -> Self {
        let mut session = Self {
            target,
            guessed,
            hint_disabled,
            remaining_turns,
            max_turns,
            hint_stage,
            outcome: Outcome::InProgress,
            history: Vector::new(),
        };
        session.refresh_outcome();
        session
    }

    // === Read Access ===

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn guessed_letters(&self) -> LetterSet {
        self.guessed
    }

    #[must_use]
    pub fn hint_disabled_letters(&self) -> LetterSet {
        self.hint_disabled
    }

    /// Every letter that is no longer selectable.
    #[must_use]
    pub fn disabled_letters(&self) -> LetterSet {
        self.guessed.union(self.hint_disabled)
    }

    #[must_use]
    pub fn is_selectable(&self, letter: Letter) -> bool {
        !self.disabled_letters().contains(letter)
    }

    #[must_use]
    pub fn remaining_turns(&self) -> u8 {
        self.remaining_turns
    }

    #[must_use]
    pub fn max_turns(&self) -> u8 {
        self.max_turns
    }

    /// Turns spent so far, on wrong guesses and hints alike.
    #[must_use]
    pub fn wrong_guess_count(&self) -> u8 {
        self.max_turns.saturating_sub(self.remaining_turns)
    }

    #[must_use]
    pub fn hint_stage(&self) -> u8 {
        self.hint_stage
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Applied actions in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Has every letter of the target been guessed?
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.target.letter_set().is_subset(self.guessed)
    }

    /// Target word with unguessed letters masked, e.g. `"_ A _"`.
    #[must_use]
    pub fn display(&self) -> String {
        self.target.masked(self.guessed)
    }

    /// Illustration index, 0 (untouched) to `max_turns` (hanged).
    #[must_use]
    pub fn visual_stage(&self) -> u8 {
        self.wrong_guess_count().min(self.max_turns)
    }

    // === Mutation ===

    /// Mark a letter as guessed. Returns true if it was new.
    pub(crate) fn mark_guessed(&mut self, letter: Letter) -> bool {
        self.guessed.insert(letter)
    }

    /// Make letters unselectable without guessing them.
    pub(crate) fn disable(&mut self, letters: LetterSet) {
        self.hint_disabled = self.hint_disabled.union(letters);
    }

    /// Spend one turn. Never goes below zero.
    pub(crate) fn spend_turn(&mut self) {
        self.remaining_turns = self.remaining_turns.saturating_sub(1);
    }

    pub(crate) fn advance_hint_stage(&mut self) {
        self.hint_stage = (self.hint_stage + 1).min(MAX_HINT_STAGE);
    }

    /// Append an action to the history.
    pub(crate) fn record(&mut self, action: Action) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(action, sequence, self.remaining_turns));
    }

    /// Recompute the outcome. A loss takes precedence over a win.
    pub(crate) fn refresh_outcome(&mut self) -> Outcome {
        self.outcome = if self.remaining_turns == 0 {
            Outcome::Lost
        } else if self.is_solved() {
            Outcome::Won
        } else {
            Outcome::InProgress
        };
        self.outcome
    }
}
