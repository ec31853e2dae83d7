//! Serializable session snapshots.
//!
//! A snapshot is what a UI stashes when it is torn down and rebuilt: the
//! target word, guessed letters, remaining turns, hint stage and the set
//! of letter buttons that are disabled. The hint-only set is recovered on
//! restore as `disabled - guessed`, since the two sets never overlap.
//!
//! Snapshots from outside the process are untrusted: `restore` checks every
//! session invariant before building a `Session`.

use serde::{Deserialize, Serialize};

use super::letter::LetterSet;
use super::state::{Session, MAX_HINT_STAGE};
use super::word::Word;
use crate::error::{HangmanError, Result};

/// Persisted UI-state snapshot of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Uppercase target word.
    pub target_word: String,

    /// Letters guessed or revealed.
    pub guessed_letters: LetterSet,

    /// Turns left.
    pub remaining_turns: u8,

    /// Next hint stage (0-3).
    pub hint_stage: u8,

    /// Letter buttons currently disabled (guessed plus hint-disabled).
    pub disabled_letters: LetterSet,
}

impl SessionSnapshot {
    /// Capture a session.
    #[must_use]
    pub fn capture(session: &Session) -> Self {
        Self {
            target_word: session.target().as_str().to_string(),
            guessed_letters: session.guessed_letters(),
            remaining_turns: session.remaining_turns(),
            hint_stage: session.hint_stage(),
            disabled_letters: session.disabled_letters(),
        }
    }

    /// Validate and rebuild a session with the given turn budget.
    ///
    /// The history of the restored session is empty.
    pub fn restore(&self, max_turns: u8) -> Result<Session> {
        let target = Word::parse(&self.target_word)
            .map_err(|_| invalid(format!("target word {:?} is not A-Z", self.target_word)))?;

        if self.remaining_turns > max_turns {
            return Err(invalid(format!(
                "{} remaining turns exceeds the budget of {max_turns}",
                self.remaining_turns
            )));
        }
        if self.hint_stage > MAX_HINT_STAGE {
            return Err(invalid(format!("hint stage {} is above {MAX_HINT_STAGE}", self.hint_stage)));
        }
        if !self.guessed_letters.is_subset(self.disabled_letters) {
            return Err(invalid("guessed letters must be disabled".to_string()));
        }

        let hint_disabled = self.disabled_letters.difference(self.guessed_letters);
        if !hint_disabled.is_disjoint(target.letter_set()) {
            return Err(invalid(format!(
                "letters {} of the word are disabled without being guessed",
                hint_disabled.intersection(target.letter_set())
            )));
        }

        let wrong_guesses = self.guessed_letters.difference(target.letter_set()).len();
        let turns_spent = usize::from(max_turns - self.remaining_turns);
        if wrong_guesses > turns_spent {
            return Err(invalid(format!(
                "{wrong_guesses} wrong guesses but only {turns_spent} turns spent"
            )));
        }

        Ok(Session::from_parts(
            target,
            self.guessed_letters,
            hint_disabled,
            self.remaining_turns,
            max_turns,
            self.hint_stage,
        ))
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode bytes. Does not validate; call `restore`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

fn invalid(reason: String) -> HangmanError {
    HangmanError::InvalidSnapshot(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Outcome};

    fn letters(s: &str) -> LetterSet {
        s.chars().filter_map(Letter::new).collect()
    }

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            target_word: "DOG".into(),
            guessed_letters: letters("DQ"),
            remaining_turns: 4,
            hint_stage: 2,
            disabled_letters: letters("DQXZ"),
        }
    }

    #[test]
    fn test_restore_valid() {
        let session = snapshot().restore(6).unwrap();

        assert_eq!(session.target().as_str(), "DOG");
        assert_eq!(session.guessed_letters(), letters("DQ"));
        assert_eq!(session.hint_disabled_letters(), letters("XZ"));
        assert_eq!(session.remaining_turns(), 4);
        assert_eq!(session.hint_stage(), 2);
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.display(), "D _ _");
    }

    #[test]
    fn test_capture_restore_matches() {
        let session = snapshot().restore(6).unwrap();
        assert_eq!(SessionSnapshot::capture(&session), snapshot());
    }

    #[test]
    fn test_restore_recomputes_outcome() {
        let mut snap = snapshot();
        snap.guessed_letters = letters("DOGQ");
        snap.disabled_letters = letters("DOGQ");
        assert_eq!(snap.restore(6).unwrap().outcome(), Outcome::Won);
    }

    #[test]
    fn test_rejects_bad_word() {
        let mut snap = snapshot();
        snap.target_word = "D0G".into();
        assert!(matches!(snap.restore(6), Err(HangmanError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_rejects_turns_above_budget() {
        let mut snap = snapshot();
        snap.remaining_turns = 7;
        assert!(snap.restore(6).is_err());
    }

    #[test]
    fn test_rejects_hint_stage() {
        let mut snap = snapshot();
        snap.hint_stage = 4;
        assert!(snap.restore(6).is_err());
    }

    #[test]
    fn test_rejects_guessed_not_disabled() {
        let mut snap = snapshot();
        snap.disabled_letters = letters("XZ");
        assert!(snap.restore(6).is_err());
    }

    #[test]
    fn test_rejects_word_letter_hint_disabled() {
        let mut snap = snapshot();
        snap.disabled_letters = letters("DQXO");
        assert!(snap.restore(6).is_err());
    }

    #[test]
    fn test_rejects_unpaid_wrong_guesses() {
        let mut snap = snapshot();
        snap.guessed_letters = letters("DQWY");
        snap.disabled_letters = letters("DQWY");
        snap.remaining_turns = 5;
        assert!(snap.restore(6).is_err());
    }

    #[test]
    fn test_bincode_bytes() {
        let snap = snapshot();
        let bytes = snap.to_bytes().unwrap();
        assert_eq!(SessionSnapshot::from_bytes(&bytes).unwrap(), snap);

        assert!(matches!(
            SessionSnapshot::from_bytes(&bytes[..3]),
            Err(HangmanError::Codec(_))
        ));
    }
}
