//! Validated target words.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::letter::{Letter, LetterSet};
use crate::error::{HangmanError, Result};

/// A non-empty uppercase word made only of letters A-Z.
///
/// Parsing normalizes case, so `"apple"` and `"APPLE"` are the same word.
/// Serializes as its text; deserialization re-validates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    letters: SmallVec<[Letter; 8]>,
}

impl Word {
    /// Parse and normalize a word.
    ///
    /// ```
    /// use hangman_engine::core::Word;
    ///
    /// let word = Word::parse("lion").unwrap();
    /// assert_eq!(word.as_str(), "LION");
    /// assert!(Word::parse("ice cream").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let letters: Option<SmallVec<[Letter; 8]>> = text.chars().map(Letter::new).collect();
        match letters {
            Some(letters) if !letters.is_empty() => Ok(Self {
                text: letters.iter().map(|l| l.as_char()).collect(),
                letters,
            }),
            _ => Err(HangmanError::InvalidWord(text.to_string())),
        }
    }

    /// The uppercase text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The letters in order.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// The distinct letters of the word.
    #[must_use]
    pub fn letter_set(&self) -> LetterSet {
        self.letters.iter().copied().collect()
    }

    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Positions (0-based) where `letter` occurs.
    pub fn positions(&self, letter: Letter) -> impl Iterator<Item = usize> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter(move |&(_, &l)| l == letter)
            .map(|(i, _)| i)
    }

    /// Render with unguessed letters masked as `_`, space separated.
    #[must_use]
    pub fn masked(&self, guessed: LetterSet) -> String {
        let mut out = String::with_capacity(self.letters.len() * 2);
        for (i, &letter) in self.letters.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if guessed.contains(letter) { letter.as_char() } else { '_' });
        }
        out
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = HangmanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Word {
    type Error = HangmanError;

    fn try_from(text: String) -> Result<Self> {
        Self::parse(&text)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> String {
        word.text
    }
}
