//! Letters and letter sets.
//!
//! ## Letter
//!
//! Type-safe `A`-`Z` letter. Lowercase input is normalized on construction,
//! anything else is rejected.
//!
//! ## LetterSet
//!
//! A set of letters packed into a 26-bit mask. Copying is free and iteration
//! is always alphabetical, which keeps hint selection deterministic for a
//! given seed.

use serde::{Deserialize, Serialize};

/// A single uppercase letter `A`-`Z`.
///
/// Stored as its 0-based alphabet index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet.
    pub const COUNT: usize = 26;

    /// The vowels, in alphabetical order.
    pub const VOWELS: [Letter; 5] = [Letter(0), Letter(4), Letter(8), Letter(14), Letter(20)];

    /// Create a letter from a character, normalizing case.
    ///
    /// ```
    /// use hangman_engine::core::Letter;
    ///
    /// assert_eq!(Letter::new('q'), Letter::new('Q'));
    /// assert!(Letter::new('7').is_none());
    /// ```
    #[must_use]
    pub fn new(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Self(upper as u8 - b'A'))
        } else {
            None
        }
    }

    /// Create a letter from its alphabet index (0 = `A`).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the alphabet index (0 = `A`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the uppercase character.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Is this one of A, E, I, O, U?
    #[must_use]
    pub fn is_vowel(self) -> bool {
        Self::VOWELS.contains(&self)
    }

    /// Iterate over the whole alphabet.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..Self::COUNT as u8).map(Letter)
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = crate::HangmanError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or(crate::HangmanError::InvalidLetter(c))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

/// A set of letters.
///
/// ```
/// use hangman_engine::core::{Letter, LetterSet};
///
/// let set: LetterSet = "CAT".chars().filter_map(Letter::new).collect();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.to_string(), "ACT");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LetterSet(u32);

impl LetterSet {
    const MASK: u32 = (1 << Letter::COUNT) - 1;

    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every letter A-Z.
    #[must_use]
    pub const fn alphabet() -> Self {
        Self(Self::MASK)
    }

    /// The vowels A, E, I, O, U.
    #[must_use]
    pub fn vowels() -> Self {
        Letter::VOWELS.into_iter().collect()
    }

    /// Check membership.
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.0) != 0
    }

    /// Add a letter. Returns true if it was not already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let was_absent = !self.contains(letter);
        self.0 |= 1 << letter.0;
        was_absent
    }

    /// Number of letters in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Is the set empty?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Is every letter of `self` also in `other`?
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Do the sets share no letters?
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Iterate in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |&l| self.contains(l))
    }

    /// Raw bit mask (bit 0 = `A`).
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build from a raw bit mask, rejecting bits above `Z`.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & !Self::MASK == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }
}

impl TryFrom<u32> for LetterSet {
    type Error = crate::HangmanError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or_else(|| {
            crate::HangmanError::InvalidSnapshot(format!("letter mask {bits:#x} has bits above Z"))
        })
    }
}

impl From<LetterSet> for u32 {
    fn from(set: LetterSet) -> u32 {
        set.0
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::empty();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl Extend<Letter> for LetterSet {
    fn extend<I: IntoIterator<Item = Letter>>(&mut self, iter: I) {
        for letter in iter {
            self.insert(letter);
        }
    }
}

impl std::fmt::Display for LetterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
