//! Word bank: the word list and its category table.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{RandomSource, Word};
use crate::error::Result;

/// The built-in word list and categories.
const STANDARD_WORDS: [(&str, &str); 20] = [
    ("CAT", "ANIMAL"),
    ("DOG", "ANIMAL"),
    ("SKY", "NATURE"),
    ("HELLO", "GREETING"),
    ("APPLE", "FOOD"),
    ("HOUSE", "BUILDING"),
    ("LION", "ANIMAL"),
    ("BIRD", "ANIMAL"),
    ("TREE", "NATURE"),
    ("FISH", "ANIMAL"),
    ("BOOK", "OBJECT"),
    ("STAR", "NATURE"),
    ("MOON", "NATURE"),
    ("SUN", "NATURE"),
    ("RAIN", "NATURE"),
    ("WIND", "NATURE"),
    ("FIRE", "ELEMENT"),
    ("ICE", "ELEMENT"),
    ("EARTH", "ELEMENT"),
    ("WATER", "ELEMENT"),
];

/// One word and its category, as stored in config files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: Word,
    pub category: String,
}

/// Immutable word → category table.
///
/// Keeps insertion order for uniform selection and an `FxHashMap` for
/// category lookup. Lookup is exact on the uppercase word; a missing word
/// has the empty category.
///
/// ## Example
///
/// ```
/// use hangman_engine::words::WordBank;
///
/// let bank = WordBank::standard();
/// assert_eq!(bank.len(), 20);
/// assert_eq!(bank.category("SKY"), "NATURE");
/// assert_eq!(bank.category("sky"), "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<WordEntry>", into = "Vec<WordEntry>")]
pub struct WordBank {
    words: Vec<Word>,
    categories: FxHashMap<String, String>,
}

impl WordBank {
    /// Create an empty word bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in 20-word bank.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_WORDS
            .iter()
            .filter_map(|&(word, category)| {
                Word::parse(word).ok().map(|word| WordEntry {
                    word,
                    category: category.to_string(),
                })
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// Add a word with its category.
    ///
    /// The word is case-normalized. Adding a word twice keeps the latest
    /// category and lists the word once.
    pub fn with_entry(mut self, word: &str, category: impl Into<String>) -> Result<Self> {
        self.insert(Word::parse(word)?, category.into());
        Ok(self)
    }

    fn insert(&mut self, word: Word, category: String) {
        if self.categories.insert(word.as_str().to_string(), category).is_none() {
            self.words.push(word);
        }
    }

    /// Category label for a word, or `""` if the word is unknown.
    #[must_use]
    pub fn category(&self, word: &str) -> &str {
        self.categories.get(word).map_or("", String::as_str)
    }

    /// Is this exact uppercase word in the bank?
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.categories.contains_key(word)
    }

    /// All words in insertion order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a word uniformly at random. `None` if the bank is empty.
    pub fn pick<R: RandomSource>(&self, rng: &mut R) -> Option<&Word> {
        if self.words.is_empty() {
            return None;
        }
        self.words.get(rng.index(self.words.len()))
    }
}

impl From<Vec<WordEntry>> for WordBank {
    fn from(entries: Vec<WordEntry>) -> Self {
        let mut bank = Self::new();
        for entry in entries {
            bank.insert(entry.word, entry.category);
        }
        bank
    }
}

impl From<WordBank> for Vec<WordEntry> {
    fn from(mut bank: WordBank) -> Self {
        bank.words
            .into_iter()
            .map(|word| {
                let category = bank.categories.remove(word.as_str()).unwrap_or_default();
                WordEntry { word, category }
            })
            .collect()
    }
}
