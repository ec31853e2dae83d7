//! Error type for API misuse and snapshot decoding.
//!
//! Game-level refusals (a hint that is not available, a repeated guess,
//! a guess after the game ended) are ordinary return values and never
//! show up here.

use derive_more::{Display, Error};

/// Errors returned by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum HangmanError {
    /// A guess that is not a letter A-Z (in either case).
    #[display("Invalid letter {_0:?}: expected A-Z")]
    InvalidLetter(#[error(not(source))] char),

    /// A word that is empty or contains anything other than A-Z.
    #[display("Invalid word {_0:?}: expected one or more letters A-Z")]
    InvalidWord(#[error(not(source))] String),

    /// A configuration value out of range.
    #[display("Invalid config: {_0}")]
    InvalidConfig(#[error(not(source))] String),

    /// The word bank has no words to draw from.
    #[display("Word bank is empty")]
    EmptyWordBank,

    /// A snapshot that violates a session invariant.
    #[display("Invalid snapshot: {_0}")]
    InvalidSnapshot(#[error(not(source))] String),

    /// Snapshot bytes could not be encoded or decoded.
    #[display("Snapshot codec error: {_0}")]
    Codec(#[error(not(source))] String),
}

impl From<bincode::Error> for HangmanError {
    fn from(err: bincode::Error) -> Self {
        Self::Codec(err.to_string())
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, HangmanError>;
