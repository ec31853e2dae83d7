//! # hangman-engine
//!
//! A single-player Hangman rules engine with a three-tier hint system.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine is a plain value. A UI holds it, calls an
//!    operation on each input event and re-renders from the accessors.
//!
//! 2. **Refusals Are Values**: Hints that are not available, repeated
//!    guesses and guesses after the game ended come back as results with a
//!    message. Errors are reserved for API misuse.
//!
//! 3. **Deterministic**: All randomness flows through `RandomSource`. A
//!    seeded `GameRng` reproduces words and hint picks exactly.
//!
//! ## Modules
//!
//! - `core`: Letters, words, session state, actions, RNG, configuration
//! - `words`: Word bank with categories
//! - `hints`: Hint stages and results
//! - `rules`: The `GameEngine`
//! - `error`: Error type
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod error;
pub mod words;
pub mod hints;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Letter, LetterSet, Word,
    GameRng, GameRngState, RandomSource,
    HangmanConfig, DEFAULT_MAX_TURNS,
    Action, ActionRecord,
    Outcome, Session, SessionSnapshot, MAX_HINT_STAGE,
};

pub use crate::error::{HangmanError, Result};

pub use crate::words::{WordBank, WordEntry};

pub use crate::hints::{Hint, HintRefusal, HintResult};

pub use crate::rules::{GameEngine, GuessResult, GuessStatus, GAME_OVER_TITLE};
