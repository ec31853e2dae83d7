//! Core engine types: letters, words, session state, actions, RNG, configuration.
//!
//! This module contains the plain data the rules operate on. Nothing here
//! knows about hints or word banks beyond the types they share.

pub mod letter;
pub mod word;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod snapshot;

pub use letter::{Letter, LetterSet};
pub use word::Word;
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{HangmanConfig, DEFAULT_MAX_TURNS};
pub use action::{Action, ActionRecord};
pub use state::{Outcome, Session, MAX_HINT_STAGE};
pub use snapshot::SessionSnapshot;
