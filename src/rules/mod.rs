//! Game rules: the engine and its action results.
//!
//! `GameEngine` is the only entry point a UI needs. It holds the session,
//! applies guesses and hints, and exposes the derived views to render.

pub mod engine;
pub mod guess;

pub use engine::{GameEngine, GAME_OVER_TITLE};
pub use guess::{GuessResult, GuessStatus};
