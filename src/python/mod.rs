//! Python bindings for the Hangman engine.
//!
//! This module provides PyO3 bindings so scripted front ends and bots can
//! drive the same rules as a native UI.
//!
//! # Quick Start
//!
//! ```python
//! import hangman_engine as hm
//!
//! game = hm.GameEngine(seed=42)
//! game.start_session_with_word("sky")
//!
//! granted, message, letters = game.request_hint()
//! assert message == "Hint: NATURE"
//!
//! game.guess_letter("s")
//! print(game.display())  # S _ _
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// hangman_engine: a Hangman rules engine with hints.
#[pymodule]
fn hangman_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameEngine>()?;
    m.add("GAME_OVER_TITLE", crate::GAME_OVER_TITLE)?;
    Ok(())
}
