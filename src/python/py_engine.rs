//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{HangmanConfig, SessionSnapshot};
use crate::error::HangmanError;
use crate::rules::GameEngine;

fn to_py_err(err: HangmanError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for GameEngine.
#[pyclass(name = "GameEngine")]
pub struct PyGameEngine {
    engine: GameEngine,
}

#[pymethods]
impl PyGameEngine {
    /// Create an engine and start the first session.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible games (None = random)
    /// - max_turns: Turn budget per session (2-26)
    #[new]
    #[pyo3(signature = (seed = None, max_turns = 6))]
    fn new(seed: Option<u64>, max_turns: u8) -> PyResult<Self> {
        let mut config = HangmanConfig::new();
        config.seed = seed;
        config.max_turns = max_turns;
        let engine = GameEngine::new(config).map_err(to_py_err)?;
        Ok(Self { engine })
    }

    /// Start a new session with a random word.
    fn start_new_session(&mut self) {
        self.engine.start_new_session();
    }

    /// Start a new session with a specific word.
    fn start_session_with_word(&mut self, word: &str) -> PyResult<()> {
        self.engine.start_session_with_word(word).map_err(to_py_err)
    }

    /// Guess a letter. Returns (status, revealed positions).
    fn guess_letter(&mut self, letter: char) -> PyResult<(String, Vec<usize>)> {
        let result = self.engine.guess_letter(letter).map_err(to_py_err)?;
        Ok((format!("{:?}", result.status), result.revealed.to_vec()))
    }

    /// Request a hint. Returns (granted, message, letters).
    fn request_hint(&mut self) -> (bool, String, String) {
        let result = self.engine.request_hint();
        (result.is_granted(), result.message(), result.letters().to_string())
    }

    /// Masked word, e.g. "_ A _".
    fn display(&self) -> String {
        self.engine.compute_display()
    }

    /// Illustration index (0 = untouched).
    fn visual_stage(&self) -> u8 {
        self.engine.visual_stage()
    }

    /// End-of-game message, or None while in progress.
    fn game_over_message(&self) -> Option<String> {
        self.engine.game_over_message()
    }

    /// Start a new session if the game ended. Returns True if it did.
    fn acknowledge_game_over(&mut self) -> bool {
        self.engine.acknowledge_game_over()
    }

    /// Can this letter be guessed now?
    fn is_selectable(&self, letter: char) -> bool {
        self.engine.is_selectable(letter)
    }

    #[getter]
    fn outcome(&self) -> String {
        self.engine.outcome().to_string()
    }

    #[getter]
    fn remaining_turns(&self) -> u8 {
        self.engine.remaining_turns()
    }

    #[getter]
    fn hint_stage(&self) -> u8 {
        self.engine.hint_stage()
    }

    #[getter]
    fn guessed_letters(&self) -> String {
        self.engine.guessed_letters().to_string()
    }

    #[getter]
    fn disabled_letters(&self) -> String {
        self.engine.disabled_letters().to_string()
    }

    /// Encode the session snapshot as bytes.
    fn snapshot_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.engine.snapshot().to_bytes().map_err(to_py_err)?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Restore a session from snapshot bytes.
    fn restore_bytes(&mut self, data: &[u8]) -> PyResult<()> {
        let snapshot = SessionSnapshot::from_bytes(data).map_err(to_py_err)?;
        self.engine.restore(&snapshot).map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "GameEngine(display='{}', turns={}, hint_stage={}, outcome={})",
            self.engine.compute_display(),
            self.engine.remaining_turns(),
            self.engine.hint_stage(),
            self.engine.outcome()
        )
    }
}
