//! The Hangman game engine.
//!
//! `GameEngine` owns the current session and applies player actions to it:
//! - Letter guesses
//! - Hint requests
//! - New sessions (explicit, or acknowledging a finished game)
//!
//! Every operation runs to completion under `&mut self`, so a UI can call
//! it from an event handler and re-render from the read accessors after.

use smallvec::SmallVec;
use tracing::{debug, instrument, trace};

use super::guess::{GuessResult, GuessStatus};
use crate::core::{
    Action, GameRng, HangmanConfig, Letter, LetterSet, Outcome, RandomSource, Session,
    SessionSnapshot, Word,
};
use crate::error::{HangmanError, Result};
use crate::hints::{self, HintResult};
use crate::words::WordBank;

/// Title for the end-of-game dialog.
pub const GAME_OVER_TITLE: &str = "Game Over!";

/// Hangman game engine.
///
/// Generic over the random source so tests and hosts can inject their own.
/// Words and hints draw from separate sources, so hint usage never changes
/// which word the next session gets.
///
/// ## Example
///
/// ```
/// use hangman_engine::{GameEngine, HangmanConfig, Outcome};
///
/// let mut engine = GameEngine::new(HangmanConfig::new().with_seed(42)).unwrap();
/// engine.start_session_with_word("cat").unwrap();
///
/// for c in ['b', 'c', 'a', 't'] {
///     engine.guess_letter(c).unwrap();
/// }
///
/// assert_eq!(engine.outcome(), Outcome::Won);
/// assert_eq!(engine.compute_display(), "C A T");
/// assert_eq!(engine.remaining_turns(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<R: RandomSource = GameRng> {
    config: HangmanConfig,
    session: Session,
    word_rng: R,
    hint_rng: R,
}

impl GameEngine<GameRng> {
    /// Create an engine seeded from the config (or OS entropy) and start
    /// the first session.
    pub fn new(config: HangmanConfig) -> Result<Self> {
        let root = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let word_rng = root.for_context("word");
        let hint_rng = root.for_context("hint");
        Self::with_rngs(config, word_rng, hint_rng)
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine with explicit random sources for word draws and
    /// hints, and start the first session.
    pub fn with_rngs(config: HangmanConfig, mut word_rng: R, hint_rng: R) -> Result<Self> {
        if !(2..=26).contains(&config.max_turns) {
            return Err(HangmanError::InvalidConfig(format!(
                "max_turns must be 2-26, got {}",
                config.max_turns
            )));
        }
        let target = pick_word(&config.word_bank, &mut word_rng)?;
        let session = Session::new(target, config.max_turns);

        Ok(Self {
            config,
            session,
            word_rng,
            hint_rng,
        })
    }

    // === Sessions ===

    /// Replace the session with a fresh one for a random word.
    #[instrument(skip(self))]
    pub fn start_new_session(&mut self) {
        // The bank was checked non-empty at construction and never changes.
        if let Ok(target) = pick_word(&self.config.word_bank, &mut self.word_rng) {
            self.begin(target);
        }
    }

    /// Replace the session with a fresh one for a specific word.
    #[instrument(skip(self))]
    pub fn start_session_with_word(&mut self, word: &str) -> Result<()> {
        let target = Word::parse(word)?;
        self.begin(target);
        Ok(())
    }

    fn begin(&mut self, target: Word) {
        trace!(word = %target, "target word drawn");
        debug!(length = target.len(), max_turns = self.config.max_turns, "session started");
        self.session = Session::new(target, self.config.max_turns);
    }

    /// Start a new session if the current one has ended.
    ///
    /// This is what dismissing the end-of-game dialog does. Returns true if
    /// a new session was started.
    pub fn acknowledge_game_over(&mut self) -> bool {
        if self.session.outcome().is_over() {
            self.start_new_session();
            true
        } else {
            false
        }
    }

    // === Actions ===

    /// Guess a letter (case-insensitive).
    ///
    /// Repeated, hint-disabled and post-game guesses are reported in the
    /// result and change nothing. Only non-letters are errors.
    pub fn guess_letter(&mut self, c: char) -> Result<GuessResult> {
        let letter = Letter::try_from(c)?;
        let session = &mut self.session;

        let status = if session.outcome().is_over() {
            GuessStatus::GameOver
        } else if session.guessed_letters().contains(letter) {
            GuessStatus::Repeated
        } else if session.hint_disabled_letters().contains(letter) {
            GuessStatus::Unavailable
        } else {
            session.mark_guessed(letter);
            let status = if session.target().contains(letter) {
                GuessStatus::Hit
            } else {
                session.spend_turn();
                GuessStatus::Miss
            };
            session.record(Action::Guess(letter));
            session.refresh_outcome();
            status
        };

        let revealed: SmallVec<[usize; 4]> = if status == GuessStatus::Hit {
            session.target().positions(letter).collect()
        } else {
            SmallVec::new()
        };

        debug!(
            %letter,
            ?status,
            remaining_turns = session.remaining_turns(),
            outcome = %session.outcome(),
            "guess"
        );

        Ok(GuessResult {
            letter,
            status,
            outcome: session.outcome(),
            revealed,
        })
    }

    /// Request the next hint.
    pub fn request_hint(&mut self) -> HintResult {
        hints::tiers::request(&mut self.session, &self.config.word_bank, &mut self.hint_rng)
    }

    // === Derived Views ===

    /// Target word with unguessed letters masked, e.g. `"_ A _"`.
    #[must_use]
    pub fn compute_display(&self) -> String {
        self.session.display()
    }

    /// Illustration index: 0 (untouched) to `max_turns` (hanged).
    #[must_use]
    pub fn visual_stage(&self) -> u8 {
        self.session.visual_stage()
    }

    /// End-of-game message, or `None` while the game is in progress.
    #[must_use]
    pub fn game_over_message(&self) -> Option<String> {
        match self.session.outcome() {
            Outcome::InProgress => None,
            Outcome::Won => Some("Win!".to_string()),
            Outcome::Lost => Some(format!("Lose! The word is \"{}\".", self.session.target())),
        }
    }

    // === Read Access ===

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.session.outcome()
    }

    #[must_use]
    pub fn guessed_letters(&self) -> LetterSet {
        self.session.guessed_letters()
    }

    #[must_use]
    pub fn hint_disabled_letters(&self) -> LetterSet {
        self.session.hint_disabled_letters()
    }

    /// Letters the UI should show as disabled.
    #[must_use]
    pub fn disabled_letters(&self) -> LetterSet {
        self.session.disabled_letters()
    }

    /// Can this character be guessed right now? False for non-letters.
    #[must_use]
    pub fn is_selectable(&self, c: char) -> bool {
        Letter::new(c).is_some_and(|letter| self.session.is_selectable(letter))
    }

    #[must_use]
    pub fn hint_stage(&self) -> u8 {
        self.session.hint_stage()
    }

    #[must_use]
    pub fn remaining_turns(&self) -> u8 {
        self.session.remaining_turns()
    }

    #[must_use]
    pub fn wrong_guess_count(&self) -> u8 {
        self.session.wrong_guess_count()
    }

    #[must_use]
    pub fn target_word(&self) -> &Word {
        self.session.target()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn word_bank(&self) -> &WordBank {
        &self.config.word_bank
    }

    #[must_use]
    pub fn config(&self) -> &HangmanConfig {
        &self.config
    }

    // === Snapshots ===

    /// Capture the session for the UI to stash.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.session)
    }

    /// Replace the session with a validated snapshot.
    ///
    /// On error the current session is left untouched.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) -> Result<()> {
        self.session = snapshot.restore(self.config.max_turns)?;
        debug!(
            remaining_turns = self.session.remaining_turns(),
            hint_stage = self.session.hint_stage(),
            "session restored"
        );
        Ok(())
    }
}

fn pick_word<R: RandomSource>(bank: &WordBank, rng: &mut R) -> Result<Word> {
    bank.pick(rng).cloned().ok_or(HangmanError::EmptyWordBank)
}
