//! Hint system integration tests.
//!
//! These tests walk the three hint stages through the engine and check the
//! turn cost, the letter sets each stage touches, and every refusal path.

use hangman_engine::{
    GameEngine, GuessStatus, HangmanConfig, Hint, HintRefusal, HintResult, Letter, LetterSet,
    Outcome,
};

fn engine_with_word(word: &str, seed: u64) -> GameEngine {
    let mut engine = GameEngine::new(HangmanConfig::new().with_seed(seed)).unwrap();
    engine.start_session_with_word(word).unwrap();
    engine
}

fn letters(s: &str) -> LetterSet {
    s.chars().filter_map(Letter::new).collect()
}

// =============================================================================
// Stage 0: Category
// =============================================================================

#[test]
fn test_category_hint_sky() {
    let mut engine = engine_with_word("SKY", 1);

    let result = engine.request_hint();
    assert_eq!(result, HintResult::Granted(Hint::Category("NATURE".into())));
    assert_eq!(result.message(), "Hint: NATURE");
    assert_eq!(engine.hint_stage(), 1);
}

/// The category hint is free and touches no letters.
#[test]
fn test_category_hint_is_free() {
    let mut engine = engine_with_word("APPLE", 1);
    engine.guess_letter('Z').unwrap();
    let turns = engine.remaining_turns();
    let guessed = engine.guessed_letters();

    engine.request_hint();

    assert_eq!(engine.remaining_turns(), turns);
    assert_eq!(engine.guessed_letters(), guessed);
    assert!(engine.hint_disabled_letters().is_empty());
}

/// The category hint is granted even on the last turn.
#[test]
fn test_category_hint_on_last_turn() {
    let mut engine = engine_with_word("FIRE", 1);
    for c in "QXZJV".chars() {
        engine.guess_letter(c).unwrap();
    }
    assert_eq!(engine.remaining_turns(), 1);
    assert_eq!(engine.request_hint().category(), Some("ELEMENT"));
}

// =============================================================================
// Stage 1: Disable Wrong Letters
// =============================================================================

#[test]
fn test_disable_letters() {
    let mut engine = engine_with_word("EARTH", 3);
    engine.guess_letter('Q').unwrap();
    engine.request_hint();

    let result = engine.request_hint();
    let disabled = result.letters();

    // 26 - 5 word letters - Q = 20 candidates, half disabled
    assert!(matches!(result, HintResult::Granted(Hint::LettersDisabled(_))));
    assert_eq!(result.message(), "Hint: Disabled some incorrect letters");
    assert_eq!(disabled.len(), 10);
    assert!(disabled.is_disjoint(letters("EARTHQ")));
    assert_eq!(engine.remaining_turns(), 4);
    assert_eq!(engine.hint_stage(), 2);

    // Disabled letters are not guessed, just unselectable
    assert_eq!(engine.guessed_letters(), letters("Q"));
    for letter in disabled.iter() {
        assert!(!engine.is_selectable(letter.as_char()));
        assert_eq!(
            engine.guess_letter(letter.as_char()).unwrap().status,
            GuessStatus::Unavailable
        );
    }
    assert_eq!(engine.remaining_turns(), 4);
    assert_eq!(engine.compute_display(), "_ _ _ _ _");
}

/// The stage-1 hint refuses on the last turn and does not advance.
#[test]
fn test_disable_not_available_on_last_turn() {
    let mut engine = engine_with_word("DOG", 1);
    engine.request_hint();
    for c in "QXZJV".chars() {
        engine.guess_letter(c).unwrap();
    }
    assert_eq!(engine.remaining_turns(), 1);
    let before = engine.session().clone();

    let result = engine.request_hint();

    assert_eq!(result, HintResult::Refused(HintRefusal::NotAvailable));
    assert_eq!(result.message(), "Hint not available");
    assert_eq!(engine.session(), &before);
    assert_eq!(engine.hint_stage(), 1);
}

/// Same seed, same disabled subset.
#[test]
fn test_disable_is_deterministic() {
    let run = |seed| {
        let mut engine = engine_with_word("LION", seed);
        engine.request_hint();
        engine.request_hint().letters()
    };

    assert_eq!(run(8), run(8));
    assert_ne!(run(8), run(9));
}

// =============================================================================
// Stage 2: Reveal Vowels
// =============================================================================

#[test]
fn test_reveal_vowels() {
    let mut engine = engine_with_word("HOUSE", 4);
    engine.guess_letter('O').unwrap();
    engine.request_hint();
    engine.request_hint();
    let guessed_before = engine.guessed_letters();

    let result = engine.request_hint();

    assert_eq!(result, HintResult::Granted(Hint::VowelsRevealed(letters("EU"))));
    assert_eq!(result.message(), "Hint: Revealed all vowels");
    assert_eq!(
        engine.guessed_letters().difference(guessed_before),
        letters("EU")
    );
    assert_eq!(engine.compute_display(), "_ O U _ E");
    assert_eq!(engine.remaining_turns(), 4);
    assert_eq!(engine.hint_stage(), 3);

    // Every vowel is now unselectable
    for c in ['A', 'E', 'I', 'O', 'U'] {
        assert!(!engine.is_selectable(c));
    }
}

#[test]
fn test_no_unrevealed_vowels() {
    let mut engine = engine_with_word("BIRD", 4);
    engine.guess_letter('I').unwrap();
    engine.request_hint();
    engine.request_hint();
    let before = engine.session().clone();

    let result = engine.request_hint();

    assert_eq!(result.refusal(), Some(HintRefusal::NoUnrevealedVowels));
    assert_eq!(result.message(), "No unrevealed vowels");
    assert_eq!(engine.session(), &before);
    assert_eq!(engine.hint_stage(), 2);
}

#[test]
fn test_reveal_vowels_not_available_on_last_turn() {
    let mut engine = engine_with_word("WATER", 4);
    engine.request_hint();
    engine.request_hint();
    while engine.remaining_turns() > 1 {
        // Any selectable wrong letter
        let wrong = LetterSet::alphabet()
            .difference(engine.disabled_letters())
            .difference(engine.target_word().letter_set())
            .iter()
            .next()
            .unwrap();
        assert_eq!(engine.guess_letter(wrong.as_char()).unwrap().status, GuessStatus::Miss);
    }

    let result = engine.request_hint();
    assert_eq!(result.refusal(), Some(HintRefusal::NotAvailable));
    assert_eq!(engine.hint_stage(), 2);
}

/// Revealing the last missing letters through the vowel hint wins.
#[test]
fn test_vowel_hint_wins() {
    let mut engine = engine_with_word("RAIN", 4);
    for c in ['R', 'N'] {
        engine.guess_letter(c).unwrap();
    }
    engine.request_hint();
    engine.request_hint();
    engine.request_hint();

    assert_eq!(engine.outcome(), Outcome::Won);
    assert_eq!(engine.compute_display(), "R A I N");
}

// =============================================================================
// Exhaustion and Game Over
// =============================================================================

#[test]
fn test_hints_exhausted() {
    let mut engine = engine_with_word("STAR", 5);
    for _ in 0..3 {
        assert!(engine.request_hint().is_granted());
    }
    let turns = engine.remaining_turns();

    for _ in 0..3 {
        let result = engine.request_hint();
        assert_eq!(result.refusal(), Some(HintRefusal::Exhausted));
        assert_eq!(result.message(), "No more hints available");
    }
    assert_eq!(engine.remaining_turns(), turns);
    assert_eq!(engine.hint_stage(), 3);
}

#[test]
fn test_hint_after_game_over() {
    let mut engine = engine_with_word("SUN", 5);
    for c in ['S', 'U', 'N'] {
        engine.guess_letter(c).unwrap();
    }
    let result = engine.request_hint();
    assert_eq!(result.refusal(), Some(HintRefusal::GameOver));
    assert_eq!(engine.hint_stage(), 0);
}

/// Hints are recorded in the session history.
#[test]
fn test_hints_recorded() {
    let mut engine = engine_with_word("MOON", 5);
    engine.request_hint();
    engine.guess_letter('M').unwrap();
    engine.request_hint();

    let actions: Vec<String> = engine
        .session()
        .history()
        .iter()
        .map(|r| r.action.to_string())
        .collect();
    assert_eq!(actions, vec!["Hint(0)", "Guess(M)", "Hint(1)"]);
}
