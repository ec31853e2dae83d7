//! The three hint tiers.
//!
//! Each successful hint advances the session's hint stage by one:
//!
//! | Stage | Hint | Cost |
//! |-------|------|------|
//! | 0 | Category of the word | free |
//! | 1 | Disable half (rounded up) of the remaining wrong letters | 1 turn |
//! | 2 | Reveal every unrevealed vowel of the word | 1 turn |
//!
//! Paid hints are refused while only one turn is left, so a hint can never
//! lose the game. A refusal leaves the session untouched, stage included.

use smallvec::SmallVec;
use tracing::debug;

use super::result::{Hint, HintRefusal, HintResult};
use crate::core::{Action, Letter, LetterSet, RandomSource, Session};
use crate::words::WordBank;

/// Paid hints need strictly more turns than this.
const MIN_TURNS_FOR_PAID_HINT: u8 = 1;

/// Run the hint for the session's current stage.
pub(crate) fn request<R: RandomSource>(
    session: &mut Session,
    bank: &WordBank,
    rng: &mut R,
) -> HintResult {
    if session.outcome().is_over() {
        return HintResult::Refused(HintRefusal::GameOver);
    }

    let stage = session.hint_stage();
    let result = match stage {
        0 => category(session, bank),
        1 => disable_wrong_letters(session, rng),
        2 => reveal_vowels(session),
        _ => Err(HintRefusal::Exhausted),
    };

    match result {
        Ok(hint) => {
            session.advance_hint_stage();
            session.record(Action::Hint(stage));
            session.refresh_outcome();
            debug!(
                stage,
                remaining_turns = session.remaining_turns(),
                outcome = %session.outcome(),
                "hint granted: {hint}"
            );
            HintResult::Granted(hint)
        }
        Err(reason) => {
            debug!(stage, remaining_turns = session.remaining_turns(), "hint refused: {reason}");
            HintResult::Refused(reason)
        }
    }
}

fn category(session: &Session, bank: &WordBank) -> Result<Hint, HintRefusal> {
    Ok(Hint::Category(
        bank.category(session.target().as_str()).to_string(),
    ))
}

fn check_can_pay(session: &Session) -> Result<(), HintRefusal> {
    if session.remaining_turns() <= MIN_TURNS_FOR_PAID_HINT {
        Err(HintRefusal::NotAvailable)
    } else {
        Ok(())
    }
}

fn disable_wrong_letters<R: RandomSource>(
    session: &mut Session,
    rng: &mut R,
) -> Result<Hint, HintRefusal> {
    check_can_pay(session)?;

    let candidates = LetterSet::alphabet()
        .difference(session.target().letter_set())
        .difference(session.disabled_letters());
    if candidates.is_empty() {
        return Err(HintRefusal::NoLettersToDisable);
    }

    let mut pool: SmallVec<[Letter; 26]> = candidates.iter().collect();
    rng.shuffle(&mut pool);
    let take = pool.len().div_ceil(2);
    let chosen: LetterSet = pool.into_iter().take(take).collect();

    session.disable(chosen);
    session.spend_turn();
    Ok(Hint::LettersDisabled(chosen))
}

fn reveal_vowels(session: &mut Session) -> Result<Hint, HintRefusal> {
    check_can_pay(session)?;

    let vowels = LetterSet::vowels();
    let word = session.target().letter_set();
    let hidden = word.intersection(vowels).difference(session.guessed_letters());
    if hidden.is_empty() {
        return Err(HintRefusal::NoUnrevealedVowels);
    }

    for vowel in hidden.iter() {
        session.mark_guessed(vowel);
    }
    // The rest of the vowels are known to be wrong now.
    session.disable(vowels.difference(word).difference(session.disabled_letters()));
    session.spend_turn();
    Ok(Hint::VowelsRevealed(hidden))
}
