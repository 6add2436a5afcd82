/// Hangman rules: one round at a time, no UI or word selection concerns
use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Wrong guesses that end a round.
pub const MAX_WRONG: u8 = 6;

/// Marker for a letter that has not been revealed yet.
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

/// What happened to a single submitted letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Correct,
    Wrong,
    AlreadyGuessed,
    InvalidInput,
    RoundAlreadyOver,
}

impl GuessResult {
    /// Only accepted guesses touch the round.
    pub fn was_accepted(self) -> bool {
        matches!(self, GuessResult::Correct | GuessResult::Wrong)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub result: GuessResult,
    /// The submitted letter after case normalisation.
    pub letter: char,
    /// Round status once the guess has been resolved.
    pub status: RoundStatus,
}

/// How a letter of the alphabet stands in the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterMark {
    #[default]
    Unused,
    Hit,
    Miss,
}

/// Read-only snapshot of a round, handed to presentations for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub revealed: Vec<char>,
    pub wrong_guesses: u8,
    pub max_wrong: u8,
    /// Guessed letters in alphabetical order.
    pub guessed: Vec<char>,
    pub status: RoundStatus,
    solution: Option<String>,
}

impl RoundView {
    pub fn word_len(&self) -> usize {
        self.revealed.len()
    }

    pub fn remaining_tries(&self) -> u8 {
        self.max_wrong - self.wrong_guesses
    }

    /// Revealed letters separated by single spaces, e.g. `J _ V _`.
    pub fn masked_word(&self) -> String {
        let mut out = String::with_capacity(self.revealed.len() * 2);
        for (i, c) in self.revealed.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*c);
        }
        out
    }

    /// The secret word, only available once the round is over.
    pub fn solution(&self) -> Option<&str> {
        self.solution.as_deref()
    }

    /// A guessed letter is a hit iff it shows up in the revealed word.
    pub fn mark(&self, letter: char) -> LetterMark {
        let letter = letter.to_ascii_uppercase();
        if !self.guessed.contains(&letter) {
            LetterMark::Unused
        } else if self.revealed.contains(&letter) {
            LetterMark::Hit
        } else {
            LetterMark::Miss
        }
    }
}

#[derive(Debug, Clone)]
struct Round {
    secret: Vec<char>,
    revealed: Vec<char>,
    guessed: BTreeSet<char>,
    wrong_guesses: u8,
}

impl Round {
    fn new(word: &str) -> Result<Self> {
        let secret: Vec<char> = normalize_word(word)?.chars().collect();
        Ok(Self {
            revealed: vec![PLACEHOLDER; secret.len()],
            secret,
            guessed: BTreeSet::new(),
            wrong_guesses: 0,
        })
    }

    fn status(&self) -> RoundStatus {
        if !self.revealed.contains(&PLACEHOLDER) {
            RoundStatus::Won
        } else if self.wrong_guesses >= MAX_WRONG {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Reveals every position holding `letter`, returns whether any matched.
    fn reveal(&mut self, letter: char) -> bool {
        let mut matched = false;
        for (slot, secret) in self.revealed.iter_mut().zip(&self.secret) {
            if *secret == letter {
                *slot = letter;
                matched = true;
            }
        }
        matched
    }
}

/// Uppercases `word` and checks it only holds the letters A-Z. Surrounding
/// whitespace is not stripped.
pub fn normalize_word(word: &str) -> Result<String> {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidWord(word.to_owned()));
    }
    Ok(word.to_ascii_uppercase())
}

/// Owns the active round. Every mutation goes through [`GameEngine::submit_guess`]
/// or [`GameEngine::start_new_game`].
#[derive(Debug, Clone)]
pub struct GameEngine {
    round: Round,
}

impl GameEngine {
    pub fn new(word: &str) -> Result<Self> {
        let round = Round::new(word)?;
        info!(word_len = round.secret.len(), "round started");
        Ok(Self { round })
    }

    /// Replaces the current round. An invalid word keeps the old round in place.
    pub fn start_new_game(&mut self, word: &str) -> Result<RoundView> {
        self.round = Round::new(word)?;
        info!(word_len = self.round.secret.len(), "round started");
        Ok(self.current_view())
    }

    pub fn submit_guess(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_ascii_uppercase();
        let status = self.round.status();

        let result = if status.is_over() {
            GuessResult::RoundAlreadyOver
        } else if self.round.guessed.contains(&letter) {
            GuessResult::AlreadyGuessed
        } else if !letter.is_ascii_alphabetic() {
            GuessResult::InvalidInput
        } else {
            self.round.guessed.insert(letter);
            if self.round.reveal(letter) {
                GuessResult::Correct
            } else {
                self.round.wrong_guesses += 1;
                GuessResult::Wrong
            }
        };

        let status = self.round.status();
        debug!(%letter, ?result, ?status, wrong = self.round.wrong_guesses, "guess resolved");
        if result.was_accepted() && status.is_over() {
            info!(?status, wrong = self.round.wrong_guesses, "round finished");
        }

        GuessOutcome { result, letter, status }
    }

    pub fn status(&self) -> RoundStatus {
        self.round.status()
    }

    pub fn current_view(&self) -> RoundView {
        let status = self.round.status();
        RoundView {
            revealed: self.round.revealed.clone(),
            wrong_guesses: self.round.wrong_guesses,
            max_wrong: MAX_WRONG,
            guessed: self.round.guessed.iter().copied().collect(),
            status,
            solution: status
                .is_over()
                .then(|| self.round.secret.iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revealed(engine: &GameEngine) -> String {
        engine.current_view().revealed.iter().collect()
    }

    #[test]
    fn new_round_is_all_placeholders() {
        let engine = GameEngine::new("hangman").unwrap();
        let view = engine.current_view();

        assert_eq!(view.word_len(), 7);
        assert!(view.revealed.iter().all(|c| *c == PLACEHOLDER));
        assert_eq!(view.wrong_guesses, 0);
        assert_eq!(view.max_wrong, MAX_WRONG);
        assert_eq!(view.status, RoundStatus::InProgress);
        assert!(view.guessed.is_empty());
        assert_eq!(view.solution(), None);
    }

    #[test]
    fn empty_or_non_letter_words_are_rejected() {
        assert!(matches!(GameEngine::new(""), Err(Error::InvalidWord(_))));
        assert!(matches!(GameEngine::new("   "), Err(Error::InvalidWord(_))));
        assert!(matches!(GameEngine::new("R2D2"), Err(Error::InvalidWord(_))));
        assert!(matches!(GameEngine::new("ÉCOLE"), Err(Error::InvalidWord(_))));
    }

    #[test]
    fn whitespace_around_a_word_is_rejected() {
        match GameEngine::new(" JAVA") {
            Err(Error::InvalidWord(word)) => assert_eq!(word, " JAVA"),
            other => panic!("expected InvalidWord, got {:?}", other.map(|e| e.current_view())),
        }

        let mut engine = GameEngine::new("GO").unwrap();
        assert!(matches!(engine.start_new_game("JAVA\n"), Err(Error::InvalidWord(_))));
        assert_eq!(engine.current_view().word_len(), 2);
    }

    #[test]
    fn finished_round_outranks_repeat_and_invalid_checks() {
        let mut engine = GameEngine::new("A").unwrap();
        assert_eq!(engine.submit_guess('A').status, RoundStatus::Won);

        for c in ['A', 'a', '1', ' '] {
            let outcome = engine.submit_guess(c);
            assert_eq!(outcome.result, GuessResult::RoundAlreadyOver);
            assert_eq!(outcome.status, RoundStatus::Won);
        }
        assert_eq!(engine.current_view().guessed, vec!['A']);
    }

    #[test]
    fn repeat_outranks_invalid_while_playing() {
        let mut engine = GameEngine::new("JAVA").unwrap();
        engine.submit_guess('j');
        assert_eq!(engine.submit_guess('J').result, GuessResult::AlreadyGuessed);
        assert_eq!(engine.submit_guess('1').result, GuessResult::InvalidInput);
    }

    #[test]
    fn invalid_restart_keeps_the_current_round() {
        let mut engine = GameEngine::new("JAVA").unwrap();
        engine.submit_guess('J');

        assert!(engine.start_new_game("").is_err());
        assert_eq!(revealed(&engine), "J___");
    }

    #[test]
    fn start_new_game_resets_everything() {
        let mut engine = GameEngine::new("JAVA").unwrap();
        engine.submit_guess('Z');
        engine.submit_guess('J');

        let view = engine.start_new_game("rust").unwrap();
        assert_eq!(view.revealed, vec!['_'; 4]);
        assert_eq!(view.wrong_guesses, 0);
        assert!(view.guessed.is_empty());
        assert_eq!(engine.submit_guess('r').result, GuessResult::Correct);
        assert_eq!(revealed(&engine), "R___");
    }

    #[test]
    fn repeated_letters_are_all_revealed_at_once() {
        let mut engine = GameEngine::new("DEVELOPER").unwrap();
        let outcome = engine.submit_guess('E');

        assert_eq!(outcome.result, GuessResult::Correct);
        assert_eq!(revealed(&engine), "_E_E___E_");
        assert_eq!(engine.current_view().wrong_guesses, 0);
    }

    #[test]
    fn second_submission_of_a_letter_changes_nothing() {
        let mut engine = GameEngine::new("JAVA").unwrap();
        engine.submit_guess('Q');
        let before = engine.current_view();

        let outcome = engine.submit_guess('Q');
        assert_eq!(outcome.result, GuessResult::AlreadyGuessed);
        assert_eq!(engine.current_view(), before);

        engine.submit_guess('A');
        let before = engine.current_view();
        assert_eq!(engine.submit_guess('A').result, GuessResult::AlreadyGuessed);
        assert_eq!(engine.current_view(), before);
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let mut engine = GameEngine::new("JAVA").unwrap();

        let first = engine.submit_guess('a');
        assert_eq!(first.result, GuessResult::Correct);
        assert_eq!(first.letter, 'A');
        assert_eq!(engine.submit_guess('A').result, GuessResult::AlreadyGuessed);
    }

    #[test]
    fn non_letters_are_invalid_and_not_recorded() {
        let mut engine = GameEngine::new("JAVA").unwrap();

        for c in ['1', ' ', '_', '!', 'é'] {
            let outcome = engine.submit_guess(c);
            assert_eq!(outcome.result, GuessResult::InvalidInput);
            assert_eq!(outcome.status, RoundStatus::InProgress);
        }
        let view = engine.current_view();
        assert!(view.guessed.is_empty());
        assert_eq!(view.wrong_guesses, 0);
    }

    #[test]
    fn sixth_miss_loses_and_further_guesses_are_refused() {
        let mut engine = GameEngine::new("JAVA").unwrap();

        for (i, c) in ['B', 'C', 'D', 'E', 'F'].into_iter().enumerate() {
            let outcome = engine.submit_guess(c);
            assert_eq!(outcome.result, GuessResult::Wrong);
            assert_eq!(outcome.status, RoundStatus::InProgress);
            assert_eq!(engine.current_view().wrong_guesses, i as u8 + 1);
        }

        let sixth = engine.submit_guess('G');
        assert_eq!(sixth.result, GuessResult::Wrong);
        assert_eq!(sixth.status, RoundStatus::Lost);

        let seventh = engine.submit_guess('H');
        assert_eq!(seventh.result, GuessResult::RoundAlreadyOver);
        assert_eq!(seventh.status, RoundStatus::Lost);

        let view = engine.current_view();
        assert_eq!(view.wrong_guesses, MAX_WRONG);
        assert!(!view.guessed.contains(&'H'));
        assert_eq!(view.solution(), Some("JAVA"));
    }

    #[test]
    fn java_is_won_in_any_order() {
        let orders = [['J', 'A', 'V'], ['V', 'J', 'A'], ['A', 'V', 'J']];
        for order in orders {
            let mut engine = GameEngine::new("JAVA").unwrap();
            engine.submit_guess('X');
            let mut last = None;
            for c in order {
                last = Some(engine.submit_guess(c));
            }
            let last = last.unwrap();
            assert_eq!(last.status, RoundStatus::Won);
            assert_eq!(engine.current_view().wrong_guesses, 1);
            assert_eq!(engine.submit_guess('Q').result, GuessResult::RoundAlreadyOver);
        }
    }

    #[test]
    fn java_scenario_step_by_step() {
        let mut engine = GameEngine::new("JAVA").unwrap();

        let outcome = engine.submit_guess('J');
        assert_eq!(outcome.result, GuessResult::Correct);
        assert_eq!(revealed(&engine), "J___");
        assert_eq!(engine.current_view().wrong_guesses, 0);

        let outcome = engine.submit_guess('Z');
        assert_eq!(outcome.result, GuessResult::Wrong);
        assert_eq!(engine.current_view().wrong_guesses, 1);

        let outcome = engine.submit_guess('A');
        assert_eq!(outcome.result, GuessResult::Correct);
        assert_eq!(revealed(&engine), "JA_A");

        let outcome = engine.submit_guess('V');
        assert_eq!(outcome.result, GuessResult::Correct);
        assert_eq!(outcome.status, RoundStatus::Won);
        assert_eq!(revealed(&engine), "JAVA");
        assert_eq!(engine.current_view().solution(), Some("JAVA"));
    }

    #[test]
    fn view_marks_hits_and_misses() {
        let mut engine = GameEngine::new("JAVA").unwrap();
        engine.submit_guess('A');
        engine.submit_guess('Z');
        let view = engine.current_view();

        assert_eq!(view.mark('A'), LetterMark::Hit);
        assert_eq!(view.mark('z'), LetterMark::Miss);
        assert_eq!(view.mark('J'), LetterMark::Unused);
        assert_eq!(view.guessed, vec!['A', 'Z']);
        assert_eq!(view.masked_word(), "_ A _ A");
        assert_eq!(view.remaining_tries(), 5);
    }
}
