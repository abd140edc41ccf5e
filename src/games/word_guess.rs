//! Word Guessing: hangman-style letter guessing with a textual hint.
//!
//! A word is drawn from a fixed kid-friendly list, each with a hint shown
//! from the start. The player reveals letters one at a time; six wrong
//! letters lose the game, revealing every letter of the word wins it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Mode, Rejection, Session, Status};
use crate::stats::GameKind;

use super::Engine;

/// Wrong letters allowed before the session is lost.
pub const MAX_WRONG_GUESSES: u32 = 6;

/// The word list with per-word hints.
const WORDS: [(&str, &str); 10] = [
    ("RAINBOW", "Colors in the sky after rain"),
    ("ELEPHANT", "Large animal with a trunk"),
    ("BUTTERFLY", "Colorful flying insect"),
    ("PIZZA", "Popular food with cheese"),
    ("DINOSAUR", "Ancient giant reptile"),
    ("ROCKET", "Goes to space"),
    ("CASTLE", "Where kings and queens live"),
    ("MAGIC", "Tricks and spells"),
    ("TREASURE", "Gold and jewels"),
    ("DRAGON", "Mythical fire-breathing creature"),
];

/// What an accepted letter guess did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterOutcome {
    /// The letter occurs in the word.
    Hit,
    /// The letter does not occur; one life spent.
    Miss,
}

/// One Word Guessing session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WordGuess {
    word: String,
    hint: String,
    guessed: BTreeSet<char>,
    wrong_guesses: u32,
    session: Session,
}

impl WordGuess {
    /// Start a game with a random word from the list.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let index = rng.gen_range_usize(0..WORDS.len());
        let (word, hint) = WORDS[index];
        Self::with_word(word, hint)
    }

    /// Start a game with a known word. Intended for deterministic tests;
    /// `word` must be uppercase ASCII letters.
    #[must_use]
    pub fn with_word(word: &str, hint: &str) -> Self {
        debug_assert!(word.chars().all(|c| c.is_ascii_uppercase()));
        Self {
            word: word.to_string(),
            hint: hint.to_string(),
            guessed: BTreeSet::new(),
            wrong_guesses: 0,
            session: Session::new(None, Mode::Computer),
        }
    }

    /// The hint shown to the player.
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Letters guessed so far, hits and misses alike.
    #[must_use]
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Wrong letters so far.
    #[must_use]
    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    /// Lives left before the game is lost.
    #[must_use]
    pub fn lives_left(&self) -> u32 {
        MAX_WRONG_GUESSES - self.wrong_guesses
    }

    /// The word with unguessed letters masked as `_`.
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .collect()
    }

    /// The word, revealed only once the session is over.
    #[must_use]
    pub fn revealed_word(&self) -> Option<&str> {
        self.session.is_terminal().then_some(self.word.as_str())
    }

    /// Guess one letter (case-insensitive).
    ///
    /// Rejects non-letters and repeats. A miss spends a life; spending the
    /// last life loses. Revealing the final letter wins.
    pub fn guess_letter(&mut self, letter: char) -> Result<LetterOutcome, Rejection> {
        self.session.ensure_active()?;
        if !letter.is_ascii_alphabetic() {
            return Err(Rejection::NotALetter);
        }
        let letter = letter.to_ascii_uppercase();
        if self.guessed.contains(&letter) {
            return Err(Rejection::DuplicateGuess);
        }

        self.guessed.insert(letter);
        self.session.record_move();

        if self.word.contains(letter) {
            if self.word.chars().all(|c| self.guessed.contains(&c)) {
                self.session.finish(Status::Won);
            }
            Ok(LetterOutcome::Hit)
        } else {
            self.wrong_guesses += 1;
            if self.wrong_guesses >= MAX_WRONG_GUESSES {
                self.session.finish(Status::Lost);
            }
            Ok(LetterOutcome::Miss)
        }
    }
}

impl Engine for WordGuess {
    fn kind(&self) -> GameKind {
        GameKind::WordGuess
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}
