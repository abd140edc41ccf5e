//! Number Guessing: find a secret number in 1..=100 within 10 attempts.
//!
//! Each accepted guess is answered with a proximity hint derived from the
//! absolute distance to the secret, plus a higher/lower direction. A guess
//! equal to the secret is "perfect" and wins; the tenth miss loses and the
//! secret is revealed.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Mode, Rejection, Session, Status};
use crate::stats::GameKind;

use super::Engine;

/// Attempts allowed before the session is lost.
pub const MAX_ATTEMPTS: u32 = 10;

/// Proximity tier, by distance to the secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintTier {
    /// Within 5.
    SuperHot,
    /// Within 10.
    Warm,
    /// Within 20.
    Cold,
    /// Further than 20.
    VeryCold,
}

/// Which way to adjust the next guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Higher,
    Lower,
}

/// Hint attached to one guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    /// Exact match; the session is won.
    Perfect,
    Tiered { tier: HintTier, direction: Direction },
}

impl Hint {
    fn for_distance(secret: i32, guess: i32) -> Hint {
        let diff = (secret - guess).abs();
        if diff == 0 {
            return Hint::Perfect;
        }
        let tier = match diff {
            1..=5 => HintTier::SuperHot,
            6..=10 => HintTier::Warm,
            11..=20 => HintTier::Cold,
            _ => HintTier::VeryCold,
        };
        let direction = if guess < secret {
            Direction::Higher
        } else {
            Direction::Lower
        };
        Hint::Tiered { tier, direction }
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hint::Perfect => write!(f, "perfect"),
            Hint::Tiered { tier, direction } => {
                let tier = match tier {
                    HintTier::SuperHot => "super hot",
                    HintTier::Warm => "warm",
                    HintTier::Cold => "cold",
                    HintTier::VeryCold => "very cold",
                };
                let direction = match direction {
                    Direction::Higher => "higher",
                    Direction::Lower => "lower",
                };
                write!(f, "{tier}, {direction}")
            }
        }
    }
}

/// One entry in the guess log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessEntry {
    pub guess: i32,
    pub hint: Hint,
}

/// One Number Guessing session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NumberGuess {
    secret: i32,
    history: Vec<GuessEntry>,
    session: Session,
}

impl NumberGuess {
    /// Start a game with a uniformly random secret in 1..=100.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        Self::with_secret(rng.gen_range(1..101))
    }

    /// Start a game with a known secret. Intended for deterministic tests
    /// and replays; `secret` must already be in 1..=100.
    #[must_use]
    pub fn with_secret(secret: i32) -> Self {
        debug_assert!((1..=100).contains(&secret));
        Self {
            secret,
            history: Vec::new(),
            session: Session::new(None, Mode::Computer),
        }
    }

    /// Guesses submitted so far, oldest first. No value repeats.
    #[must_use]
    pub fn history(&self) -> &[GuessEntry] {
        &self.history
    }

    /// Attempts used so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.history.len() as u32
    }

    /// The secret, revealed only once the session is over.
    #[must_use]
    pub fn revealed_secret(&self) -> Option<i32> {
        self.session.is_terminal().then_some(self.secret)
    }

    /// Submit a guess.
    ///
    /// Rejects values outside 1..=100 and repeats of earlier guesses
    /// without consuming an attempt. An accepted guess is logged with its
    /// hint; a perfect guess wins, and the tenth miss loses.
    pub fn guess(&mut self, guess: i32) -> Result<Hint, Rejection> {
        self.session.ensure_active()?;
        if !(1..=100).contains(&guess) {
            return Err(Rejection::OutOfRange);
        }
        if self.history.iter().any(|entry| entry.guess == guess) {
            return Err(Rejection::DuplicateGuess);
        }

        let hint = Hint::for_distance(self.secret, guess);
        self.history.push(GuessEntry { guess, hint });
        self.session.record_move();

        if hint == Hint::Perfect {
            self.session.finish(Status::Won);
        } else if self.attempts() >= MAX_ATTEMPTS {
            self.session.finish(Status::Lost);
        }
        Ok(hint)
    }
}

impl Engine for NumberGuess {
    fn kind(&self) -> GameKind {
        GameKind::NumberGuess
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}
