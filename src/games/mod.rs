//! The six game engines.
//!
//! Each engine is an independent pure state machine: an initializer builds
//! a session from a difficulty/mode, transition methods validate and apply
//! one action at a time, and a terminal check settles the score. Engines
//! never depend on one another and never block; presentation delays (the
//! computer "thinking", the mismatch reveal) belong to the caller, which
//! invokes the corresponding transition when its timer fires.

pub mod memory_match;
pub mod number_guess;
pub mod sliding_puzzle;
pub mod sudoku;
pub mod tic_tac_toe;
pub mod word_guess;

pub use memory_match::{resolve_pair, Card, FlipOutcome, MemoryMatch, PairResolution};
pub use number_guess::{Direction, GuessEntry, Hint, HintTier, NumberGuess, MAX_ATTEMPTS};
pub use sliding_puzzle::{solved_state, SlidingPuzzle};
pub use sudoku::{Sudoku, SudokuCell};
pub use tic_tac_toe::{opponent_choice, winner_on, Mark, TicTacToe};
pub use word_guess::{LetterOutcome, WordGuess, MAX_WRONG_GUESSES};

use crate::core::{Session, Status};
use crate::stats::{GameKind, GameSummary};

/// Common surface the UI shell consumes.
///
/// Implementations expose their shared [`Session`] and, where the game
/// defines a score formula, a score. The provided methods derive the rest:
/// the caller's one-second timer drives `tick()` and stops as soon as
/// `is_terminal()` turns true, and `summary()` yields the record to hand
/// to a [`crate::stats::ResultSink`].
pub trait Engine {
    /// Which game this engine runs.
    fn kind(&self) -> GameKind;

    /// Shared session bookkeeping.
    fn session(&self) -> &Session;

    /// Mutable session access for the provided methods.
    fn session_mut(&mut self) -> &mut Session;

    /// The score of a terminal session, for games that define one.
    ///
    /// `None` while in progress, and always `None` for games without a
    /// score formula (Tic-Tac-Toe, the guessing games).
    fn score(&self) -> Option<i64> {
        None
    }

    /// Advance the clock by one second. No-op once terminal.
    fn tick(&mut self) {
        self.session_mut().tick();
    }

    /// Whether the session reached a terminal state.
    fn is_terminal(&self) -> bool {
        self.session().is_terminal()
    }

    /// Current status.
    fn status(&self) -> Status {
        self.session().status()
    }

    /// Terminal summary for persistence, if this game is scored and over.
    fn summary(&self) -> Option<GameSummary> {
        let score = self.score()?;
        let session = self.session();
        if !session.is_terminal() {
            return None;
        }
        Some(GameSummary::now(
            self.kind(),
            score,
            session.elapsed_secs(),
            session.moves(),
            session.difficulty(),
        ))
    }
}
