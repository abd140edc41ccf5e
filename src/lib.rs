//! # arcade-core
//!
//! Pure state-machine engines for a login-gated collection of casual
//! games: Tic-Tac-Toe, Number Guessing, Word Guessing, Memory Match, the
//! sliding N-puzzle and Sudoku.
//!
//! ## Design Principles
//!
//! 1. **Engines are values**: each session is a self-contained struct
//!    driven by synchronous transition methods. No globals, no timers,
//!    no hidden shared state between sessions.
//!
//! 2. **Rejections are data**: an action that cannot apply returns the
//!    unchanged session plus a [`core::Rejection`] reason code. Nothing
//!    in the engines is fatal.
//!
//! 3. **Randomness is injected**: every generator takes a seedable
//!    [`core::GameRng`], so puzzles and opponents replay deterministically
//!    under test.
//!
//! 4. **Presentation timing stays outside**: the computer's "thinking"
//!    pause and the memory-match reveal delay are the caller's timers;
//!    the corresponding transitions are pure and immediately callable.
//!
//! ## Modules
//!
//! - `core`: difficulty/mode configuration, session bookkeeping,
//!   rejection codes, RNG
//! - `games`: the six engines and the `Engine` trait they share
//! - `stats`: terminal summaries and the best-record persistence seam

pub mod core;
pub mod games;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, GameRng, GameRngState, Mode, Rejection, RejectionKind, Session, Status, Turn,
};

pub use crate::games::{
    Card, Direction, Engine, FlipOutcome, GuessEntry, Hint, HintTier, LetterOutcome, Mark,
    MemoryMatch, NumberGuess, PairResolution, SlidingPuzzle, Sudoku, SudokuCell, TicTacToe,
    WordGuess,
};

pub use crate::stats::{
    record_best_effort, BestRecord, GameKind, GameSummary, MemoryStore, ResultSink, SinkError,
};
