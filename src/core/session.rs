//! Shared per-session bookkeeping.
//!
//! Every engine embeds a [`Session`]: difficulty, mode, hot-seat turn,
//! move count, elapsed time and terminal status. The engines own the
//! transitions; the presentation layer only drives `tick()` from its
//! one-second timer and stops that timer as soon as the session is
//! terminal. A late tick is a no-op here regardless, so a sloppy caller
//! cannot inflate the elapsed time.

use serde::{Deserialize, Serialize};

use super::difficulty::{Difficulty, Mode, Turn};
use super::rejection::Rejection;

/// Lifecycle status of a session, from the (first) player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won,
    Lost,
    Draw,
}

impl Status {
    /// Whether no further moves are accepted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Bookkeeping shared by every engine.
///
/// The session is a self-contained value: engines mutate it through their
/// transition methods and callers read it through accessors. Nothing here
/// is global and two sessions never share state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    difficulty: Option<Difficulty>,
    mode: Mode,
    turn: Turn,
    moves: u32,
    elapsed_secs: u32,
    status: Status,
}

impl Session {
    /// Create a fresh in-progress session.
    #[must_use]
    pub fn new(difficulty: Option<Difficulty>, mode: Mode) -> Self {
        Self {
            difficulty,
            mode,
            turn: Turn::PlayerOne,
            moves: 0,
            elapsed_secs: 0,
            status: Status::InProgress,
        }
    }

    /// Difficulty this session was started with, if the game has one.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Opponent mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The active hot-seat player. Always `PlayerOne` in computer mode.
    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Accepted moves so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Elapsed whole seconds while the session was active.
    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether the session reached a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Advance the clock by one second. No-op once terminal.
    pub fn tick(&mut self) {
        if !self.is_terminal() {
            self.elapsed_secs += 1;
        }
    }

    /// Guard used by every transition method: reject anything after the end.
    pub(crate) fn ensure_active(&self) -> Result<(), Rejection> {
        if self.is_terminal() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }

    /// Count one accepted move.
    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
    }

    /// Pass the hot-seat turn. No-op in computer mode.
    pub(crate) fn pass_turn(&mut self) {
        if self.mode == Mode::Friend {
            self.turn = self.turn.other();
        }
    }

    /// Enter a terminal state.
    pub(crate) fn finish(&mut self, status: Status) {
        debug_assert!(status.is_terminal());
        self.status = status;
    }
}
