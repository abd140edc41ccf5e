//! Rejected-action signals.
//!
//! Nothing in the engines is a fatal error. An action that cannot be
//! applied leaves the session untouched and comes back as an `Err` carrying
//! a reason code; the presentation layer decides how (or whether) to tell
//! the user. The two broad categories mirror the taxonomy the engines
//! enforce everywhere:
//!
//! - `InvalidInput`: the action itself is malformed for the current board
//!   (out-of-range guess, occupied cell, non-adjacent tile, given cell).
//! - `IllegalTransition`: the action arrived in a state that accepts no
//!   such action (click during the computer's turn, move after the game
//!   ended, third flip while a pair is pending).

use serde::{Deserialize, Serialize};

/// Why an action was rejected. The session is guaranteed unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The session already reached a terminal state.
    GameOver,
    /// It is not the acting player's turn.
    NotYourTurn,
    /// Two cards are face up and awaiting resolution.
    PairPending,
    /// `resolve` was called with fewer than two cards face up.
    NothingToResolve,
    /// Index outside the board.
    OutOfBounds,
    /// Value outside the accepted range.
    OutOfRange,
    /// The same guess was already submitted.
    DuplicateGuess,
    /// The target cell already holds a mark.
    OccupiedCell,
    /// The tile is not orthogonally adjacent to the blank.
    NotAdjacent,
    /// The cell is a fixed clue and cannot be edited.
    GivenCell,
    /// The card is already face up or matched.
    AlreadyFaceUp,
    /// The input is not a letter.
    NotALetter,
}

/// Broad category of a rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionKind {
    InvalidInput,
    IllegalTransition,
}

impl Rejection {
    /// Classify this rejection.
    #[must_use]
    pub const fn kind(self) -> RejectionKind {
        match self {
            Rejection::GameOver
            | Rejection::NotYourTurn
            | Rejection::PairPending
            | Rejection::NothingToResolve => RejectionKind::IllegalTransition,
            Rejection::OutOfBounds
            | Rejection::OutOfRange
            | Rejection::DuplicateGuess
            | Rejection::OccupiedCell
            | Rejection::NotAdjacent
            | Rejection::GivenCell
            | Rejection::AlreadyFaceUp
            | Rejection::NotALetter => RejectionKind::InvalidInput,
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Rejection::GameOver => "the game is already over",
            Rejection::NotYourTurn => "not your turn",
            Rejection::PairPending => "two cards are awaiting resolution",
            Rejection::NothingToResolve => "no pair to resolve",
            Rejection::OutOfBounds => "index outside the board",
            Rejection::OutOfRange => "value out of range",
            Rejection::DuplicateGuess => "already guessed",
            Rejection::OccupiedCell => "cell is occupied",
            Rejection::NotAdjacent => "tile is not next to the blank",
            Rejection::GivenCell => "cell is a fixed clue",
            Rejection::AlreadyFaceUp => "card is already face up",
            Rejection::NotALetter => "not a letter",
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for Rejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Rejection::GameOver.kind(), RejectionKind::IllegalTransition);
        assert_eq!(Rejection::NotYourTurn.kind(), RejectionKind::IllegalTransition);
        assert_eq!(Rejection::PairPending.kind(), RejectionKind::IllegalTransition);
        assert_eq!(Rejection::OccupiedCell.kind(), RejectionKind::InvalidInput);
        assert_eq!(Rejection::DuplicateGuess.kind(), RejectionKind::InvalidInput);
        assert_eq!(Rejection::GivenCell.kind(), RejectionKind::InvalidInput);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rejection::OccupiedCell.to_string(), "cell is occupied");
    }
}
