//! Tic-Tac-Toe against a heuristic computer opponent.
//!
//! The player is X and always moves first; the computer is O. The opponent
//! is deliberately not minimax: it plays an immediate win if one exists,
//! otherwise blocks the player's immediate win, otherwise takes the
//! center, otherwise a uniformly random empty cell. The caller schedules
//! any "thinking" delay and then invokes [`TicTacToe::play_opponent`];
//! the engine itself never waits.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, Mode, Rejection, Session, Status};
use crate::stats::GameKind;

use super::Engine;

/// A mark on the board. The player owns X, the computer owns O.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

/// The 8 winning lines: rows, columns, then diagonals. The scan order is
/// fixed so tests see deterministic results.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Find the winner on a board, if any, with the completed line.
#[must_use]
pub fn winner_on(board: &[Option<Mark>; 9]) -> Option<(Mark, [usize; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(mark) = board[a] {
            if board[b] == Some(mark) && board[c] == Some(mark) {
                return Some((mark, line));
            }
        }
    }
    None
}

/// Pick the computer's move: win, block, center, then random.
///
/// Returns `None` only on a full board. Always returns an empty cell.
#[must_use]
pub fn opponent_choice(board: &[Option<Mark>; 9], rng: &mut GameRng) -> Option<usize> {
    let empties: SmallVec<[usize; 9]> = board
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(|(i, _)| i)
        .collect();
    if empties.is_empty() {
        return None;
    }

    // Immediate win
    for &i in &empties {
        let mut probe = *board;
        probe[i] = Some(Mark::O);
        if winner_on(&probe).is_some() {
            return Some(i);
        }
    }

    // Block the player's immediate win
    for &i in &empties {
        let mut probe = *board;
        probe[i] = Some(Mark::X);
        if winner_on(&probe).is_some() {
            return Some(i);
        }
    }

    if board[4].is_none() {
        return Some(4);
    }

    rng.choose(&empties).copied()
}

/// One Tic-Tac-Toe session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TicTacToe {
    board: [Option<Mark>; 9],
    player_turn: bool,
    winner: Option<Mark>,
    winning_line: Option<[usize; 3]>,
    session: Session,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Start a game with an empty board, player to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            player_turn: true,
            winner: None,
            winning_line: None,
            session: Session::new(None, Mode::Computer),
        }
    }

    /// The current board, row-major.
    #[must_use]
    pub fn board(&self) -> &[Option<Mark>; 9] {
        &self.board
    }

    /// Whether the player (X) is to move.
    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.player_turn && !self.session.is_terminal()
    }

    /// The winning mark, once the game is won.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// The completed line, once the game is won.
    #[must_use]
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// Place the player's X at `index`.
    ///
    /// Rejects moves on occupied cells, outside the board, during the
    /// computer's turn, or after the game ended. On success the turn
    /// passes to the computer unless the move ended the game.
    pub fn play(&mut self, index: usize) -> Result<Status, Rejection> {
        self.session.ensure_active()?;
        if !self.player_turn {
            return Err(Rejection::NotYourTurn);
        }
        if index >= 9 {
            return Err(Rejection::OutOfBounds);
        }
        if self.board[index].is_some() {
            return Err(Rejection::OccupiedCell);
        }

        self.board[index] = Some(Mark::X);
        self.session.record_move();
        self.player_turn = false;
        self.settle(Mark::X);
        Ok(self.session.status())
    }

    /// Apply the computer's move, returning the index it played.
    ///
    /// Pure and immediate; the caller decides when to invoke it relative
    /// to its presentation delay.
    pub fn play_opponent(&mut self, rng: &mut GameRng) -> Result<usize, Rejection> {
        self.session.ensure_active()?;
        if self.player_turn {
            return Err(Rejection::NotYourTurn);
        }

        // A full board is settled as a draw before the turn ever reaches
        // the computer, so a choice always exists here.
        let index = match opponent_choice(&self.board, rng) {
            Some(i) => i,
            None => return Err(Rejection::GameOver),
        };

        self.board[index] = Some(Mark::O);
        self.player_turn = true;
        self.settle(Mark::O);
        Ok(index)
    }

    /// Evaluate the board after `moved` played: win, draw, or continue.
    fn settle(&mut self, moved: Mark) {
        if let Some((mark, line)) = winner_on(&self.board) {
            self.winner = Some(mark);
            self.winning_line = Some(line);
            self.session.finish(match moved {
                Mark::X => Status::Won,
                Mark::O => Status::Lost,
            });
        } else if self.board.iter().all(Option::is_some) {
            self.session.finish(Status::Draw);
        }
    }
}

impl Engine for TicTacToe {
    fn kind(&self) -> GameKind {
        GameKind::TicTacToe
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}
