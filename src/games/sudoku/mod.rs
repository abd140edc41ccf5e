//! Sudoku: fill the grid so every row, column and 3x3 box holds 1-9.
//!
//! A puzzle is a full generated solution with cells cleared at positions
//! chosen uniformly without replacement; the survivors become fixed
//! clues. This naive removal does not guarantee a unique solution, which
//! is acceptable for a casual game and left as-is on purpose.
//!
//! Entering a conflicting value is never blocked: the cell is flagged as
//! an error (and the error counter charged) so the UI can paint it, and
//! the player keeps going. The session is won when every cell is filled
//! and no cell carries an error flag.

mod generator;

pub use generator::{generate_solution, SolutionGrid};

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameRng, Mode, Rejection, Session, Status};
use crate::stats::GameKind;

use super::Engine;

/// Number of given cells for a difficulty.
#[must_use]
pub const fn clue_count(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 40,
        Difficulty::Medium => 30,
        Difficulty::Hard => 20,
    }
}

/// One cell of the puzzle grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudokuCell {
    /// 1-9, or `None` while empty.
    pub value: Option<u8>,
    /// Fixed clue; never editable within the session.
    pub is_given: bool,
    /// The value conflicted with the grid when it was entered.
    pub is_error: bool,
}

/// One Sudoku session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sudoku {
    grid: [[SudokuCell; 9]; 9],
    errors: u32,
    session: Session,
}

impl Sudoku {
    /// Generate a puzzle with the difficulty's clue count.
    #[must_use]
    pub fn new(difficulty: Difficulty, mode: Mode, rng: &mut GameRng) -> Self {
        let solution = generate_solution(rng);
        Self::from_solution(&solution, clue_count(difficulty), difficulty, mode, rng)
    }

    /// Build a puzzle by clearing `81 - clues` cells of `solution`,
    /// chosen uniformly without replacement.
    #[must_use]
    pub fn from_solution(
        solution: &SolutionGrid,
        clues: usize,
        difficulty: Difficulty,
        mode: Mode,
        rng: &mut GameRng,
    ) -> Self {
        let mut grid = [[SudokuCell {
            value: None,
            is_given: true,
            is_error: false,
        }; 9]; 9];
        for row in 0..9 {
            for col in 0..9 {
                grid[row][col].value = Some(solution[row][col]);
            }
        }

        let mut positions: Vec<usize> = (0..81).collect();
        rng.shuffle(&mut positions);
        for &position in positions.iter().take(81 - clues) {
            let (row, col) = (position / 9, position % 9);
            grid[row][col] = SudokuCell {
                value: None,
                is_given: false,
                is_error: false,
            };
        }

        Self {
            grid,
            errors: 0,
            session: Session::new(Some(difficulty), mode),
        }
    }

    /// The 9x9 grid.
    #[must_use]
    pub fn grid(&self) -> &[[SudokuCell; 9]; 9] {
        &self.grid
    }

    /// One cell.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &SudokuCell {
        &self.grid[row][col]
    }

    /// Invalid entries so far.
    #[must_use]
    pub fn errors(&self) -> u32 {
        self.errors
    }

    /// Whether `value` at (`row`, `col`) respects the row, column and box
    /// constraints, ignoring the cell itself.
    ///
    /// Used to flag a just-entered value; it never blocks entry.
    #[must_use]
    pub fn check_cell(&self, row: usize, col: usize, value: u8) -> bool {
        for x in 0..9 {
            if x != col && self.grid[row][x].value == Some(value) {
                return false;
            }
            if x != row && self.grid[x][col].value == Some(value) {
                return false;
            }
        }
        let (box_row, box_col) = (row - row % 3, col - col % 3);
        for r in box_row..box_row + 3 {
            for c in box_col..box_col + 3 {
                if (r, c) != (row, col) && self.grid[r][c].value == Some(value) {
                    return false;
                }
            }
        }
        true
    }

    /// Enter `value` (1-9) at (`row`, `col`).
    ///
    /// Rejects given cells and out-of-range input. The cell's error flag
    /// is recomputed, an invalid entry charges the error counter, the
    /// move counts, and the hot-seat turn passes. Wins when the grid is
    /// complete with no flagged errors.
    pub fn enter_value(&mut self, row: usize, col: usize, value: u8) -> Result<Status, Rejection> {
        self.session.ensure_active()?;
        if row >= 9 || col >= 9 {
            return Err(Rejection::OutOfBounds);
        }
        if !(1..=9).contains(&value) {
            return Err(Rejection::OutOfRange);
        }
        if self.grid[row][col].is_given {
            return Err(Rejection::GivenCell);
        }

        let valid = self.check_cell(row, col, value);
        self.grid[row][col].value = Some(value);
        self.grid[row][col].is_error = !valid;
        if !valid {
            self.errors += 1;
        }
        self.session.record_move();
        self.session.pass_turn();

        if self.is_complete() {
            self.session.finish(Status::Won);
        }
        Ok(self.session.status())
    }

    /// Clear the value at (`row`, `col`).
    ///
    /// Rejects given cells. Clearing counts as a move and resets the
    /// cell's error flag (the error counter keeps its history).
    pub fn clear_cell(&mut self, row: usize, col: usize) -> Result<(), Rejection> {
        self.session.ensure_active()?;
        if row >= 9 || col >= 9 {
            return Err(Rejection::OutOfBounds);
        }
        if self.grid[row][col].is_given {
            return Err(Rejection::GivenCell);
        }

        self.grid[row][col].value = None;
        self.grid[row][col].is_error = false;
        self.session.record_move();
        Ok(())
    }

    /// Every cell filled, none flagged as an error.
    fn is_complete(&self) -> bool {
        self.grid
            .iter()
            .flatten()
            .all(|cell| cell.value.is_some() && !cell.is_error)
    }
}

impl Engine for Sudoku {
    fn kind(&self) -> GameKind {
        GameKind::Sudoku
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// `10000 - moves * 5 - errors * 50 - elapsed seconds * 2`.
    fn score(&self) -> Option<i64> {
        if self.session.status() != Status::Won {
            return None;
        }
        Some(
            10_000
                - i64::from(self.session.moves()) * 5
                - i64::from(self.errors) * 50
                - i64::from(self.session.elapsed_secs()) * 2,
        )
    }
}
