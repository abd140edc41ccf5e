//! Sliding N-puzzle: order the tiles by sliding them into the blank.
//!
//! Boards are generated by walking the blank through a long sequence of
//! uniformly random legal swaps starting from the solved state. Legal
//! moves preserve the N-puzzle parity invariant, so every board produced
//! this way is solvable by construction; an arbitrary random permutation
//! would be unsolvable half the time, which is why that generator is off
//! the table. The walk is redrawn in the negligible case where it lands
//! back on the solved board, so a fresh puzzle always has work to do.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameRng, Mode, Rejection, Session, Status};
use crate::stats::GameKind;

use super::Engine;

/// Random blank-swaps performed when shuffling.
const SHUFFLE_STEPS: usize = 1000;

/// Grid side length for a difficulty.
#[must_use]
pub const fn side_length(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 3,
        Difficulty::Medium => 4,
        Difficulty::Hard => 5,
    }
}

/// The solved board for side length `n`: `1..n*n-1` then the blank (0).
#[must_use]
pub fn solved_state(n: usize) -> Vec<u32> {
    let mut tiles: Vec<u32> = (1..(n * n) as u32).collect();
    tiles.push(0);
    tiles
}

/// Walk the blank through `SHUFFLE_STEPS` random legal swaps.
fn shuffle(tiles: &mut [u32], n: usize, rng: &mut GameRng) -> usize {
    let mut blank = tiles.len() - 1;
    for _ in 0..SHUFFLE_STEPS {
        let neighbors = neighbors_of(blank, n);
        let target = *rng.choose(&neighbors).expect("blank always has neighbors");
        tiles.swap(blank, target);
        blank = target;
    }
    blank
}

/// Board indices orthogonally adjacent to `index`.
fn neighbors_of(index: usize, n: usize) -> Vec<usize> {
    let (row, col) = (index / n, index % n);
    let mut neighbors = Vec::with_capacity(4);
    if row > 0 {
        neighbors.push(index - n);
    }
    if row + 1 < n {
        neighbors.push(index + n);
    }
    if col > 0 {
        neighbors.push(index - 1);
    }
    if col + 1 < n {
        neighbors.push(index + 1);
    }
    neighbors
}

/// One sliding-puzzle session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SlidingPuzzle {
    tiles: Vec<u32>,
    side: usize,
    blank: usize,
    session: Session,
}

impl SlidingPuzzle {
    /// Generate a shuffled, solvable board: 3x3, 4x4 or 5x5.
    #[must_use]
    pub fn new(difficulty: Difficulty, mode: Mode, rng: &mut GameRng) -> Self {
        let side = side_length(difficulty);
        let solved = solved_state(side);

        let mut tiles = solved.clone();
        let mut blank = shuffle(&mut tiles, side, rng);
        while tiles == solved {
            blank = shuffle(&mut tiles, side, rng);
        }

        Self {
            tiles,
            side,
            blank,
            session: Session::new(Some(difficulty), mode),
        }
    }

    /// The board, row-major; 0 is the blank.
    #[must_use]
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Grid side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Index of the blank.
    #[must_use]
    pub fn blank(&self) -> usize {
        self.blank
    }

    /// Whether the tile at `index` can slide into the blank: same row or
    /// column, Manhattan distance one.
    #[must_use]
    pub fn can_move(&self, index: usize) -> bool {
        if index >= self.tiles.len() || index == self.blank {
            return false;
        }
        let (row, col) = (index / self.side, index % self.side);
        let (blank_row, blank_col) = (self.blank / self.side, self.blank % self.side);
        (row == blank_row && col.abs_diff(blank_col) == 1)
            || (col == blank_col && row.abs_diff(blank_row) == 1)
    }

    /// Whether the board equals the solved state element-wise.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles == solved_state(self.side)
    }

    /// Slide the tile at `index` into the blank.
    ///
    /// Rejects tiles not adjacent to the blank. A move counts, passes the
    /// hot-seat turn, and wins when it completes the board.
    pub fn move_tile(&mut self, index: usize) -> Result<Status, Rejection> {
        self.session.ensure_active()?;
        if index >= self.tiles.len() {
            return Err(Rejection::OutOfBounds);
        }
        if !self.can_move(index) {
            return Err(Rejection::NotAdjacent);
        }

        self.tiles.swap(self.blank, index);
        self.blank = index;
        self.session.record_move();
        self.session.pass_turn();

        if self.is_solved() {
            self.session.finish(Status::Won);
        }
        Ok(self.session.status())
    }
}

impl Engine for SlidingPuzzle {
    fn kind(&self) -> GameKind {
        GameKind::SlidingPuzzle
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// `10000 - moves * 10 - elapsed seconds * 5`.
    fn score(&self) -> Option<i64> {
        if self.session.status() != Status::Won {
            return None;
        }
        Some(
            10_000
                - i64::from(self.session.moves()) * 10
                - i64::from(self.session.elapsed_secs()) * 5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Turn;

    #[test]
    fn test_solved_state_layout() {
        assert_eq!(solved_state(3), vec![1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(solved_state(2), vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_new_board_is_a_permutation_and_unsolved() {
        for difficulty in Difficulty::all() {
            let mut rng = GameRng::new(11);
            let game = SlidingPuzzle::new(difficulty, Mode::Computer, &mut rng);
            let n = side_length(difficulty);

            let mut sorted = game.tiles().to_vec();
            sorted.sort_unstable();
            let expected: Vec<u32> = (0..(n * n) as u32).collect();
            assert_eq!(sorted, expected);

            assert!(!game.is_solved());
            assert_eq!(game.tiles()[game.blank()], 0);
        }
    }

    #[test]
    fn test_can_move_adjacency() {
        let mut rng = GameRng::new(3);
        let mut game = SlidingPuzzle::new(Difficulty::Easy, Mode::Computer, &mut rng);
        // Pin the board to a known layout: blank at center of a 3x3.
        game.tiles = vec![1, 2, 3, 4, 0, 5, 6, 7, 8];
        game.blank = 4;

        for index in [1, 3, 5, 7] {
            assert!(game.can_move(index));
        }
        for index in [0, 2, 4, 6, 8, 9] {
            assert!(!game.can_move(index));
        }
    }

    #[test]
    fn test_corner_blank_has_two_moves() {
        let mut rng = GameRng::new(3);
        let mut game = SlidingPuzzle::new(Difficulty::Easy, Mode::Computer, &mut rng);
        game.tiles = vec![0, 1, 2, 3, 4, 5, 6, 7, 8];
        game.blank = 0;

        assert!(game.can_move(1));
        assert!(game.can_move(3));
        for index in [2, 4, 5, 6, 7, 8] {
            assert!(!game.can_move(index));
        }
    }

    #[test]
    fn test_move_rejections_leave_state_unchanged() {
        let mut rng = GameRng::new(5);
        let mut game = SlidingPuzzle::new(Difficulty::Easy, Mode::Computer, &mut rng);
        let snapshot = game.tiles().to_vec();

        assert_eq!(game.move_tile(game.blank()), Err(Rejection::NotAdjacent));
        assert_eq!(game.move_tile(99), Err(Rejection::OutOfBounds));
        assert_eq!(game.tiles(), &snapshot[..]);
        assert_eq!(game.session().moves(), 0);
    }

    #[test]
    fn test_win_on_last_move_and_score() {
        let mut rng = GameRng::new(5);
        let mut game = SlidingPuzzle::new(Difficulty::Easy, Mode::Computer, &mut rng);
        // One move from solved: blank one step left of its home corner.
        game.tiles = vec![1, 2, 3, 4, 5, 6, 7, 0, 8];
        game.blank = 7;

        assert_eq!(game.move_tile(8), Ok(Status::Won));
        assert!(game.is_solved());
        assert_eq!(game.score(), Some(10_000 - 10));
        assert_eq!(game.move_tile(7), Err(Rejection::GameOver));

        let summary = game.summary().unwrap();
        assert_eq!(summary.game, GameKind::SlidingPuzzle);
        assert_eq!(summary.score, 10_000 - 10);
    }

    #[test]
    fn test_hot_seat_turn_passes_every_move() {
        let mut rng = GameRng::new(5);
        let mut game = SlidingPuzzle::new(Difficulty::Easy, Mode::Friend, &mut rng);

        let movable = (0..9).find(|&i| game.can_move(i)).unwrap();
        game.move_tile(movable).unwrap();
        assert_eq!(game.session().turn(), Turn::PlayerTwo);

        let movable = (0..9).find(|&i| game.can_move(i)).unwrap();
        game.move_tile(movable).unwrap();
        assert_eq!(game.session().turn(), Turn::PlayerOne);
    }

    #[test]
    fn test_moves_are_reversible() {
        let mut rng = GameRng::new(5);
        let mut game = SlidingPuzzle::new(Difficulty::Medium, Mode::Computer, &mut rng);
        let before = game.tiles().to_vec();
        let blank = game.blank();

        let movable = (0..16).find(|&i| game.can_move(i)).unwrap();
        game.move_tile(movable).unwrap();
        assert_ne!(game.tiles(), &before[..]);

        // Sliding the same tile back restores the board.
        game.move_tile(blank).unwrap();
        assert_eq!(game.tiles(), &before[..]);
        assert_eq!(game.session().moves(), 2);
    }
}
