//! Randomized Sudoku solution generation.
//!
//! Classic backtracking over the cells in row-major order: each empty cell
//! tries the digits 1-9 in a freshly shuffled order, constrained by
//! row/column/box uniqueness, and unwinds on a dead end. Starting from an
//! empty grid this always terminates with a complete valid grid; the
//! shuffled digit order is what makes each run produce a different one.

use crate::core::GameRng;

/// A complete 9x9 solution grid, digits 1-9.
pub type SolutionGrid = [[u8; 9]; 9];

/// Whether `digit` can be placed at (`row`, `col`) without clashing with
/// the row, the column, or the containing 3x3 box.
fn placement_fits(grid: &SolutionGrid, row: usize, col: usize, digit: u8) -> bool {
    for x in 0..9 {
        if grid[row][x] == digit || grid[x][col] == digit {
            return false;
        }
    }
    let (box_row, box_col) = (row - row % 3, col - col % 3);
    for r in box_row..box_row + 3 {
        for c in box_col..box_col + 3 {
            if grid[r][c] == digit {
                return false;
            }
        }
    }
    true
}

fn solve_from(grid: &mut SolutionGrid, cell: usize, rng: &mut GameRng) -> bool {
    if cell == 81 {
        return true;
    }
    let (row, col) = (cell / 9, cell % 9);

    let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    rng.shuffle(&mut digits);

    for digit in digits {
        if placement_fits(grid, row, col, digit) {
            grid[row][col] = digit;
            if solve_from(grid, cell + 1, rng) {
                return true;
            }
            grid[row][col] = 0;
        }
    }
    false
}

/// Generate a full valid solution grid.
#[must_use]
pub fn generate_solution(rng: &mut GameRng) -> SolutionGrid {
    let mut grid = [[0u8; 9]; 9];
    let solved = solve_from(&mut grid, 0, rng);
    // Backtracking from an empty grid cannot fail.
    debug_assert!(solved);
    log::debug!("generated sudoku solution");
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid_solution(grid: &SolutionGrid) {
        let full: std::collections::BTreeSet<u8> = (1..=9).collect();

        for i in 0..9 {
            let row: std::collections::BTreeSet<u8> = grid[i].iter().copied().collect();
            assert_eq!(row, full, "row {i} not a permutation of 1-9");

            let col: std::collections::BTreeSet<u8> = (0..9).map(|r| grid[r][i]).collect();
            assert_eq!(col, full, "column {i} not a permutation of 1-9");
        }

        for box_row in (0..9).step_by(3) {
            for box_col in (0..9).step_by(3) {
                let cells: std::collections::BTreeSet<u8> = (0..3)
                    .flat_map(|r| (0..3).map(move |c| grid[box_row + r][box_col + c]))
                    .collect();
                assert_eq!(cells, full, "box ({box_row},{box_col}) not 1-9");
            }
        }
    }

    #[test]
    fn test_generated_solutions_are_valid() {
        for seed in 0..10 {
            let mut rng = GameRng::new(seed);
            let grid = generate_solution(&mut rng);
            assert_valid_solution(&grid);
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        assert_eq!(generate_solution(&mut rng1), generate_solution(&mut rng2));
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);
        assert_ne!(generate_solution(&mut rng1), generate_solution(&mut rng2));
    }

    #[test]
    fn test_placement_fits() {
        let mut grid = [[0u8; 9]; 9];
        grid[0][0] = 5;

        assert!(!placement_fits(&grid, 0, 8, 5)); // same row
        assert!(!placement_fits(&grid, 8, 0, 5)); // same column
        assert!(!placement_fits(&grid, 2, 2, 5)); // same box
        assert!(placement_fits(&grid, 4, 4, 5));
        assert!(placement_fits(&grid, 0, 8, 6));
    }
}
