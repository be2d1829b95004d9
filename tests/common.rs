use exact_cover::sudoku::Grid;
use std::collections::BTreeSet;

/// Parse a 9×9 grid from an input string.
///
/// # Expected Format
///  - 0 denotes an empty cell
///  - The numbers are presented in row-major order. So the first nine
///    characters are the first row, the second nine characters are the
///    second row, etc.
///
/// # Panics
///  - If the string is not exactly 81 characters
///  - If any character in the string is not [0-9]
#[allow(dead_code)]
pub fn parse_grid(input: &str) -> Grid {
    assert_eq!(input.len(), 81, "input needs to be 81 characters long");

    let mut grid: Grid = [[0; 9]; 9];
    for (index, c) in input.char_indices() {
        let value = c.to_digit(10).expect("input characters must be [0-9]");
        grid[index / 9][index % 9] = value as u8;
    }

    grid
}

/// Format a grid into a string matching the input of `parse_grid`.
#[allow(dead_code)]
pub fn format_grid(grid: &Grid) -> String {
    grid.iter().flatten().map(|v| char::from(b'0' + v)).collect()
}

/// Assert that every row, column, and 3×3 square of `solution` contains each
/// digit 1 through 9 exactly once.
#[allow(dead_code)]
pub fn check_solved(solution: &Grid) {
    let all: BTreeSet<u8> = (1..=9).collect();

    for row in 0..9 {
        let digits: BTreeSet<u8> = (0..9).map(|column| solution[row][column]).collect();
        assert_eq!(digits, all, "row {} is not a permutation of 1-9", row + 1);
    }

    for column in 0..9 {
        let digits: BTreeSet<u8> = (0..9).map(|row| solution[row][column]).collect();
        assert_eq!(digits, all, "column {} is not a permutation of 1-9", column + 1);
    }

    for square in 0..9 {
        let base_row = (square / 3) * 3;
        let base_column = (square % 3) * 3;
        let digits: BTreeSet<u8> = (0..9)
            .map(|k| solution[base_row + k / 3][base_column + k % 3])
            .collect();
        assert_eq!(digits, all, "square {} is not a permutation of 1-9", square + 1);
    }
}

/// Assert that every given (nonzero) cell of `puzzle` kept its value in
/// `solution`.
#[allow(dead_code)]
pub fn check_givens_preserved(puzzle: &Grid, solution: &Grid) {
    for row in 0..9 {
        for column in 0..9 {
            if puzzle[row][column] != 0 {
                assert_eq!(
                    puzzle[row][column],
                    solution[row][column],
                    "given at ({}, {}) was changed",
                    row + 1,
                    column + 1
                );
            }
        }
    }
}
