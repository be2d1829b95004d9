//! A [Sudoku puzzle](https://en.wikipedia.org/wiki/Sudoku) is a 9 × 9 array
//! with sub-arrays of size 3 × 3. Each row, column, and sub-array contains
//! the values `1` through `9` with no repeats.
//!
//! Solving reduces the puzzle to an exact cover problem: every candidate
//! digit placement is a possibility covering four constraints (its cell, its
//! row, its column, and its square), and a full cover of all 324 constraints
//! is exactly a solved grid.

use crate::Possibility as _;
use crate::Solver;
use std::collections::HashMap;
use std::fmt;

/// A 9 × 9 Sudoku grid in row-major order.
///
/// `0` denotes an unknown cell; `1`–`9` denote filled digits.
pub type Grid = [[u8; 9]; 9];

/// An instance of a 9 × 9 Sudoku puzzle.
#[derive(Debug)]
pub struct Sudoku {
    /// The list of possible values and positions that are valid for a Sudoku
    /// puzzle, independent of the givens.
    pub possibilities: Vec<Possibility>,
    /// The list of constraints that must be satisfied for this Sudoku puzzle.
    pub constraints: Vec<Constraint>,
    /// The list of values and positions that are given as fixed when the
    /// puzzle is created, in row-major order.
    pub filled_values: Vec<Possibility>,
}

impl Sudoku {
    /// Create a new Sudoku puzzle from a grid of givens.
    ///
    /// The givens are validated up front: a cell value above `9` or two
    /// givens sharing a row, column, square, or cell are rejected here,
    /// rather than surfacing later as an unsolvable instance.
    pub fn new(puzzle: &Grid) -> Result<Self, Error> {
        let filled_values = collect_givens(puzzle)?;

        Ok(Sudoku {
            possibilities: Possibility::all().collect(),
            constraints: Constraint::all().collect(),
            filled_values,
        })
    }

    /// Solve the puzzle, returning the first completed grid found.
    ///
    /// The search is deterministic, so the same puzzle always produces the
    /// same grid. Puzzles with no solution return [`Error::Unsolvable`].
    pub fn solve(&self) -> Result<Grid, Error> {
        let mut solver = Solver::with_constraints(&self.possibilities, &self.constraints);

        log::debug!("seeding {} givens", self.filled_values.len());
        for given in &self.filled_values {
            solver.preselect(*given);
        }

        let solution = solver.first_solution().ok_or(Error::Unsolvable)?;

        let mut grid: Grid = [[0; 9]; 9];
        for Possibility { row, column, value } in solution {
            grid[usize::from(row) - 1][usize::from(column) - 1] = value;
        }

        Ok(grid)
    }
}

/// Collect the nonzero cells of `puzzle` as possibilities, in row-major
/// order, rejecting out-of-range values and conflicting givens.
fn collect_givens(puzzle: &Grid) -> Result<Vec<Possibility>, Error> {
    let mut satisfied: HashMap<Constraint, Possibility> = HashMap::new();
    let mut givens = Vec::new();

    for (i, line) in puzzle.iter().enumerate() {
        for (j, &value) in line.iter().enumerate() {
            if value == 0 {
                continue;
            }

            let row = i as u8 + 1;
            let column = j as u8 + 1;
            if value > 9 {
                return Err(Error::InvalidValue { row, column, value });
            }

            let given = Possibility { row, column, value };
            for constraint in given.constraints() {
                if let Some(first) = satisfied.insert(constraint, given) {
                    return Err(Error::ConflictingGivens {
                        first,
                        second: given,
                    });
                }
            }

            givens.push(given);
        }
    }

    Ok(givens)
}

/// A position and value for a cell inside of a Sudoku puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Possibility {
    /// The row position of the cell. The values range from 1 to 9.
    pub row: u8,

    /// The column position of the cell. The values range from 1 to 9.
    pub column: u8,

    /// The value present inside of the cell. The values range from 1 to 9.
    pub value: u8,
}

impl Possibility {
    /// Return an iterator over all 729 candidate placements.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=9u8).flat_map(|row| {
            (1..=9u8).flat_map(move |column| {
                (1..=9u8).map(move |value| Possibility { row, column, value })
            })
        })
    }

    /// Return the 1-indexed 3 × 3 square containing this cell, numbered in
    /// row-major order.
    pub fn square(&self) -> u8 {
        ((self.row - 1) / 3) * 3 + (self.column - 1) / 3 + 1
    }
}

impl crate::Possibility for Possibility {
    type Constraint = Constraint;

    fn constraints(&self) -> Vec<Self::Constraint> {
        let Possibility { row, column, value } = *self;

        vec![
            Constraint::RowColumn { row, column },
            Constraint::RowNumber { row, value },
            Constraint::ColumnNumber { column, value },
            Constraint::SquareNumber {
                square: self.square(),
                value,
            },
        ]
    }
}

/// A condition which must be satisfied in order to solve a Sudoku puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Constraint {
    /// A condition that each row, column pair holds exactly one digit.
    RowColumn {
        /// The row index.
        row: u8,
        /// The column index.
        column: u8,
    },
    /// A condition that each row should only have a single instance of a
    /// numeric value.
    RowNumber {
        /// The row index.
        row: u8,
        /// The unique numeric value.
        value: u8,
    },
    /// A condition that each column should only have a single instance of a
    /// numeric value.
    ColumnNumber {
        /// The column index.
        column: u8,
        /// The unique numeric value.
        value: u8,
    },
    /// A condition that each 3 × 3 square should only have a single instance
    /// of a numeric value.
    SquareNumber {
        /// The square index.
        square: u8,
        /// The unique numeric value.
        value: u8,
    },
}

impl Constraint {
    /// Return an iterator over all 324 constraints of a 9 × 9 puzzle.
    pub fn all() -> impl Iterator<Item = Self> {
        let cells = (1..=9u8)
            .flat_map(|row| (1..=9u8).map(move |column| Constraint::RowColumn { row, column }));
        let rows = (1..=9u8)
            .flat_map(|row| (1..=9u8).map(move |value| Constraint::RowNumber { row, value }));
        let columns = (1..=9u8)
            .flat_map(|column| (1..=9u8).map(move |value| Constraint::ColumnNumber { column, value }));
        let squares = (1..=9u8)
            .flat_map(|square| (1..=9u8).map(move |value| Constraint::SquareNumber { square, value }));

        cells.chain(rows).chain(columns).chain(squares)
    }
}

impl crate::Constraint for Constraint {}

/// Errors produced when building or solving a Sudoku puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cell holds a value outside `0..=9`.
    InvalidValue {
        /// The row index of the offending cell.
        row: u8,
        /// The column index of the offending cell.
        column: u8,
        /// The offending value.
        value: u8,
    },
    /// Two givens place the same digit in a shared row, column, or square,
    /// or place two digits in the same cell.
    ConflictingGivens {
        /// The given encountered first, in row-major order.
        first: Possibility,
        /// The later given that conflicts with it.
        second: Possibility,
    },
    /// The search exhausted every branch without completing the grid.
    Unsolvable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidValue { row, column, value } => {
                write!(f, "cell ({}, {}) holds {}, outside 0..=9", row, column, value)
            }
            Error::ConflictingGivens { first, second } => {
                write!(
                    f,
                    "given {} at ({}, {}) conflicts with given {} at ({}, {})",
                    second.value, second.row, second.column, first.value, first.row, first.column
                )
            }
            Error::Unsolvable => write!(f, "puzzle has no solution"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: u8, column: u8, value: u8) -> Possibility {
        Possibility { row, column, value }
    }

    #[test]
    fn check_square_indices() {
        assert_eq!(p(1, 1, 1).square(), 1);
        assert_eq!(p(1, 9, 1).square(), 3);
        assert_eq!(p(5, 4, 1).square(), 5);
        assert_eq!(p(7, 1, 1).square(), 7);
        assert_eq!(p(9, 9, 1).square(), 9);
    }

    #[test]
    fn check_possibility_constraints() {
        use crate::Possibility as _;

        assert_eq!(
            p(2, 3, 7).constraints(),
            vec![
                Constraint::RowColumn { row: 2, column: 3 },
                Constraint::RowNumber { row: 2, value: 7 },
                Constraint::ColumnNumber { column: 3, value: 7 },
                Constraint::SquareNumber { square: 1, value: 7 },
            ]
        );
    }

    #[test]
    fn check_universe_sizes() {
        assert_eq!(Possibility::all().count(), 729);
        assert_eq!(Constraint::all().count(), 324);
    }

    #[test]
    fn reject_value_out_of_range() {
        let mut puzzle: Grid = [[0; 9]; 9];
        puzzle[4][6] = 12;

        assert_eq!(
            Sudoku::new(&puzzle).unwrap_err(),
            Error::InvalidValue {
                row: 5,
                column: 7,
                value: 12
            }
        );
    }

    #[test]
    fn reject_duplicate_in_row() {
        let mut puzzle: Grid = [[0; 9]; 9];
        puzzle[0][0] = 5;
        puzzle[0][8] = 5;

        assert_eq!(
            Sudoku::new(&puzzle).unwrap_err(),
            Error::ConflictingGivens {
                first: p(1, 1, 5),
                second: p(1, 9, 5),
            }
        );
    }

    #[test]
    fn reject_duplicate_in_square() {
        let mut puzzle: Grid = [[0; 9]; 9];
        puzzle[0][0] = 5;
        puzzle[2][2] = 5;

        assert_eq!(
            Sudoku::new(&puzzle).unwrap_err(),
            Error::ConflictingGivens {
                first: p(1, 1, 5),
                second: p(3, 3, 5),
            }
        );
    }
}
