#![deny(missing_docs)]

//! Implementation of [Algorithm X](https://en.wikipedia.org/wiki/Knuth%27s_Algorithm_X)
//! for solving [exact cover](https://en.wikipedia.org/wiki/Exact_cover) problems,
//! with a reduction of 9×9 [Sudoku](https://en.wikipedia.org/wiki/Sudoku) puzzles
//! to exact cover.

pub(crate) mod solver;
pub mod sudoku;

pub use solver::{Solution, Solver};

use std::hash::Hash;

/// A constraint that must be satisfied by exactly one chosen possibility.
///
/// Constraints are the columns of the exact cover matrix.
pub trait Constraint: Eq + Ord + Hash + Sized + Clone {}

/// A candidate element of a solution to an exact cover problem.
///
/// Possibilities are the rows of the exact cover matrix. Each possibility
/// knows the list of constraints it satisfies.
pub trait Possibility: Eq + Ord + Hash + Sized + Clone {
    /// The type of constraint this possibility satisfies.
    type Constraint: Constraint;

    /// Return the constraints satisfied by this possibility.
    fn constraints(&self) -> Vec<Self::Constraint>;
}
