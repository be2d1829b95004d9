//! Map-based Algorithm X solver.
//!
//! The solver keeps two relations: the immutable universe (possibility →
//! constraints it satisfies) and the live column table (constraint →
//! possibilities still available). Search branches on the live column with
//! the fewest possibilities, eliminating and restoring table state around
//! each tentative choice.

use std::collections::{BTreeMap, BTreeSet};

use crate::Possibility;

/// Full mapping from possibility to the constraints it satisfies. Built once,
/// never mutated during search.
type Universe<P> = BTreeMap<P, Vec<<P as Possibility>::Constraint>>;

/// Mapping from constraint to the possibilities that still satisfy it and
/// have not been eliminated. The only structure mutated during search.
type LiveColumns<P> = BTreeMap<<P as Possibility>::Constraint, BTreeSet<P>>;

/// An exact cover: the ordered sequence of chosen possibilities.
pub type Solution<P> = Vec<P>;

/// Solver that finds the first exact cover of a set of possibilities.
///
/// The iteration order of the underlying ordered maps is deterministic, so
/// repeated solves of the same problem return the same cover.
pub struct Solver<P: Possibility> {
    universe: Universe<P>,
    live: LiveColumns<P>,
    cover: Vec<P>,
}

/// Undo record for one `eliminate` call: the covered columns' row sets, in
/// the order the columns were visited. Restoring consumes it back to front.
/// Dropping it without restoring commits the elimination.
#[must_use]
struct Elimination<P: Possibility> {
    row: P,
    saved: Vec<(P::Constraint, BTreeSet<P>)>,
}

impl<P> Solver<P>
where
    P: Possibility,
{
    /// Create a new `Solver` over the given possibilities.
    ///
    /// The constraint set is inferred: every constraint satisfied by at least
    /// one possibility becomes a column.
    pub fn new(possibilities: &[P]) -> Self {
        Self::with_constraints(possibilities, &[])
    }

    /// Create a new `Solver` over the given possibilities and an explicit
    /// list of constraints.
    ///
    /// Constraints satisfied by no possibility are kept as empty columns, so
    /// instances known to be unsatisfiable fail instead of silently ignoring
    /// the uncoverable constraint.
    pub fn with_constraints(possibilities: &[P], constraints: &[P::Constraint]) -> Self {
        let mut universe = Universe::<P>::new();
        let mut live = LiveColumns::<P>::new();

        for constraint in constraints {
            live.entry(constraint.clone()).or_default();
        }

        for possibility in possibilities {
            let columns = possibility.constraints();

            for column in &columns {
                live.entry(column.clone())
                    .or_default()
                    .insert(possibility.clone());
            }

            universe.insert(possibility.clone(), columns);
        }

        Solver {
            universe,
            live,
            cover: Vec::new(),
        }
    }

    /// Add an already-decided possibility to the cover, bypassing search.
    ///
    /// Every possibility conflicting with `row` is eliminated permanently;
    /// there is no undo. All preselections must happen before the first call
    /// to [`first_solution`](Self::first_solution).
    ///
    /// # Panics
    ///
    /// Panics if `row` is unknown to this solver, or if any of its columns
    /// was already covered by an earlier preselection.
    pub fn preselect(&mut self, row: P) {
        self.cover.push(row.clone());
        let _committed = Self::eliminate(&self.universe, &mut self.live, &row);
    }

    /// Search for the first exact cover, returning the full cover sequence
    /// (preselected and chosen possibilities, in selection order) or `None`
    /// if every branch is exhausted.
    pub fn first_solution(&mut self) -> Option<Solution<P>> {
        log::debug!(
            "searching for a cover of {} live columns ({} preselected)",
            self.live.len(),
            self.cover.len()
        );

        if Self::search(&self.universe, &mut self.live, &mut self.cover) {
            Some(self.cover.clone())
        } else {
            None
        }
    }

    /// Select `row`: cover each of its columns, capturing the column's row
    /// set, and strip every captured row from all its other live columns.
    ///
    /// The returned record undoes this bit-for-bit when passed to
    /// [`restore`](Self::restore).
    fn eliminate(universe: &Universe<P>, live: &mut LiveColumns<P>, row: &P) -> Elimination<P> {
        let columns = universe.get(row).expect("row not present in universe");
        let mut saved = Vec::with_capacity(columns.len());

        for column in columns {
            let rows = live.remove(column).expect("column already covered");

            for conflicting in &rows {
                for other_column in &universe[conflicting] {
                    if other_column != column {
                        if let Some(live_rows) = live.get_mut(other_column) {
                            live_rows.remove(conflicting);
                        }
                    }
                }
            }

            saved.push((column.clone(), rows));
        }

        Elimination {
            row: row.clone(),
            saved,
        }
    }

    /// Inverse of [`eliminate`](Self::eliminate). Columns were covered front
    /// to back, so the saved row sets are reinstated back to front.
    fn restore(universe: &Universe<P>, live: &mut LiveColumns<P>, elimination: Elimination<P>) {
        let Elimination { row, mut saved } = elimination;

        for column in universe[&row].iter().rev() {
            let (saved_column, rows) = saved.pop().expect("saved buffer out of sync");
            debug_assert!(*column == saved_column);

            for reinstated in &rows {
                for other_column in &universe[reinstated] {
                    if let Some(live_rows) = live.get_mut(other_column) {
                        live_rows.insert(reinstated.clone());
                    }
                }
            }

            live.insert(saved_column, rows);
        }
    }

    fn search(universe: &Universe<P>, live: &mut LiveColumns<P>, cover: &mut Vec<P>) -> bool {
        if live.is_empty() {
            return true;
        }

        // Branch on the column with the fewest live rows. A column with no
        // rows yields zero candidates below and fails this branch.
        let mut min_column = None;
        let mut min_size = usize::MAX;
        for (column, rows) in live.iter() {
            if rows.len() < min_size {
                min_size = rows.len();
                min_column = Some(column);
                if min_size == 1 {
                    break;
                }
            }
        }

        let min_column = min_column.expect("live table is non-empty");
        let candidates: Vec<P> = live[min_column].iter().cloned().collect();

        for row in candidates {
            cover.push(row.clone());
            let undo = Self::eliminate(universe, live, &row);

            if Self::search(universe, live, cover) {
                return true;
            }

            Self::restore(universe, live, undo);
            cover.pop();
        }

        false
    }
}
