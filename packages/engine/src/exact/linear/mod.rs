//! Exact linear-equation solving over rationals
//!
//! A `LinearSystem` is a dense coefficient matrix plus constants. Column `j`
//! always means the unknown the caller placed at index `j`; the solver never
//! reorders unknowns, so solution vectors can be read back by position.

use thiserror::Error;

use crate::exact::rational::Rational;

mod solver;
mod system;

pub use system::LinearSystem;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Elimination left `0 = c` with `c != 0` in equation `row` (input order)
    #[error("inconsistent system: equation {row} reduces to 0 = nonzero")]
    Inconsistent { row: usize },
    /// Unknown `column` has no pivot, so infinitely many solutions exist
    #[error("underdetermined system: unknown {column} is free")]
    Underdetermined { column: usize },
    #[error("dimension mismatch: expected {expected} entries, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Solves `A·x = b` exactly, succeeding only when the solution is unique
pub fn solve(a: &[Vec<Rational>], b: &[Rational]) -> Result<Vec<Rational>, SolveError> {
    LinearSystem::from_rows(a.to_vec(), b.to_vec())?.solve()
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
