use num_traits::Zero;
use tracing::trace;

use super::SolveError;
use crate::exact::rational::Rational;

/// Gaussian elimination followed by back-substitution.
///
/// Any nonzero entry is an acceptable pivot: arithmetic is exact, so the
/// choice only has to avoid dividing by zero. Rows are swapped in place and
/// `origin` remembers where each one came from for error reporting.
pub(super) fn eliminate(
    mut rows: Vec<Vec<Rational>>,
    mut rhs: Vec<Rational>,
    unknowns: usize,
) -> Result<Vec<Rational>, SolveError> {
    let equations = rows.len();
    let mut origin: Vec<usize> = (0..equations).collect();
    let mut rank = 0;
    let mut free_column = None;

    for column in 0..unknowns {
        let Some(pivot) = (rank..equations).find(|&r| !rows[r][column].is_zero()) else {
            if free_column.is_none() {
                free_column = Some(column);
            }
            continue;
        };

        rows.swap(rank, pivot);
        rhs.swap(rank, pivot);
        origin.swap(rank, pivot);

        let (upper, lower) = rows.split_at_mut(rank + 1);
        let pivot_row = &upper[rank];
        let pivot_rhs = rhs[rank].clone();

        for (offset, row) in lower.iter_mut().enumerate() {
            if row[column].is_zero() {
                continue;
            }

            let factor = &row[column] / &pivot_row[column];
            for c in column..unknowns {
                let delta = &factor * &pivot_row[c];
                row[c] = &row[c] - delta;
            }

            let target = rank + 1 + offset;
            rhs[target] = &rhs[target] - &factor * &pivot_rhs;
        }

        rank += 1;
    }

    trace!(equations, unknowns, rank, "forward elimination done");

    // Rows past the rank have all-zero coefficients now.
    if let Some(row) = (rank..equations).find(|&r| !rhs[r].is_zero()) {
        return Err(SolveError::Inconsistent { row: origin[row] });
    }

    if let Some(column) = free_column {
        return Err(SolveError::Underdetermined { column });
    }

    // Full column rank: row i holds the pivot of column i.
    let mut solution = vec![Rational::zero(); unknowns];
    for i in (0..unknowns).rev() {
        let mut acc = rhs[i].clone();
        for j in (i + 1)..unknowns {
            acc = acc - &rows[i][j] * &solution[j];
        }
        solution[i] = acc / &rows[i][i];
    }

    Ok(solution)
}
