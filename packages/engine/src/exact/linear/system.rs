use num_traits::Zero;

use super::{solver, SolveError};
use crate::exact::rational::Rational;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinearSystem {
    unknowns: usize,
    coefficients: Vec<Vec<Rational>>,
    constants: Vec<Rational>,
}

impl LinearSystem {
    pub fn new(unknowns: usize) -> Self {
        Self { unknowns, coefficients: Vec::new(), constants: Vec::new() }
    }

    pub fn with_capacity(unknowns: usize, equations: usize) -> Self {
        Self {
            unknowns,
            coefficients: Vec::with_capacity(equations),
            constants: Vec::with_capacity(equations),
        }
    }

    /// Builds a system from a matrix and its right-hand side.
    /// The unknown count is taken from the first row.
    pub fn from_rows(coefficients: Vec<Vec<Rational>>, constants: Vec<Rational>) -> Result<Self, SolveError> {
        if coefficients.len() != constants.len() {
            return Err(SolveError::DimensionMismatch {
                expected: coefficients.len(),
                found: constants.len(),
            });
        }

        let unknowns = coefficients.first().map_or(0, Vec::len);
        let mut system = Self::with_capacity(unknowns, coefficients.len());
        for (row, constant) in coefficients.into_iter().zip(constants) {
            system.push(row, constant)?;
        }
        Ok(system)
    }

    /// Appends one equation `row · x = constant`
    pub fn push(&mut self, row: Vec<Rational>, constant: Rational) -> Result<(), SolveError> {
        if row.len() != self.unknowns {
            return Err(SolveError::DimensionMismatch { expected: self.unknowns, found: row.len() });
        }
        self.coefficients.push(row);
        self.constants.push(constant);
        Ok(())
    }

    pub fn unknowns(&self) -> usize { self.unknowns }

    pub fn equations(&self) -> usize { self.constants.len() }

    pub fn coefficients(&self) -> &[Vec<Rational>] { &self.coefficients }

    pub fn constants(&self) -> &[Rational] { &self.constants }

    /// `A·x − b` for a candidate solution; all zeros iff `x` satisfies every equation
    pub fn residual(&self, solution: &[Rational]) -> Result<Vec<Rational>, SolveError> {
        if solution.len() != self.unknowns {
            return Err(SolveError::DimensionMismatch { expected: self.unknowns, found: solution.len() });
        }

        Ok(self
            .coefficients
            .iter()
            .zip(&self.constants)
            .map(|(row, constant)| {
                let lhs = row
                    .iter()
                    .zip(solution)
                    .fold(Rational::zero(), |acc, (a, x)| acc + a * x);
                lhs - constant
            })
            .collect())
    }

    pub fn solve(&self) -> Result<Vec<Rational>, SolveError> {
        solver::eliminate(self.coefficients.clone(), self.constants.clone(), self.unknowns)
    }
}
