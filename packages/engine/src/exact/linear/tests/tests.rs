use num_bigint::BigInt;
use num_traits::Zero;

use super::*;

fn r(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

fn frac(n: i64, d: i64) -> Rational {
    Rational::new(BigInt::from(n), BigInt::from(d))
}

fn rows(values: &[&[i64]]) -> Vec<Vec<Rational>> {
    values.iter().map(|row| row.iter().map(|&v| r(v)).collect()).collect()
}

fn consts(values: &[i64]) -> Vec<Rational> {
    values.iter().map(|&v| r(v)).collect()
}

/// xorshift32; deterministic so failures reproduce
fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[test]
fn solves_two_by_two() {
    // x + y = 3, x - y = 1
    let x = solve(&rows(&[&[1, 1], &[1, -1]]), &consts(&[3, 1])).unwrap();
    assert_eq!(x, consts(&[2, 1]));
}

#[test]
fn fractional_solution_stays_exact() {
    // 3x = 1, 6y = 4
    let x = solve(&rows(&[&[3, 0], &[0, 6]]), &consts(&[1, 4])).unwrap();
    assert_eq!(x, vec![frac(1, 3), frac(2, 3)]);
}

#[test]
fn pivots_past_leading_zero() {
    // First row has a zero in column 0, so a later row must be swapped up.
    let x = solve(&rows(&[&[0, 2, 1], &[1, 1, 1], &[2, 0, -1]]), &consts(&[5, 4, 1])).unwrap();
    assert_eq!(x, consts(&[1, 2, 1]));
}

#[test]
fn overdetermined_consistent_system_solves() {
    let x = solve(&rows(&[&[1, 0], &[0, 1], &[1, 1], &[2, -1]]), &consts(&[4, -2, 2, 10])).unwrap();
    assert_eq!(x, consts(&[4, -2]));
}

#[test]
fn contradictory_row_is_inconsistent() {
    // x + y = 1 and 2x + 2y = 3 cannot both hold
    let err = solve(&rows(&[&[1, 1], &[2, 2]]), &consts(&[1, 3])).unwrap_err();
    assert_eq!(err, SolveError::Inconsistent { row: 1 });
}

#[test]
fn inconsistent_row_reports_input_index() {
    let err = solve(&rows(&[&[0, 0], &[1, 0], &[0, 1]]), &consts(&[7, 1, 1])).unwrap_err();
    assert_eq!(err, SolveError::Inconsistent { row: 0 });
}

#[test]
fn free_column_is_underdetermined() {
    let err = solve(&rows(&[&[1, 1, 0], &[0, 0, 1]]), &consts(&[2, 3])).unwrap_err();
    assert_eq!(err, SolveError::Underdetermined { column: 1 });
}

#[test]
fn duplicate_equation_is_underdetermined() {
    let err = solve(&rows(&[&[1, 2], &[2, 4]]), &consts(&[3, 6])).unwrap_err();
    assert_eq!(err, SolveError::Underdetermined { column: 1 });
}

#[test]
fn inconsistency_wins_over_free_columns() {
    let err = solve(&rows(&[&[1, 1], &[1, 1]]), &consts(&[0, 1])).unwrap_err();
    assert!(matches!(err, SolveError::Inconsistent { .. }));
}

#[test]
fn rejects_ragged_rows_and_short_rhs() {
    let ragged = vec![vec![r(1), r(2)], vec![r(1)]];
    assert_eq!(
        solve(&ragged, &consts(&[1, 2])).unwrap_err(),
        SolveError::DimensionMismatch { expected: 2, found: 1 }
    );
    assert_eq!(
        solve(&rows(&[&[1, 0], &[0, 1]]), &consts(&[1])).unwrap_err(),
        SolveError::DimensionMismatch { expected: 2, found: 1 }
    );

    let mut system = LinearSystem::new(3);
    assert!(system.push(vec![r(1)], r(0)).is_err());
    assert_eq!(system.equations(), 0);
}

#[test]
fn coefficients_beyond_machine_words() {
    // Products of these overflow i128 during elimination.
    let big: BigInt = "123456789012345678901234567890".parse().unwrap();
    let a = Rational::from_integer(big.clone());
    let b = Rational::from_integer(&big * &big + BigInt::from(1));
    let matrix = vec![vec![a.clone(), r(1)], vec![b.clone(), r(-1)]];
    let system = LinearSystem::from_rows(matrix, vec![&a + r(7), &b - r(7)]).unwrap();

    let x = system.solve().unwrap();
    assert_eq!(x, consts(&[1, 7]));
    assert!(system.residual(&x).unwrap().iter().all(|v| v.is_zero()));
}

#[test]
fn random_systems_have_zero_residual() {
    let mut state = 0x9E37_79B9u32;
    let mut unique = 0;

    for _ in 0..200 {
        let n = 1 + (xorshift32(&mut state) % 5) as usize;
        let m = n + (xorshift32(&mut state) % 3) as usize;

        let truth: Vec<Rational> = (0..n).map(|_| r((xorshift32(&mut state) % 41) as i64 - 20)).collect();
        let matrix: Vec<Vec<Rational>> = (0..m)
            .map(|_| (0..n).map(|_| r((xorshift32(&mut state) % 19) as i64 - 9)).collect())
            .collect();
        let rhs: Vec<Rational> = matrix
            .iter()
            .map(|row| row.iter().zip(&truth).fold(Rational::zero(), |acc, (a, x)| acc + a * x))
            .collect();

        let system = LinearSystem::from_rows(matrix, rhs).unwrap();
        match system.solve() {
            Ok(x) => {
                assert!(system.residual(&x).unwrap().iter().all(|v| v.is_zero()));
                // Unique solutions must be the one we planted.
                assert_eq!(x, truth);
                unique += 1;
            }
            // b lies in the column space by construction, so only rank loss can fail
            Err(err) => assert!(matches!(err, SolveError::Underdetermined { .. }), "{err}"),
        }
    }

    assert!(unique > 100);
}

#[test]
fn random_perturbed_systems_never_return_garbage() {
    let mut state = 12345u32;

    for _ in 0..200 {
        let n = 2 + (xorshift32(&mut state) % 3) as usize;
        let m = n + 1;
        let matrix: Vec<Vec<Rational>> = (0..m)
            .map(|_| (0..n).map(|_| r((xorshift32(&mut state) % 7) as i64 - 3)).collect())
            .collect();
        let rhs: Vec<Rational> = (0..m).map(|_| r((xorshift32(&mut state) % 7) as i64 - 3)).collect();

        let system = LinearSystem::from_rows(matrix, rhs).unwrap();
        if let Ok(x) = system.solve() {
            assert!(system.residual(&x).unwrap().iter().all(|v| v.is_zero()));
        }
    }
}

#[test]
fn empty_system_has_empty_solution() {
    assert_eq!(LinearSystem::new(0).solve().unwrap(), Vec::<Rational>::new());
    assert_eq!(LinearSystem::new(2).solve().unwrap_err(), SolveError::Underdetermined { column: 0 });
}
