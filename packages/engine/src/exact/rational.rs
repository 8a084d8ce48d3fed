use num_bigint::BigInt;
use num_rational::BigRational;

/// Exact fraction of two big integers.
///
/// `BigRational` normalizes after every operation: the pair is divided by
/// its gcd and the denominator is kept positive, so magnitudes only grow as
/// far as the value itself requires.
pub type Rational = BigRational;

#[inline]
pub fn from_int(value: &BigInt) -> Rational {
    Rational::from_integer(value.clone())
}

/// Returns the integer value when the fraction has denominator 1
pub fn to_exact_integer(value: &Rational) -> Option<BigInt> {
    if value.is_integer() {
        Some(value.to_integer())
    } else {
        None
    }
}
