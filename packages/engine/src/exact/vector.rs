use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_bigint::BigInt;
use num_traits::Zero;

/// 3D integer vector with arbitrary-precision components
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector3Int {
    pub x: BigInt,
    pub y: BigInt,
    pub z: BigInt,
}

impl Vector3Int {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>, z: impl Into<BigInt>) -> Self {
        Self { x: x.into(), y: y.into(), z: z.into() }
    }

    pub fn zero() -> Self {
        Self { x: BigInt::zero(), y: BigInt::zero(), z: BigInt::zero() }
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }

    /// Components in x, y, z order
    pub fn components(&self) -> [&BigInt; 3] {
        [&self.x, &self.y, &self.z]
    }

    pub fn cross(&self, other: &Vector3Int) -> Self {
        Self {
            x: &self.y * &other.z - &self.z * &other.y,
            y: &self.z * &other.x - &self.x * &other.z,
            z: &self.x * &other.y - &self.y * &other.x,
        }
    }

    pub fn component_sum(&self) -> BigInt {
        &self.x + &self.y + &self.z
    }
}

impl Add<&Vector3Int> for &Vector3Int {
    type Output = Vector3Int;
    fn add(self, rhs: &Vector3Int) -> Vector3Int {
        Vector3Int { x: &self.x + &rhs.x, y: &self.y + &rhs.y, z: &self.z + &rhs.z }
    }
}

impl Sub<&Vector3Int> for &Vector3Int {
    type Output = Vector3Int;
    fn sub(self, rhs: &Vector3Int) -> Vector3Int {
        Vector3Int { x: &self.x - &rhs.x, y: &self.y - &rhs.y, z: &self.z - &rhs.z }
    }
}

impl Mul<&BigInt> for &Vector3Int {
    type Output = Vector3Int;
    fn mul(self, rhs: &BigInt) -> Vector3Int {
        Vector3Int { x: &self.x * rhs, y: &self.y * rhs, z: &self.z * rhs }
    }
}

impl fmt::Display for Vector3Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_product_of_unit_axes() {
        let x = Vector3Int::new(1, 0, 0);
        let y = Vector3Int::new(0, 1, 0);
        assert_eq!(x.cross(&y), Vector3Int::new(0, 0, 1));
        assert_eq!(y.cross(&x), Vector3Int::new(0, 0, -1));
        assert!(x.cross(&x).is_zero());
    }

    #[test]
    fn arithmetic_keeps_big_components_exact() {
        let big = BigInt::from(i64::MAX);
        let v = Vector3Int::new(big.clone(), 1, -1);
        let doubled = &v + &v;
        assert_eq!(doubled.x, &big * BigInt::from(2));
        assert_eq!(&doubled - &v, v);
        assert_eq!(&v * &BigInt::from(3), Vector3Int::new(&big * BigInt::from(3), 3, -3));
    }

    #[test]
    fn displays_as_comma_separated_triplet() {
        assert_eq!(Vector3Int::new(19, -13, 0).to_string(), "19, -13, 0");
        assert_eq!(Vector3Int::new(1, 2, 3).component_sum(), BigInt::from(6));
    }
}
