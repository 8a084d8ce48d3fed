use std::fmt;

use num_bigint::BigInt;

use crate::exact::vector::Vector3Int;

/// A hailstone moving along `position + t * velocity`.
///
/// Velocity is expected to be nonzero; the geometry is undefined otherwise
/// and nothing here rejects it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Particle {
    /// Index in input order
    pub id: usize,
    pub position: Vector3Int,
    pub velocity: Vector3Int,
}

impl Particle {
    pub fn new(id: usize, position: Vector3Int, velocity: Vector3Int) -> Self {
        Self { id, position, velocity }
    }

    pub fn position_at(&self, t: &BigInt) -> Vector3Int {
        &self.position + &(&self.velocity * t)
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.position, self.velocity)
    }
}
