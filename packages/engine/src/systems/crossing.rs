//! Pairwise crossing filter
//!
//! Each particle's path projected onto XY is the line
//! `vy*x - vx*y = vy*px - vx*py`. Two of those form a 2x2 system whose
//! unique solution, if any, is where the paths cross. A crossing counts when
//! both particles reach it at t >= 0 and it lies inside the test area.

use num_bigint::BigInt;
use num_traits::Signed;
use thiserror::Error;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::particle::Particle;
use crate::exact::linear::LinearSystem;
use crate::exact::rational::{from_int, Rational};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("empty test area on the {axis} axis: min {min} > max {max}")]
pub struct InvalidBounds {
    pub axis: char,
    pub min: BigInt,
    pub max: BigInt,
}

/// Inclusive rectangle `[min_x, max_x] x [min_y, max_y]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    min_x: Rational,
    max_x: Rational,
    min_y: Rational,
    max_y: Rational,
}

impl Bounds {
    pub fn new(
        min_x: impl Into<BigInt>,
        max_x: impl Into<BigInt>,
        min_y: impl Into<BigInt>,
        max_y: impl Into<BigInt>,
    ) -> Result<Self, InvalidBounds> {
        let (min_x, max_x) = (min_x.into(), max_x.into());
        let (min_y, max_y) = (min_y.into(), max_y.into());
        if min_x > max_x {
            return Err(InvalidBounds { axis: 'x', min: min_x, max: max_x });
        }
        if min_y > max_y {
            return Err(InvalidBounds { axis: 'y', min: min_y, max: max_y });
        }

        Ok(Self {
            min_x: Rational::from_integer(min_x),
            max_x: Rational::from_integer(max_x),
            min_y: Rational::from_integer(min_y),
            max_y: Rational::from_integer(max_y),
        })
    }

    /// Same range on both axes
    pub fn square(min: impl Into<BigInt>, max: impl Into<BigInt>) -> Result<Self, InvalidBounds> {
        let (min, max) = (min.into(), max.into());
        Self::new(min.clone(), max.clone(), min, max)
    }

    pub fn contains(&self, x: &Rational, y: &Rational) -> bool {
        &self.min_x <= x && x <= &self.max_x && &self.min_y <= y && y <= &self.max_y
    }
}

/// A counted crossing: the point and when each particle gets there
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crossing {
    pub x: Rational,
    pub y: Rational,
    pub time_a: Rational,
    pub time_b: Rational,
}

/// Why a pair was not counted. Never surfaced as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Projected paths are parallel or coincident
    ParallelLines,
    /// The crossing is in this particle's past
    NegativeTime { particle: usize },
    OutOfBounds,
}

fn projected_line(p: &Particle) -> (Vec<Rational>, Rational) {
    let (px, py) = (&p.position.x, &p.position.y);
    let (vx, vy) = (&p.velocity.x, &p.velocity.y);
    let constant = vy * px - vx * py;
    (vec![from_int(vy), Rational::from_integer(-vx)], Rational::from_integer(constant))
}

/// Unique XY point where the two projected paths meet, ignoring time
pub fn projected_crossing(a: &Particle, b: &Particle) -> Option<(Rational, Rational)> {
    let mut system = LinearSystem::with_capacity(2, 2);
    for p in [a, b] {
        let (row, constant) = projected_line(p);
        system.push(row, constant).ok()?;
    }

    match system.solve() {
        Ok(point) => {
            let mut coords = point.into_iter();
            Some((coords.next()?, coords.next()?))
        }
        Err(err) => {
            trace!(a = a.id, b = b.id, %err, "projected paths have no unique crossing");
            None
        }
    }
}

/// Time at which `p` reaches `(x, y)`, read off the axis with the larger
/// velocity magnitude so the divisor is never zero for a moving particle.
fn arrival_time(p: &Particle, x: &Rational, y: &Rational) -> Rational {
    let (position, velocity) = (&p.position, &p.velocity);
    if velocity.x.magnitude() >= velocity.y.magnitude() {
        (x - from_int(&position.x)) / from_int(&velocity.x)
    } else {
        (y - from_int(&position.y)) / from_int(&velocity.y)
    }
}

#[derive(Clone, Debug)]
pub struct PairwiseIntersector {
    bounds: Bounds,
    parallel: bool,
}

impl PairwiseIntersector {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds, parallel: cfg!(feature = "parallel") }
    }

    /// Fan rows of the pair triangle out to rayon. Has no effect without the
    /// `parallel` feature; the count is the same either way.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn evaluate(&self, a: &Particle, b: &Particle) -> Result<Crossing, Rejection> {
        let (x, y) = projected_crossing(a, b).ok_or(Rejection::ParallelLines)?;

        let time_a = arrival_time(a, &x, &y);
        if time_a.is_negative() {
            return Err(Rejection::NegativeTime { particle: a.id });
        }
        let time_b = arrival_time(b, &x, &y);
        if time_b.is_negative() {
            return Err(Rejection::NegativeTime { particle: b.id });
        }

        if !self.bounds.contains(&x, &y) {
            return Err(Rejection::OutOfBounds);
        }

        Ok(Crossing { x, y, time_a, time_b })
    }

    /// Number of unordered pairs whose crossing counts
    pub fn count(&self, particles: &[Particle]) -> usize {
        let count = if self.parallel {
            self.count_parallel(particles)
        } else {
            self.count_sequential(particles)
        };
        debug!(particles = particles.len(), count, parallel = self.parallel, "counted crossings");
        count
    }

    fn count_row(&self, particles: &[Particle], i: usize) -> usize {
        let a = &particles[i];
        particles[i + 1..]
            .iter()
            .filter(|b| match self.evaluate(a, b) {
                Ok(_) => true,
                Err(rejection) => {
                    trace!(a = a.id, b = b.id, ?rejection, "pair rejected");
                    false
                }
            })
            .count()
    }

    fn count_sequential(&self, particles: &[Particle]) -> usize {
        (0..particles.len()).map(|i| self.count_row(particles, i)).sum()
    }

    #[cfg(feature = "parallel")]
    fn count_parallel(&self, particles: &[Particle]) -> usize {
        (0..particles.len())
            .into_par_iter()
            .map(|i| self.count_row(particles, i))
            .sum()
    }

    #[cfg(not(feature = "parallel"))]
    fn count_parallel(&self, particles: &[Particle]) -> usize {
        self.count_sequential(particles)
    }
}

pub fn count_crossings(particles: &[Particle], bounds: &Bounds) -> usize {
    PairwiseIntersector::new(bounds.clone()).count(particles)
}
