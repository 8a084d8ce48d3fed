//! Rock trajectory reconstruction
//!
//! Unknowns are the rock position `P`, velocity `V` and one meeting time per
//! particle. For particle `i`, `P + t_i*V = p_i + t_i*v_i` is bilinear in
//! `t_i*V`. Eliminating `t_i` leaves `(P - p_i) x (V - v_i) = 0`, still
//! bilinear through `P x V`, but that term is shared by every particle, so
//! subtracting the relation of particle `i` from that of particle `j` gives
//!
//! `P x (v_j - v_i) + (p_j - p_i) x V = p_j x v_j - p_i x v_i`
//!
//! which is linear in the six rock unknowns. Once `P` and `V` are known,
//! `t_i * (V - v_i) = p_i - P` is linear in the times.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use thiserror::Error;
use tracing::debug;

use crate::domain::particle::Particle;
use crate::exact::linear::{LinearSystem, SolveError};
use crate::exact::rational::{from_int, to_exact_integer, Rational};
use crate::exact::vector::Vector3Int;

/// Particles used from the front of the list. Four pairwise-subtracted
/// particles give 18 equations for 6 rock unknowns plus 12 for the 4 times.
pub const ROCK_PREFIX_LEN: usize = 4;

const ROCK_UNKNOWNS: usize = 6;

/// Fixed ordering of the unknowns in the solution vector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unknown {
    X0,
    Y0,
    Z0,
    Vx,
    Vy,
    Vz,
    /// Meeting time with the i-th particle of the prefix
    T(usize),
}

impl Unknown {
    pub const COUNT: usize = ROCK_UNKNOWNS + ROCK_PREFIX_LEN;

    pub fn index(self) -> usize {
        match self {
            Unknown::X0 => 0,
            Unknown::Y0 => 1,
            Unknown::Z0 => 2,
            Unknown::Vx => 3,
            Unknown::Vy => 4,
            Unknown::Vz => 5,
            Unknown::T(i) => ROCK_UNKNOWNS + i,
        }
    }

    /// All unknowns in index order
    pub fn ordering() -> impl Iterator<Item = Unknown> {
        [Unknown::X0, Unknown::Y0, Unknown::Z0, Unknown::Vx, Unknown::Vy, Unknown::Vz]
            .into_iter()
            .chain((0..ROCK_PREFIX_LEN).map(Unknown::T))
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unknown::X0 => write!(f, "x0"),
            Unknown::Y0 => write!(f, "y0"),
            Unknown::Z0 => write!(f, "z0"),
            Unknown::Vx => write!(f, "vx"),
            Unknown::Vy => write!(f, "vy"),
            Unknown::Vz => write!(f, "vz"),
            Unknown::T(i) => write!(f, "t{}", i + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconstructionError {
    #[error("need {needed} particles to reconstruct the rock, found {found}")]
    NotEnoughParticles { needed: usize, found: usize },
    #[error("no unique rock trajectory")]
    NoUniqueSolution(#[source] SolveError),
    #[error("rock system rows do not match its unknowns")]
    MalformedSystem(#[source] SolveError),
    #[error("{unknown} = {value} is not an integer")]
    NonIntegerResult { unknown: Unknown, value: String },
    #[error("rock meets particle {particle} at negative time {time}")]
    EncounterInPast { particle: usize, time: BigInt },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RockTrajectory {
    pub position: Vector3Int,
    pub velocity: Vector3Int,
    /// `encounter_times[i]` is when the rock meets prefix particle `i`
    pub encounter_times: Vec<BigInt>,
}

impl RockTrajectory {
    pub fn position_sum(&self) -> BigInt {
        self.position.component_sum()
    }

    pub fn position_at(&self, t: &BigInt) -> Vector3Int {
        &self.position + &(&self.velocity * t)
    }
}

pub fn reconstruct(particles: &[Particle]) -> Result<RockTrajectory, ReconstructionError> {
    let prefix = particles
        .get(..ROCK_PREFIX_LEN)
        .ok_or(ReconstructionError::NotEnoughParticles {
            needed: ROCK_PREFIX_LEN,
            found: particles.len(),
        })?;

    let rock = solve_rock(prefix)?;
    let times = solve_times(prefix, &rock)?;

    let solution: Vec<Rational> = rock.into_iter().chain(times).collect();
    let values = integer_values(&solution)?;

    let position = Vector3Int {
        x: values[Unknown::X0.index()].clone(),
        y: values[Unknown::Y0.index()].clone(),
        z: values[Unknown::Z0.index()].clone(),
    };
    let velocity = Vector3Int {
        x: values[Unknown::Vx.index()].clone(),
        y: values[Unknown::Vy.index()].clone(),
        z: values[Unknown::Vz.index()].clone(),
    };
    let encounter_times = values[Unknown::T(0).index()..].to_vec();

    if let Some((particle, time)) = prefix
        .iter()
        .zip(&encounter_times)
        .find(|(_, t)| t.is_negative())
    {
        return Err(ReconstructionError::EncounterInPast {
            particle: particle.id,
            time: time.clone(),
        });
    }

    debug!(%position, %velocity, "rock reconstructed");
    Ok(RockTrajectory { position, velocity, encounter_times })
}

/// Coefficient rows over `[x0, y0, z0, vx, vy, vz]` for one particle pair
fn pair_equations(a: &Particle, b: &Particle) -> [(Vec<Rational>, Rational); 3] {
    let dv = &b.velocity - &a.velocity;
    let dp = &b.position - &a.position;
    let rhs = &b.position.cross(&b.velocity) - &a.position.cross(&a.velocity);
    let zero = BigInt::zero();

    let row = |values: [&BigInt; 6]| values.into_iter().map(from_int).collect::<Vec<_>>();
    let (ndv, ndp) = (
        Vector3Int { x: -&dv.x, y: -&dv.y, z: -&dv.z },
        Vector3Int { x: -&dp.x, y: -&dp.y, z: -&dp.z },
    );

    [
        (row([&zero, &dv.z, &ndv.y, &zero, &ndp.z, &dp.y]), from_int(&rhs.x)),
        (row([&ndv.z, &zero, &dv.x, &dp.z, &zero, &ndp.x]), from_int(&rhs.y)),
        (row([&dv.y, &ndv.x, &zero, &ndp.y, &dp.x, &zero]), from_int(&rhs.z)),
    ]
}

/// Collects equations over `unknowns` columns. A row of the wrong width is
/// a construction bug and is kept apart from solver failures.
pub(super) fn assemble(
    unknowns: usize,
    equations: impl IntoIterator<Item = (Vec<Rational>, Rational)>,
) -> Result<LinearSystem, ReconstructionError> {
    let equations = equations.into_iter();
    let mut system = LinearSystem::with_capacity(unknowns, equations.size_hint().0);
    for (row, constant) in equations {
        system.push(row, constant).map_err(ReconstructionError::MalformedSystem)?;
    }
    Ok(system)
}

fn solve_rock(prefix: &[Particle]) -> Result<Vec<Rational>, ReconstructionError> {
    let equations = prefix
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| prefix[i + 1..].iter().flat_map(move |b| pair_equations(a, b)));
    let system = assemble(ROCK_UNKNOWNS, equations)?;

    debug!(equations = system.equations(), "solving rock position and velocity");
    system.solve().map_err(|err| {
        debug!(%err, "rock system has no unique solution");
        ReconstructionError::NoUniqueSolution(err)
    })
}

fn solve_times(prefix: &[Particle], rock: &[Rational]) -> Result<Vec<Rational>, ReconstructionError> {
    let (position, velocity) = rock.split_at(3);
    let equations = prefix.iter().enumerate().flat_map(move |(i, particle)| {
        let axes = particle.position.components().into_iter().zip(particle.velocity.components());
        axes.enumerate().map(move |(axis, (p, v))| {
            let mut row = vec![Rational::zero(); prefix.len()];
            row[i] = &velocity[axis] - from_int(v);
            (row, from_int(p) - &position[axis])
        })
    });
    let system = assemble(prefix.len(), equations)?;

    system.solve().map_err(|err| {
        debug!(%err, "encounter times have no unique solution");
        ReconstructionError::NoUniqueSolution(err)
    })
}

fn integer_values(solution: &[Rational]) -> Result<Vec<BigInt>, ReconstructionError> {
    Unknown::ordering()
        .zip(solution)
        .map(|(unknown, value)| {
            to_exact_integer(value).ok_or_else(|| ReconstructionError::NonIntegerResult {
                unknown,
                value: value.to_string(),
            })
        })
        .collect()
}
