//! Particle input
//!
//! Two formats are accepted:
//! - text, one hailstone per line: `19, 13, 30 @ -2, 1, -2`
//! - JSON, an array of `{"position": {"x", "y", "z"}, "velocity": {...}}`
//!
//! JSON numbers go through serde_json's arbitrary precision mode so that
//! integers of any size reach `BigInt` untouched.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::particle::Particle;
use crate::exact::vector::Vector3Int;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
    /// `item` is 1-based
    #[error("invalid item #{item}: {reason}")]
    MalformedRecord { item: usize, reason: String },
    #[error("invalid item #{item}: {value:?} is not an integer")]
    NotAnInteger { item: usize, value: String },
}

#[derive(Serialize, Deserialize)]
struct TripletRecord {
    x: Number,
    y: Number,
    z: Number,
}

#[derive(Serialize, Deserialize)]
struct ParticleRecord {
    position: TripletRecord,
    velocity: TripletRecord,
}

impl TryFrom<&Vector3Int> for TripletRecord {
    type Error = serde_json::Error;

    fn try_from(v: &Vector3Int) -> Result<Self, Self::Error> {
        Ok(Self {
            x: Number::from_str(&v.x.to_string())?,
            y: Number::from_str(&v.y.to_string())?,
            z: Number::from_str(&v.z.to_string())?,
        })
    }
}

/// Picks the format from the first non-blank character
pub fn parse_particles(input: &str) -> Result<Vec<Particle>, ParseError> {
    if input.trim_start().starts_with('[') {
        parse_json(input)
    } else {
        parse_text(input)
    }
}

pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<Particle>, ParseError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)?;
    let particles = parse_particles(&input)?;
    debug!(path = %path.display(), count = particles.len(), "loaded particles");
    Ok(particles)
}

pub fn parse_text(input: &str) -> Result<Vec<Particle>, ParseError> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(id, line)| parse_line(id, line))
        .collect()
}

pub fn parse_json(input: &str) -> Result<Vec<Particle>, ParseError> {
    let records: Vec<ParticleRecord> = serde_json::from_str(input)?;
    records
        .iter()
        .enumerate()
        .map(|(id, record)| -> Result<Particle, ParseError> {
            let item = id + 1;
            Ok(particle(
                id,
                json_triplet(item, &record.position)?,
                json_triplet(item, &record.velocity)?,
            ))
        })
        .collect()
}

/// Pretty-printed JSON records, readable back by `parse_json`
pub fn to_json(particles: &[Particle]) -> Result<String, serde_json::Error> {
    let records = particles
        .iter()
        .map(|p| -> Result<ParticleRecord, serde_json::Error> {
            Ok(ParticleRecord {
                position: TripletRecord::try_from(&p.position)?,
                velocity: TripletRecord::try_from(&p.velocity)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    serde_json::to_string_pretty(&records)
}

fn parse_line(id: usize, line: &str) -> Result<Particle, ParseError> {
    let item = id + 1;
    let (position, velocity) = line.split_once('@').ok_or_else(|| ParseError::MalformedRecord {
        item,
        reason: "missing '@' between position and velocity".to_string(),
    })?;

    Ok(particle(id, text_triplet(item, position)?, text_triplet(item, velocity)?))
}

fn text_triplet(item: usize, text: &str) -> Result<Vector3Int, ParseError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(ParseError::MalformedRecord {
            item,
            reason: format!("expected 3 components, found {}", parts.len()),
        });
    };

    Ok(Vector3Int {
        x: parse_int(item, x)?,
        y: parse_int(item, y)?,
        z: parse_int(item, z)?,
    })
}

fn json_triplet(item: usize, record: &TripletRecord) -> Result<Vector3Int, ParseError> {
    Ok(Vector3Int {
        x: parse_int(item, &record.x.to_string())?,
        y: parse_int(item, &record.y.to_string())?,
        z: parse_int(item, &record.z.to_string())?,
    })
}

fn parse_int(item: usize, text: &str) -> Result<BigInt, ParseError> {
    text.parse::<BigInt>()
        .map_err(|_| ParseError::NotAnInteger { item, value: text.to_string() })
}

fn particle(id: usize, position: Vector3Int, velocity: Vector3Int) -> Particle {
    if velocity.is_zero() {
        warn!(id, %position, "particle has zero velocity");
    }
    Particle::new(id, position, velocity)
}
