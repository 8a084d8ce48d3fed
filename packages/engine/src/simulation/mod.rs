//! Storm - a parsed particle list plus the settings both computations use
//!
//! StormCore only orchestrates: parsing lives in domain/, the crossing
//! filter and rock reconstruction in systems/.

use tracing::info;

use crate::domain::loader::{self, ParseError};
use crate::domain::particle::Particle;
use crate::systems::crossing::{InvalidBounds, PairwiseIntersector};
use crate::systems::rock::{self, ReconstructionError, RockTrajectory};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Hailstorm;
pub use settings::{Settings, SettingsError, TestArea, DEFAULT_TEST_AREA_MAX, DEFAULT_TEST_AREA_MIN};

use perf_timer::PerfTimer;

pub struct StormCore {
    particles: Vec<Particle>,
    settings: Settings,
}

impl StormCore {
    pub fn new(particles: Vec<Particle>, settings: Settings) -> Self {
        Self { particles, settings }
    }

    /// Parse text or JSON input (see `domain::loader`)
    pub fn from_input(input: &str, settings: Settings) -> Result<Self, ParseError> {
        Ok(Self::new(loader::parse_particles(input)?, settings))
    }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn settings(&self) -> &Settings { &self.settings }

    pub fn set_test_area(&mut self, area: TestArea) {
        settings::set_test_area(self, area);
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        settings::set_parallel(self, parallel);
    }

    /// Pairs whose projected paths cross inside the test area in the future
    pub fn crossing_count(&self) -> Result<usize, InvalidBounds> {
        let timer = PerfTimer::start("crossing_count");
        let outcome = self.settings.test_area.bounds().map(|bounds| {
            PairwiseIntersector::new(bounds)
                .with_parallel(self.settings.parallel)
                .count(&self.particles)
        });
        if let Ok(count) = &outcome {
            info!(count, particles = self.particles.len(), "crossings counted");
        }
        timer.finish(outcome)
    }

    pub fn reconstruct_rock(&self) -> Result<RockTrajectory, ReconstructionError> {
        let timer = PerfTimer::start("reconstruct_rock");
        let outcome = rock::reconstruct(&self.particles);
        if let Ok(rock) = &outcome {
            info!(position = %rock.position, velocity = %rock.velocity, "rock found");
        }
        timer.finish(outcome)
    }

    pub fn particles_json(&self) -> Result<String, serde_json::Error> {
        loader::to_json(&self.particles)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
