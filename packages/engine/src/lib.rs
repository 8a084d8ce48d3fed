//! Hailstone Engine - exact trajectory solver for hailstone storms
//!
//! Given hailstones moving along `position + t * velocity`, counts the pairs
//! whose XY-projected paths cross inside a test area in the future, and
//! reconstructs the one integer trajectory that hits every hailstone.
//!
//! Architecture:
//! - exact/       - BigInt vectors, rationals, exact linear solver
//! - domain/      - Particles and input loading
//! - systems/     - Crossing filter and rock reconstruction
//! - simulation/  - Settings, orchestration and the WASM facade

pub mod exact;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use domain::loader::{load_path, parse_particles, ParseError};
pub use domain::particle::Particle;
pub use exact::linear::{solve, LinearSystem, SolveError};
pub use exact::rational::Rational;
pub use exact::vector::Vector3Int;
pub use simulation::{Hailstorm, Settings, SettingsError, StormCore, TestArea};
pub use systems::crossing::{count_crossings, Bounds, Crossing, InvalidBounds, PairwiseIntersector, Rejection};
pub use systems::rock::{reconstruct, ReconstructionError, RockTrajectory, Unknown, ROCK_PREFIX_LEN};

use wasm_bindgen::prelude::*;

// Browsers need the rayon pool started from JS before any parallel count
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Hailstone WASM engine initialized".into());
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
