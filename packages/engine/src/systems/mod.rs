//! Systems - the two computations run over a particle list
//!
//! - crossing: counts projected XY path crossings inside a test area
//! - rock: reconstructs the single trajectory that hits every particle

pub mod crossing;
pub mod rock;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
