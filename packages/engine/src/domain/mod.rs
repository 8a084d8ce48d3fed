//! Domain - hailstones and how they are read from input

pub mod particle;
pub mod loader;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
