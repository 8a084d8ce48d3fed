//! Exact arithmetic building blocks
//!
//! Everything in here works on arbitrary-precision integers and fractions;
//! no fixed-width type ever carries an intermediate value.

pub mod rational;
pub mod vector;
pub mod linear;
