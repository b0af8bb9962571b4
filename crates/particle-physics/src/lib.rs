//! # Particle Physics Engine
//!
//! Relativistic kinematics for a small catalog of subatomic particles
//! (protons, neutrons, electrons, photons, neutrinos) and a simple
//! composite atom model.

pub mod atom;
pub mod catalog;
pub mod constants;
pub mod particle;

pub use atom::*;
pub use catalog::*;
pub use constants::*;
pub use particle::*;
