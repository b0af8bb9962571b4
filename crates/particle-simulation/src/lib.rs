//! # Particle Simulation Engine
//!
//! Time-stepped evolution of a particle collection with a pluggable set of
//! reaction rules (free-neutron beta decay by default).

pub mod error;
pub mod interaction;
pub mod params;
pub mod system;

pub use error::{Error, Result};
pub use interaction::*;
pub use params::*;
pub use system::*;
