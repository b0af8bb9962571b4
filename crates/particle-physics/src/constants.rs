//! Physical constants for particle simulation
//!
//! All values are SI. Particle masses are CODATA 2018, atomic weights IUPAC 2018.

/// Speed of light in vacuum (m/s), exact
pub const C: f64 = 299_792_458.0;

/// Speed of light squared (m²/s²)
pub const C_SQUARED: f64 = C * C;

/// Unified atomic mass unit (kg)
pub const AMU: f64 = 1.660_539_066_60e-27;

/// Proton rest mass (kg)
pub const PROTON_MASS: f64 = 1.672_621_923_69e-27;

/// Neutron rest mass (kg)
pub const NEUTRON_MASS: f64 = 1.674_927_498_04e-27;

/// Electron rest mass (kg)
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;

/// Neutrino mass (kg)
/// Not measured; a tiny non-zero model value so neutrinos stay sub-luminal
pub const NEUTRINO_MASS: f64 = 1e-36;

/// Proton charge radius (m)
pub const NUCLEON_RADIUS: f64 = 0.84e-15;

/// Classical electron radius (m), used as a model parameter
pub const ELECTRON_RADIUS: f64 = 2.817_940_322_7e-15;

/// Proton magnetic moment (nuclear magnetons)
pub const PROTON_MAGNETIC_MOMENT: f64 = 2.79;

/// Neutron magnetic moment (nuclear magnetons)
pub const NEUTRON_MAGNETIC_MOMENT: f64 = -1.91;

/// Electron magnetic moment (Bohr magnetons)
pub const ELECTRON_MAGNETIC_MOMENT: f64 = -1.001_159_652_181_28;

/// Approximate mean lifetime of a free neutron (s)
pub const NEUTRON_LIFETIME: f64 = 880.0;

/// Momentum given to atomic electrons in the composite model (kg·m/s)
pub const ATOMIC_ELECTRON_MOMENTUM: f64 = 1e-22;
