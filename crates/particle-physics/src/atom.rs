//! Composite atoms built from protons, neutrons and electrons

use glam::DVec3;

use crate::constants::{AMU, ATOMIC_ELECTRON_MOMENTUM};
use crate::particle::Particle;

/// Standard atomic weights (IUPAC 2018) in atomic mass units
const REFERENCE_WEIGHTS: [(&str, f64); 6] = [
    ("H", 1.00784),
    ("He", 4.00260),
    ("Li", 6.94),
    ("Be", 9.01218),
    ("C", 12.0107),
    ("O", 15.999),
];

/// Reference mass of an element in kg, if tabulated
pub fn reference_mass(symbol: &str) -> Option<f64> {
    REFERENCE_WEIGHTS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, weight)| weight * AMU)
}

/// Simple atomic model: a bag of constituent particles with no binding energy
#[derive(Debug, Clone)]
pub struct Atom {
    pub symbol: String,
    pub protons: Vec<Particle>,
    pub neutrons: Vec<Particle>,
    pub electrons: Vec<Particle>,
}

/// Mass comparison of an atom against its reference value
#[derive(Debug, Clone, PartialEq)]
pub struct AtomSummary {
    pub symbol: String,
    pub protons: usize,
    pub neutrons: usize,
    pub electrons: usize,
    pub computed_mass_kg: f64,
    pub reference_mass_kg: Option<f64>,
    /// Relative deviation from the reference in percent
    pub delta_pct: Option<f64>,
}

impl Atom {
    /// Nucleons are created bound and at rest; electrons get a small momentum along +z.
    ///
    /// Constituents are marked bound so free-neutron decay never splits a nucleus.
    pub fn new(symbol: impl Into<String>, protons: usize, neutrons: usize, electrons: usize) -> Self {
        let electron_momentum = DVec3::new(0.0, 0.0, ATOMIC_ELECTRON_MOMENTUM);
        Self {
            symbol: symbol.into(),
            protons: (0..protons)
                .map(|_| Particle::proton().with_bound(true))
                .collect(),
            neutrons: (0..neutrons)
                .map(|_| Particle::neutron().with_bound(true))
                .collect(),
            electrons: (0..electrons)
                .map(|_| {
                    Particle::electron()
                        .with_bound(true)
                        .with_momentum(electron_momentum)
                })
                .collect(),
        }
    }

    /// Neutral atoms of the light elements with their most common isotope
    pub fn standard_set() -> Vec<Atom> {
        vec![
            Atom::new("H", 1, 0, 1),
            Atom::new("He", 2, 2, 2),
            Atom::new("Li", 3, 4, 3),
            Atom::new("Be", 4, 5, 4),
            Atom::new("C", 6, 6, 6),
            Atom::new("O", 8, 8, 8),
        ]
    }

    pub fn constituents(&self) -> impl Iterator<Item = &Particle> {
        self.protons
            .iter()
            .chain(&self.neutrons)
            .chain(&self.electrons)
    }

    /// Sum of constituent rest masses
    pub fn computed_mass(&self) -> f64 {
        self.protons.iter().map(Particle::mass_kg).sum::<f64>()
            + self.neutrons.iter().map(Particle::mass_kg).sum::<f64>()
            + self.electrons.iter().map(Particle::mass_kg).sum::<f64>()
    }

    pub fn reference_mass(&self) -> Option<f64> {
        reference_mass(&self.symbol)
    }

    pub fn summary(&self) -> AtomSummary {
        let computed = self.computed_mass();
        let reference = self.reference_mass();
        AtomSummary {
            symbol: self.symbol.clone(),
            protons: self.protons.len(),
            neutrons: self.neutrons.len(),
            electrons: self.electrons.len(),
            computed_mass_kg: computed,
            reference_mass_kg: reference,
            delta_pct: reference
                .filter(|r| *r != 0.0)
                .map(|r| 100.0 * (computed - r).abs() / r),
        }
    }
}
