//! The fixed catalog of particle variants and their static properties

use crate::constants::*;

/// Prefix marking the antiparticle form of a symbol
pub const ANTI_PREFIX: &str = "anti-";

/// Electric charge in units of the elementary charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charge {
    Positive,
    Negative,
    Neutral,
}

impl Charge {
    /// Signed value in elementary charge units
    pub fn value(self) -> i8 {
        match self {
            Charge::Positive => 1,
            Charge::Negative => -1,
            Charge::Neutral => 0,
        }
    }

    /// Opposite charge (neutral stays neutral)
    pub fn negate(self) -> Self {
        match self {
            Charge::Positive => Charge::Negative,
            Charge::Negative => Charge::Positive,
            Charge::Neutral => Charge::Neutral,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Charge::Positive => "POSITIVE",
            Charge::Negative => "NEGATIVE",
            Charge::Neutral => "NEUTRAL",
        }
    }
}

/// Static properties shared by every instance of a variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindProperties {
    /// Type name used in reports and the dictionary view
    pub name: &'static str,
    pub mass_kg: f64,
    pub charge: Charge,
    /// Spin in multiples of ħ
    pub spin: f64,
    pub magnetic_moment: f64,
    pub radius_m: f64,
    pub symbol: &'static str,
    /// Symbol of the antiparticle form (equals `symbol` when self-conjugate)
    pub anti_symbol: &'static str,
    /// Display tint for renderers
    pub color_rgb: [u8; 3],
    /// The particle is its own antiparticle
    pub self_conjugate: bool,
}

/// Particle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Proton,
    Neutron,
    Electron,
    Photon,
    Neutrino,
}

const PROTON: KindProperties = KindProperties {
    name: "Proton",
    mass_kg: PROTON_MASS,
    charge: Charge::Positive,
    spin: 0.5,
    magnetic_moment: PROTON_MAGNETIC_MOMENT,
    radius_m: NUCLEON_RADIUS,
    symbol: "p+",
    anti_symbol: "anti-p+",
    color_rgb: [255, 0, 0],
    self_conjugate: false,
};

const NEUTRON: KindProperties = KindProperties {
    name: "Neutron",
    mass_kg: NEUTRON_MASS,
    charge: Charge::Neutral,
    spin: 0.5,
    magnetic_moment: NEUTRON_MAGNETIC_MOMENT,
    radius_m: NUCLEON_RADIUS,
    symbol: "n0",
    anti_symbol: "anti-n0",
    color_rgb: [128, 128, 128],
    self_conjugate: false,
};

const ELECTRON: KindProperties = KindProperties {
    name: "Electron",
    mass_kg: ELECTRON_MASS,
    charge: Charge::Negative,
    spin: 0.5,
    magnetic_moment: ELECTRON_MAGNETIC_MOMENT,
    radius_m: ELECTRON_RADIUS,
    symbol: "e-",
    anti_symbol: "anti-e-",
    color_rgb: [0, 0, 255],
    self_conjugate: false,
};

const PHOTON: KindProperties = KindProperties {
    name: "Photon",
    mass_kg: 0.0,
    charge: Charge::Neutral,
    spin: 1.0,
    magnetic_moment: 0.0,
    radius_m: 0.0,
    symbol: "γ",
    anti_symbol: "γ",
    color_rgb: [255, 255, 0],
    self_conjugate: true,
};

const NEUTRINO: KindProperties = KindProperties {
    name: "Neutrino",
    mass_kg: NEUTRINO_MASS,
    charge: Charge::Neutral,
    spin: 0.5,
    magnetic_moment: 0.0,
    radius_m: 0.0,
    symbol: "νₑ",
    anti_symbol: "anti-νₑ",
    color_rgb: [0, 255, 0],
    self_conjugate: false,
};

impl ParticleKind {
    /// Every variant, in display order
    pub const ALL: [ParticleKind; 5] = [
        ParticleKind::Proton,
        ParticleKind::Neutron,
        ParticleKind::Electron,
        ParticleKind::Photon,
        ParticleKind::Neutrino,
    ];

    pub fn properties(self) -> &'static KindProperties {
        match self {
            ParticleKind::Proton => &PROTON,
            ParticleKind::Neutron => &NEUTRON,
            ParticleKind::Electron => &ELECTRON,
            ParticleKind::Photon => &PHOTON,
            ParticleKind::Neutrino => &NEUTRINO,
        }
    }

    pub fn name(self) -> &'static str {
        self.properties().name
    }

    /// Look up a variant by its type name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Symbol for the matter or antimatter form of this variant
    pub fn symbol(self, anti: bool) -> &'static str {
        let props = self.properties();
        if anti {
            props.anti_symbol
        } else {
            props.symbol
        }
    }
}

impl std::fmt::Display for ParticleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
