//! Particle record with relativistic kinematics

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use glam::DVec3;
use serde_json::{json, Map, Value};

use crate::catalog::{Charge, KindProperties, ParticleKind};
use crate::constants::{C, C_SQUARED};

/// A single particle instance.
///
/// The variant (and whether this is its antimatter form) is fixed at
/// construction; every static property is read from the catalog table.
/// The public fields are the dynamic state that the simulation mutates.
#[derive(Clone)]
pub struct Particle {
    kind: ParticleKind,
    anti: bool,
    /// Display tint, initialised from the catalog
    pub color_rgb: [u8; 3],
    /// Position (m)
    pub position: DVec3,
    /// Momentum (kg·m/s)
    pub momentum: DVec3,
    /// Part of a composite nucleus or atom
    pub bound: bool,
    /// Simulation time of creation (s)
    pub birth_time: f64,
    alive: bool,
}

impl Particle {
    /// Create a particle at rest at the origin
    pub fn new(kind: ParticleKind) -> Self {
        Self {
            kind,
            anti: false,
            color_rgb: kind.properties().color_rgb,
            position: DVec3::ZERO,
            momentum: DVec3::ZERO,
            bound: false,
            birth_time: 0.0,
            alive: true,
        }
    }

    pub fn proton() -> Self {
        Self::new(ParticleKind::Proton)
    }

    pub fn neutron() -> Self {
        Self::new(ParticleKind::Neutron)
    }

    pub fn electron() -> Self {
        Self::new(ParticleKind::Electron)
    }

    pub fn photon() -> Self {
        Self::new(ParticleKind::Photon)
    }

    pub fn neutrino() -> Self {
        Self::new(ParticleKind::Neutrino)
    }

    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_momentum(mut self, momentum: DVec3) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_bound(mut self, bound: bool) -> Self {
        self.bound = bound;
        self
    }

    pub fn with_birth_time(mut self, birth_time: f64) -> Self {
        self.birth_time = birth_time;
        self
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    pub fn properties(&self) -> &'static KindProperties {
        self.kind.properties()
    }

    pub fn mass_kg(&self) -> f64 {
        self.properties().mass_kg
    }

    pub fn charge(&self) -> Charge {
        let charge = self.properties().charge;
        if self.anti {
            charge.negate()
        } else {
            charge
        }
    }

    pub fn spin(&self) -> f64 {
        self.properties().spin
    }

    pub fn magnetic_moment(&self) -> f64 {
        let moment = self.properties().magnetic_moment;
        if self.anti {
            -moment
        } else {
            moment
        }
    }

    pub fn radius_m(&self) -> f64 {
        self.properties().radius_m
    }

    pub fn symbol(&self) -> &'static str {
        self.kind.symbol(self.anti)
    }

    /// True for antimatter forms, and always for the photon
    pub fn is_antiparticle(&self) -> bool {
        self.anti || self.properties().self_conjugate
    }

    /// The antiparticle of this particle.
    ///
    /// Charge, magnetic moment and symbol flip; everything else is copied.
    /// A self-conjugate particle (the photon) is returned borrowed, unchanged.
    pub fn antiparticle(&self) -> Cow<'_, Particle> {
        if self.properties().self_conjugate {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(Particle {
                anti: !self.anti,
                ..self.clone()
            })
        }
    }

    /// Consuming form of [`Particle::antiparticle`]
    pub fn into_antiparticle(mut self) -> Particle {
        if !self.properties().self_conjugate {
            self.anti = !self.anti;
        }
        self
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the particle dead. It stays in its collection until the owner reconciles.
    pub fn destroy(&mut self) {
        self.alive = false;
    }

    /// Default per-tick hook of the particle system.
    ///
    /// Returns particles to add to the simulation. No variant spawns anything
    /// here; reactions live in the interaction engine, and systems can
    /// install their own hook in place of this one.
    pub fn update(&mut self, _time_now: f64) -> Option<Vec<Particle>> {
        None
    }

    /// Time since creation; negative if `sim_time_now` precedes birth
    pub fn age(&self, sim_time_now: f64) -> f64 {
        sim_time_now - self.birth_time
    }

    /// Total relativistic energy E = sqrt((pc)² + (mc²)²)
    pub fn energy(&self) -> f64 {
        let rest = self.mass_kg() * C_SQUARED;
        (self.momentum.length_squared() * C_SQUARED + rest * rest).sqrt()
    }

    /// Kinetic energy E - mc²
    pub fn kinetic_energy(&self) -> f64 {
        self.energy() - self.mass_kg() * C_SQUARED
    }

    /// Velocity v = p c² / E, never faster than light
    pub fn velocity(&self) -> DVec3 {
        let p = self.momentum.length();
        if p == 0.0 {
            return DVec3::ZERO;
        }

        let v = if self.mass_kg() == 0.0 {
            // Massless: light speed along the momentum direction
            self.momentum / p * C
        } else {
            self.momentum * C_SQUARED / self.energy()
        };

        // Rounding can push |v| just past c, and so can the rescale itself
        let speed = v.length();
        if speed <= C {
            return v;
        }
        let mut v = v * (C / speed);
        while v.length() > C {
            v *= 1.0 - f64::EPSILON;
        }
        v
    }

    pub fn speed(&self) -> f64 {
        self.velocity().length()
    }

    /// Integrate position over `dt` simulated seconds (`dt >= 0`)
    pub fn move_by(&mut self, dt: f64) {
        self.position += self.velocity() * dt;
    }

    /// Dictionary view for reporters and logging
    pub fn as_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("type".into(), json!(self.kind.name()));
        map.insert("symbol".into(), json!(self.symbol()));
        map.insert("position".into(), json!(self.position.to_array()));
        map.insert("momentum".into(), json!(self.momentum.to_array()));
        map.insert("bound".into(), json!(self.bound));
        map.insert("charge".into(), json!(self.charge().name()));
        map.insert("mass_kg".into(), json!(self.mass_kg()));
        map.insert("spin".into(), json!(self.spin()));
        map.insert("magnetic_moment".into(), json!(self.magnetic_moment()));
        map.insert("radius_m".into(), json!(self.radius_m()));
        map.insert("color_rgb".into(), json!(self.color_rgb));
        map.insert("is_antiparticle".into(), json!(self.is_antiparticle()));
        map
    }
}

/// Equality is over position, momentum and `bound` only, and only between
/// particles of the same variant. Static properties, the antimatter flag,
/// birth time and liveness are deliberately left out.
impl PartialEq for Particle {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.position == other.position
            && self.momentum == other.momentum
            && self.bound == other.bound
    }
}

// NaN components break reflexivity; they are invalid input anyway.
impl Eq for Particle {}

impl Hash for Particle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Adding +0.0 folds -0.0 into +0.0 so equal vectors hash equally
        for v in self.position.to_array().into_iter().chain(self.momentum.to_array()) {
            (v + 0.0).to_bits().hash(state);
        }
        self.bound.hash(state);
    }
}

impl fmt::Debug for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(self.kind.name())
            .field("position", &self.position)
            .field("momentum", &self.momentum)
            .field("bound", &self.bound)
            .finish()
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: mass={:.2e} kg, charge={}, spin={} ħ, μ={} μN, position={}, bound={}",
            self.symbol(),
            self.mass_kg(),
            self.charge().name(),
            self.spin(),
            self.magnetic_moment(),
            self.position,
            self.bound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn relative_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * a.abs().max(b.abs())
    }

    #[test]
    fn test_rest_energy() {
        let p = Particle::proton();
        assert_eq!(p.energy(), p.mass_kg() * C_SQUARED);
        assert_eq!(p.kinetic_energy(), 0.0);
    }

    #[test]
    fn test_photon_energy_is_pc() {
        let photon = Particle::photon().with_momentum(DVec3::new(3e-27, 4e-27, 0.0));
        assert!(relative_eq(photon.energy(), 5e-27 * C, 1e-12));
    }

    #[test]
    fn test_zero_momentum_is_at_rest() {
        for kind in ParticleKind::ALL {
            assert_eq!(Particle::new(kind).velocity(), DVec3::ZERO);
        }
    }

    #[test]
    fn test_massless_moves_at_light_speed() {
        let photon = Particle::photon().with_momentum(DVec3::new(0.0, 0.0, -2e-27));
        assert_eq!(photon.velocity(), DVec3::new(0.0, 0.0, -C));

        let oblique = Particle::photon().with_momentum(DVec3::new(1e-27, 2e-27, 3e-27));
        assert!(relative_eq(oblique.speed(), C, 1e-12));
    }

    #[test]
    fn test_speed_never_exceeds_light() {
        let momenta = [1e-30, 1e-24, 1e-18, 1e-10, 1.0, 1e10];
        for kind in ParticleKind::ALL {
            for &p in &momenta {
                let particle = Particle::new(kind).with_momentum(DVec3::new(p, -p, p));
                assert!(particle.speed() <= C, "{kind} at p={p} is superluminal");
            }
        }
    }

    #[test]
    fn test_rescaled_photon_stays_at_or_below_light() {
        // Rescaling this direction to c rounds one ulp past it
        let photon = Particle::photon().with_momentum(DVec3::new(
            -1.2244044154113427e-11,
            -1.216408622532606e-11,
            -1.3815774362778634e-11,
        ));
        assert!(photon.speed() <= C);
        assert!(relative_eq(photon.speed(), C, 1e-12));
    }

    #[test]
    fn test_massive_speed_is_below_light() {
        let electron = Particle::electron().with_momentum(DVec3::new(0.0, 0.0, 1e-22));
        let speed = electron.speed();
        assert!(speed > 0.0 && speed < C);

        // Non-relativistic limit: v ≈ p / m
        let slow = Particle::proton().with_momentum(DVec3::new(1e-24, 0.0, 0.0));
        assert!(relative_eq(slow.speed(), 1e-24 / slow.mass_kg(), 1e-9));
    }

    #[test]
    fn test_move_by_integrates_velocity() {
        let mut e = Particle::electron()
            .with_position(DVec3::new(1.0, 2.0, 3.0))
            .with_momentum(DVec3::new(1e-25, 0.0, 0.0));
        let v = e.velocity();
        let momentum = e.momentum;
        e.move_by(0.5);
        assert_eq!(e.position, DVec3::new(1.0, 2.0, 3.0) + v * 0.5);
        assert_eq!(e.momentum, momentum);
    }

    #[test]
    fn test_age() {
        let n = Particle::neutron().with_birth_time(10.0);
        assert_eq!(n.age(15.5), 5.5);
        assert_eq!(n.age(5.0), -5.0);
    }

    #[test]
    fn test_antiparticle_flips_charge_moment_symbol() {
        let e = Particle::electron().with_position(DVec3::new(1.0, 0.0, 0.0));
        let positron = e.antiparticle().into_owned();
        assert_eq!(positron.charge(), Charge::Positive);
        assert_eq!(positron.magnetic_moment(), -e.magnetic_moment());
        assert_eq!(positron.symbol(), "anti-e-");
        assert!(positron.is_antiparticle());
        assert_eq!(positron.position, e.position);
        assert_eq!(positron.mass_kg(), e.mass_kg());
        assert_eq!(positron.color_rgb, e.color_rgb);
    }

    #[test]
    fn test_antiparticle_is_involution() {
        for kind in ParticleKind::ALL {
            let p = Particle::new(kind).with_momentum(DVec3::new(1e-24, 0.0, 0.0));
            let back = p.antiparticle().antiparticle().into_owned();
            assert_eq!(back.charge(), p.charge());
            assert_eq!(back.magnetic_moment(), p.magnetic_moment());
            assert_eq!(back.symbol(), p.symbol());
            assert_eq!(back, p);
        }
    }

    #[test]
    fn test_photon_is_its_own_antiparticle() {
        let photon = Particle::photon();
        assert!(photon.is_antiparticle());
        match photon.antiparticle() {
            Cow::Borrowed(same) => assert!(std::ptr::eq(same, &photon)),
            Cow::Owned(_) => panic!("photon antiparticle must not allocate"),
        }
        assert_eq!(photon.clone().into_antiparticle().symbol(), "γ");
    }

    #[test]
    fn test_matter_is_not_antiparticle() {
        for kind in [ParticleKind::Proton, ParticleKind::Neutron, ParticleKind::Electron] {
            assert!(!Particle::new(kind).is_antiparticle());
        }
    }

    #[test]
    fn test_equality_ignores_static_and_lifetime_fields() {
        let a = Particle::neutron().with_birth_time(1.0);
        let mut b = Particle::neutron().with_birth_time(99.0);
        b.destroy();
        assert_eq!(a, b);
        assert_eq!(a, a.antiparticle().into_owned());
        assert_ne!(a, Particle::neutron().with_bound(true));
    }

    #[test]
    fn test_cross_variant_equality_is_false() {
        assert_ne!(Particle::proton(), Particle::neutron());
        assert_ne!(Particle::photon(), Particle::neutrino());
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(Particle::proton());
        set.insert(Particle::proton().with_momentum(DVec3::new(-0.0, 0.0, 0.0)));
        set.insert(Particle::proton().with_bound(true));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut p = Particle::proton();
        assert!(p.is_alive());
        p.destroy();
        p.destroy();
        assert!(!p.is_alive());
    }

    #[test]
    fn test_update_spawns_nothing() {
        let mut n = Particle::neutron();
        assert!(n.update(10_000.0).is_none());
        assert!(n.is_alive());
    }

    #[test]
    fn test_as_dict_keys_and_values() {
        let dict = Particle::neutrino().into_antiparticle().as_dict();
        let keys: Vec<_> = dict.keys().map(String::as_str).collect();
        for key in [
            "type",
            "symbol",
            "position",
            "momentum",
            "bound",
            "charge",
            "mass_kg",
            "spin",
            "magnetic_moment",
            "radius_m",
            "color_rgb",
            "is_antiparticle",
        ] {
            assert!(keys.contains(&key), "missing key {key}");
        }
        assert_eq!(dict.len(), 12);
        assert_eq!(dict["type"], "Neutrino");
        assert_eq!(dict["symbol"], "anti-νₑ");
        assert_eq!(dict["charge"], "NEUTRAL");
        assert_eq!(dict["color_rgb"], json!([0, 255, 0]));
        assert_eq!(dict["position"], json!([0.0, 0.0, 0.0]));
        assert_eq!(dict["is_antiparticle"], true);
    }

    #[test]
    fn test_display_format() {
        let text = Particle::proton().to_string();
        assert!(text.starts_with("p+: mass=1.67e-27 kg, charge=POSITIVE"));
        assert!(text.ends_with("bound=false"));
    }
}
