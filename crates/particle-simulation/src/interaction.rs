//! Reaction rules applied to the live particle set once per tick

use std::fmt;

use particle_physics::{Particle, ParticleKind, NEUTRON_LIFETIME};

use crate::SimulationParams;

/// A reaction rule.
///
/// `apply` may read every particle but only mutates them through
/// [`Particle::destroy`] on reactants. It returns the particles the reaction
/// spawns; the caller decides when they join the simulation.
pub trait InteractionRule: Send {
    fn name(&self) -> &str;

    fn apply(&self, particles: &mut [Particle], time_now: f64) -> Vec<Particle>;
}

/// Beta-minus decay of free neutrons: n → p + e⁻ + ν̄ₑ
///
/// Momentum is given entirely to the proton; the electron and antineutrino
/// are emitted at rest, so total momentum is not conserved by this model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutronDecay {
    /// Age (s) a free neutron must exceed before it decays
    pub lifetime_s: f64,
}

impl Default for NeutronDecay {
    fn default() -> Self {
        Self::new(NEUTRON_LIFETIME)
    }
}

impl NeutronDecay {
    pub fn new(lifetime_s: f64) -> Self {
        Self { lifetime_s }
    }

    pub fn triggers(&self, particle: &Particle, time_now: f64) -> bool {
        particle.is_alive()
            && particle.kind() == ParticleKind::Neutron
            && !particle.bound
            && particle.age(time_now) > self.lifetime_s
    }

    /// Decay products in emission order: proton, electron, antineutrino.
    ///
    /// An antineutron yields the conjugate set (antiproton, positron, neutrino).
    pub fn products(neutron: &Particle, time_now: f64) -> [Particle; 3] {
        let conjugate = neutron.is_antiparticle();
        let emit = |kind: ParticleKind, anti: bool| {
            let particle = Particle::new(kind)
                .with_position(neutron.position)
                .with_birth_time(time_now);
            if anti {
                particle.into_antiparticle()
            } else {
                particle
            }
        };

        [
            emit(ParticleKind::Proton, conjugate).with_momentum(neutron.momentum),
            emit(ParticleKind::Electron, conjugate),
            emit(ParticleKind::Neutrino, !conjugate),
        ]
    }
}

impl InteractionRule for NeutronDecay {
    fn name(&self) -> &str {
        "neutron-decay"
    }

    fn apply(&self, particles: &mut [Particle], time_now: f64) -> Vec<Particle> {
        let mut spawned = Vec::new();
        for neutron in particles.iter_mut() {
            if !self.triggers(neutron, time_now) {
                continue;
            }
            neutron.destroy();
            log::debug!(
                "{} decayed at t={:.3}s (age {:.3}s) at {}",
                neutron.symbol(),
                time_now,
                neutron.age(time_now),
                neutron.position
            );
            spawned.extend(Self::products(neutron, time_now));
        }
        spawned
    }
}

/// Ordered list of reaction rules.
///
/// Rules run in registration order over the same particle slice and their
/// outputs are concatenated. A particle destroyed by an earlier rule is
/// still visible (dead) to later ones.
#[derive(Default)]
pub struct InteractionEngine {
    rules: Vec<Box<dyn InteractionRule>>,
}

impl InteractionEngine {
    /// Engine with the standard reaction set for `params`
    pub fn from_params(params: &SimulationParams) -> Self {
        Self::empty().with_rule(NeutronDecay::new(params.neutron_lifetime_s))
    }

    /// Engine with no reactions
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: impl InteractionRule + 'static) -> Self {
        self.register(rule);
        self
    }

    pub fn register(&mut self, rule: impl InteractionRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Run every rule and return the flat list of spawned particles.
    ///
    /// Membership of `particles` never changes; only `alive` flags do.
    pub fn process(&self, particles: &mut [Particle], time_now: f64) -> Vec<Particle> {
        let mut spawned = Vec::new();
        for rule in &self.rules {
            spawned.extend(rule.apply(particles, time_now));
        }
        spawned
    }
}

impl fmt::Debug for InteractionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rule_names()).finish()
    }
}
