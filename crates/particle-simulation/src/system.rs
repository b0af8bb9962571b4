//! Particle collection and simulation clock
//!
//! The system is the only mutator of its collection. It is single-threaded
//! and not reentrant; hosts that render from another thread must wrap it in
//! a lock.

use std::collections::BTreeMap;

use glam::DVec3;
use particle_physics::{Particle, ParticleKind};

use crate::error::{Error, Result};
use crate::interaction::InteractionEngine;
use crate::params::{validate_time_scale, SimulationParams};

/// What a renderer needs to draw one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPoint {
    pub position: DVec3,
    pub color_rgb: [u8; 3],
}

/// Alive particle counts keyed by symbol
pub type Census = BTreeMap<&'static str, usize>;

/// Per-particle tick hook: `(particle, sim_time) -> spawned particles`
pub type UpdateHook = Box<dyn FnMut(&mut Particle, f64) -> Option<Vec<Particle>> + Send>;

/// Collection changes made by one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub spawned_by_update: usize,
    pub spawned_by_interaction: usize,
    /// Dead particles dropped during reconciliation
    pub removed: usize,
}

pub struct ParticleSystem {
    particles: Vec<Particle>,
    sim_time: f64,
    time_scale: f64,
    running: bool,
    engine: InteractionEngine,
    update_hook: UpdateHook,
}

impl ParticleSystem {
    /// Create a stopped, empty system with the standard reaction set
    pub fn new(params: SimulationParams) -> Result<Self> {
        params.validate()?;
        let engine = InteractionEngine::from_params(&params);
        log::info!(
            "Particle system created (time_scale={}, rules={:?})",
            params.time_scale,
            engine
        );
        Ok(Self {
            particles: Vec::new(),
            sim_time: 0.0,
            time_scale: params.time_scale,
            running: false,
            engine,
            update_hook: Box::new(Particle::update),
        })
    }

    /// Replace the reaction set
    pub fn with_engine(mut self, engine: InteractionEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn engine_mut(&mut self) -> &mut InteractionEngine {
        &mut self.engine
    }

    /// Replace the per-particle hook (default: [`Particle::update`]).
    ///
    /// The hook runs on every alive particle after it moves and before the
    /// interaction engine. A particle it destroys is not seen as a reactant.
    pub fn with_update_hook(
        mut self,
        hook: impl FnMut(&mut Particle, f64) -> Option<Vec<Particle>> + Send + 'static,
    ) -> Self {
        self.set_update_hook(hook);
        self
    }

    pub fn set_update_hook(
        &mut self,
        hook: impl FnMut(&mut Particle, f64) -> Option<Vec<Particle>> + Send + 'static,
    ) {
        self.update_hook = Box::new(hook);
    }

    pub fn start(&mut self) {
        if !self.running {
            log::info!("Simulation started at t={:.3}s", self.sim_time);
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("Simulation stopped at t={:.3}s", self.sim_time);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Simulated seconds elapsed
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, time_scale: f64) -> Result<()> {
        validate_time_scale(time_scale)?;
        self.time_scale = time_scale;
        Ok(())
    }

    /// Every held particle, including ones destroyed since the last tick
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn alive(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    /// Append an explicitly constructed particle
    pub fn insert(&mut self, particle: Particle) -> &Particle {
        let index = self.particles.len();
        self.particles.push(particle);
        &self.particles[index]
    }

    /// Add a catalog particle at rest at the origin, born now
    pub fn add(&mut self, kind: ParticleKind, antiparticle: bool) -> &Particle {
        let particle = Particle::new(kind).with_birth_time(self.sim_time);
        let particle = if antiparticle {
            particle.into_antiparticle()
        } else {
            particle
        };
        log::debug!("Added {} at t={:.3}s", particle.symbol(), self.sim_time);
        self.insert(particle)
    }

    /// Destroy the first alive particle equal to `target`.
    ///
    /// Returns `false` when nothing matched. The particle leaves the
    /// collection at the next reconciliation.
    pub fn remove(&mut self, target: &Particle) -> bool {
        match self
            .particles
            .iter_mut()
            .find(|p| p.is_alive() && **p == *target)
        {
            Some(particle) => {
                particle.destroy();
                true
            }
            None => false,
        }
    }

    /// Destroy the particle at `index` if it is alive
    pub fn remove_at(&mut self, index: usize) -> bool {
        match self.particles.get_mut(index) {
            Some(particle) if particle.is_alive() => {
                particle.destroy();
                true
            }
            _ => false,
        }
    }

    /// Positions and colours of alive particles
    pub fn snapshot(&self) -> Vec<RenderPoint> {
        self.alive()
            .map(|p| RenderPoint {
                position: p.position,
                color_rgb: p.color_rgb,
            })
            .collect()
    }

    pub fn census(&self) -> Census {
        let mut census = Census::new();
        for particle in self.alive() {
            *census.entry(particle.symbol()).or_default() += 1;
        }
        census
    }

    /// Sum of relativistic energies of alive particles (J)
    pub fn total_energy(&self) -> f64 {
        self.alive().map(Particle::energy).sum()
    }

    /// Advance the simulation by `dt_real` wall-clock seconds.
    ///
    /// A stopped system is left untouched. Otherwise the clock advances by
    /// `dt_real * time_scale`, alive particles move and run their update
    /// hook, the interaction engine runs once over the pre-tick collection
    /// against the advanced clock, and dead particles are dropped in favour
    /// of the spawned ones (update output first, then interaction output).
    pub fn step(&mut self, dt_real: f64) -> Result<StepReport> {
        if !self.running {
            return Ok(StepReport::default());
        }
        if !dt_real.is_finite() || dt_real < 0.0 {
            return Err(Error::InvalidParam(format!(
                "dt_real must be finite and >= 0, got {dt_real}"
            )));
        }

        let dt_sim = dt_real * self.time_scale;
        self.sim_time += dt_sim;

        let mut from_update = Vec::new();
        for particle in self.particles.iter_mut().filter(|p| p.is_alive()) {
            particle.move_by(dt_sim);
            if let Some(spawned) = (self.update_hook)(particle, self.sim_time) {
                from_update.extend(spawned);
            }
        }

        let from_interaction = self.engine.process(&mut self.particles, self.sim_time);

        let before = self.particles.len();
        self.particles.retain(Particle::is_alive);
        let report = StepReport {
            spawned_by_update: from_update.len(),
            spawned_by_interaction: from_interaction.len(),
            removed: before - self.particles.len(),
        };
        self.particles.extend(from_update);
        self.particles.extend(from_interaction);

        log::trace!(
            "t={:.3}s: {} particles ({:?})",
            self.sim_time,
            self.particles.len(),
            report
        );
        Ok(report)
    }
}
