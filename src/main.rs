//! Free-neutron decay simulation
//!
//! Seeds a random population of particles, steps the particle system at a
//! fixed cadence and reports atom masses, velocities and particle counts.
//!
//! Usage: `particle-decay [params.json]`

use std::process::ExitCode;
use std::time::{Duration, Instant};

use glam::DVec3;
use particle_physics::{Atom, Particle, ParticleKind, C};
use particle_simulation::{ParticleSystem, SimulationParams};
use rand::Rng;

const PARTICLE_COUNT: usize = 200;
const SPAWN_RADIUS: f64 = 1e-9; // meters
const MAX_MOMENTUM: f64 = 1e-23; // kg·m/s per component
const TICK: f64 = 1.0 / 60.0; // real seconds per step
const TICKS: usize = 3600;
const REPORT_EVERY: usize = 600;
/// Simulated seconds per real second when no params file is given
const DEFAULT_TIME_SCALE: f64 = 30.0;

/// Initialize a free population, mostly neutrons so decay is visible
fn initialize_particles(system: &mut ParticleSystem) {
    let mut rng = rand::rng();

    for _ in 0..PARTICLE_COUNT {
        // Random position in sphere
        let theta = rng.random::<f64>() * std::f64::consts::TAU;
        let cos_phi = rng.random::<f64>() * 2.0 - 1.0;
        let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();
        let r = rng.random::<f64>().powf(1.0 / 3.0) * SPAWN_RADIUS;
        let position = DVec3::new(
            r * sin_phi * theta.cos(),
            r * sin_phi * theta.sin(),
            r * cos_phi,
        );

        let kind = match rng.random_range(0..10) {
            0..=5 => ParticleKind::Neutron,
            6 => ParticleKind::Proton,
            7 | 8 => ParticleKind::Electron,
            _ => ParticleKind::Photon,
        };
        let momentum = if kind == ParticleKind::Photon {
            // Visible-light photons
            DVec3::new(0.0, 0.0, 1.2e-27)
        } else {
            DVec3::new(
                rng.random_range(-MAX_MOMENTUM..MAX_MOMENTUM),
                rng.random_range(-MAX_MOMENTUM..MAX_MOMENTUM),
                rng.random_range(-MAX_MOMENTUM..MAX_MOMENTUM),
            )
        };
        // Stagger neutron ages so decays spread over the run
        let birth_time = -rng.random_range(0.0..600.0);

        let mut particle = Particle::new(kind)
            .with_position(position)
            .with_momentum(momentum)
            .with_birth_time(birth_time);
        if rng.random_bool(0.05) {
            particle = particle.into_antiparticle();
        }
        system.insert(particle);
    }

    log::info!("✓ Initialized {} particles", system.particles().len());
    log::info!("  First 5 particles:");
    for (i, p) in system.particles().iter().take(5).enumerate() {
        log::info!("    [{}] {}", i, p);
    }
}

fn report_atoms(atoms: &[Atom]) {
    println!(
        "{:^6} | {:^3} | {:^3} | {:^3} | {:^20} | {:^20} | {:^6}",
        "Atom", "Z", "N", "e-", "Computed mass (kg)", "Ref. mass (kg)", "Δ %"
    );
    println!("{}", "-".repeat(80));
    for atom in atoms {
        let s = atom.summary();
        let reference = s
            .reference_mass_kg
            .map_or_else(|| "n/a".to_string(), |m| format!("{m:.4e}"));
        let delta = s
            .delta_pct
            .map_or_else(|| "n/a".to_string(), |d| format!("{d:.2}"));
        println!(
            "{:^6} | {:^3} | {:^3} | {:^3} | {:^20} | {:^20} | {:^6}",
            s.symbol,
            s.protons,
            s.neutrons,
            s.electrons,
            format!("{:.4e}", s.computed_mass_kg),
            reference,
            delta
        );
    }
}

fn report_velocities(atoms: &[Atom]) {
    println!();
    println!(
        "{:^10} | {:^12} | {:^12} | {:^12} | {:^12} | {:^8}",
        "Particle", "vx (m/s)", "vy (m/s)", "vz (m/s)", "|v| (m/s)", "v/c"
    );
    println!("{}", "-".repeat(78));
    for particle in atoms.iter().flat_map(Atom::constituents) {
        let v = particle.velocity();
        println!(
            "{:^10} | {:12.4e} | {:12.4e} | {:12.4e} | {:12.4e} | {:8.2e}",
            particle.kind().name(),
            v.x,
            v.y,
            v.z,
            v.length(),
            v.length() / C
        );
    }
}

/// Speed from p·c²/E with E rebuilt from mc² and pc, for cross-checking
/// [`Particle::velocity`]
fn expected_speed(particle: &Particle) -> f64 {
    let p = particle.momentum.length();
    if p == 0.0 {
        return 0.0;
    }
    if particle.mass_kg() == 0.0 {
        return C;
    }
    let rest = particle.mass_kg() * C * C;
    let pc = p * C;
    let energy = rest.hypot(pc);
    p * C * C / energy
}

/// Relative deviation in percent, zero when nothing is expected
fn delta_pct(measured: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        0.0
    } else {
        100.0 * (measured - expected).abs() / expected
    }
}

fn report_velocity_comparison(atoms: &[Atom]) {
    println!();
    println!(
        "{:^10} | {:^18} | {:^18} | {:^10}",
        "Particle", "|v_measured| (m/s)", "|v_expected| (m/s)", "Δ %"
    );
    println!("{}", "-".repeat(66));
    for particle in atoms.iter().flat_map(Atom::constituents) {
        let measured = particle.speed();
        let expected = expected_speed(particle);
        println!(
            "{:^10} | {:18.6e} | {:18.6e} | {:10.2e}",
            particle.kind().name(),
            measured,
            expected,
            delta_pct(measured, expected)
        );
    }
}

fn report_census(system: &ParticleSystem) {
    let census = system
        .census()
        .iter()
        .map(|(symbol, count)| format!("{symbol}={count}"))
        .collect::<Vec<_>>()
        .join(", ");
    log::info!(
        "t={:>8.1}s  alive={:<4} E={:.4e} J  [{}]",
        system.sim_time(),
        system.alive_count(),
        system.total_energy(),
        census
    );
}

fn run() -> particle_simulation::Result<()> {
    let params = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading parameters from {path}");
            SimulationParams::load(path)?
        }
        None => SimulationParams {
            time_scale: DEFAULT_TIME_SCALE,
            ..SimulationParams::default()
        },
    };

    let atoms = Atom::standard_set();
    report_atoms(&atoms);
    report_velocities(&atoms);
    report_velocity_comparison(&atoms);

    let mut system = ParticleSystem::new(params)?;
    initialize_particles(&mut system);
    system.start();
    report_census(&system);

    let mut step_time = Duration::ZERO;
    let mut decays = 0;
    for tick in 1..=TICKS {
        let started = Instant::now();
        let report = system.step(TICK)?;
        step_time += started.elapsed();
        decays += report.spawned_by_interaction / 3;

        if tick % REPORT_EVERY == 0 {
            report_census(&system);
        }
    }
    system.stop();

    log::info!(
        "✓ {} ticks, {} decays, {:.2} µs/step",
        TICKS,
        decays,
        step_time.as_secs_f64() * 1e6 / TICKS as f64
    );
    Ok(())
}

fn main() -> ExitCode {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting particle decay simulation...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
