use glam::DVec3;
use particle_physics::{Atom, Particle, ParticleKind, C};
use particle_simulation::{ParticleSystem, SimulationParams};

fn seeded_system(time_scale: f64) -> particle_simulation::Result<ParticleSystem> {
    let mut system = ParticleSystem::new(SimulationParams {
        time_scale,
        ..SimulationParams::default()
    })?;
    for i in 0..10 {
        let offset = DVec3::new(i as f64, 0.0, 0.0);
        system.insert(
            Particle::neutron()
                .with_position(offset)
                .with_momentum(DVec3::new(0.0, 1e-23 * i as f64, 0.0)),
        );
        system.insert(Particle::neutron().with_position(offset).with_bound(true));
        system.insert(Particle::electron().with_momentum(DVec3::new(1e-23, 0.0, 0.0)));
    }
    system.insert(Particle::photon().with_momentum(DVec3::new(0.0, 0.0, 1e-27)));
    system.start();
    Ok(system)
}

/// Every free neutron decays exactly once; bound ones survive.
#[test]
fn free_neutrons_decay_after_lifetime() -> particle_simulation::Result<()> {
    let mut system = seeded_system(100.0)?;
    assert_eq!(system.census()["n0"], 20);

    let mut spawned = 0;
    for _ in 0..20 {
        spawned += system.step(1.0)?.spawned_by_interaction;
    }

    assert_eq!(system.sim_time(), 2000.0);
    assert_eq!(spawned, 30);
    let census = system.census();
    assert_eq!(census["n0"], 10);
    assert_eq!(census["p+"], 10);
    assert_eq!(census["e-"], 20);
    assert_eq!(census["anti-νₑ"], 10);
    assert_eq!(census["γ"], 1);
    assert_eq!(system.alive_count(), system.particles().len());
    Ok(())
}

/// Two identical systems stepped identically stay bit-identical.
#[test]
fn stepping_is_deterministic() -> particle_simulation::Result<()> {
    let mut a = seeded_system(37.0)?;
    let mut b = seeded_system(37.0)?;
    for dt in [0.25, 3.0, 0.0, 11.5, 9.75] {
        assert_eq!(a.step(dt)?, b.step(dt)?);
    }
    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.particles(), b.particles());
    Ok(())
}

#[test]
fn nothing_outruns_light() -> particle_simulation::Result<()> {
    let mut system = seeded_system(1.0)?;
    let start: Vec<_> = system.snapshot();
    system.step(1.0)?;
    for (before, after) in start.iter().zip(system.snapshot()) {
        let travelled = (after.position - before.position).length();
        assert!(travelled <= C * (1.0 + 1e-12), "moved {travelled} m in 1 s");
    }
    Ok(())
}

#[test]
fn stop_freezes_the_system() -> particle_simulation::Result<()> {
    let mut system = seeded_system(1000.0)?;
    system.step(0.5)?;
    system.stop();
    let frozen_time = system.sim_time();
    let frozen = system.snapshot();

    for _ in 0..5 {
        system.step(1.0)?;
    }

    assert_eq!(system.sim_time(), frozen_time);
    assert_eq!(system.snapshot(), frozen);
    Ok(())
}

#[test]
fn params_file_drives_lifetime() -> particle_simulation::Result<()> {
    let params = SimulationParams::from_json_str(r#"{ "neutron_lifetime_s": 10.0 }"#)?;
    let mut system = ParticleSystem::new(params)?;
    system.add(ParticleKind::Neutron, false);
    system.start();

    system.step(10.0)?;
    assert_eq!(system.census().get("n0"), Some(&1));
    system.step(0.5)?;
    assert_eq!(system.census().get("n0"), None);
    assert_eq!(system.census().get("p+"), Some(&1));
    Ok(())
}

/// Atom constituents are bound, so old nuclei never lose neutrons.
#[test]
fn atom_neutrons_never_decay() -> particle_simulation::Result<()> {
    let mut system = ParticleSystem::new(SimulationParams {
        time_scale: 1000.0,
        ..SimulationParams::default()
    })?;
    let helium = Atom::new("He", 2, 2, 2);
    for particle in helium.constituents() {
        system.insert(particle.clone().with_birth_time(-10_000.0));
    }
    system.start();

    for _ in 0..5 {
        assert_eq!(system.step(1.0)?.spawned_by_interaction, 0);
    }
    assert_eq!(system.census()["n0"], 2);
    assert_eq!(system.alive_count(), 6);
    Ok(())
}
