use crate::core::forcefield::params::Forcefield;
use crate::engine::boundary::SimulationBox;
use crate::engine::config::SimulationConfig;
use crate::engine::context::Simulation;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::thermostat;
use nalgebra::{Point3, Vector3};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Summary of one completed batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub steps: u64,
    pub particle_count: usize,
    /// Instantaneous temperature of the final state, in kelvin.
    pub final_temperature: f64,
}

/// Runs a self-contained simulation: build, seed, step `steps` times, report.
#[instrument(skip_all, name = "simulation_workflow")]
pub fn run(
    config: &SimulationConfig,
    steps: u64,
    reporter: &ProgressReporter,
) -> Result<SimulationReport, EngineError> {
    reporter.report(Progress::PhaseStart { name: "Setup" });
    let mut sim = setup(config)?;
    reporter.report(Progress::PhaseFinish);

    info!(
        particles = sim.registry().len(),
        steps, "Starting simulation run."
    );
    reporter.report(Progress::RunStart { total_steps: steps });
    for step in 0..steps {
        let scale = thermostat::rescale_factor(
            sim.registry(),
            &sim.forcefield().species,
            config.setup.target_temperature,
        );
        sim.set_thermostat_scale(scale);
        sim.step();
        if step % 100 == 0 {
            let temperature =
                thermostat::instantaneous_temperature(sim.registry(), &sim.forcefield().species);
            debug!(step, temperature, "Tick.");
            reporter.report(Progress::Message(format!("{temperature:.0} K")));
        }
        reporter.report(Progress::StepIncrement);
    }
    reporter.report(Progress::RunFinish);

    let final_temperature =
        thermostat::instantaneous_temperature(sim.registry(), &sim.forcefield().species);
    info!(final_temperature, "Simulation run complete.");
    Ok(SimulationReport {
        steps,
        particle_count: sim.registry().len(),
        final_temperature,
    })
}

/// Builds the populated initial state for a run: forcefield tables, box
/// geometry, particles on a cubic grid, and seeded initial velocities.
///
/// Setup is fully deterministic in the configuration: the same config always
/// produces the same particle names, positions, and velocities.
pub fn setup(config: &SimulationConfig) -> Result<Simulation, EngineError> {
    config.validate()?;
    let forcefield = Forcefield::from_params(&config.interactions)?;
    let bounds = SimulationBox::new(&config.bounds)?;
    let mut sim = Simulation::new(forcefield, bounds, config.physics);

    let total: usize = config.setup.particles.iter().map(|g| g.count).sum();
    if total == 0 {
        return Err(EngineError::Setup(
            "configuration creates no particles".to_string(),
        ));
    }

    place_on_grid(&mut sim, config, total)?;
    seed_velocities(&mut sim, config.setup.seed);
    debug!(particles = total, "Initial state built.");
    Ok(sim)
}

/// Places all configured particles on a cubic grid centered in the box.
///
/// Spawn points outside the walls are clamped on insertion, so an overfull
/// grid degrades to particles stacked along the margin band rather than an
/// error.
fn place_on_grid(
    sim: &mut Simulation,
    config: &SimulationConfig,
    total: usize,
) -> Result<(), EngineError> {
    let side = (total as f64).cbrt().ceil() as usize;
    let spacing = config.setup.spacing;
    let center = Point3::new(
        config.bounds.center[0],
        config.bounds.center[1] + config.bounds.height / 2.0,
        config.bounds.center[2],
    );
    let offset = (side - 1) as f64 / 2.0;

    // Names carry a per-species running counter so a species split across
    // several groups still gets unique names.
    let mut slot = 0usize;
    let mut counters: HashMap<&str, usize> = HashMap::new();
    for group in &config.setup.particles {
        for _ in 0..group.count {
            let i = slot % side;
            let j = (slot / side) % side;
            let k = slot / (side * side);
            let position = Point3::new(
                center.x + (i as f64 - offset) * spacing,
                center.y + (j as f64 - offset) * spacing,
                center.z + (k as f64 - offset) * spacing,
            );
            let counter = counters.entry(group.species.as_str()).or_insert(0);
            let name = format!("{}{}", group.species, counter);
            *counter += 1;
            sim.add_particle(&name, &group.species, position)?;
            slot += 1;
        }
    }
    Ok(())
}

/// Gives every particle a uniform random velocity in [-1, 1] per axis,
/// in angstroms per tick. The first thermostat-coupled tick rescales the
/// resulting distribution onto the target temperature.
fn seed_velocities(sim: &mut Simulation, seed: u64) {
    let mut rng: StdRng = SeedableRng::seed_from_u64(seed);
    let ids: Vec<_> = sim.registry().iter().map(|(id, _)| id).collect();
    for id in ids {
        let velocity = Vector3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        );
        // Ids come straight from the registry; the write cannot fail.
        let _ = sim.set_velocity(id, velocity);
    }
}
