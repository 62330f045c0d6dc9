//! # Simulation Context
//!
//! Owns the full mutable state of one running simulation and exposes the
//! operations an interactive frontend drives between ticks: adding particles,
//! pausing, dragging (kinematic overrides), selection, thermostat coupling,
//! and bond queries. All mutation funnels through this type so the integrator
//! always sees a consistent registry.

use nalgebra::{Point3, Vector3};

use super::boundary::SimulationBox;
use super::config::PhysicsConfig;
use super::error::EngineError;
use super::{bonds, integrator};
use crate::core::forcefield::params::Forcefield;
use crate::core::models::ids::ParticleId;
use crate::core::models::particle::Particle;
use crate::core::models::registry::ParticleRegistry;

/// A running simulation: particle registry, forcefield tables, box walls, and
/// the control knobs a frontend flips between ticks.
///
/// The thermostat scale is latched state rather than an argument to
/// [`step`](Self::step) so a caller can recompute it at its own cadence; the
/// default of `1.0` leaves velocities untouched.
#[derive(Debug, Clone)]
pub struct Simulation {
    registry: ParticleRegistry,
    forcefield: Forcefield,
    bounds: SimulationBox,
    physics: PhysicsConfig,
    paused: bool,
    thermostat_scale: f64,
}

impl Simulation {
    pub fn new(forcefield: Forcefield, bounds: SimulationBox, physics: PhysicsConfig) -> Self {
        Self {
            registry: ParticleRegistry::new(),
            forcefield,
            bounds,
            physics,
            paused: false,
            thermostat_scale: 1.0,
        }
    }

    /// Adds a particle of a named species at rest at `position`.
    ///
    /// The position is clamped into the box before insertion so a sloppy
    /// spawn point can never start a particle outside the walls.
    pub fn add_particle(
        &mut self,
        name: &str,
        species_name: &str,
        position: Point3<f64>,
    ) -> Result<ParticleId, EngineError> {
        let species = self.forcefield.species.id(species_name).ok_or_else(|| {
            EngineError::UnknownSpecies {
                particle: name.to_string(),
                species: species_name.to_string(),
            }
        })?;
        let position = self.bounds.clamp_position(position);
        let id = self.registry.add(Particle::new(name, species, position))?;
        Ok(id)
    }

    pub fn registry(&self) -> &ParticleRegistry {
        &self.registry
    }

    pub fn forcefield(&self) -> &Forcefield {
        &self.forcefield
    }

    pub fn bounds(&self) -> &SimulationBox {
        &self.bounds
    }

    /// Pure boundary clamp, callable mid-drag to constrain a proposed target
    /// before committing it.
    pub fn clamp_position(&self, position: Point3<f64>) -> Point3<f64> {
        self.bounds.clamp_position(position)
    }

    fn get(&self, id: ParticleId) -> Result<&Particle, EngineError> {
        self.registry
            .particle(id)
            .ok_or(EngineError::ParticleNotFound(id))
    }

    fn get_mut(&mut self, id: ParticleId) -> Result<&mut Particle, EngineError> {
        self.registry
            .particle_mut(id)
            .ok_or(EngineError::ParticleNotFound(id))
    }

    pub fn position(&self, id: ParticleId) -> Result<Point3<f64>, EngineError> {
        Ok(self.get(id)?.position)
    }

    /// Moves a particle directly, clamping the target into the box. This is
    /// the drag path: the caller usually pairs it with a kinematic override.
    pub fn set_position(&mut self, id: ParticleId, position: Point3<f64>) -> Result<(), EngineError> {
        let clamped = self.bounds.clamp_position(position);
        self.get_mut(id)?.position = clamped;
        Ok(())
    }

    pub fn velocity(&self, id: ParticleId) -> Result<Vector3<f64>, EngineError> {
        Ok(self.get(id)?.velocity)
    }

    /// Overwrites a particle's velocity, as when a frontend flings a released
    /// particle. The value is in angstroms per tick and feeds the very next
    /// [`step`](Self::step) unmodified.
    pub fn set_velocity(&mut self, id: ParticleId, velocity: Vector3<f64>) -> Result<(), EngineError> {
        self.get_mut(id)?.velocity = velocity;
        Ok(())
    }

    pub fn set_kinematic(&mut self, id: ParticleId, kinematic: bool) -> Result<(), EngineError> {
        self.get_mut(id)?.kinematic = kinematic;
        Ok(())
    }

    pub fn set_selected(&mut self, id: ParticleId, selected: bool) -> Result<(), EngineError> {
        self.get_mut(id)?.selected = selected;
        Ok(())
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn thermostat_scale(&self) -> f64 {
        self.thermostat_scale
    }

    /// Latches the velocity rescale factor applied on subsequent ticks. A
    /// non-finite value is accepted and simply skipped by the integrator.
    pub fn set_thermostat_scale(&mut self, scale: f64) {
        self.thermostat_scale = scale;
    }

    /// Bond threshold distance for two particles' species pairing.
    pub fn bond_distance(&self, a: ParticleId, b: ParticleId) -> Result<f64, EngineError> {
        let pa = self.get(a)?;
        let pb = self.get(b)?;
        Ok(bonds::bond_distance(
            &self.forcefield.pair_sigmas,
            pa.species,
            pb.species,
        ))
    }

    pub fn pairwise_distance(&self, a: ParticleId, b: ParticleId) -> Result<f64, EngineError> {
        Ok(bonds::pairwise_distance(self.get(a)?, self.get(b)?))
    }

    pub fn are_bonded(&self, a: ParticleId, b: ParticleId) -> Result<bool, EngineError> {
        Ok(bonds::are_bonded(
            &self.forcefield.pair_sigmas,
            self.get(a)?,
            self.get(b)?,
        ))
    }

    /// Advances the simulation one fixed tick.
    pub fn step(&mut self) {
        integrator::advance(
            &mut self.registry,
            &self.forcefield,
            &self.bounds,
            &self.physics,
            self.paused,
            self.thermostat_scale,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::BoxConfig;

    fn simulation() -> Simulation {
        let bounds = SimulationBox::new(&BoxConfig {
            center: [0.0, 0.0, 0.0],
            width: 20.0,
            height: 20.0,
            depth: 20.0,
            margin: 0.5,
        })
        .unwrap();
        Simulation::new(Forcefield::builtin(), bounds, PhysicsConfig::default())
    }

    #[test]
    fn add_particle_resolves_species_and_clamps_spawn_point() {
        let mut sim = simulation();
        let id = sim
            .add_particle("Pt0", "Pt", Point3::new(500.0, 0.0, 0.0))
            .unwrap();
        let position = sim.position(id).unwrap();
        assert_eq!(position.x, 9.5);
        assert_eq!(sim.registry().len(), 1);
    }

    #[test]
    fn add_particle_with_unknown_species_fails() {
        let mut sim = simulation();
        let err = sim
            .add_particle("X0", "Unobtainium", Point3::origin())
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::UnknownSpecies { ref species, .. } if species == "Unobtainium"
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut sim = simulation();
        sim.add_particle("Pt0", "Pt", Point3::origin()).unwrap();
        let err = sim
            .add_particle("Pt0", "Cu", Point3::new(5.0, 0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, EngineError::Registry(_)));
    }

    #[test]
    fn stale_id_reports_particle_not_found() {
        use slotmap::KeyData;
        let sim = simulation();
        let stale = ParticleId::from(KeyData::from_ffi(42));
        assert!(matches!(
            sim.position(stale),
            Err(EngineError::ParticleNotFound(id)) if id == stale
        ));
    }

    #[test]
    fn drag_then_release_moves_a_particle_without_integration() {
        let mut sim = simulation();
        let id = sim.add_particle("Au0", "Au", Point3::origin()).unwrap();
        sim.set_kinematic(id, true).unwrap();
        sim.set_position(id, Point3::new(3.0, 4.0, 0.0)).unwrap();
        sim.step();
        // A kinematic particle stays wherever the drag put it.
        assert_eq!(sim.position(id).unwrap(), Point3::new(3.0, 4.0, 0.0));

        sim.set_kinematic(id, false).unwrap();
        sim.set_velocity(id, Vector3::new(0.25, 0.0, 0.0)).unwrap();
        sim.step();
        // Released with a fling and no neighbors the particle drifts.
        assert_eq!(sim.position(id).unwrap(), Point3::new(3.25, 4.0, 0.0));
    }

    #[test]
    fn set_position_clamps_into_the_box() {
        let mut sim = simulation();
        let id = sim.add_particle("Cu0", "Cu", Point3::origin()).unwrap();
        sim.set_position(id, Point3::new(0.0, -100.0, 100.0)).unwrap();
        let position = sim.position(id).unwrap();
        assert_eq!(position.y, 0.5);
        assert_eq!(position.z, 9.5);
    }

    #[test]
    fn pausing_freezes_free_particles() {
        let mut sim = simulation();
        let id = sim.add_particle("Pt0", "Pt", Point3::origin()).unwrap();
        let spawn = sim.position(id).unwrap();
        sim.set_velocity(id, Vector3::new(0.1, 0.0, 0.0)).unwrap();
        sim.set_paused(true);
        sim.step();
        assert_eq!(sim.velocity(id).unwrap(), Vector3::zeros());
        assert_eq!(sim.position(id).unwrap(), spawn);
    }

    #[test]
    fn bond_classification_tracks_distance() {
        let mut sim = simulation();
        let a = sim.add_particle("Pt0", "Pt", Point3::origin()).unwrap();
        let b = sim
            .add_particle("Pt1", "Pt", Point3::new(2.6, 0.0, 0.0))
            .unwrap();

        let threshold = sim.bond_distance(a, b).unwrap();
        assert!((threshold - 1.225 * 2.5394).abs() < 1e-12);
        assert!(sim.are_bonded(a, b).unwrap());

        sim.set_position(b, Point3::new(4.0, 0.0, 0.0)).unwrap();
        assert!(!sim.are_bonded(a, b).unwrap());
        assert!((sim.pairwise_distance(a, b).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn thermostat_scale_defaults_to_identity() {
        let mut sim = simulation();
        assert_eq!(sim.thermostat_scale(), 1.0);
        sim.set_thermostat_scale(0.9);
        assert_eq!(sim.thermostat_scale(), 0.9);
    }
}
