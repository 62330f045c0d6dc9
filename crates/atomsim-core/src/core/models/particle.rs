use crate::core::forcefield::species::SpeciesId;
use nalgebra::{Point3, Vector3};

/// A single point particle in the simulation.
///
/// A particle couples an immutable identity (name, species) with the mutable
/// dynamic state the integrator advances each tick. The two boolean flags are
/// written by external collaborators (drag handling, selection UI) and only
/// read by the engine: a kinematic particle is excluded from force
/// integration for the current tick while still acting as a force source for
/// others.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Unique display name of the particle (e.g., "Pt3").
    pub name: String,
    /// Index of the particle's species in the species table.
    pub species: SpeciesId,
    /// Position in angstroms.
    pub position: Point3<f64>,
    /// Velocity in angstroms per fixed tick.
    pub velocity: Vector3<f64>,
    /// Externally driven motion: no force application or rescaling this tick.
    pub kinematic: bool,
    /// External UI selection state; never interpreted by the engine.
    pub selected: bool,
}

impl Particle {
    /// Creates a particle at rest with both state flags cleared.
    pub fn new(name: &str, species: SpeciesId, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            species,
            position,
            velocity: Vector3::zeros(),
            kinematic: false,
            selected: false,
        }
    }
}
