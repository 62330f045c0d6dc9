use super::ids::ParticleId;
use super::particle::Particle;
use slotmap::SlotMap;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("A particle named '{0}' already exists in the registry")]
    DuplicateName(String),
}

/// Owns every particle of one simulation run.
///
/// Particles are stored in a slot map so identifiers stay stable and cheap to
/// copy; a secondary index resolves the unique particle names used by
/// external collaborators. The registry is created at setup, mutated in place
/// by the integrator each tick, and dropped at teardown; particles never
/// move between registries.
#[derive(Debug, Clone, Default)]
pub struct ParticleRegistry {
    particles: SlotMap<ParticleId, Particle>,
    name_map: HashMap<String, ParticleId>,
}

impl ParticleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Inserts a particle, enforcing name uniqueness.
    pub fn add(&mut self, particle: Particle) -> Result<ParticleId, RegistryError> {
        if self.name_map.contains_key(&particle.name) {
            return Err(RegistryError::DuplicateName(particle.name));
        }
        let name = particle.name.clone();
        let id = self.particles.insert(particle);
        self.name_map.insert(name, id);
        Ok(id)
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id)
    }

    pub fn particle_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.particles.get_mut(id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<ParticleId> {
        self.name_map.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticleId, &Particle)> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ParticleId, &mut Particle)> {
        self.particles.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::species::SpeciesTable;
    use nalgebra::Point3;

    fn registry_with(names: &[&str]) -> ParticleRegistry {
        let table = SpeciesTable::with_builtins();
        let species = table.id("Pt").unwrap();
        let mut registry = ParticleRegistry::new();
        for name in names {
            registry
                .add(Particle::new(name, species, Point3::origin()))
                .unwrap();
        }
        registry
    }

    #[test]
    fn add_and_lookup_by_id_and_name() {
        let registry = registry_with(&["Pt0", "Pt1"]);
        assert_eq!(registry.len(), 2);

        let id = registry.find_by_name("Pt1").unwrap();
        assert_eq!(registry.particle(id).unwrap().name, "Pt1");
        assert!(registry.find_by_name("Pt2").is_none());
    }

    #[test]
    fn add_rejects_duplicate_names() {
        let table = SpeciesTable::with_builtins();
        let species = table.id("Au").unwrap();
        let mut registry = ParticleRegistry::new();
        registry
            .add(Particle::new("Au0", species, Point3::origin()))
            .unwrap();

        let result = registry.add(Particle::new("Au0", species, Point3::origin()));
        assert_eq!(result, Err(RegistryError::DuplicateName("Au0".to_string())));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn particle_mut_allows_in_place_updates() {
        let mut registry = registry_with(&["Pt0"]);
        let id = registry.find_by_name("Pt0").unwrap();

        registry.particle_mut(id).unwrap().kinematic = true;
        assert!(registry.particle(id).unwrap().kinematic);
    }

    #[test]
    fn iter_visits_every_particle() {
        let registry = registry_with(&["Pt0", "Pt1", "Pt2"]);
        assert_eq!(registry.iter().count(), 3);
    }
}
