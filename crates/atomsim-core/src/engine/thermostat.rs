use crate::core::forcefield::species::SpeciesTable;
use crate::core::models::registry::ParticleRegistry;
use crate::core::units::{AMU_IN_KG, ANGSTROM_IN_METERS, BOLTZMANN_J_PER_K, FIXED_STEP_SECONDS};

/// Velocity-rescale factor `sqrt(T_target / T_instantaneous)`.
///
/// The instantaneous temperature comes from the kinetic energy of the whole
/// registry with true per-species masses. A system at rest has no defined
/// temperature and yields `f64::INFINITY`; the integrator's rescale guard
/// absorbs that value, so the factor can be fed to the step unconditionally.
pub fn rescale_factor(
    registry: &ParticleRegistry,
    species: &SpeciesTable,
    target_kelvin: f64,
) -> f64 {
    if registry.is_empty() {
        return 1.0;
    }

    let to_meters_per_second = ANGSTROM_IN_METERS / FIXED_STEP_SECONDS;
    let mut kinetic = 0.0;
    for (_, particle) in registry.iter() {
        let mass_kg = species.params(particle.species).mass * AMU_IN_KG;
        let speed = particle.velocity.norm() * to_meters_per_second;
        kinetic += 0.5 * mass_kg * speed * speed;
    }

    let temperature =
        2.0 * kinetic / (3.0 * registry.len() as f64 * BOLTZMANN_J_PER_K);
    (target_kelvin / temperature).sqrt()
}

/// Instantaneous temperature of the registry in kelvin; 0 when at rest.
pub fn instantaneous_temperature(registry: &ParticleRegistry, species: &SpeciesTable) -> f64 {
    if registry.is_empty() {
        return 0.0;
    }
    let to_meters_per_second = ANGSTROM_IN_METERS / FIXED_STEP_SECONDS;
    let mut kinetic = 0.0;
    for (_, particle) in registry.iter() {
        let mass_kg = species.params(particle.species).mass * AMU_IN_KG;
        let speed = particle.velocity.norm() * to_meters_per_second;
        kinetic += 0.5 * mass_kg * speed * speed;
    }
    2.0 * kinetic / (3.0 * registry.len() as f64 * BOLTZMANN_J_PER_K)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::particle::Particle;
    use nalgebra::{Point3, Vector3};

    fn single_particle_registry(speed: f64, table: &SpeciesTable) -> ParticleRegistry {
        let species = table.id("Pt").unwrap();
        let mut registry = ParticleRegistry::new();
        let mut particle = Particle::new("Pt0", species, Point3::origin());
        particle.velocity = Vector3::new(speed, 0.0, 0.0);
        registry.add(particle).unwrap();
        registry
    }

    #[test]
    fn system_at_rest_yields_an_infinite_factor() {
        let table = SpeciesTable::with_builtins();
        let registry = single_particle_registry(0.0, &table);
        assert!(rescale_factor(&registry, &table, 300.0).is_infinite());
        assert_eq!(instantaneous_temperature(&registry, &table), 0.0);
    }

    #[test]
    fn empty_registry_yields_unity() {
        let table = SpeciesTable::with_builtins();
        let registry = ParticleRegistry::new();
        assert_eq!(rescale_factor(&registry, &table, 300.0), 1.0);
    }

    #[test]
    fn factor_is_unity_at_the_target_temperature() {
        let table = SpeciesTable::with_builtins();
        let registry = single_particle_registry(1e-4, &table);
        let current = instantaneous_temperature(&registry, &table);
        let factor = rescale_factor(&registry, &table, current);
        assert!((factor - 1.0).abs() < 1e-12);
    }

    #[test]
    fn doubling_velocities_halves_the_factor() {
        let table = SpeciesTable::with_builtins();
        let slow = single_particle_registry(1e-4, &table);
        let fast = single_particle_registry(2e-4, &table);

        let target = 300.0;
        let slow_factor = rescale_factor(&slow, &table, target);
        let fast_factor = rescale_factor(&fast, &table, target);
        assert!((slow_factor / fast_factor - 2.0).abs() < 1e-9);
    }

    #[test]
    fn hotter_than_target_rescales_below_unity() {
        let table = SpeciesTable::with_builtins();
        let registry = single_particle_registry(1e-4, &table);
        let current = instantaneous_temperature(&registry, &table);
        assert!(rescale_factor(&registry, &table, current / 4.0) < 1.0);
    }
}
