use super::neighbors::ParticleView;
use crate::core::forcefield::params::Forcefield;
use crate::core::units::{ANGSTROM_IN_METERS, FIXED_STEP_SECONDS, REFERENCE_MASS_KG};
use nalgebra::Vector3;

// A coincident pair has no defined direction and contributes nothing; the
// kernel itself stays bounded there.
const DIRECTION_EPSILON: f64 = 1e-12;

/// Accumulates the pair forces on `query` from its neighbor set and converts
/// the physical resultant into a per-tick velocity increment in angstroms.
///
/// The kernel is evaluated with the pair sigma and the queried particle's own
/// epsilon. The conversion divides by the fixed reference mass and the
/// angstrom scale, then multiplies by the tick length twice; the two
/// successive multiplications are kept as-is because the interactive tuning
/// was done against exactly this arithmetic.
pub(crate) fn velocity_increment<'a>(
    query: &ParticleView,
    neighbors: impl Iterator<Item = &'a ParticleView>,
    forcefield: &Forcefield,
    r_min_multiplier: f64,
) -> Vector3<f64> {
    let epsilon = forcefield.species.params(query.species).epsilon;

    let mut total = Vector3::zeros();
    for neighbor in neighbors {
        let separation = neighbor.position - query.position;
        let Some(direction) = separation.try_normalize(DIRECTION_EPSILON) else {
            continue;
        };
        let sigma = forcefield.pair_sigmas.sigma(query.species, neighbor.species);
        let magnitude =
            forcefield
                .potential
                .force(separation.norm(), sigma, epsilon, r_min_multiplier);
        total += direction * magnitude;
    }

    let mut adjusted = total / REFERENCE_MASS_KG;
    adjusted /= ANGSTROM_IN_METERS;
    adjusted *= FIXED_STEP_SECONDS;
    adjusted *= FIXED_STEP_SECONDS;
    adjusted
}
