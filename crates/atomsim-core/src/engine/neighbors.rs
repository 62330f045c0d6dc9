use crate::core::forcefield::species::SpeciesId;
use crate::core::models::ids::ParticleId;
use crate::core::models::registry::ParticleRegistry;
use nalgebra::Point3;

/// Start-of-step view of one particle: everything the force pass reads.
///
/// Forces are computed against these snapshots rather than the live registry,
/// so updating a particle mid-step cannot change what a later particle sees
/// and the step result is independent of iteration order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParticleView {
    pub id: ParticleId,
    pub species: SpeciesId,
    pub position: Point3<f64>,
    pub kinematic: bool,
}

pub(crate) fn snapshot(registry: &ParticleRegistry) -> Vec<ParticleView> {
    registry
        .iter()
        .map(|(id, p)| ParticleView {
            id,
            species: p.species,
            position: p.position,
            kinematic: p.kinematic,
        })
        .collect()
}

/// All particles strictly within `cutoff` of `origin`, excluding the queried
/// particle itself. Linear scan; the per-step cost over the whole registry is
/// deliberately quadratic, which is fine at the particle counts this engine
/// targets.
pub(crate) fn neighbors_within<'a>(
    views: &'a [ParticleView],
    query: ParticleId,
    origin: &Point3<f64>,
    cutoff: f64,
) -> impl Iterator<Item = &'a ParticleView> {
    let origin = *origin;
    views
        .iter()
        .filter(move |view| view.id != query && (view.position - origin).norm() < cutoff)
}
