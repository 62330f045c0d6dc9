use crate::core::forcefield::pairs::PairSigmaTable;
use crate::core::forcefield::species::SpeciesId;
use crate::core::models::particle::Particle;
use crate::core::units::BOND_DISTANCE_FACTOR;

/// Distance below which two particles of these species count as bonded, in
/// angstroms. A function of species only, symmetric in its arguments; display
/// and proximity effects use it against the current pair distance.
pub fn bond_distance(pair_sigmas: &PairSigmaTable, a: SpeciesId, b: SpeciesId) -> f64 {
    BOND_DISTANCE_FACTOR * pair_sigmas.sigma(a, b)
}

/// Current center-to-center distance between two particles, in angstroms.
pub fn pairwise_distance(a: &Particle, b: &Particle) -> f64 {
    (a.position - b.position).norm()
}

/// Whether the pair currently sits inside its bond threshold.
pub fn are_bonded(pair_sigmas: &PairSigmaTable, a: &Particle, b: &Particle) -> bool {
    pairwise_distance(a, b) < bond_distance(pair_sigmas, a.species, b.species)
}
