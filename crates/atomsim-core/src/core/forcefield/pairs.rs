use super::species::{SpeciesId, SpeciesTable};

/// Unordered pair of species ids.
///
/// The constructor sorts the two ids, so a lookup keyed by `(a, b)` and one
/// keyed by `(b, a)` resolve to the same entry by construction rather than by
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairKey(SpeciesId, SpeciesId);

impl PairKey {
    pub fn new(a: SpeciesId, b: SpeciesId) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }
}

/// Effective sigma per unordered species pair, precomputed at setup.
///
/// Backed by a dense upper-triangular vector over the species ids of one
/// table, so the per-neighbor lookup in the force loop is a single index. The
/// default combining rule is the arithmetic mean of the two species sigmas;
/// individual pairs can be overridden afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PairSigmaTable {
    sigmas: Vec<f64>,
    species_count: usize,
}

impl PairSigmaTable {
    /// Builds the full table from a species table using the mean combining
    /// rule.
    pub fn derive(table: &SpeciesTable) -> Self {
        let n = table.len();
        let mut sigmas = vec![0.0; n * (n + 1) / 2];
        for (a, _, pa) in table.iter() {
            for (b, _, pb) in table.iter() {
                if a <= b {
                    sigmas[Self::offset(n, PairKey(a, b))] = (pa.sigma + pb.sigma) / 2.0;
                }
            }
        }
        Self {
            sigmas,
            species_count: n,
        }
    }

    /// Overrides the effective sigma for one pair.
    pub fn set(&mut self, key: PairKey, sigma: f64) {
        let offset = Self::offset(self.species_count, key);
        self.sigmas[offset] = sigma;
    }

    /// Effective sigma for the pair, in angstroms. Symmetric in its
    /// arguments.
    pub fn sigma(&self, a: SpeciesId, b: SpeciesId) -> f64 {
        self.sigmas[Self::offset(self.species_count, PairKey::new(a, b))]
    }

    fn offset(n: usize, key: PairKey) -> usize {
        let (i, j) = (key.0.0, key.1.0);
        i * n - i * (i + 1) / 2 + j
    }
}
