use phf::phf_map;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Index of a species in a [`SpeciesTable`].
///
/// Ids are only minted by the table that owns the species, so holding one is
/// proof the entry exists. Particles store this id instead of a name, keeping
/// species lookup out of the force-accumulation inner loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpeciesId(pub(crate) usize);

impl SpeciesId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Immutable constant bundle for one species.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SpeciesParams {
    /// Potential well depth in joules.
    pub epsilon: f64,
    /// Characteristic pair distance in angstroms.
    pub sigma: f64,
    /// Atomic mass in amu.
    pub mass: f64,
}

/// 12-6 Lennard-Jones parameters from Zhen and Davies,
/// Phys. Stat. Sol. (a) 78, 595 (1983).
pub static BUILTIN_SPECIES: phf::Map<&'static str, SpeciesParams> = phf_map! {
    "Cu" => SpeciesParams { epsilon: 6.5371e-20, sigma: 2.3374, mass: 63.546 },
    "Au" => SpeciesParams { epsilon: 7.1162e-20, sigma: 2.6367, mass: 196.967 },
    "Pt" => SpeciesParams { epsilon: 1.0922e-19, sigma: 2.5394, mass: 195.084 },
};

#[derive(Debug, Error, PartialEq)]
pub enum SpeciesError {
    #[error("Unknown species: '{0}'")]
    Unknown(String),

    #[error("Invalid parameters for species '{name}': {reason}")]
    Invalid { name: String, reason: &'static str },
}

/// Static per-species constants, indexed by [`SpeciesId`] and resolvable by
/// name at setup time. Entries are never mutated after the table is built.
#[derive(Debug, Clone, Default)]
pub struct SpeciesTable {
    names: Vec<String>,
    params: Vec<SpeciesParams>,
    index: HashMap<String, SpeciesId>,
}

impl SpeciesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table pre-populated with the built-in metal species.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        let mut entries: Vec<_> = BUILTIN_SPECIES.entries().collect();
        entries.sort_by_key(|(name, _)| *name);
        for (name, params) in entries {
            // Built-in constants are well-formed.
            let _ = table.insert(name, *params);
        }
        table
    }

    /// Adds a species or overrides an existing entry of the same name.
    pub fn insert(&mut self, name: &str, params: SpeciesParams) -> Result<SpeciesId, SpeciesError> {
        let reason = if !(params.sigma > 0.0) {
            Some("sigma must be positive")
        } else if !(params.epsilon > 0.0) {
            Some("epsilon must be positive")
        } else if !(params.mass > 0.0) {
            Some("mass must be positive")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(SpeciesError::Invalid {
                name: name.to_string(),
                reason,
            });
        }

        if let Some(&id) = self.index.get(name) {
            self.params[id.0] = params;
            return Ok(id);
        }
        let id = SpeciesId(self.names.len());
        self.names.push(name.to_string());
        self.params.push(params);
        self.index.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn id(&self, name: &str) -> Option<SpeciesId> {
        self.index.get(name).copied()
    }

    /// Name lookup that surfaces a configuration error for unknown species.
    pub fn resolve(&self, name: &str) -> Result<SpeciesId, SpeciesError> {
        self.id(name)
            .ok_or_else(|| SpeciesError::Unknown(name.to_string()))
    }

    pub fn params(&self, id: SpeciesId) -> &SpeciesParams {
        &self.params[id.0]
    }

    pub fn name(&self, id: SpeciesId) -> &str {
        &self.names[id.0]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpeciesId, &str, &SpeciesParams)> {
        self.names
            .iter()
            .zip(self.params.iter())
            .enumerate()
            .map(|(i, (name, params))| (SpeciesId(i), name.as_str(), params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_contain_the_three_metal_species() {
        let table = SpeciesTable::with_builtins();
        assert_eq!(table.len(), 3);

        let pt = table.id("Pt").unwrap();
        assert_eq!(table.params(pt).sigma, 2.5394);
        assert_eq!(table.params(pt).epsilon, 1.0922e-19);
        assert_eq!(table.params(pt).mass, 195.084);
        assert_eq!(table.name(pt), "Pt");
    }

    #[test]
    fn resolve_fails_loudly_for_unknown_species() {
        let table = SpeciesTable::with_builtins();
        assert_eq!(
            table.resolve("Xx"),
            Err(SpeciesError::Unknown("Xx".to_string()))
        );
    }

    #[test]
    fn insert_overrides_existing_entry_in_place() {
        let mut table = SpeciesTable::with_builtins();
        let before = table.id("Cu").unwrap();
        let after = table
            .insert(
                "Cu",
                SpeciesParams {
                    epsilon: 1.0e-20,
                    sigma: 2.5,
                    mass: 60.0,
                },
            )
            .unwrap();

        assert_eq!(before, after);
        assert_eq!(table.len(), 3);
        assert_eq!(table.params(after).sigma, 2.5);
    }

    #[test]
    fn insert_rejects_non_positive_parameters() {
        let mut table = SpeciesTable::new();
        let result = table.insert(
            "Bad",
            SpeciesParams {
                epsilon: 1.0e-20,
                sigma: 0.0,
                mass: 1.0,
            },
        );
        assert!(matches!(result, Err(SpeciesError::Invalid { .. })));

        let result = table.insert(
            "Bad",
            SpeciesParams {
                epsilon: -1.0,
                sigma: 1.0,
                mass: 1.0,
            },
        );
        assert!(matches!(result, Err(SpeciesError::Invalid { .. })));
    }

    #[test]
    fn iter_yields_ids_matching_lookup() {
        let table = SpeciesTable::with_builtins();
        for (id, name, params) in table.iter() {
            assert_eq!(table.id(name), Some(id));
            assert_eq!(table.params(id), params);
        }
    }
}
