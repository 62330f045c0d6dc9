use super::pairs::{PairKey, PairSigmaTable};
use super::potentials::Potential;
use super::species::{SpeciesError, SpeciesParams, SpeciesTable};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// One explicit pairwise-sigma override from a parameter file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PairSigmaOverride {
    pub a: String,
    pub b: String,
    pub sigma: f64,
}

/// Raw interaction parameters as they appear in a TOML parameter file.
///
/// Species listed here are merged over the built-in table: a known name
/// overrides the built-in constants, a new name adds a species.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct InteractionParams {
    #[serde(default)]
    pub potential: Potential,
    #[serde(default)]
    pub species: HashMap<String, SpeciesParams>,
    #[serde(default)]
    pub pair_sigma: Vec<PairSigmaOverride>,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Species(#[from] SpeciesError),
    #[error("Pair sigma override for ('{a}', '{b}') must be positive, got {sigma}")]
    InvalidPairSigma { a: String, b: String, sigma: f64 },
}

impl InteractionParams {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

/// Fully assembled interaction parameters: the species table, the symmetric
/// pairwise-sigma table derived from it, and the selected interaction law.
#[derive(Debug, Clone)]
pub struct Forcefield {
    pub potential: Potential,
    pub species: SpeciesTable,
    pub pair_sigmas: PairSigmaTable,
}

impl Forcefield {
    /// The built-in metal species with mean-combined pair sigmas.
    pub fn builtin() -> Self {
        let species = SpeciesTable::with_builtins();
        let pair_sigmas = PairSigmaTable::derive(&species);
        Self {
            potential: Potential::default(),
            species,
            pair_sigmas,
        }
    }

    /// Assembles a force field from raw parameters.
    ///
    /// Every species referenced by a pair override must resolve, and all
    /// parameters must be physical; any violation is fatal here, before a
    /// simulation can start.
    pub fn from_params(params: &InteractionParams) -> Result<Self, ParamLoadError> {
        let mut species = SpeciesTable::with_builtins();
        let mut names: Vec<_> = params.species.keys().collect();
        names.sort();
        for name in names {
            species.insert(name, params.species[name])?;
        }

        let mut pair_sigmas = PairSigmaTable::derive(&species);
        for entry in &params.pair_sigma {
            let a = species.resolve(&entry.a)?;
            let b = species.resolve(&entry.b)?;
            if !(entry.sigma > 0.0) {
                return Err(ParamLoadError::InvalidPairSigma {
                    a: entry.a.clone(),
                    b: entry.b.clone(),
                    sigma: entry.sigma,
                });
            }
            pair_sigmas.set(PairKey::new(a, b), entry.sigma);
        }

        Ok(Self {
            potential: params.potential,
            species,
            pair_sigmas,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        Self::from_params(&InteractionParams::load(path)?)
    }
}

impl Default for Forcefield {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::species::BUILTIN_SPECIES;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn builtin_forcefield_covers_every_builtin_pair() {
        let ff = Forcefield::builtin();
        assert_eq!(ff.species.len(), BUILTIN_SPECIES.len());
        for (a, _, _) in ff.species.iter() {
            for (b, _, _) in ff.species.iter() {
                assert!(ff.pair_sigmas.sigma(a, b) > 0.0);
            }
        }
    }

    #[test]
    fn load_succeeds_with_valid_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("interactions.toml");
        fs::write(
            &file_path,
            r#"
            potential = "lennard-jones"

            [species.Ag]
            epsilon = 5.8e-20
            sigma = 2.644
            mass = 107.8682

            [[pair_sigma]]
            a = "Ag"
            b = "Pt"
            sigma = 2.60
            "#,
        )
        .unwrap();

        let ff = Forcefield::load(&file_path).unwrap();
        let ag = ff.species.id("Ag").unwrap();
        let pt = ff.species.id("Pt").unwrap();

        assert_eq!(ff.potential, Potential::LennardJones);
        assert_eq!(ff.species.params(ag).mass, 107.8682);
        assert_eq!(ff.pair_sigmas.sigma(pt, ag), 2.60);

        // Non-overridden pairs keep the mean rule.
        let cu = ff.species.id("Cu").unwrap();
        assert!((ff.pair_sigmas.sigma(ag, ag) - 2.644).abs() < 1e-12);
        assert!((ff.pair_sigmas.sigma(ag, cu) - (2.644 + 2.3374) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = Forcefield::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ParamLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("malformed.toml");
        fs::write(&file_path, "this is not toml").unwrap();
        let result = Forcefield::load(&file_path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }

    #[test]
    fn pair_override_with_unknown_species_is_fatal() {
        let params = InteractionParams {
            pair_sigma: vec![PairSigmaOverride {
                a: "Pt".to_string(),
                b: "Xx".to_string(),
                sigma: 2.5,
            }],
            ..Default::default()
        };
        let result = Forcefield::from_params(&params);
        assert!(matches!(
            result,
            Err(ParamLoadError::Species(SpeciesError::Unknown(name))) if name == "Xx"
        ));
    }

    #[test]
    fn non_positive_pair_override_is_fatal() {
        let params = InteractionParams {
            pair_sigma: vec![PairSigmaOverride {
                a: "Pt".to_string(),
                b: "Cu".to_string(),
                sigma: 0.0,
            }],
            ..Default::default()
        };
        let result = Forcefield::from_params(&params);
        assert!(matches!(
            result,
            Err(ParamLoadError::InvalidPairSigma { .. })
        ));
    }
}
