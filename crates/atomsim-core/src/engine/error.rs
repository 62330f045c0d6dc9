use thiserror::Error;

use super::config::ConfigError;
use crate::core::forcefield::params::ParamLoadError;
use crate::core::models::ids::ParticleId;
use crate::core::models::registry::RegistryError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Setup failed: {0}")]
    Setup(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Params(#[from] ParamLoadError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Unknown species '{species}' for particle '{particle}'")]
    UnknownSpecies { particle: String, species: String },

    #[error("Particle not found: {0:?}")]
    ParticleNotFound(ParticleId),
}
