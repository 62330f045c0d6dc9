use crate::core::forcefield::params::InteractionParams;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{field}': {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

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
}

/// Kernel and neighbor-selection parameters, fixed at setup.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Neighbor cutoff radius in angstroms.
    pub cutoff: f64,
    /// Close-approach boundary as a multiple of the pair sigma.
    pub r_min_multiplier: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            cutoff: 8.0,
            r_min_multiplier: 0.75,
        }
    }
}

/// Simulation box geometry.
///
/// `center` is the center of the bottom plane; the box extends `width`/`depth`
/// symmetrically in x/z and `height` upward only in y. `margin` is the buffer
/// kept between a particle and each wall.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    pub center: [f64; 3],
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub margin: f64,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0, 0.0],
            width: 20.0,
            height: 20.0,
            depth: 20.0,
            margin: 0.5,
        }
    }
}

/// One homogeneous group of particles to create at setup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParticleGroup {
    pub species: String,
    pub count: usize,
}

/// Initial-state parameters for a self-contained run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Thermostat target temperature in kelvin.
    pub target_temperature: f64,
    /// Seed for the initial velocity distribution.
    pub seed: u64,
    /// Grid spacing of the initial particle placement, in angstroms.
    pub spacing: f64,
    pub particles: Vec<ParticleGroup>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            target_temperature: 300.0,
            seed: 7,
            spacing: 4.0,
            particles: vec![ParticleGroup {
                species: "Pt".to_string(),
                count: 10,
            }],
        }
    }
}

/// Complete configuration for one simulation run.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct SimulationConfig {
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(rename = "box", default)]
    pub bounds: BoxConfig,
    #[serde(flatten)]
    pub interactions: InteractionParams,
    #[serde(default)]
    pub setup: SetupConfig,
}

impl SimulationConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects geometrically or physically impossible parameters before any
    /// simulation state is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.physics.cutoff > 0.0) {
            return Err(ConfigError::Invalid {
                field: "physics.cutoff",
                reason: "must be positive",
            });
        }
        if !(self.physics.r_min_multiplier > 0.0) {
            return Err(ConfigError::Invalid {
                field: "physics.r_min_multiplier",
                reason: "must be positive",
            });
        }
        if !(self.bounds.margin >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "box.margin",
                reason: "must be non-negative",
            });
        }
        for (field, extent) in [
            ("box.width", self.bounds.width),
            ("box.height", self.bounds.height),
            ("box.depth", self.bounds.depth),
        ] {
            if !(extent > 2.0 * self.bounds.margin) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must exceed twice the margin",
                });
            }
        }
        if !(self.setup.target_temperature > 0.0) {
            return Err(ConfigError::Invalid {
                field: "setup.target_temperature",
                reason: "must be positive",
            });
        }
        if !(self.setup.spacing > 0.0) {
            return Err(ConfigError::Invalid {
                field: "setup.spacing",
                reason: "must be positive",
            });
        }
        Ok(())
    }
}

/// Builder for programmatic configuration, mirroring the TOML surface.
///
/// Box extents are required; every other parameter falls back to the same
/// defaults the TOML layer uses.
#[derive(Default)]
pub struct SimulationConfigBuilder {
    width: Option<f64>,
    height: Option<f64>,
    depth: Option<f64>,
    center: Option<[f64; 3]>,
    margin: Option<f64>,
    cutoff: Option<f64>,
    r_min_multiplier: Option<f64>,
    interactions: Option<InteractionParams>,
    setup: Option<SetupConfig>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }
    pub fn depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }
    pub fn center(mut self, center: [f64; 3]) -> Self {
        self.center = Some(center);
        self
    }
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }
    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }
    pub fn r_min_multiplier(mut self, multiplier: f64) -> Self {
        self.r_min_multiplier = Some(multiplier);
        self
    }
    pub fn interactions(mut self, interactions: InteractionParams) -> Self {
        self.interactions = Some(interactions);
        self
    }
    pub fn setup(mut self, setup: SetupConfig) -> Self {
        self.setup = Some(setup);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let defaults = BoxConfig::default();
        let physics_defaults = PhysicsConfig::default();
        let config = SimulationConfig {
            physics: PhysicsConfig {
                cutoff: self.cutoff.unwrap_or(physics_defaults.cutoff),
                r_min_multiplier: self
                    .r_min_multiplier
                    .unwrap_or(physics_defaults.r_min_multiplier),
            },
            bounds: BoxConfig {
                center: self.center.unwrap_or(defaults.center),
                width: self.width.ok_or(ConfigError::MissingParameter("width"))?,
                height: self.height.ok_or(ConfigError::MissingParameter("height"))?,
                depth: self.depth.ok_or(ConfigError::MissingParameter("depth"))?,
                margin: self.margin.unwrap_or(defaults.margin),
            },
            interactions: self.interactions.unwrap_or_default(),
            setup: self.setup.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
