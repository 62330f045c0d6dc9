use super::config::{BoxConfig, ConfigError};
use nalgebra::{Point3, Vector3};

/// The confining simulation box.
///
/// `base` is the center of the bottom plane: x and z extend symmetrically
/// around it, while y extends upward only. All checks use the wall position
/// minus the margin, so particles are kept a buffer away from the geometry
/// itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationBox {
    base: Point3<f64>,
    width: f64,
    height: f64,
    depth: f64,
    margin: f64,
}

impl SimulationBox {
    pub fn new(config: &BoxConfig) -> Result<Self, ConfigError> {
        if !(config.margin >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "box.margin",
                reason: "must be non-negative",
            });
        }
        for (field, extent) in [
            ("box.width", config.width),
            ("box.height", config.height),
            ("box.depth", config.depth),
        ] {
            if !(extent > 2.0 * config.margin) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must exceed twice the margin",
                });
            }
        }
        Ok(Self {
            base: Point3::new(config.center[0], config.center[1], config.center[2]),
            width: config.width,
            height: config.height,
            depth: config.depth,
            margin: config.margin,
        })
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Innermost allowed corner (wall plus margin) per axis.
    fn lower(&self) -> Point3<f64> {
        Point3::new(
            self.base.x - self.width / 2.0 + self.margin,
            self.base.y + self.margin,
            self.base.z - self.depth / 2.0 + self.margin,
        )
    }

    /// Outermost allowed corner (wall minus margin) per axis.
    fn upper(&self) -> Point3<f64> {
        Point3::new(
            self.base.x + self.width / 2.0 - self.margin,
            self.base.y + self.height - self.margin,
            self.base.z + self.depth / 2.0 - self.margin,
        )
    }

    /// Clamps a proposed position into the allowed interior, per axis.
    ///
    /// Pure and idempotent; exposed so external collaborators can constrain
    /// drag targets without the engine moving anything itself.
    pub fn clamp_position(&self, position: Point3<f64>) -> Point3<f64> {
        let lower = self.lower();
        let upper = self.upper();
        Point3::new(
            position.x.clamp(lower.x, upper.x),
            position.y.clamp(lower.y, upper.y),
            position.z.clamp(lower.z, upper.z),
        )
    }

    /// Forces each velocity component to point back inward on any axis where
    /// the position is at or beyond the margin band of a wall.
    ///
    /// The sign is forced rather than negated: a particle at rest against a
    /// wall stays at rest instead of oscillating.
    pub fn reflect_velocity(&self, position: &Point3<f64>, velocity: Vector3<f64>) -> Vector3<f64> {
        let lower = self.lower();
        let upper = self.upper();
        let mut reflected = velocity;
        for axis in 0..3 {
            if position[axis] > upper[axis] {
                reflected[axis] = -reflected[axis].abs();
            }
            if position[axis] < lower[axis] {
                reflected[axis] = reflected[axis].abs();
            }
        }
        reflected
    }
}
