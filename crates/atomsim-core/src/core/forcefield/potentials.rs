use crate::core::units::ANGSTROM_IN_METERS;
use serde::Deserialize;

// Radial derivative of the 12-6 potential, pre-multiplied by the physical
// distance so the caller only multiplies by the unit direction vector.
#[inline]
fn lj_12_6_force(dist: f64, sigma: f64, epsilon: f64) -> f64 {
    let dist_m = dist * ANGSTROM_IN_METERS;
    let rho6 = (sigma / dist).powi(6);
    let rho12 = rho6 * rho6;
    (-48.0 * epsilon / (dist_m * dist_m)) * (rho12 - 0.5 * rho6) * dist_m
}

/// Signed force magnitude between two particles separated by `dist`
/// angstroms, along the unit direction from the queried particle toward its
/// neighbor. Positive values attract, negative values repel.
///
/// Below `r_min = r_min_multiplier * sigma` the 1/d^12 term is not evaluated;
/// instead the value ramps exponentially between the closed-form values at
/// `r_min / 1.5` and `r_min`. The ramp keeps the repulsion bounded at
/// vanishing separations while staying exactly continuous at `r_min`. This
/// specific blend is a tuned stability policy, not a physical law; the
/// look of close-approach bounces depends on it.
#[inline]
pub fn pairwise_force(dist: f64, sigma: f64, epsilon: f64, r_min_multiplier: f64) -> f64 {
    let r_min = r_min_multiplier * sigma;
    if dist > r_min {
        lj_12_6_force(dist, sigma, epsilon)
    } else {
        let v_rmin = lj_12_6_force(r_min, sigma, epsilon);
        let r_vmax = r_min / 1.5;
        let v_rvmax = lj_12_6_force(r_vmax, sigma, epsilon);
        let ramp = (dist / r_min) * (dist.exp() / r_min.exp());
        v_rvmax - ramp * (v_rvmax - v_rmin)
    }
}

/// Interaction law selector.
///
/// A single law is implemented today; the enum is the extension point for
/// further laws, which must supply their own kernel before gaining a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Potential {
    #[default]
    LennardJones,
}

impl Potential {
    #[inline]
    pub fn force(self, dist: f64, sigma: f64, epsilon: f64, r_min_multiplier: f64) -> f64 {
        match self {
            Potential::LennardJones => pairwise_force(dist, sigma, epsilon, r_min_multiplier),
        }
    }
}
