use super::boundary::SimulationBox;
use super::config::PhysicsConfig;
use super::{forces, neighbors};
use crate::core::forcefield::params::Forcefield;
use crate::core::models::registry::ParticleRegistry;

/// Advances the whole registry one fixed tick.
///
/// Paused runs freeze in place: every non-kinematic velocity is zeroed and no
/// forces are evaluated. Otherwise each non-kinematic particle gets its
/// accumulated force as a velocity increment, a thermostat rescale (guarded
/// below), an inward wall reflection, and finally a position advance by its
/// velocity. Kinematic particles are untouched but remain force sources via
/// the start-of-step snapshot.
///
/// The rescale is skipped when the velocity is exactly zero, the scale is
/// non-finite, or the registry holds fewer than two particles; a degenerate
/// thermostat input therefore never reaches particle state.
pub(crate) fn advance(
    registry: &mut ParticleRegistry,
    forcefield: &Forcefield,
    bounds: &SimulationBox,
    physics: &PhysicsConfig,
    paused: bool,
    thermostat_scale: f64,
) {
    if paused {
        for (_, particle) in registry.iter_mut() {
            if !particle.kinematic {
                particle.velocity.fill(0.0);
            }
        }
        return;
    }

    let views = neighbors::snapshot(registry);
    let population = views.len();

    for view in &views {
        if view.kinematic {
            continue;
        }

        let neighbor_set =
            neighbors::neighbors_within(&views, view.id, &view.position, physics.cutoff);
        let increment = forces::velocity_increment(
            view,
            neighbor_set,
            forcefield,
            physics.r_min_multiplier,
        );

        let Some(particle) = registry.particle_mut(view.id) else {
            continue;
        };
        particle.velocity += increment;

        let speed = particle.velocity.norm();
        if speed != 0.0 && thermostat_scale.is_finite() && population > 1 {
            particle.velocity *= thermostat_scale;
        }

        particle.velocity = bounds.reflect_velocity(&particle.position, particle.velocity);
        particle.position += particle.velocity;
    }
}
