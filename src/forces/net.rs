//! Reduce accumulated force components to magnitude and direction.

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use ultraviolet::Vec2;

use crate::field::ParticleField;
use crate::particle::{NetForce, Particle};
use crate::profile_scope;

/// Direction in radians of an accumulated force, on `[0, 2π)`.
///
/// A zero x component always yields `π/2`, whatever the sign of `fy`. A
/// downward force with `fx == 0` therefore reports 90° rather than 270°.
pub fn raw_angle(force: Vec2) -> f32 {
    let mut angle = if force.x == 0.0 {
        FRAC_PI_2
    } else {
        force.y.atan2(force.x)
    };
    if angle < 0.0 {
        angle += TAU;
    }
    angle
}

/// Net force magnitude and direction in degrees.
///
/// `hypot` keeps the magnitude finite where squaring either component would
/// overflow, and nonzero where squaring would underflow. Non-finite inputs
/// propagate.
pub fn net_force(force: Vec2) -> NetForce {
    let magnitude = force.x.hypot(force.y);
    let mut angle_deg = raw_angle(force) * 180.0 / PI;
    // Angles just below 2π round up to exactly 360 in single precision.
    if angle_deg >= 360.0 {
        angle_deg -= 360.0;
    }
    NetForce {
        magnitude,
        angle_deg,
    }
}

pub fn resolve_net_force(particle: &mut Particle) {
    particle.net = Some(net_force(particle.force));
}

/// Resolve every particle. Runs after the pairwise pass has finished.
pub fn resolve_all(field: &mut ParticleField) {
    profile_scope!("net_force");
    for particle in field.as_mut_slice() {
        resolve_net_force(particle);
    }
}
