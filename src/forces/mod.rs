//! Electrostatic force calculation for the surface.
//!
//! [`compute_net_forces`] is the single entry point: it takes a populated
//! field, runs the pairwise pass, then resolves every particle's net force.

pub mod angle;
pub mod net;
pub mod pairwise;

pub use angle::{force_angle, Branch, Separation};
pub use net::{net_force, resolve_all, resolve_net_force};
pub use pairwise::{accumulate_all, accumulate_pair, coulomb_magnitude, distance_sq};

use crate::field::ParticleField;

/// Annotate every particle with accumulated force, net magnitude and angle.
pub fn compute_net_forces(mut field: ParticleField) -> ParticleField {
    accumulate_all(&mut field);
    resolve_all(&mut field);
    let non_finite = field.non_finite_count();
    if non_finite > 0 {
        log::warn!(
            "{} of {} electrons carry non-finite forces (coincident positions?)",
            non_finite,
            field.len()
        );
    }
    field
}
