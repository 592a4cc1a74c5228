//! Pairwise Coulomb accumulation.
//!
//! Every unordered pair `(i, j)` with `i < j` is visited exactly once, outer
//! index ascending and inner index ascending from `i + 1`. Each visit adds the
//! pair force to particle `i` and then subtracts particle `i`'s running total
//! (not the single pair contribution) from particle `j`. Because the order is
//! observable in the low bits of the result, the pass is strictly sequential.

use ultraviolet::Vec2;

use super::angle::force_angle;
use crate::field::ParticleField;
use crate::particle::Particle;
use crate::profile_scope;
use crate::units;

/// Squared distance between two positions.
pub fn distance_sq(a: Vec2, b: Vec2) -> f32 {
    (a.x - b.x) * (a.x - b.x) + (a.y - b.y) * (a.y - b.y)
}

/// Coulomb force magnitude between two electrons `d2` square metres apart.
///
/// `d2 == 0` gives `inf` (or `NaN` for a NaN input); nothing is clamped.
pub fn coulomb_magnitude(d2: f32) -> f32 {
    units::pair_constant() / d2
}

/// Force on `subject` exerted by `source`, as components.
pub fn pair_force(subject: Vec2, source: Vec2) -> Vec2 {
    let magnitude = coulomb_magnitude(distance_sq(subject, source));
    let theta = force_angle(subject, source);
    Vec2::new(theta.cos() * magnitude, theta.sin() * magnitude)
}

/// Accumulate the `(i, j)` interaction into both particles.
///
/// Panics if `i >= j` or `j` is out of bounds.
pub fn accumulate_pair(particles: &mut [Particle], i: usize, j: usize) {
    assert!(i < j, "pair ({i}, {j}) must be ordered with i < j");
    let (head, tail) = particles.split_at_mut(j);
    let subject = &mut head[i];
    let source = &mut tail[0];

    subject.force += pair_force(subject.pos, source.pos);
    // Reaction uses the subject's running total.
    source.force -= subject.force;
}

/// Run the full pairwise pass over the field.
pub fn accumulate_all(field: &mut ParticleField) {
    profile_scope!("pairwise");
    let particles = field.as_mut_slice();
    let n = particles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            accumulate_pair(particles, i, j);
        }
    }
    log::debug!(
        "accumulated {} pair interactions",
        n * n.saturating_sub(1) / 2
    );
}
