// particle/tests.rs

use super::*;
use ultraviolet::Vec2;

#[test]
fn new_particle_starts_with_zero_force_and_no_summary() {
    let p = Particle::at(0.25, 0.75);
    assert_eq!(p.pos, Vec2::new(0.25, 0.75));
    assert_eq!(p.force, Vec2::zero());
    assert!(p.net.is_none());
    assert_eq!(p.net_force(), None);
    assert_eq!(p.angle(), None);
}

#[test]
fn accessors_read_resolved_summary() {
    let mut p = Particle::at(0.1, 0.2);
    p.net = Some(NetForce {
        magnitude: 3.0,
        angle_deg: 45.0,
    });
    assert_eq!(p.x(), 0.1);
    assert_eq!(p.y(), 0.2);
    assert_eq!(p.net_force(), Some(3.0));
    assert_eq!(p.angle(), Some(45.0));
}

#[test]
fn non_finite_force_is_detected() {
    let mut p = Particle::at(0.0, 0.0);
    assert!(!p.has_non_finite_force());
    p.force = Vec2::new(f32::INFINITY, 1.0);
    assert!(p.has_non_finite_force());
    p.force = Vec2::new(1.0, 1.0);
    p.net = Some(NetForce {
        magnitude: f32::NAN,
        angle_deg: 0.0,
    });
    assert!(p.has_non_finite_force());
}
