// particle/types.rs
// The Particle struct and the write-once net force summary

use ultraviolet::Vec2;

/// Net force on a particle, reduced to magnitude and direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetForce {
    /// Magnitude in newtons, `hypot(fx, fy)`.
    pub magnitude: f32,
    /// Direction in degrees from the positive x axis, counter-clockwise, on `[0, 360)`.
    pub angle_deg: f32,
}

/// An electron on the surface.
///
/// `pos` is fixed at creation. `force` starts at zero and is only touched by
/// the pairwise pass. `net` stays `None` until the net force pass runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub force: Vec2,
    pub net: Option<NetForce>,
}

impl Particle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            force: Vec2::zero(),
            net: None,
        }
    }

    pub fn at(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Net force magnitude, once resolved.
    pub fn net_force(&self) -> Option<f32> {
        self.net.map(|n| n.magnitude)
    }

    /// Net force angle in degrees, once resolved.
    pub fn angle(&self) -> Option<f32> {
        self.net.map(|n| n.angle_deg)
    }

    /// True when any accumulated or derived quantity is `inf` or `NaN`.
    pub fn has_non_finite_force(&self) -> bool {
        let accumulated = !(self.force.x.is_finite() && self.force.y.is_finite());
        let derived = self
            .net
            .map_or(false, |n| !(n.magnitude.is_finite() && n.angle_deg.is_finite()));
        accumulated || derived
    }
}
