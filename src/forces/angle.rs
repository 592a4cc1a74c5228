//! Direction of the force one electron exerts on another.
//!
//! Both charges are negative, so the force on the subject points away from the
//! source along the line joining them. The direction is built from
//! `α = atan(|Δy/Δx|)` and a case split over where the source sits relative to
//! the subject. The case split is spelled out as [`Separation`] so every
//! boundary assignment is visible and testable on its own.

use std::cmp::Ordering;
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use ultraviolet::Vec2;

/// Where the source sits relative to the subject, from the signs of
/// `Δx = source.x − subject.x` and `Δy = source.y − subject.y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Separation {
    /// `Δx > 0, Δy = 0`
    PositiveX,
    /// `Δx < 0, Δy = 0`
    NegativeX,
    /// `Δx = 0, Δy > 0`
    PositiveY,
    /// `Δx = 0, Δy < 0`
    NegativeY,
    /// `Δx > 0, Δy > 0`
    First,
    /// `Δx < 0, Δy > 0`
    Second,
    /// `Δx < 0, Δy < 0`
    Third,
    /// `Δx > 0, Δy < 0`
    Fourth,
    /// `Δx = 0, Δy = 0`
    Coincident,
    /// Either delta is NaN.
    Undefined,
}

/// How `α` turns into the final angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Branch {
    /// `α`
    Alpha,
    /// `π − α`
    PiMinusAlpha,
    /// `π + α`
    PiPlusAlpha,
    /// `2π − α`
    TwoPiMinusAlpha,
}

impl Separation {
    pub fn classify(dx: f32, dy: f32) -> Self {
        use Ordering::*;
        use Separation::*;
        match (dx.partial_cmp(&0.0), dy.partial_cmp(&0.0)) {
            (Some(Greater), Some(Equal)) => PositiveX,
            (Some(Less), Some(Equal)) => NegativeX,
            (Some(Equal), Some(Greater)) => PositiveY,
            (Some(Equal), Some(Less)) => NegativeY,
            (Some(Greater), Some(Greater)) => First,
            (Some(Less), Some(Greater)) => Second,
            (Some(Less), Some(Less)) => Third,
            (Some(Greater), Some(Less)) => Fourth,
            (Some(Equal), Some(Equal)) => Coincident,
            (None, _) | (_, None) => Undefined,
        }
    }

    pub fn between(subject: Vec2, source: Vec2) -> Self {
        Self::classify(source.x - subject.x, source.y - subject.y)
    }

    /// Branch taken for this separation.
    ///
    /// Coincident and undefined separations fall through to `2π − α` along
    /// with the upper-left cases.
    pub fn branch(self) -> Branch {
        use Separation::*;
        match self {
            NegativeX | Third => Branch::Alpha,
            NegativeY | Fourth => Branch::PiMinusAlpha,
            PositiveX | First => Branch::PiPlusAlpha,
            PositiveY | Second | Coincident | Undefined => Branch::TwoPiMinusAlpha,
        }
    }
}

impl Branch {
    pub fn apply(self, alpha: f32) -> f32 {
        match self {
            Branch::Alpha => alpha,
            Branch::PiMinusAlpha => PI - alpha,
            Branch::PiPlusAlpha => PI + alpha,
            Branch::TwoPiMinusAlpha => TAU - alpha,
        }
    }
}

/// Acute reference angle `atan(|Δy/Δx|)`, or `π/2` on a vertical line.
pub fn reference_angle(dx: f32, dy: f32) -> f32 {
    if dx == 0.0 {
        FRAC_PI_2
    } else {
        (dy / dx).abs().atan()
    }
}

/// Angle in radians of the force on `subject` exerted by `source`, measured
/// counter-clockwise from the positive x axis on `[0, 2π)`.
pub fn force_angle(subject: Vec2, source: Vec2) -> f32 {
    let dx = source.x - subject.x;
    let dy = source.y - subject.y;
    let alpha = reference_angle(dx, dy);
    Separation::classify(dx, dy).branch().apply(alpha)
}
