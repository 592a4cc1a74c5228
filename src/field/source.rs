//! Position generators feeding [`ParticleField::populate`](super::ParticleField::populate).
//!
//! Samples are consumed in the fixed order `x0, y0, x1, y1, ...`, so any two
//! sources producing the same sample stream produce the same field.

use ultraviolet::Vec2;

/// Stream of uniform samples on `[0, 1)`.
pub trait PositionSource {
    /// Next sample, or `None` once the source is exhausted.
    fn next_sample(&mut self) -> Option<f32>;

    /// Next position, reading `x` then `y`.
    fn next_position(&mut self) -> Option<Vec2> {
        let x = self.next_sample()?;
        let y = self.next_sample()?;
        Some(Vec2::new(x, y))
    }
}

/// Seeded uniform generator. Never runs dry.
impl PositionSource for fastrand::Rng {
    fn next_sample(&mut self) -> Option<f32> {
        Some(self.f32())
    }
}

/// Generator seeded for a reproducible run.
pub fn seeded(seed: u64) -> fastrand::Rng {
    fastrand::Rng::with_seed(seed)
}

/// Replays a literal sample sequence.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPositions {
    samples: Vec<f32>,
    cursor: usize,
}

impl ScriptedPositions {
    pub fn new(samples: Vec<f32>) -> Self {
        Self { samples, cursor: 0 }
    }

    /// Flatten `(x, y)` points into the `x, y` sample order.
    pub fn from_points(points: &[(f32, f32)]) -> Self {
        Self::new(points.iter().flat_map(|&(x, y)| [x, y]).collect())
    }

    /// Samples handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.samples.len() - self.cursor
    }
}

impl PositionSource for ScriptedPositions {
    fn next_sample(&mut self) -> Option<f32> {
        let sample = self.samples.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(sample)
    }
}
