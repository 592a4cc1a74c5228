//! The particle field: an ordered, fixed-size set of electrons on the unit square.
//!
//! The field owns every [`Particle`]. The pairwise pass borrows it mutably as a
//! whole for its duration; the net force pass and the report read it afterwards.

mod source;

pub use source::{seeded, PositionSource, ScriptedPositions};

use std::collections::HashMap;
use std::ops::{Index, IndexMut};
use ultraviolet::Vec2;

use crate::config::DegeneratePolicy;
use crate::error::{Error, Result};
use crate::particle::Particle;
use crate::profile_scope;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Place `count` electrons using positions drawn from `source`.
    ///
    /// Forces start at zero. Duplicate positions are kept under
    /// [`DegeneratePolicy::Propagate`] and refused under [`DegeneratePolicy::Reject`].
    pub fn populate<S: PositionSource + ?Sized>(
        count: usize,
        source: &mut S,
        policy: DegeneratePolicy,
    ) -> Result<Self> {
        profile_scope!("populate");
        let mut particles = Vec::with_capacity(count);
        for i in 0..count {
            let pos = source.next_position().ok_or_else(|| Error::SourceExhausted {
                requested: 2 * count,
                supplied: 2 * i,
            })?;
            particles.push(Particle::new(pos));
        }
        let field = Self { particles };
        if policy == DegeneratePolicy::Reject {
            field.check_distinct()?;
        }
        log::debug!("populated surface with {} electrons", field.len());
        Ok(field)
    }

    /// Build a field from literal positions.
    pub fn from_positions<I>(positions: I, policy: DegeneratePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (f32, f32)>,
    {
        let field = Self {
            particles: positions
                .into_iter()
                .map(|(x, y)| Particle::at(x, y))
                .collect(),
        };
        if policy == DegeneratePolicy::Reject {
            field.check_distinct()?;
        }
        Ok(field)
    }

    /// Fail on the first pair of particles sharing a position.
    fn check_distinct(&self) -> Result<()> {
        let mut seen: HashMap<(u32, u32), usize> = HashMap::with_capacity(self.len());
        for (i, p) in self.particles.iter().enumerate() {
            // Adding +0.0 folds -0.0 onto +0.0 so both hash alike.
            let key = ((p.pos.x + 0.0).to_bits(), (p.pos.y + 0.0).to_bits());
            if let Some(&first) = seen.get(&key) {
                return Err(Error::DuplicatePosition {
                    first,
                    second: i,
                    x: p.pos.x,
                    y: p.pos.y,
                });
            }
            seen.insert(key, i);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Number of particles; fixed at creation.
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.particles.iter().map(|p| p.pos)
    }

    /// True when the net force pass has run over every particle.
    pub fn is_resolved(&self) -> bool {
        self.particles.iter().all(|p| p.net.is_some())
    }

    pub fn non_finite_count(&self) -> usize {
        self.particles
            .iter()
            .filter(|p| p.has_non_finite_force())
            .count()
    }
}

impl Index<usize> for ParticleField {
    type Output = Particle;

    fn index(&self, index: usize) -> &Particle {
        &self.particles[index]
    }
}

impl IndexMut<usize> for ParticleField {
    fn index_mut(&mut self, index: usize) -> &mut Particle {
        &mut self.particles[index]
    }
}

impl<'a> IntoIterator for &'a ParticleField {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests;
