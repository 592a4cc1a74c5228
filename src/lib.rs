pub mod app;
pub mod config;
pub mod error;
pub mod field;
pub mod forces;
pub mod logging;
pub mod particle;
pub mod profiler;
pub mod units;

pub use error::{Error, Result};
pub use field::{ParticleField, PositionSource, ScriptedPositions};
pub use forces::compute_net_forces;
pub use particle::{NetForce, Particle};

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
