// Centralized configuration for the surface run

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

// ====================
// Surface Parameters
// ====================
/// Electrons placed on the surface when nothing else is requested.
pub const DEFAULT_PARTICLE_COUNT: usize = 1000;
/// Upper bound accepted for the particle count.
pub const MAX_PARTICLE_COUNT: usize = 2_000_000_000;

// ====================
// Position Generator
// ====================
/// Seed for the position generator. Fixed so runs are reproducible.
pub const DEFAULT_SEED: u64 = 1;

// ====================
// Logging
// ====================
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// What to do when two particles land on the same position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Keep the duplicates. The pair produces an infinite force and the
    /// non-finite values flow through to the report.
    Propagate,
    /// Refuse to populate a field that contains duplicate positions.
    Reject,
}

impl Default for DegeneratePolicy {
    fn default() -> Self {
        DegeneratePolicy::Propagate
    }
}

/// Report shape written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportLayout {
    /// Separator line followed by a three-line block per electron.
    Block,
    /// One line per electron.
    Line,
}

impl Default for ReportLayout {
    fn default() -> Self {
        ReportLayout::Block
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub particle_count: usize,
    pub seed: u64,
    pub degenerate_policy: DegeneratePolicy,
    pub layout: ReportLayout,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            seed: DEFAULT_SEED,
            degenerate_policy: DegeneratePolicy::default(),
            layout: ReportLayout::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl SurfaceConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SurfaceConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the particle count against the same bounds the command line enforces.
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(Error::InvalidCount(
                "Invalid value for option '-n'.".to_string(),
            ));
        }
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(Error::InvalidCount(format!(
                "Value for option '-n' cannot be more than {}.",
                MAX_PARTICLE_COUNT
            )));
        }
        Ok(())
    }
}
