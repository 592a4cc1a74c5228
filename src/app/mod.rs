//! The benchmark harness around the force kernel: options, config, report.

use std::io::{self, BufWriter, Write};

use crate::config::{ReportLayout, SurfaceConfig};
use crate::error::Result;
use crate::field::{self, ParticleField};
use crate::forces;
use crate::logging::Logger;

pub mod args;
pub mod report;

pub use args::Args;

/// Parse the process arguments and run.
pub fn run() -> Result<()> {
    run_with_args(std::env::args().skip(1))
}

pub fn run_with_args<I>(raw: I) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    let args = args::parse(raw)?;
    if args.help {
        print!("{}", args::USAGE);
        return Ok(());
    }

    let config = resolve_config(&args)?;
    let level = if args.verbose { "debug" } else { config.log_level.as_str() };
    Logger::init(level)?;
    log::info!(
        "placing {} electrons (seed {}, {:?} on coincident positions)",
        config.particle_count,
        config.seed,
        config.degenerate_policy
    );

    let surface = simulate(&config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report::write_report(&mut out, &surface, config.layout)?;
    out.flush()?;

    #[cfg(feature = "profiling")]
    crate::PROFILER.lock().log_and_clear();

    Ok(())
}

/// Populate a seeded surface and resolve every electron.
pub fn simulate(config: &SurfaceConfig) -> Result<ParticleField> {
    let mut rng = field::seeded(config.seed);
    let surface = ParticleField::populate(
        config.particle_count,
        &mut rng,
        config.degenerate_policy,
    )?;
    Ok(forces::compute_net_forces(surface))
}

/// Config file (or defaults) with command-line overrides applied.
pub fn resolve_config(args: &Args) -> Result<SurfaceConfig> {
    let mut config = match &args.config_path {
        Some(path) => SurfaceConfig::load_from_file(path)?,
        None => SurfaceConfig::default(),
    };
    if let Some(count) = args.count {
        config.particle_count = count;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.line_layout {
        config.layout = ReportLayout::Line;
    }
    config.validate()?;
    Ok(config)
}
