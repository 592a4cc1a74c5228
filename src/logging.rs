//! Minimal `log` backend writing to stderr, so stdout carries only the report.

use log::{LevelFilter, Log, Metadata, Record};
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::Result;

pub struct Logger {
    level: LevelFilter,
}

impl Logger {
    /// Install the logger. Unknown level names fall back to `warn`.
    pub fn init(level: &str) -> Result<()> {
        let level = parse_level(level);
        log::set_boxed_logger(Box::new(Logger { level }))?;
        log::set_max_level(level);
        Ok(())
    }
}

pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Warn)
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = io::stderr().lock();
        // Nothing sensible to do if stderr is gone.
        let _ = writeln!(stderr, "{}|{}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
