use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Cumulative wall time and entry count for one named section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionTiming {
    pub total: Duration,
    pub calls: u32,
}

/// Scoped profiler recording cumulative time per kernel phase.
#[derive(Debug, Default)]
pub struct Profiler {
    sections: HashMap<&'static str, SectionTiming>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &'static str, elapsed: Duration) {
        let entry = self.sections.entry(name).or_default();
        entry.total += elapsed;
        entry.calls += 1;
    }

    pub fn finish(&mut self, guard: &ProfilerGuard) {
        self.record(guard.name, guard.start.elapsed());
    }

    pub fn get(&self, name: &str) -> Option<SectionTiming> {
        self.sections.get(name).copied()
    }

    /// Sections ordered by total time, slowest first.
    pub fn report_sorted(&self) -> Vec<(&'static str, SectionTiming)> {
        let mut v: Vec<_> = self.sections.iter().map(|(n, t)| (*n, *t)).collect();
        v.sort_by(|a, b| b.1.total.cmp(&a.1.total).then(a.0.cmp(b.0)));
        v
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    pub fn log_and_clear(&mut self) {
        for (name, timing) in self.report_sorted() {
            log::info!("{:<12} {:>12?} ({} calls)", name, timing.total, timing.calls);
        }
        self.clear();
    }
}

pub struct ProfilerGuard {
    name: &'static str,
    start: Instant,
}

/// Start a profiling section. With the `profiling` feature the guard reports
/// into the global profiler when dropped.
pub fn start(name: &'static str) -> ProfilerGuard {
    ProfilerGuard {
        name,
        start: Instant::now(),
    }
}

#[cfg(feature = "profiling")]
impl Drop for ProfilerGuard {
    fn drop(&mut self) {
        crate::PROFILER.lock().finish(self);
    }
}

/// Profile the enclosing scope when the `profiling` feature is enabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _guard = $crate::profiler::start($name);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accumulates_time_and_calls() {
        let mut p = Profiler::new();
        p.record("pairwise", Duration::from_millis(3));
        p.record("pairwise", Duration::from_millis(2));
        p.record("net_force", Duration::from_millis(1));
        let pairwise = p.get("pairwise").unwrap();
        assert_eq!(pairwise.total, Duration::from_millis(5));
        assert_eq!(pairwise.calls, 2);
        assert!(p.get("populate").is_none());
    }

    #[test]
    fn report_lists_slowest_first() {
        let mut p = Profiler::new();
        p.record("populate", Duration::from_micros(10));
        p.record("pairwise", Duration::from_millis(8));
        p.record("net_force", Duration::from_micros(40));
        let names: Vec<_> = p.report_sorted().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["pairwise", "net_force", "populate"]);
        p.clear();
        assert!(p.report_sorted().is_empty());
    }
}
