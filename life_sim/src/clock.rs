// clock.rs - Elapsed simulation time shown in the info panel

use std::time::{Duration, Instant};

/// Stopwatch that only advances while the simulation runs.
/// Instants are passed in so callers control the time source.
#[derive(Debug, Default, Clone)]
pub struct SimulationClock {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    pub fn stop(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += now.saturating_duration_since(since);
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.running_since = None;
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + now.saturating_duration_since(since),
            None => self.accumulated,
        }
    }
}

/// `HH:MM:SS`, hours keep growing past 99.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
