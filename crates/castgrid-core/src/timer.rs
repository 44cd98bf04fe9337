//! Monotonic whole-second session clock. Purely informational; the timer
//! never affects gameplay.

use std::time::{Duration, Instant};

/// Format whole seconds as zero-padded "MM:SS".
pub fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Counts elapsed seconds while running; freezes on stop.
#[derive(Debug, Clone)]
pub struct Timer {
    /// Set while the timer is running.
    started_at: Option<Instant>,
    /// Time accumulated before the current run segment.
    accumulated: Duration,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// A zeroed timer that is not running.
    pub fn new() -> Self {
        Self {
            started_at: None,
            accumulated: Duration::ZERO,
        }
    }

    /// Zero the counter and begin counting.
    pub fn start(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = Some(Instant::now());
    }

    /// Freeze the counter at its current value.
    pub fn stop(&mut self) {
        if let Some(started) = self.started_at.take() {
            self.accumulated += started.elapsed();
        }
    }

    /// Zero the counter without starting it.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started) => self.accumulated + started.elapsed(),
            None => self.accumulated,
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// Render the counter as "MM:SS".
    pub fn format(&self) -> String {
        format_time(self.elapsed_secs())
    }
}
