//! Wall-clock timing of a solve.

use std::time::Instant;

/// Stopwatch over a monotonic clock. Starts running on construction.
#[derive(Clone, Copy, Debug)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    /// Reset the reference instant.
    pub fn start(&mut self) {
        self.start = Instant::now();
    }

    /// Milliseconds elapsed since the last `start` (or construction).
    pub fn stop(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn measures_in_milliseconds() {
        let mut t = Timer::new();
        t.start();
        std::thread::sleep(Duration::from_millis(5));
        let ms = t.stop();
        assert!(ms >= 5.0, "elapsed = {}", ms);
        assert!(ms < 5_000.0, "elapsed = {}", ms);
    }

    #[test]
    fn restart_resets_reference() {
        let mut t = Timer::new();
        std::thread::sleep(Duration::from_millis(20));
        t.start();
        assert!(t.stop() < 20.0);
    }
}
