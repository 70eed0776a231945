use std::time::{Duration, Instant};

/// An accumulating stopwatch.
#[derive(Debug, Default)]
pub struct Timer {
    elapsed: Duration,
    last_start: Option<Instant>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the accumulated time.
    pub fn reset(&mut self) {
        self.elapsed = Duration::default();
    }

    pub fn start(&mut self) {
        self.last_start = Some(Instant::now());
    }

    /// Adds the time since the last `start` to the total.  Does nothing if the timer is
    /// not running.
    pub fn stop(&mut self) {
        if let Some(start) = self.last_start.take() {
            self.elapsed += start.elapsed();
        }
    }

    /// The accumulated time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Runs `f` with the timer running.
    pub fn time<R>(&mut self, f: impl FnOnce() -> R) -> R {
        self.start();
        let result = f();
        self.stop();
        result
    }
}
