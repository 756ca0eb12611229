use std::num::NonZeroU32;
use std::time::{Duration, Instant};

/// Paces the main loop
pub(crate) trait Clock {
    /// Block until at least `1 / rate` seconds have passed since the previous
    /// call
    fn tick(&mut self, rate: NonZeroU32);
}

/// A [`Clock`] that sleeps the current thread
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    /// Create a clock whose first frame starts now
    pub(crate) fn new() -> FrameClock {
        FrameClock {
            last_tick: Instant::now(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> FrameClock {
        FrameClock::new()
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, rate: NonZeroU32) {
        let wait = frame_period(rate).saturating_sub(self.last_tick.elapsed());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.last_tick = Instant::now();
    }
}

/// Time allotted to each frame when running at `rate` frames per second
fn frame_period(rate: NonZeroU32) -> Duration {
    Duration::from_secs(1) / rate.get()
}

/// A [`Clock`] that returns immediately and counts how often it was called
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct CountingClock {
    pub(crate) ticks: usize,
}

#[cfg(test)]
impl Clock for CountingClock {
    fn tick(&mut self, _rate: NonZeroU32) {
        self.ticks += 1;
    }
}
