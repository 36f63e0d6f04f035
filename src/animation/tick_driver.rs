// src/animation/tick_driver.rs
//
// Fixed-cadence tick source. Instead of owning a wall-clock timer the driver
// accumulates frame time and reports how many ticks are due, so the owner
// decides when ticks run and tests can drive it by hand.

use std::time::Duration;

pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(30);

// Caps how many ticks a single long frame can release.
const MAX_TICKS_PER_FRAME: u32 = 10;

#[derive(Debug, Clone)]
pub struct TickDriver {
    period: f32,
    frame_timer: f32,
    running: bool,
    ticks: u64,
}

impl Default for TickDriver {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD)
    }
}

impl TickDriver {
    pub fn new(period: Duration) -> Self {
        debug_assert!(!period.is_zero(), "tick period must be non-zero");
        Self {
            period: period.as_secs_f32(),
            frame_timer: 0.0,
            running: false,
            ticks: 0,
        }
    }

    /// Returns true if the driver was stopped and is now running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.frame_timer = 0.0;
        log::debug!("tick driver started");
        true
    }

    /// Returns true if the driver was running and is now stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.frame_timer = 0.0;
        log::debug!("tick driver stopped after {} ticks", self.ticks);
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Feeds elapsed frame time in seconds and returns the number of ticks due.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.running || dt <= 0.0 {
            return 0;
        }
        self.frame_timer += dt;
        let mut due = 0;
        while self.frame_timer >= self.period && due < MAX_TICKS_PER_FRAME {
            self.frame_timer -= self.period;
            due += 1;
        }
        if due == MAX_TICKS_PER_FRAME {
            // drop the backlog after a stall
            self.frame_timer = 0.0;
        }
        self.ticks += due as u64;
        due
    }

    /// Total ticks released since creation.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_driver_releases_nothing() {
        let mut driver = TickDriver::default();
        assert!(!driver.is_running());
        assert_eq!(driver.advance(1.0), 0);
        assert_eq!(driver.tick_count(), 0);
    }

    #[test]
    fn test_start_and_stop_are_idempotent() {
        let mut driver = TickDriver::default();
        assert!(driver.start());
        assert!(!driver.start());
        assert!(driver.is_running());
        assert!(driver.stop());
        assert!(!driver.stop());
        assert!(!driver.is_running());
    }

    #[test]
    fn test_ticks_follow_fixed_period() {
        let mut driver = TickDriver::new(Duration::from_millis(30));
        driver.start();
        assert_eq!(driver.advance(0.020), 0);
        assert_eq!(driver.advance(0.020), 1);
        assert_eq!(driver.advance(0.065), 2);
        assert_eq!(driver.tick_count(), 3);
    }

    #[test]
    fn test_restart_discards_partial_period() {
        let mut driver = TickDriver::new(Duration::from_millis(30));
        driver.start();
        driver.advance(0.025);
        driver.stop();
        driver.start();
        assert_eq!(driver.advance(0.010), 0);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut driver = TickDriver::new(Duration::from_millis(30));
        driver.start();
        assert_eq!(driver.advance(5.0), MAX_TICKS_PER_FRAME);
        assert_eq!(driver.advance(0.001), 0);
    }
}
