//! Periodic spawn timers
//!
//! The host engine offers callback timers; here the firing is folded into
//! the scene's own `update` instead, so a cancelled timer can never call
//! back into a torn-down scene. Timers tick in the order the scene advances
//! them, which is the registration order.

/// A cancelable periodic trigger with a millisecond interval
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTimer {
    interval_ms: f32,
    elapsed_ms: f32,
    active: bool,
}

impl SpawnTimer {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
            active: true,
        }
    }

    /// Advance by one frame's worth of time, returning how many times the
    /// timer fired. Catches up if a frame spans several intervals.
    pub fn advance(&mut self, dt_secs: f32) -> u32 {
        if !self.active {
            return 0;
        }
        self.elapsed_ms += dt_secs * 1000.0;
        let mut fires = 0;
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            fires += 1;
        }
        fires
    }

    /// Stop the timer; a cancelled timer never fires again
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Re-arm from zero elapsed time (scene entry/restart path)
    pub fn restart(&mut self) {
        self.elapsed_ms = 0.0;
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[test]
    fn test_fires_once_per_interval() {
        let mut timer = SpawnTimer::new(1000.0);

        // 59 frames at 60 Hz stay just under one second
        let mut fires = 0;
        for _ in 0..59 {
            fires += timer.advance(SIM_DT);
        }
        assert_eq!(fires, 0);

        // The 60th frame crosses the interval exactly once
        assert_eq!(timer.advance(SIM_DT), 1);
    }

    #[test]
    fn test_catch_up_on_long_frame() {
        let mut timer = SpawnTimer::new(1000.0);
        assert_eq!(timer.advance(2.5), 2);
        // 500ms of credit remains
        assert_eq!(timer.advance(0.5), 1);
    }

    #[test]
    fn test_cancel_and_restart() {
        let mut timer = SpawnTimer::new(1000.0);
        timer.advance(0.9);
        timer.cancel();
        assert!(!timer.is_active());
        assert_eq!(timer.advance(5.0), 0);

        // Restart drops the partially elapsed interval
        timer.restart();
        assert_eq!(timer.advance(0.9), 0);
        assert_eq!(timer.advance(0.2), 1);
    }
}
