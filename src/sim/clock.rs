//! Pausable game clock
//!
//! Gameplay timers (bonus expiry, berzerk decay, enemy spawn cadence, the hit
//! flash) are measured against this clock rather than wall time, so pausing
//! the session suspends every time-dependent effect without losing progress.
//!
//! The clock never reads the system time itself. The host samples wall time
//! once per tick and passes it in, which keeps the simulation deterministic
//! under synthetic timestamps in tests.

/// Accumulates elapsed milliseconds while running; frozen while stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameClock {
    /// Milliseconds accumulated over all completed running spans
    accumulated_ms: u64,
    /// Wall stamp of the last `start`, `None` while stopped
    resumed_at: Option<u64>,
}

impl GameClock {
    /// A fresh, stopped clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin (or resume) counting from the given wall stamp. No-op if running.
    pub fn start(&mut self, wall_ms: u64) {
        if self.resumed_at.is_none() {
            self.resumed_at = Some(wall_ms);
        }
    }

    /// Fold the current running span into the accumulator and freeze.
    /// No-op if already stopped.
    pub fn stop(&mut self, wall_ms: u64) {
        if let Some(resumed) = self.resumed_at.take() {
            self.accumulated_ms += wall_ms.saturating_sub(resumed);
        }
    }

    /// Game-visible elapsed milliseconds.
    ///
    /// Monotonically non-decreasing as long as the caller's wall stamps are.
    pub fn now(&self, wall_ms: u64) -> u64 {
        match self.resumed_at {
            Some(resumed) => self.accumulated_ms + wall_ms.saturating_sub(resumed),
            None => self.accumulated_ms,
        }
    }

    /// Whether the clock is currently counting.
    pub fn is_running(&self) -> bool {
        self.resumed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_clock_reads_zero() {
        let clock = GameClock::new();
        assert_eq!(clock.now(0), 0);
        assert_eq!(clock.now(10_000), 0);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_running_clock_tracks_wall_time() {
        let mut clock = GameClock::new();
        clock.start(1000);
        assert!(clock.is_running());
        assert_eq!(clock.now(1000), 0);
        assert_eq!(clock.now(1750), 750);
    }

    #[test]
    fn test_stop_freezes_and_resume_continues() {
        let mut clock = GameClock::new();
        clock.start(1000);
        clock.stop(1600);
        assert_eq!(clock.now(1600), 600);
        // Frozen across a long pause
        assert_eq!(clock.now(99_000), 600);

        clock.start(100_000);
        assert_eq!(clock.now(100_400), 1000);
    }

    #[test]
    fn test_double_start_and_double_stop_are_noops() {
        let mut clock = GameClock::new();
        clock.start(100);
        clock.start(500); // must not rebase the running span
        assert_eq!(clock.now(600), 500);

        clock.stop(600);
        clock.stop(900); // must not fold a second span
        assert_eq!(clock.now(900), 500);
    }
}
