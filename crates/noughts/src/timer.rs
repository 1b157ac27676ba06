//! Elapsed-time tracking for a game, driven by an injected tick scheduler.

use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Whole seconds elapsed in the current game.
///
/// The timer never reads a clock itself: it advances one second per
/// [`tick`](SessionTimer::tick) while running. Ticks arrive through a
/// [`TickScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionTimer {
    elapsed: u64,
    running: bool,
}

impl SessionTimer {
    /// Creates a stopped timer at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting from zero. Does nothing if already running.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.elapsed = 0;
        self.running = true;
        debug!("Timer started");
    }

    /// Freezes the current count. Does nothing if already stopped.
    #[instrument(skip(self), fields(elapsed = self.elapsed))]
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        debug!("Timer stopped");
    }

    /// Sets the count to zero without starting or stopping.
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }

    /// One second passed; counts only while running.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed += 1;
        }
    }

    /// Seconds counted so far.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed
    }

    /// Returns true while counting.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed time as `MM:SS`; minutes keep growing past 99.
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.elapsed / 60, self.elapsed % 60)
    }
}

/// Source of once-per-second ticks.
///
/// The host event loop calls [`on_tick`](TickScheduler::on_tick) whenever it
/// is idle; the scheduler invokes `callback` once for every tick that has
/// come due since the last call. Callbacks run on the caller's thread, so
/// they never overlap a move.
pub trait TickScheduler {
    /// Runs `callback` once per due tick.
    fn on_tick(&mut self, callback: &mut dyn FnMut());

    /// Restarts the tick phase, e.g. when a new game begins.
    fn resync(&mut self) {}
}

/// Wall-clock scheduler firing every `period`.
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    period: Duration,
    next_due: Instant,
}

impl IntervalScheduler {
    /// Creates a scheduler whose first tick is one `period` from now.
    ///
    /// A zero period is raised to one millisecond.
    pub fn new(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: Instant::now() + period,
        }
    }

    /// One tick per second.
    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Tick period.
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickScheduler for IntervalScheduler {
    fn on_tick(&mut self, callback: &mut dyn FnMut()) {
        let now = Instant::now();
        while now >= self.next_due {
            callback();
            self.next_due += self.period;
        }
    }

    fn resync(&mut self) {
        self.next_due = Instant::now() + self.period;
    }
}

/// Scheduler that fires only when told to; for tests and headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualScheduler {
    pending: u64,
}

impl ManualScheduler {
    /// Creates a scheduler with no pending ticks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `ticks` ticks for the next [`on_tick`](TickScheduler::on_tick).
    pub fn advance(&mut self, ticks: u64) {
        self.pending += ticks;
    }
}

impl TickScheduler for ManualScheduler {
    fn on_tick(&mut self, callback: &mut dyn FnMut()) {
        for _ in 0..std::mem::take(&mut self.pending) {
            callback();
        }
    }

    fn resync(&mut self) {
        self.pending = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_ignored_until_started() {
        let mut timer = SessionTimer::new();
        timer.tick();
        assert_eq!(timer.elapsed_seconds(), 0);
        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.elapsed_seconds(), 2);
    }

    #[test]
    fn test_start_is_idempotent_while_running() {
        let mut timer = SessionTimer::new();
        timer.start();
        timer.tick();
        timer.start();
        assert_eq!(timer.elapsed_seconds(), 1);
        assert!(timer.is_running());
    }

    #[test]
    fn test_stop_freezes_count() {
        let mut timer = SessionTimer::new();
        timer.start();
        timer.tick();
        timer.stop();
        timer.stop();
        timer.tick();
        assert_eq!(timer.elapsed_seconds(), 1);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_reset_keeps_running_state() {
        let mut timer = SessionTimer::new();
        timer.start();
        timer.tick();
        timer.reset();
        assert_eq!(timer.elapsed_seconds(), 0);
        assert!(timer.is_running());

        timer.stop();
        timer.reset();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_clock_format() {
        let mut timer = SessionTimer::new();
        timer.start();
        for _ in 0..75 {
            timer.tick();
        }
        assert_eq!(timer.clock(), "01:15");
    }

    #[test]
    fn test_manual_scheduler_drains_pending() {
        let mut scheduler = ManualScheduler::new();
        scheduler.advance(3);
        let mut fired = 0;
        scheduler.on_tick(&mut || fired += 1);
        scheduler.on_tick(&mut || fired += 1);
        assert_eq!(fired, 3);
    }

    #[test]
    fn test_interval_scheduler_not_due_immediately() {
        let mut scheduler = IntervalScheduler::new(Duration::from_secs(60));
        let mut fired = 0;
        scheduler.on_tick(&mut || fired += 1);
        assert_eq!(fired, 0);
        assert_eq!(scheduler.period(), Duration::from_secs(60));
    }

    #[test]
    fn test_interval_scheduler_catches_up() {
        let mut scheduler = IntervalScheduler::new(Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(5));
        let mut fired = 0;
        scheduler.on_tick(&mut || fired += 1);
        assert!(fired >= 4, "fired {fired} times");
    }
}
