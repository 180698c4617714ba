//! Time source and the leading/trailing throttle for drag-driven recomputes.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Elapsed time since an arbitrary, fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Leading + trailing edge throttle.
///
/// A request after a quiet period runs immediately; requests inside the interval
/// only leave a pending flag, which [`Throttle::poll`] turns into a single run once
/// the interval has elapsed.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_run: Option<Duration>,
    pending: bool,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            pending: false,
        }
    }

    /// `true` when the caller should run now. Otherwise the run is deferred.
    pub fn request(&mut self, now: Duration) -> bool {
        if self.ready(now) {
            true
        } else {
            self.pending = true;
            false
        }
    }

    /// `true` when a deferred run is due.
    pub fn poll(&self, now: Duration) -> bool {
        self.pending && self.ready(now)
    }

    pub fn record_run(&mut self, now: Duration) {
        self.last_run = Some(now);
        self.pending = false;
    }

    pub fn clear_pending(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn reset(&mut self) {
        self.last_run = None;
        self.pending = false;
    }

    fn ready(&self, now: Duration) -> bool {
        self.last_run
            .map_or(true, |last| now.saturating_sub(last) >= self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn first_request_runs_then_burst_is_deferred() {
        let mut t = Throttle::new(16 * MS);
        assert!(t.request(Duration::ZERO));
        t.record_run(Duration::ZERO);

        for i in 1..10 {
            assert!(!t.request(i * MS));
        }
        assert!(t.is_pending());
        assert!(!t.poll(15 * MS));
        assert!(t.poll(16 * MS));
        t.record_run(16 * MS);
        assert!(!t.poll(40 * MS));
    }

    #[test]
    fn zero_interval_never_defers() {
        let mut t = Throttle::new(Duration::ZERO);
        t.record_run(Duration::ZERO);
        assert!(t.request(Duration::ZERO));
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(5 * MS);
        assert_eq!(clock.now(), 5 * MS);
        handle.set(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_secs(1));
    }
}
