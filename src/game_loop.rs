use std::time::{Duration, Instant};

/// How long to wait for input while no ticks are scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Fixed-period tick schedule.
///
/// Holds at most one schedule: `start` replaces whatever was running, so two
/// timers can never drive the same game.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Ticker {
            period,
            next_due: None,
        }
    }

    /// (Re)start ticking; the first tick is one period from `now`
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// True if a tick is due at `now`. Yields at most one tick per call: a
    /// late caller skips the missed periods and keeps the original phase.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let behind = now.duration_since(due).as_nanos();
                let missed = behind / self.period.as_nanos().max(1);
                let skip = u32::try_from(missed).unwrap_or(u32::MAX - 1) + 1;
                self.next_due = Some(due + self.period * skip);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, for bounding an input wait
    pub fn timeout(&self, now: Instant) -> Duration {
        match self.next_due {
            Some(due) => due.saturating_duration_since(now),
            None => IDLE_POLL,
        }
    }
}
