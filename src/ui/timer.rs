use std::time::{Duration, Instant};

/// One-shot timer owned by the component that arms it.
///
/// There is no background thread: the owner polls with [`Timeout::fire`]
/// and the timer reports `true` exactly once, on the first poll at or after
/// its deadline. Re-arming replaces the previous deadline, so a component
/// never has two pending callbacks for the same timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Timeout {
    pub const fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Repeating timer with a fixed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next: Option<Instant>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        // A zero period would make `ticks` spin forever.
        let period = period.max(Duration::from_millis(1));
        Self { period, next: None }
    }

    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    /// Clear the running schedule and start a fresh one from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.stop();
        self.start(now);
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of periods that elapsed up to `now`; consumes them.
    pub fn ticks(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next else {
            return 0;
        };
        let mut count = 0;
        while now >= next {
            count += 1;
            next += self.period;
        }
        self.next = Some(next);
        count
    }
}
