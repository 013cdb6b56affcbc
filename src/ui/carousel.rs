use std::time::{Duration, Instant};

use super::timer::Interval;

pub const AUTOPLAY_PERIOD: Duration = Duration::from_millis(5000);

/// Navigation dot under the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub is_active: bool,
}

/// Testimonial carousel with a single active slide and autoplay.
///
/// Dots are derived from the index on every read, so exactly one of them
/// is active at any time.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: Interval,
}

impl Carousel {
    /// Returns `None` when there are no slides; the page then has no carousel.
    pub fn new(len: usize, now: Instant) -> Option<Self> {
        Self::with_period(len, AUTOPLAY_PERIOD, now)
    }

    pub fn with_period(len: usize, period: Duration, now: Instant) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let mut autoplay = Interval::new(period);
        autoplay.start(now);
        Some(Self { len, index: 0, autoplay })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn dots(&self) -> Vec<Dot> {
        (0..self.len)
            .map(|index| Dot { index, is_active: index == self.index })
            .collect()
    }

    /// Horizontal track offset in percent of one slide width.
    pub fn offset_percent(&self) -> usize {
        self.index * 100
    }

    /// Advance once for every autoplay period elapsed up to `now`.
    pub fn tick(&mut self, now: Instant) -> u32 {
        let ticks = self.autoplay.ticks(now);
        for _ in 0..ticks {
            self.advance();
        }
        ticks
    }

    fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Show slide `index` and restart autoplay. Out-of-range is a no-op.
    pub fn jump_to(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.autoplay.restart(now);
        true
    }

    pub fn next(&mut self, now: Instant) {
        let target = (self.index + 1) % self.len;
        self.jump_to(target, now);
    }

    pub fn prev(&mut self, now: Instant) {
        let target = (self.index + self.len - 1) % self.len;
        self.jump_to(target, now);
    }

    pub fn is_playing(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn teardown(&mut self) {
        self.autoplay.stop();
    }
}
