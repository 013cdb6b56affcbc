use std::time::{Duration, Instant};

use crate::content::TeamStat;

/// How long a counter takes from zero to its target.
pub const COUNT_DURATION: Duration = Duration::from_millis(2500);

/// Fast start, slow finish.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A team figure with the number currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatView {
    pub target: u32,
    pub value: u32,
    pub suffix: String,
    pub label: String,
}

/// Team figures that count up once the section scrolls into view.
///
/// The animation starts on the first [`StatCounters::on_visible`] only;
/// later visibility changes leave it alone.
#[derive(Debug, Clone)]
pub struct StatCounters<'a> {
    stats: &'a [TeamStat],
    duration: Duration,
    started: Option<Instant>,
}

impl<'a> StatCounters<'a> {
    pub fn new(stats: &'a [TeamStat]) -> Self {
        Self { stats, duration: COUNT_DURATION, started: None }
    }

    /// Returns `true` when this call started the animation.
    pub fn on_visible(&mut self, now: Instant) -> bool {
        if self.started.is_some() {
            return false;
        }
        self.started = Some(now);
        true
    }

    pub fn has_started(&self) -> bool {
        self.started.is_some()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Fraction of the animation elapsed at `now`, 0.0 before it starts.
    pub fn progress(&self, now: Instant) -> f64 {
        match self.started {
            None => 0.0,
            Some(start) => {
                let elapsed = now.saturating_duration_since(start);
                (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
            }
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn values(&self, now: Instant) -> Vec<StatView> {
        let progress = self.progress(now);
        self.stats
            .iter()
            .map(|stat| StatView {
                target: stat.target,
                value: value_at(stat.target, progress),
                suffix: stat.suffix.clone(),
                label: stat.label.clone(),
            })
            .collect()
    }
}

/// Floor of the eased value; the last frame lands exactly on `target`.
fn value_at(target: u32, progress: f64) -> u32 {
    if progress >= 1.0 {
        return target;
    }
    (f64::from(target) * ease_out_cubic(progress)).floor() as u32
}
