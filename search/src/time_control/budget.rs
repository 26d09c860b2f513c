use std::time::{Duration, Instant};

use crate::SearchConfig;

/// Wall-clock allowance for one move decision.
///
/// Two thresholds share the same start instant: past the target no new
/// iteration is started, past the hard limit a running one is abandoned.
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    start: Instant,
    target: Duration,
    hard: Duration,
}

impl TimeBudget {
    pub fn new(think_time: Duration, config: &SearchConfig) -> Self {
        Self {
            start: Instant::now(),
            target: think_time.mul_f64(config.soft_limit),
            hard: think_time.mul_f64(config.hard_limit),
        }
    }

    /// No deadline at all. Used for fixed-depth searches.
    pub fn infinite() -> Self {
        Self {
            start: Instant::now(),
            target: Duration::MAX,
            hard: Duration::MAX,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    pub fn hard(&self) -> Duration {
        self.hard
    }

    #[inline(always)]
    pub fn target_reached(&self) -> bool {
        self.elapsed() >= self.target
    }

    #[inline(always)]
    pub fn hard_limit_reached(&self) -> bool {
        self.elapsed() >= self.hard
    }
}
