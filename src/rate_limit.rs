use crate::error::AppError;
use governor::clock::{Clock, DefaultClock, Reference};
use log::debug;
use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

/// At most `max_calls` calls within any trailing `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitRule {
    pub max_calls: usize,
    pub window: Duration,
}

impl RateLimitRule {
    pub fn new(max_calls: usize, window: Duration) -> Self {
        RateLimitRule { max_calls, window }
    }

    /// Development key limits: 20 req/sec, 100 req/2min.
    pub fn riot_defaults() -> Vec<RateLimitRule> {
        vec![
            RateLimitRule::new(20, Duration::from_secs(1)),
            RateLimitRule::new(100, Duration::from_secs(120)),
        ]
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.max_calls == 0 {
            return Err(AppError::InvalidRateLimitRule(
                "max_calls must be at least 1".to_string(),
            ));
        }
        if self.window.is_zero() {
            return Err(AppError::InvalidRateLimitRule(
                "window must be longer than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Sliding-window limiter over a set of independent rules.
///
/// Every call is timestamped; a new call is delayed until each rule would
/// still hold after it. Not thread safe: callers go through `&mut self`.
pub struct RateLimiter<C: Clock = DefaultClock> {
    rules: Vec<RateLimitRule>,
    history: VecDeque<C::Instant>,
    longest_window: Duration,
    clock: C,
    sleep: Box<dyn Fn(Duration)>,
}

impl RateLimiter<DefaultClock> {
    pub fn new(rules: Vec<RateLimitRule>) -> Result<Self, AppError> {
        RateLimiter::with_clock(rules, DefaultClock::default(), Box::new(thread::sleep))
    }
}

impl<C: Clock> RateLimiter<C> {
    /// Builds a limiter on a custom clock. `sleep` must advance `clock` by
    /// (at least) the requested duration.
    pub fn with_clock(
        rules: Vec<RateLimitRule>,
        clock: C,
        sleep: Box<dyn Fn(Duration)>,
    ) -> Result<Self, AppError> {
        if rules.is_empty() {
            return Err(AppError::InvalidRateLimitRule(
                "at least one rule is required".to_string(),
            ));
        }
        for rule in &rules {
            rule.validate()?;
        }

        let longest_window = rules.iter().map(|r| r.window).max().unwrap_or_default();

        Ok(RateLimiter {
            rules,
            history: VecDeque::new(),
            longest_window,
            clock,
            sleep,
        })
    }

    /// Waits for a free slot, then runs `f`.
    pub fn call<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.acquire();
        f()
    }

    /// Blocks until a call is allowed under every rule and records it.
    /// Returns the total time spent sleeping.
    pub fn acquire(&mut self) -> Duration {
        let mut waited = Duration::ZERO;

        loop {
            let now = self.clock.now();
            self.prune(now);

            let wait = self.required_wait(now);
            if wait.is_zero() {
                self.history.push_back(now);
                return waited;
            }

            debug!("rate limiter sleeping for {:?}", wait);
            (self.sleep)(wait);
            waited += wait;
        }
    }

    fn elapsed(now: C::Instant, earlier: C::Instant) -> Duration {
        Duration::from(now.duration_since(earlier))
    }

    // Drops calls that no rule can see anymore.
    fn prune(&mut self, now: C::Instant) {
        while let Some(&oldest) = self.history.front() {
            if Self::elapsed(now, oldest) >= self.longest_window {
                self.history.pop_front();
            } else {
                break;
            }
        }
    }

    fn required_wait(&self, now: C::Instant) -> Duration {
        self.rules
            .iter()
            .filter_map(|rule| {
                // History is oldest first, so calls inside the window form a suffix.
                let in_window = self
                    .history
                    .iter()
                    .rev()
                    .take_while(|&&t| Self::elapsed(now, t) < rule.window)
                    .count();

                if in_window < rule.max_calls {
                    return None;
                }

                // The call that has to leave the window before one more fits.
                let start = self.history.len() - in_window;
                let blocking = self.history[start + in_window - rule.max_calls];
                Some(rule.window - Self::elapsed(now, blocking))
            })
            .max()
            .unwrap_or(Duration::ZERO)
    }
}
