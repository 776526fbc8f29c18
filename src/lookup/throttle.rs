use std::time::{Duration, Instant};

/// Time source for the limiter, so tests can drive it manually.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Fixed-window rate limiter for outbound registry calls.
///
/// Grants up to `limit` slots per window; once exhausted, denies until
/// the window that started with the first granted slot has elapsed. The
/// limiter never sleeps itself — a denied caller receives the remaining
/// window time and decides how to wait.
#[derive(Debug, Clone)]
pub struct FixedWindowLimiter<C: Clock = SystemClock> {
    limit: u32,
    window: Duration,
    used: u32,
    window_start: Option<Instant>,
    clock: C,
}

impl FixedWindowLimiter<SystemClock> {
    /// Limiter over an arbitrary window, on wall-clock time.
    pub fn new(limit: u32, window: Duration) -> Self {
        Self::with_clock(limit, window, SystemClock)
    }

    /// Limiter granting `limit` slots per minute.
    pub fn per_minute(limit: u32) -> Self {
        Self::new(limit, Duration::from_secs(60))
    }
}

impl<C: Clock> FixedWindowLimiter<C> {
    /// Limiter with an injected time source.
    pub fn with_clock(limit: u32, window: Duration, clock: C) -> Self {
        Self {
            limit,
            window,
            used: 0,
            window_start: None,
            clock,
        }
    }

    /// Take one slot, or learn how long until the window resets.
    ///
    /// `Err(wait)` means the current window is exhausted; retrying after
    /// `wait` will succeed (absent competing callers).
    pub fn try_acquire(&mut self) -> Result<(), Duration> {
        if self.limit == 0 {
            return Err(self.window);
        }
        let now = self.clock.now();
        if let Some(start) = self.window_start {
            let elapsed = now.duration_since(start);
            if elapsed < self.window {
                if self.used < self.limit {
                    self.used += 1;
                    return Ok(());
                }
                return Err(self.window - elapsed);
            }
        }
        // Fresh window, counting this call.
        self.window_start = Some(now);
        self.used = 1;
        Ok(())
    }

    /// Slots still available in the current window.
    pub fn remaining(&self) -> u32 {
        match self.window_start {
            Some(start) if self.clock.now().duration_since(start) < self.window => {
                self.limit - self.used
            }
            _ => self.limit,
        }
    }
}
