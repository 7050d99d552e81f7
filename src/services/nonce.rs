use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Exclusive upper bound of random nonces.
pub const NONCE_UPPER_BOUND: u64 = 10_000_000_000_000_000;

/// Produces the `nonce` value of each signed request.
pub trait NonceSource: Send + Sync {
    fn next_nonce(&self) -> u64;
}

/// Uniform random nonces from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomNonce;

impl NonceSource for RandomNonce {
    fn next_nonce(&self) -> u64 {
        rand::thread_rng().gen_range(0..NONCE_UPPER_BOUND)
    }
}

/// Strictly increasing nonces starting at a seed.
#[derive(Debug)]
pub struct CounterNonce {
    next: AtomicU64,
}

impl CounterNonce {
    pub fn new(seed: u64) -> Self {
        CounterNonce {
            next: AtomicU64::new(seed),
        }
    }

    /// Seeds the counter from the current time so restarts do not repeat
    /// earlier values.
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::new(clock.now_millis().max(0) as u64)
    }
}

impl NonceSource for CounterNonce {
    fn next_nonce(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// Source of the `timestamp` value of each signed request.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
