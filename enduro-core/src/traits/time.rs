//! Monotonic clock and sleep primitive
//!
//! Every wait in the test sequence (slew tick, dwell, burst window,
//! coast gap, cooldown) goes through this trait, so phase timing can be
//! unit-tested against a fake clock without real wall-clock waits.

/// Monotonic milliseconds plus a bounded blocking sleep
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin; never goes backwards
    fn now_ms(&self) -> u64;

    /// Sleep for `ms` milliseconds
    fn sleep_ms(&mut self, ms: u32);

    /// Absolute deadline `ms` milliseconds from now
    fn deadline_ms(&self, ms: u32) -> u64 {
        self.now_ms() + ms as u64
    }
}
