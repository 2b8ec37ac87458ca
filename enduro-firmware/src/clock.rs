//! Clock over the embassy time driver

use embassy_time::{block_for, Duration, Instant};

use enduro_core::traits::Clock;

/// Millisecond clock backed by the embassy time driver
///
/// Sleeps are blocking; the stress task is the only thing this core
/// runs, so holding the executor during a dwell is acceptable.
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    fn sleep_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
