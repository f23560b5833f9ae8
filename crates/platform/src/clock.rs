//! Monotonic time source.

use embassy_time::Instant;

/// Monotonic clock read by the script scheduler diagnostics.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Clock backed by the embassy time driver.
///
/// The driver is provided by the board crate on hardware and by
/// `embassy-time/std` on the desktop.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embassy_clock_is_monotonic() {
        let clock = EmbassyClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
