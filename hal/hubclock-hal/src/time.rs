//! Monotonic microsecond time source
//!
//! Busy-wait protocol loops need a microsecond counter. The counter is a
//! free-running `u32` that wraps roughly every 71.6 minutes, so elapsed time
//! must always be computed with [`ticks_diff`] rather than plain subtraction.

/// Free-running microsecond counter
pub trait MicrosClock {
    /// Current counter value in microseconds (wraps at `u32::MAX`)
    fn now_us(&self) -> u32;

    /// Microseconds elapsed since `start`, wraparound-safe
    fn elapsed_since(&self, start: u32) -> u32 {
        ticks_diff(self.now_us(), start)
    }
}

/// Wraparound-safe difference between two counter samples
///
/// Valid as long as the real interval is shorter than one counter period.
#[inline]
pub const fn ticks_diff(later: u32, earlier: u32) -> u32 {
    later.wrapping_sub(earlier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_diff_plain() {
        assert_eq!(ticks_diff(150, 100), 50);
        assert_eq!(ticks_diff(100, 100), 0);
    }

    #[test]
    fn test_ticks_diff_across_wrap() {
        // 10 ticks before wrap to 20 ticks after
        assert_eq!(ticks_diff(20, u32::MAX - 9), 30);
    }
}
