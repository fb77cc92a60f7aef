//! Microsecond clock on the embassy time driver

use embassy_time::Instant;
use hubclock_hal::MicrosClock;

/// Low 32 bits of the 1 MHz system timer
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyMicros;

impl MicrosClock for EmbassyMicros {
    #[inline]
    fn now_us(&self) -> u32 {
        Instant::now().as_micros() as u32
    }
}
