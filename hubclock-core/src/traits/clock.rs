//! Real-time clock trait

use crate::time::DateTime;

/// Errors reported by RTC drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RtcError<E> {
    /// Underlying bus transfer failed
    Bus(E),
    /// Registers held values outside the calendar range
    InvalidData,
}

/// Battery-backed calendar clock
#[allow(async_fn_in_trait)]
pub trait RealTimeClock {
    /// Bus error type
    type Error;

    /// Read the current calendar time
    async fn datetime(&mut self) -> Result<DateTime, RtcError<Self::Error>>;

    /// Set the calendar time
    async fn set_datetime(&mut self, dt: &DateTime) -> Result<(), RtcError<Self::Error>>;
}
