//! Climate sensor trait

use crate::sensor::SensorReading;

/// Errors that can occur while reading a single-wire climate sensor
///
/// Every variant is transient: the read is discarded and the caller may try
/// again later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor did not pull the line low after the host start signal
    StartSignalNotFound,
    /// Sensor response preamble did not complete
    SignalLowNotFound,
    /// A data bit's high pulse never started
    SignalHighTimeout,
    /// A data bit's high pulse never ended
    SignalLowTimeout,
    /// Frame checksum did not match the payload
    ChecksumMismatch,
}

/// Trait for humidity/temperature sensors
pub trait ClimateSensor {
    /// Perform one blocking measurement
    ///
    /// On failure no reading is produced; the caller keeps whatever value it
    /// held before.
    fn measure(&mut self) -> Result<SensorReading, SensorError>;
}
