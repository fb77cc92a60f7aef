//! DHT11/DHT22 single-wire sensor
//!
//! One read is a host-initiated handshake followed by 40 pulse-width coded
//! bits:
//!
//! ```text
//! host:   ‾‾‾\________________/‾‾‾‾ (release, input)
//!              >= 18 ms         40 us
//! sensor:                        \____/‾‾‾‾\__/‾‾\__/‾‾‾‾‾\ ...
//!                                 80us  80us  bit  bit
//! ```
//!
//! Each bit is a ~50 us low followed by a high whose length encodes the
//! value: ~26 us for 0, ~70 us for 1. Every wait is bounded by
//! [`TIMEOUT_US`] measured on a wrapping microsecond counter.
//!
//! A read must not be preempted. The caller runs it inside a critical
//! section.

use embedded_hal::delay::DelayNs;
use hubclock_core::sensor::{FrameBuilder, SensorFrame, FRAME_BITS};
use hubclock_core::traits::{ClimateSensor, SensorError};
use hubclock_core::{DhtVariant, SensorReading};
use hubclock_hal::{FlexPin, MicrosClock, PinMode, Pull};

/// Host start pulse length
pub const START_LOW_MS: u32 = 18;

/// Host release window before switching to input
pub const RELEASE_US: u32 = 40;

/// Upper bound for every wait on the line
pub const TIMEOUT_US: u32 = 100;

/// High pulses longer than this are a 1 bit
pub const ONE_THRESHOLD_US: u32 = 40;

/// Single-wire humidity/temperature sensor
pub struct DhtSensor<P, C, D> {
    pin: P,
    clock: C,
    delay: D,
    variant: DhtVariant,
}

impl<P: FlexPin, C: MicrosClock, D: DelayNs> DhtSensor<P, C, D> {
    /// Bind a sensor to its data line
    ///
    /// `variant` is used by [`ClimateSensor::measure`]; [`DhtSensor::read`]
    /// takes it explicitly.
    pub fn new(pin: P, clock: C, delay: D, variant: DhtVariant) -> Self {
        Self {
            pin,
            clock,
            delay,
            variant,
        }
    }

    pub fn variant(&self) -> DhtVariant {
        self.variant
    }

    /// Perform one read and decode it as `variant`
    pub fn read(&mut self, variant: DhtVariant) -> Result<SensorReading, SensorError> {
        self.read_frame()?.decode(variant)
    }

    /// Perform one read and return the checksum-verified raw frame
    pub fn read_frame(&mut self) -> Result<SensorFrame, SensorError> {
        self.start_signal();

        // Response: line drops, stays low ~80 us, high ~80 us
        self.wait_while(true, SensorError::StartSignalNotFound)?;
        self.wait_while(false, SensorError::SignalLowNotFound)?;
        self.wait_while(true, SensorError::SignalLowNotFound)?;

        let mut builder = FrameBuilder::new();
        for _ in 0..FRAME_BITS {
            self.wait_while(false, SensorError::SignalHighTimeout)?;
            let high_us = self.wait_while(true, SensorError::SignalLowTimeout)?;
            builder.push_bit(high_us > ONE_THRESHOLD_US);
        }

        let frame = builder.finish();
        if !frame.is_valid() {
            return Err(SensorError::ChecksumMismatch);
        }
        Ok(frame)
    }

    /// Release the bus
    pub fn release(self) -> (P, C, D) {
        (self.pin, self.clock, self.delay)
    }

    fn start_signal(&mut self) {
        self.pin.set_mode(PinMode::Output, Pull::None);
        self.pin.set_low();
        self.delay.delay_ms(START_LOW_MS);
        self.pin.set_high();
        self.delay.delay_us(RELEASE_US);
        self.pin.set_mode(PinMode::Input, Pull::Up);
    }

    /// Spin while the line reads `level`, returning how long it stayed
    fn wait_while(&mut self, level: bool, timeout: SensorError) -> Result<u32, SensorError> {
        let start = self.clock.now_us();
        loop {
            if self.pin.is_high() != level {
                return Ok(self.clock.elapsed_since(start));
            }
            if self.clock.elapsed_since(start) > TIMEOUT_US {
                return Err(timeout);
            }
        }
    }
}

impl<P: FlexPin, C: MicrosClock, D: DelayNs> ClimateSensor for DhtSensor<P, C, D> {
    fn measure(&mut self) -> Result<SensorReading, SensorError> {
        self.read(self.variant)
    }
}
