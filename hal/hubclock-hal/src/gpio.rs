//! GPIO pin abstractions
//!
//! Provides traits for digital input, output and bidirectional pins that can
//! be implemented by chip-specific HALs.

/// Direction of a bidirectional pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Pin drives the line
    Output,
    /// Pin samples the line
    Input,
}

/// Internal bias resistor selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    #[default]
    None,
    Up,
    Down,
}

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Drive the pin high then immediately low
    ///
    /// Used for clock and latch strobes.
    fn pulse(&mut self) {
        self.set_high();
        self.set_low();
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Pin that switches between driving and sampling a shared line
///
/// Single-wire protocols drive the line to wake a device, then release it
/// and sample the device's reply on the same pin.
pub trait FlexPin: OutputPin + InputPin {
    /// Reconfigure the pin direction and bias
    fn set_mode(&mut self, mode: PinMode, pull: Pull);
}
