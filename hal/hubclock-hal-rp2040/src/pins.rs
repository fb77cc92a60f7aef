//! GPIO allocation by pin number
//!
//! Pin numbers come from the device configuration, so pins are claimed at
//! runtime rather than by name. Pins that need a specific peripheral
//! function (PWM, I2C) are taken out of [`PinBankPeripherals`] as typed
//! pins first; everything left goes into the [`PinBank`].

use embassy_rp::gpio::AnyPin;
use embassy_rp::Peri;
use embassy_rp::Peripherals;

/// Number of GPIOs on the RP2040
pub const PIN_COUNT: usize = 30;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken, or reserved for a peripheral function
    AlreadyTaken,
}

/// Pin bank that holds the free GPIO pins and hands them out by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; PIN_COUNT],
}

impl PinBank {
    /// Move every pin still present in `p` into the bank
    ///
    /// Pins already taken from `p` stay unavailable.
    pub fn new(p: &mut PinBankPeripherals) -> Self {
        Self {
            pins: [
                p.pin0.take().map(Into::into),
                p.pin1.take().map(Into::into),
                p.pin2.take().map(Into::into),
                p.pin3.take().map(Into::into),
                p.pin4.take().map(Into::into),
                p.pin5.take().map(Into::into),
                p.pin6.take().map(Into::into),
                p.pin7.take().map(Into::into),
                p.pin8.take().map(Into::into),
                p.pin9.take().map(Into::into),
                p.pin10.take().map(Into::into),
                p.pin11.take().map(Into::into),
                p.pin12.take().map(Into::into),
                p.pin13.take().map(Into::into),
                p.pin14.take().map(Into::into),
                p.pin15.take().map(Into::into),
                p.pin16.take().map(Into::into),
                p.pin17.take().map(Into::into),
                p.pin18.take().map(Into::into),
                p.pin19.take().map(Into::into),
                p.pin20.take().map(Into::into),
                p.pin21.take().map(Into::into),
                p.pin22.take().map(Into::into),
                p.pin23.take().map(Into::into),
                p.pin24.take().map(Into::into),
                p.pin25.take().map(Into::into),
                p.pin26.take().map(Into::into),
                p.pin27.take().map(Into::into),
                p.pin28.take().map(Into::into),
                p.pin29.take().map(Into::into),
            ],
        }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(pin_num as usize)
            .ok_or(PinError::InvalidPin)?
            .take()
            .ok_or(PinError::AlreadyTaken)
    }

    /// Check if a pin is available
    pub fn is_available(&self, pin_num: u8) -> bool {
        self.pins
            .get(pin_num as usize)
            .is_some_and(|p| p.is_some())
    }
}

/// Typed GPIO pins before they are pooled
pub struct PinBankPeripherals {
    pub pin0: Option<Peri<'static, embassy_rp::peripherals::PIN_0>>,
    pub pin1: Option<Peri<'static, embassy_rp::peripherals::PIN_1>>,
    pub pin2: Option<Peri<'static, embassy_rp::peripherals::PIN_2>>,
    pub pin3: Option<Peri<'static, embassy_rp::peripherals::PIN_3>>,
    pub pin4: Option<Peri<'static, embassy_rp::peripherals::PIN_4>>,
    pub pin5: Option<Peri<'static, embassy_rp::peripherals::PIN_5>>,
    pub pin6: Option<Peri<'static, embassy_rp::peripherals::PIN_6>>,
    pub pin7: Option<Peri<'static, embassy_rp::peripherals::PIN_7>>,
    pub pin8: Option<Peri<'static, embassy_rp::peripherals::PIN_8>>,
    pub pin9: Option<Peri<'static, embassy_rp::peripherals::PIN_9>>,
    pub pin10: Option<Peri<'static, embassy_rp::peripherals::PIN_10>>,
    pub pin11: Option<Peri<'static, embassy_rp::peripherals::PIN_11>>,
    pub pin12: Option<Peri<'static, embassy_rp::peripherals::PIN_12>>,
    pub pin13: Option<Peri<'static, embassy_rp::peripherals::PIN_13>>,
    pub pin14: Option<Peri<'static, embassy_rp::peripherals::PIN_14>>,
    pub pin15: Option<Peri<'static, embassy_rp::peripherals::PIN_15>>,
    pub pin16: Option<Peri<'static, embassy_rp::peripherals::PIN_16>>,
    pub pin17: Option<Peri<'static, embassy_rp::peripherals::PIN_17>>,
    pub pin18: Option<Peri<'static, embassy_rp::peripherals::PIN_18>>,
    pub pin19: Option<Peri<'static, embassy_rp::peripherals::PIN_19>>,
    pub pin20: Option<Peri<'static, embassy_rp::peripherals::PIN_20>>,
    pub pin21: Option<Peri<'static, embassy_rp::peripherals::PIN_21>>,
    pub pin22: Option<Peri<'static, embassy_rp::peripherals::PIN_22>>,
    pub pin23: Option<Peri<'static, embassy_rp::peripherals::PIN_23>>,
    pub pin24: Option<Peri<'static, embassy_rp::peripherals::PIN_24>>,
    pub pin25: Option<Peri<'static, embassy_rp::peripherals::PIN_25>>,
    pub pin26: Option<Peri<'static, embassy_rp::peripherals::PIN_26>>,
    pub pin27: Option<Peri<'static, embassy_rp::peripherals::PIN_27>>,
    pub pin28: Option<Peri<'static, embassy_rp::peripherals::PIN_28>>,
    pub pin29: Option<Peri<'static, embassy_rp::peripherals::PIN_29>>,
}

impl PinBankPeripherals {
    /// Split Embassy peripherals into GPIOs and the rest
    pub fn from_peripherals(p: Peripherals) -> (Self, RemainingPeripherals) {
        let pins = Self {
            pin0: Some(p.PIN_0),
            pin1: Some(p.PIN_1),
            pin2: Some(p.PIN_2),
            pin3: Some(p.PIN_3),
            pin4: Some(p.PIN_4),
            pin5: Some(p.PIN_5),
            pin6: Some(p.PIN_6),
            pin7: Some(p.PIN_7),
            pin8: Some(p.PIN_8),
            pin9: Some(p.PIN_9),
            pin10: Some(p.PIN_10),
            pin11: Some(p.PIN_11),
            pin12: Some(p.PIN_12),
            pin13: Some(p.PIN_13),
            pin14: Some(p.PIN_14),
            pin15: Some(p.PIN_15),
            pin16: Some(p.PIN_16),
            pin17: Some(p.PIN_17),
            pin18: Some(p.PIN_18),
            pin19: Some(p.PIN_19),
            pin20: Some(p.PIN_20),
            pin21: Some(p.PIN_21),
            pin22: Some(p.PIN_22),
            pin23: Some(p.PIN_23),
            pin24: Some(p.PIN_24),
            pin25: Some(p.PIN_25),
            pin26: Some(p.PIN_26),
            pin27: Some(p.PIN_27),
            pin28: Some(p.PIN_28),
            pin29: Some(p.PIN_29),
        };
        let remaining = RemainingPeripherals {
            pwm_slice6: p.PWM_SLICE6,
            i2c0: p.I2C0,
        };
        (pins, remaining)
    }
}

/// Non-GPIO peripherals used by the firmware
pub struct RemainingPeripherals {
    /// Drives matrix output-enable on GPIO13
    pub pwm_slice6: Peri<'static, embassy_rp::peripherals::PWM_SLICE6>,
    /// RTC bus
    pub i2c0: Peri<'static, embassy_rp::peripherals::I2C0>,
}
