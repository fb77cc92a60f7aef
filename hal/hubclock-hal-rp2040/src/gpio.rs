//! GPIO line wrappers
//!
//! Adapt embassy-rp pins to the `hubclock-hal` pin traits. Both wrappers
//! honour the `inverted` flag from the pin configuration so drivers only
//! ever see logical levels.

use embassy_rp::gpio::{self, AnyPin, Flex, Level, Output};
use embassy_rp::Peri;
use hubclock_hal::{FlexPin, InputPin, OutputPin, PinMode, Pull};

/// Push-pull output
pub struct OutputLine<'d> {
    pin: Output<'d>,
    inverted: bool,
}

impl<'d> OutputLine<'d> {
    /// Configure `pin` as an output, logically low
    pub fn new(pin: Peri<'d, AnyPin>, inverted: bool) -> Self {
        let level = if inverted { Level::High } else { Level::Low };
        Self {
            pin: Output::new(pin, level),
            inverted,
        }
    }
}

impl OutputPin for OutputLine<'_> {
    #[inline]
    fn set_high(&mut self) {
        if self.inverted {
            self.pin.set_low();
        } else {
            self.pin.set_high();
        }
    }

    #[inline]
    fn set_low(&mut self) {
        if self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }
}

/// Bidirectional line for single-wire protocols
pub struct FlexLine<'d> {
    pin: Flex<'d>,
    inverted: bool,
}

impl<'d> FlexLine<'d> {
    /// Take `pin` as an input with the given bias
    pub fn new(pin: Peri<'d, AnyPin>, inverted: bool, pull_up: bool) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_as_input();
        pin.set_pull(if pull_up { gpio::Pull::Up } else { gpio::Pull::None });
        Self { pin, inverted }
    }
}

impl OutputPin for FlexLine<'_> {
    #[inline]
    fn set_high(&mut self) {
        if self.inverted {
            self.pin.set_low();
        } else {
            self.pin.set_high();
        }
    }

    #[inline]
    fn set_low(&mut self) {
        if self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }
}

impl InputPin for FlexLine<'_> {
    #[inline]
    fn is_high(&self) -> bool {
        self.pin.is_high() != self.inverted
    }
}

impl FlexPin for FlexLine<'_> {
    fn set_mode(&mut self, mode: PinMode, pull: Pull) {
        self.pin.set_pull(match pull {
            Pull::None => gpio::Pull::None,
            Pull::Up => gpio::Pull::Up,
            Pull::Down => gpio::Pull::Down,
        });
        match mode {
            PinMode::Output => self.pin.set_as_output(),
            PinMode::Input => self.pin.set_as_input(),
        }
    }
}
