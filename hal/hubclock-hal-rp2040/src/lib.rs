//! RP2040-specific HAL for the hubclock firmware
//!
//! This crate provides RP2040 implementations of the shared `hubclock-hal`
//! traits, plus RP2040-specific functionality:
//!
//! - GPIO allocation by pin number for config-driven setup
//! - Output and bidirectional line wrappers
//! - PWM output-enable channel for the matrix
//! - Microsecond clock backed by the embassy time driver

#![no_std]

pub mod gpio;
pub mod pins;
pub mod pwm;
pub mod time;

pub use gpio::{FlexLine, OutputLine};
pub use pins::{PinBank, PinBankPeripherals, PinError, RemainingPeripherals};
pub use pwm::{OePwm, OE_PIN};
pub use time::EmbassyMicros;
