//! Hardware configuration types
//!
//! Pin assignments for the HUB75 panel, the single-wire sensor and the RTC
//! bus.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::InitFailure;

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }
}

/// HUB75 signal assignment
///
/// Thirteen plain outputs plus output-enable, which must sit on a
/// PWM-capable pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelPins {
    pub r1: PinConfig,
    pub g1: PinConfig,
    pub b1: PinConfig,
    pub r2: PinConfig,
    pub g2: PinConfig,
    pub b2: PinConfig,
    /// Row address lines A..E, A is bit 0
    pub addr: [PinConfig; 5],
    pub clk: PinConfig,
    pub lat: PinConfig,
    pub oe: PinConfig,
}

impl Default for PanelPins {
    fn default() -> Self {
        Self {
            r1: PinConfig::new(0),
            g1: PinConfig::new(1),
            b1: PinConfig::new(2),
            r2: PinConfig::new(3),
            g2: PinConfig::new(4),
            b2: PinConfig::new(5),
            addr: [
                PinConfig::new(6),
                PinConfig::new(7),
                PinConfig::new(8),
                PinConfig::new(9),
                PinConfig::new(10),
            ],
            clk: PinConfig::new(11),
            lat: PinConfig::new(12),
            oe: PinConfig::new(13),
        }
    }
}

impl PanelPins {
    /// Every panel signal, color lines first, output-enable last
    pub fn all(&self) -> [PinConfig; 14] {
        let [a, b, c, d, e] = self.addr;
        [
            self.r1, self.g1, self.b1, self.r2, self.g2, self.b2, a, b, c, d, e, self.clk,
            self.lat, self.oe,
        ]
    }

    /// Reject duplicate or out-of-range GPIO numbers
    pub fn validate(&self) -> Result<(), InitFailure> {
        let mut used: u32 = 0;
        for cfg in self.all() {
            if cfg.pin >= GPIO_COUNT {
                return Err(InitFailure::PinConflict(cfg.pin));
            }
            let bit = 1u32 << cfg.pin;
            if used & bit != 0 {
                return Err(InitFailure::PinConflict(cfg.pin));
            }
            used |= bit;
        }
        Ok(())
    }
}
