//! Configuration type definitions

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::{PanelPins, PinConfig};
use crate::brightness::DEFAULT_LEVEL;
use crate::color::Rgb;
use crate::sensor::DhtVariant;

/// Maximum city name length
pub const MAX_CITY_LEN: usize = 32;

/// Maximum Wi-Fi SSID length
pub const MAX_SSID_LEN: usize = 32;

/// Maximum Wi-Fi passphrase length
pub const MAX_PASSWORD_LEN: usize = 64;

/// LED matrix configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Panel width in pixels
    pub width: u16,
    /// Panel height in pixels (even)
    pub height: u16,
    /// Power-up brightness, 0 = dimmest
    pub brightness: u8,
    /// Color used for all status text
    pub text_color: Rgb,
    /// Signal pin assignment
    pub pins: PanelPins,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 32,
            brightness: DEFAULT_LEVEL,
            text_color: Rgb::WHITE,
            pins: PanelPins::default(),
        }
    }
}

/// Climate sensor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorConfig {
    /// Data line
    pub pin: PinConfig,
    /// Sensor family member
    pub variant: DhtVariant,
    /// Seconds between reads
    pub interval_s: u16,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            pin: PinConfig::with_pullup(15),
            variant: DhtVariant::Dht22,
            interval_s: 2,
        }
    }
}

/// Real-time clock configuration
///
/// `timezone_offset_h` is applied by the network time sync, which lives
/// outside this tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RtcConfig {
    /// I2C data pin
    pub sda_pin: u8,
    /// I2C clock pin
    pub scl_pin: u8,
    /// Hours added to UTC when the clock is synchronized
    pub timezone_offset_h: i8,
}

impl Default for RtcConfig {
    fn default() -> Self {
        Self {
            sda_pin: 16,
            scl_pin: 17,
            timezone_offset_h: 0,
        }
    }
}

/// Settings consumed by the network collaborator
///
/// Only parsed and validated here; the Wi-Fi and weather client that reads
/// them lives outside this tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkConfig {
    pub ssid: String<MAX_SSID_LEN>,
    pub password: String<MAX_PASSWORD_LEN>,
    /// Weather location
    pub city: String<MAX_CITY_LEN>,
    /// Seconds between weather fetches
    pub weather_interval_s: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        let mut city = String::new();
        let _ = city.push_str("London");
        Self {
            ssid: String::new(),
            password: String::new(),
            city,
            weather_interval_s: 600,
        }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    pub panel: PanelConfig,
    pub sensor: SensorConfig,
    pub rtc: RtcConfig,
    pub network: NetworkConfig,
}

impl DeviceConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DeviceConfig::new();
        assert_eq!(config.panel.width, 64);
        assert_eq!(config.panel.height, 32);
        assert_eq!(config.panel.brightness, 128);
        assert_eq!(config.panel.text_color, Rgb::WHITE);
        assert_eq!(config.sensor.variant, DhtVariant::Dht22);
        assert_eq!(config.sensor.interval_s, 2);
        assert!(config.sensor.pin.pull_up);
        assert_eq!(config.network.city.as_str(), "London");
        assert_eq!(config.network.weather_interval_s, 600);
        assert_eq!(config.rtc.timezone_offset_h, 0);
    }
}
