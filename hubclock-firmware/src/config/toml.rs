//! Simple TOML parser for device configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! hubclock configuration. It does NOT support the full TOML grammar.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] and [section.subsection] headers
//! - Comments (# ...), including trailing comments
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings
//! - Dotted keys outside section headers

use heapless::String as HString;

use hubclock_core::config::{DeviceConfig, PinConfig};
use hubclock_core::{DhtVariant, Rgb};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
    /// Key not recognised in its section
    UnknownKey,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Panel,
    PanelPins,
    Sensor,
    Rtc,
    Network,
}

/// Parse TOML configuration into DeviceConfig
///
/// Keys that are not present keep their default values.
pub fn parse_config(input: &str) -> Result<DeviceConfig, ParseError> {
    let mut config = DeviceConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

/// Parse section header like "panel" or "panel.pins"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "panel" => Ok(Section::Panel),
        "panel.pins" => Ok(Section::PanelPins),
        "sensor" => Ok(Section::Sensor),
        "rtc" => Ok(Section::Rtc),
        "network" => Ok(Section::Network),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            // "#" opened a string; look for a comment after it closes
            match value.rfind('"') {
                Some(close) => match value[close..].find('#') {
                    Some(h) => value[..close + h].trim(),
                    None => value,
                },
                None => value,
            }
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

fn parse_bounded<const N: usize>(value: &str) -> Result<HString<N>, ParseError> {
    HString::try_from(parse_string(value)).map_err(|_| ParseError::InvalidValue)
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a pin string like "gpio11", "!gpio12", "^gpio4"
fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let mut s = parse_string(value);
    let mut cfg = PinConfig::default();

    // Check for modifiers
    loop {
        if let Some(rest) = s.strip_prefix('!') {
            cfg.inverted = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            cfg.pull_up = true;
            s = rest;
        } else {
            break;
        }
    }

    let num = s.strip_prefix("gpio").ok_or(ParseError::InvalidPin)?;
    cfg.pin = num.parse().map_err(|_| ParseError::InvalidPin)?;
    Ok(cfg)
}

/// Parse sensor type
fn parse_variant(value: &str) -> Result<DhtVariant, ParseError> {
    match parse_string(value) {
        "dht11" => Ok(DhtVariant::Dht11),
        "dht22" => Ok(DhtVariant::Dht22),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a "#rrggbb" color
fn parse_color(value: &str) -> Result<Rgb, ParseError> {
    Rgb::from_hex(parse_string(value)).ok_or(ParseError::InvalidValue)
}

/// Apply a key/value pair to the config
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DeviceConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => return Err(ParseError::UnknownKey),
        Section::Panel => {
            let p = &mut config.panel;
            match key {
                "width" => p.width = parse_int(value)?,
                "height" => p.height = parse_int(value)?,
                "brightness" => p.brightness = parse_int(value)?,
                "text_color" => p.text_color = parse_color(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
        Section::PanelPins => {
            let pins = &mut config.panel.pins;
            let slot = match key {
                "r1" => &mut pins.r1,
                "g1" => &mut pins.g1,
                "b1" => &mut pins.b1,
                "r2" => &mut pins.r2,
                "g2" => &mut pins.g2,
                "b2" => &mut pins.b2,
                "a" => &mut pins.addr[0],
                "b" => &mut pins.addr[1],
                "c" => &mut pins.addr[2],
                "d" => &mut pins.addr[3],
                "e" => &mut pins.addr[4],
                "clk" => &mut pins.clk,
                "lat" => &mut pins.lat,
                "oe" => &mut pins.oe,
                _ => return Err(ParseError::UnknownKey),
            };
            *slot = parse_pin(value)?;
        }
        Section::Sensor => {
            let s = &mut config.sensor;
            match key {
                "pin" => s.pin = parse_pin(value)?,
                "type" => s.variant = parse_variant(value)?,
                "interval_s" => s.interval_s = parse_int(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
        Section::Rtc => {
            let r = &mut config.rtc;
            match key {
                "sda_pin" => r.sda_pin = parse_pin(value)?.pin,
                "scl_pin" => r.scl_pin = parse_pin(value)?.pin,
                "timezone_offset" => r.timezone_offset_h = parse_int(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
        Section::Network => {
            let n = &mut config.network;
            match key {
                "ssid" => n.ssid = parse_bounded(value)?,
                "password" => n.password = parse_bounded(value)?,
                "city" => n.city = parse_bounded(value)?,
                "weather_interval_s" => n.weather_interval_s = parse_int(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
    }
    Ok(())
}
