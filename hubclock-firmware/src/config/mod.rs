//! Configuration loading and parsing
//!
//! The device configuration is the embedded `device.toml`, parsed by a
//! custom no_std parser.

pub mod toml;

use defmt::*;
use hubclock_core::config::DeviceConfig;

pub use toml::parse_config;

/// Parse the embedded configuration, falling back to built-in defaults
pub fn load(input: &str) -> DeviceConfig {
    match parse_config(input) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            // Only reachable if build.rs validation and this parser disagree
            error!("Failed to parse embedded config: {}", e);
            error!("Using default configuration");
            DeviceConfig::default()
        }
    }
}
