//! Hubclock Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the display and sensor drivers are
//! written against. Chip-specific crates (currently RP2040) implement them,
//! and the driver tests implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (hubclock-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hubclock-drivers (HUB75, DHT, DS1307)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hubclock-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ hubclock-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::FlexPin`] - Digital I/O
//! - [`time::MicrosClock`] - Free-running microsecond counter
//! - [`pwm::PwmOutput`] - Duty-cycle controlled output

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pwm;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{FlexPin, InputPin, OutputPin, PinMode, Pull};
pub use pwm::{full_duty, PwmOutput};
pub use time::{ticks_diff, MicrosClock};
