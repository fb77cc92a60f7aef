//! Board-agnostic core logic for the hubclock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (canvas, matrix display, climate sensor, RTC)
//! - RGB framebuffer and HUB75 scan geometry
//! - Output-enable brightness mapping
//! - Single-wire sensor frame validation and decoding
//! - Bitmap fonts and text layout
//! - Status screen composition
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod brightness;
pub mod color;
pub mod config;
pub mod font;
pub mod framebuffer;
pub mod geometry;
pub mod screen;
pub mod sensor;
pub mod text;
pub mod time;
pub mod traits;

pub use color::Rgb;
pub use framebuffer::Framebuffer;
pub use geometry::PanelGeometry;
pub use sensor::{DhtVariant, SensorFrame, SensorReading};
pub use time::DateTime;
