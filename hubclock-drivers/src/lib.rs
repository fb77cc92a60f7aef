//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in hubclock-core, written against the hubclock-hal pin and timer traits:
//!
//! - HUB75 RGB LED matrix (row-scan refresh, OE brightness)
//! - DHT11/DHT22 single-wire humidity/temperature sensor
//! - DS1307 battery-backed real-time clock

#![no_std]
#![deny(unsafe_code)]

pub mod matrix;
pub mod rtc;
pub mod sensor;

pub use matrix::{Hub75Matrix, Hub75Pins};
pub use rtc::Ds1307;
pub use sensor::DhtSensor;
