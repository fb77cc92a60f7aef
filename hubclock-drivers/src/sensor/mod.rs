//! Climate sensor drivers

pub mod dht;

pub use dht::DhtSensor;
