//! LED matrix drivers

pub mod hub75;

pub use hub75::{Hub75Matrix, Hub75Pins};
