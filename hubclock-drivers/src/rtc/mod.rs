//! Real-time clock drivers

pub mod ds1307;

pub use ds1307::Ds1307;
