//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod clock;
pub mod display;
pub mod sensor;

pub use clock::{RealTimeClock, RtcError};
pub use display::{Canvas, InitFailure, MatrixDisplay, MatrixError, TextExt};
pub use sensor::{ClimateSensor, SensorError};
