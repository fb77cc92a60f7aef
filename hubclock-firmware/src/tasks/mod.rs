//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

mod clock;
mod display;
mod sensor;

pub use clock::{clock_task, Rtc};
pub use display::{display_task, Panel};
pub use sensor::{sensor_task, ClimateProbe};
