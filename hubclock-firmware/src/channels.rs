//! Inter-task communication channels
//!
//! Each producer publishes its latest value through a `Signal`; the display
//! task takes whatever is new before composing the next frame. A signal
//! only keeps the most recent value.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use hubclock_core::screen::WeatherReport;
use hubclock_core::{DateTime, SensorReading};

/// Latest successful indoor reading (updated by sensor task)
pub static SENSOR_READING: Signal<CriticalSectionRawMutex, SensorReading> = Signal::new();

/// Latest plausible RTC time (updated by clock task)
pub static CLOCK_TIME: Signal<CriticalSectionRawMutex, DateTime> = Signal::new();

/// Outdoor conditions, published by the network layer when one is attached
pub static WEATHER_UPDATE: Signal<CriticalSectionRawMutex, WeatherReport> = Signal::new();
