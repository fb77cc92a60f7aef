//! Screen composition
//!
//! Layout of the 64x32 status screen:
//!
//! ```text
//! y=0   OUT C|IN C      compact font
//! y=10     HH:MM        standard font, scale 2, centered
//! y=h-5 RH nn%          compact font
//! ```

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::font::{COMPACT_3X5, STANDARD_5X7};
use crate::sensor::SensorReading;
use crate::time::DateTime;
use crate::traits::{Canvas, TextExt};

/// Placeholder for a value that has not arrived yet
pub const UNKNOWN: &str = "N/A";

/// Placeholder time shown while the clock is not set
pub const NO_TIME: &str = "--:--";

/// Top edge of the clock line
pub const TIME_Y: i32 = 10;

/// Clock digit scale
pub const TIME_SCALE: u8 = 2;

/// Outdoor conditions from the network collaborator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherReport {
    pub temperature_celsius: f32,
}

/// Latest known values, each absent until first received
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatusData {
    pub indoor: Option<SensorReading>,
    pub outdoor: Option<WeatherReport>,
    pub time: Option<DateTime>,
}

fn push_temperature<const N: usize>(out: &mut String<N>, celsius: Option<f32>) {
    let _ = match celsius {
        Some(t) => write!(out, "{:.0}C", t),
        None => write!(out, "{}", UNKNOWN),
    };
}

/// Compact first line, e.g. `12C|21C`
pub fn status_line(data: &StatusData) -> String<24> {
    let mut line = String::new();
    push_temperature(&mut line, data.outdoor.map(|w| w.temperature_celsius));
    let _ = line.push('|');
    push_temperature(&mut line, data.indoor.map(|r| r.temperature_celsius));
    line
}

/// Redraw the whole status screen
pub fn render_status<C: Canvas>(canvas: &mut C, data: &StatusData, color: Rgb) {
    canvas.clear();

    canvas.draw_text(status_line(data).as_str(), 0, 0, color, &COMPACT_3X5, 1);

    match data.time.filter(DateTime::is_plausible) {
        Some(t) => canvas.draw_text_centered(t.format_hhmm().as_str(), TIME_Y, color, &STANDARD_5X7, TIME_SCALE),
        None => canvas.draw_text_centered(NO_TIME, TIME_Y, color, &STANDARD_5X7, TIME_SCALE),
    };

    if let Some(reading) = data.indoor {
        let mut humidity: String<12> = String::new();
        let _ = write!(humidity, "RH {:.0}%", reading.humidity_percent);
        let y = canvas.height() as i32 - COMPACT_3X5.height as i32;
        canvas.draw_text(humidity.as_str(), 0, y, color, &COMPACT_3X5, 1);
    }
}

/// Full-screen notice in the standard font
pub fn render_message<C: Canvas>(canvas: &mut C, message: &str, color: Rgb) {
    canvas.clear();
    canvas.draw_text(message, 0, 0, color, &STANDARD_5X7, 1);
}

/// Boot pattern: upper half green, lower half blue
pub fn render_test_pattern<C: Canvas>(canvas: &mut C) {
    let half = (canvas.height() / 2) as i32;
    for y in 0..canvas.height() as i32 {
        let color = if y < half { Rgb::GREEN } else { Rgb::BLUE };
        for x in 0..canvas.width() as i32 {
            canvas.set_pixel(x, y, color);
        }
    }
}
