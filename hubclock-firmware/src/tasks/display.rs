//! Display refresh task
//!
//! Owns the matrix (or its absence) for the lifetime of the firmware. The
//! framebuffer is recomposed only when a new value arrives, but the panel is
//! refreshed continuously since it only ever holds one latched row pair.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::{Duration, Instant, Timer};

use hubclock_core::screen::{render_message, render_status, render_test_pattern, StatusData};
use hubclock_core::traits::MatrixDisplay;
use hubclock_core::Rgb;
use hubclock_drivers::Hub75Matrix;
use hubclock_hal_rp2040::{OePwm, OutputLine};

use crate::channels::{CLOCK_TIME, SENSOR_READING, WEATHER_UPDATE};

/// The board's matrix driver
pub type Panel = Hub75Matrix<OutputLine<'static>, OePwm<'static>>;

/// How long the boot pattern stays up
const TEST_PATTERN_TIME: Duration = Duration::from_secs(2);

/// How long a boot notice stays up
const NOTICE_TIME: Duration = Duration::from_secs(3);

/// Poll interval while no display is attached
const IDLE_POLL: Duration = Duration::from_secs(1);

fn refresh(display: &mut Option<Panel>) {
    // Row timing must not be stretched by interrupts
    cortex_m::interrupt::free(|_| display.flip());
}

/// Keep refreshing the current frame for `duration`
async fn hold(display: &mut Option<Panel>, duration: Duration) {
    let shown = Instant::now();
    while display.is_some() && shown.elapsed() < duration {
        refresh(display);
        yield_now().await;
    }
}

/// Display task
///
/// `display` is `None` when initialization failed; every draw is then a
/// no-op and the task only drains the signals. `notice` is shown once after
/// the test pattern, e.g. when a peripheral is missing.
#[embassy_executor::task]
pub async fn display_task(
    mut display: Option<Panel>,
    text_color: Rgb,
    notice: Option<&'static str>,
) {
    info!("Display task started (available={})", display.is_some());

    render_test_pattern(&mut display);
    hold(&mut display, TEST_PATTERN_TIME).await;

    if let Some(message) = notice {
        render_message(&mut display, message, text_color);
        hold(&mut display, NOTICE_TIME).await;
    }

    let mut status = StatusData::default();
    let mut dirty = true;

    loop {
        if let Some(reading) = SENSOR_READING.try_take() {
            dirty |= status.indoor != Some(reading);
            status.indoor = Some(reading);
        }
        if let Some(time) = CLOCK_TIME.try_take() {
            // Only hours and minutes are shown
            dirty |= status.time.map_or(true, |t| {
                t.hour != time.hour || t.minute != time.minute
            });
            status.time = Some(time);
        }
        if let Some(weather) = WEATHER_UPDATE.try_take() {
            dirty |= status.outdoor != Some(weather);
            status.outdoor = Some(weather);
        }

        if dirty {
            trace!("Recomposing status screen");
            render_status(&mut display, &status, text_color);
            dirty = false;
        }

        if display.is_some() {
            refresh(&mut display);
            yield_now().await;
        } else {
            Timer::after(IDLE_POLL).await;
        }
    }
}
