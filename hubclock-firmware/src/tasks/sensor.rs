//! Climate sensor polling task

use defmt::*;
use embassy_time::{Delay, Duration, Ticker, Timer};

use hubclock_core::traits::ClimateSensor;
use hubclock_drivers::DhtSensor;
use hubclock_hal_rp2040::{EmbassyMicros, FlexLine};

use crate::channels::SENSOR_READING;

/// The board's climate sensor
pub type ClimateProbe = DhtSensor<FlexLine<'static>, EmbassyMicros, Delay>;

/// Sensor settle time after power-up
const POWER_UP_DELAY: Duration = Duration::from_secs(1);

/// Sensor task
///
/// Reads once per `interval_s`. A failed read is logged and dropped: the
/// display keeps the last good value and the next read happens on schedule.
#[embassy_executor::task]
pub async fn sensor_task(mut sensor: ClimateProbe, interval_s: u16) {
    info!("Sensor task started ({}s interval)", interval_s);
    Timer::after(POWER_UP_DELAY).await;

    let mut ticker = Ticker::every(Duration::from_secs(interval_s.max(1) as u64));
    loop {
        // Pulse widths are measured by polling; an interrupt mid-frame
        // would corrupt them
        match cortex_m::interrupt::free(|_| sensor.measure()) {
            Ok(reading) => {
                debug!(
                    "Sensor: {}C {}%",
                    reading.temperature_celsius, reading.humidity_percent
                );
                SENSOR_READING.signal(reading);
            }
            Err(e) => warn!("Sensor read failed: {}", e),
        }
        ticker.next().await;
    }
}
