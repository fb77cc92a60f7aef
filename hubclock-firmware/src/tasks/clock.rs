//! RTC polling task

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Ticker};

use hubclock_core::traits::RealTimeClock;
use hubclock_drivers::Ds1307;

use crate::channels::CLOCK_TIME;

/// The board's RTC
pub type Rtc = Ds1307<I2c<'static, I2C0, Async>>;

const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Clock task
///
/// Starts a halted oscillator once, then publishes the time every second
/// while it is plausible. Problems are logged once until the clock recovers.
#[embassy_executor::task]
pub async fn clock_task(mut rtc: Rtc) {
    info!("Clock task started");

    match rtc.is_running().await {
        Ok(true) => {}
        Ok(false) => {
            warn!("RTC oscillator halted, starting it");
            if let Err(e) = rtc.start().await {
                warn!("Failed to start RTC: {}", e);
            }
        }
        Err(e) => warn!("RTC unavailable: {}", e),
    }

    let mut ticker = Ticker::every(POLL_INTERVAL);
    let mut warned = false;
    loop {
        match rtc.datetime().await {
            Ok(dt) if dt.is_plausible() => {
                warned = false;
                CLOCK_TIME.signal(dt);
            }
            Ok(dt) => {
                if !warned {
                    warn!("RTC time not set (year {})", dt.year);
                    warned = true;
                }
            }
            Err(e) => {
                if !warned {
                    warn!("RTC read failed: {}", e);
                    warned = true;
                }
            }
        }
        ticker.next().await;
    }
}
