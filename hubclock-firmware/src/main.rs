//! Hubclock - LED Matrix Clock Firmware
//!
//! Main firmware binary for RP2040 boards driving a HUB75 RGB matrix, a
//! DHT single-wire climate sensor and a DS1307 real-time clock. Hardware
//! assignment comes from the embedded `device.toml`.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::{I2C0, PIN_13, PIN_16, PIN_17, PWM_SLICE6};
use embassy_rp::Peri;
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use hubclock_core::config::{DeviceConfig, PanelConfig, PinConfig, RtcConfig, SensorConfig};
use hubclock_core::traits::{InitFailure, MatrixDisplay, MatrixError};
use hubclock_drivers::{DhtSensor, Ds1307, Hub75Matrix, Hub75Pins};
use hubclock_hal_rp2040::{
    EmbassyMicros, FlexLine, OePwm, OutputLine, PinBank, PinBankPeripherals, OE_PIN,
};

use crate::tasks::{ClimateProbe, Panel, Rtc};

mod channels;
mod config;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit device.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../device.toml");

/// RTC bus pins on this board
const RTC_SDA_PIN: u8 = 16;
const RTC_SCL_PIN: u8 = 17;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});

// Configuration must live forever for task references
static DEVICE_CONFIG: StaticCell<DeviceConfig> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hubclock firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config: &'static DeviceConfig = DEVICE_CONFIG.init(config::load(EMBEDDED_CONFIG));
    info!(
        "Config: panel {}x{} brightness={}, sensor gpio{} {}, every {}s",
        config.panel.width,
        config.panel.height,
        config.panel.brightness,
        config.sensor.pin.pin,
        config.sensor.variant,
        config.sensor.interval_s
    );

    // Pins with a fixed peripheral function come out before pooling
    let (mut gpio, rest) = PinBankPeripherals::from_peripherals(p);
    let oe_pin = gpio.pin13.take();
    let sda_pin = gpio.pin16.take();
    let scl_pin = gpio.pin17.take();
    let mut bank = PinBank::new(&mut gpio);

    let display = match init_display(&config.panel, &mut bank, oe_pin, rest.pwm_slice6) {
        Ok(display) => {
            info!("Matrix initialized");
            Some(display)
        }
        Err(e) => {
            error!("Matrix unavailable: {}", e);
            None
        }
    };

    let sensor = init_sensor(&config.sensor, &mut bank);
    let rtc = init_rtc(&config.rtc, rest.i2c0, sda_pin, scl_pin);

    let notice = match (&sensor, &rtc) {
        (_, None) => Some("NO RTC"),
        (None, _) => Some("SENSOR?"),
        _ => None,
    };

    // Spawn tasks
    spawner
        .spawn(tasks::display_task(display, config.panel.text_color, notice))
        .unwrap();
    if let Some(sensor) = sensor {
        spawner
            .spawn(tasks::sensor_task(sensor, config.sensor.interval_s))
            .unwrap();
    }
    if let Some(rtc) = rtc {
        spawner.spawn(tasks::clock_task(rtc)).unwrap();
    }

    info!("All tasks spawned, firmware running");

    // All work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Claim the panel lines and bring up the matrix
///
/// Checks run in order: geometry, pin assignment, output-enable PWM, then
/// each GPIO claim. The first failure is returned.
fn init_display(
    cfg: &PanelConfig,
    bank: &mut PinBank,
    oe_pin: Option<Peri<'static, PIN_13>>,
    slice: Peri<'static, PWM_SLICE6>,
) -> Result<Panel, MatrixError> {
    hubclock_core::PanelGeometry::new(cfg.width, cfg.height)?;
    cfg.pins.validate()?;

    if cfg.pins.oe.pin != OE_PIN {
        return Err(InitFailure::PwmUnavailable.into());
    }
    let oe_pin = oe_pin.ok_or(InitFailure::PwmUnavailable)?;

    let mut claim = |pin: PinConfig| {
        bank.take(pin.pin)
            .map(|p| OutputLine::new(p, pin.inverted))
            .map_err(|_| InitFailure::PinUnavailable(pin.pin))
    };

    let p = &cfg.pins;
    let pins = Hub75Pins {
        r1: claim(p.r1)?,
        g1: claim(p.g1)?,
        b1: claim(p.b1)?,
        r2: claim(p.r2)?,
        g2: claim(p.g2)?,
        b2: claim(p.b2)?,
        addr: [
            claim(p.addr[0])?,
            claim(p.addr[1])?,
            claim(p.addr[2])?,
            claim(p.addr[3])?,
            claim(p.addr[4])?,
        ],
        clk: claim(p.clk)?,
        lat: claim(p.lat)?,
    };

    let oe = OePwm::new(slice, oe_pin);
    let mut matrix = Hub75Matrix::new(pins, oe, cfg.width, cfg.height)?;
    matrix.set_brightness(cfg.brightness);
    Ok(matrix)
}

/// Claim the sensor data line
fn init_sensor(cfg: &SensorConfig, bank: &mut PinBank) -> Option<ClimateProbe> {
    match bank.take(cfg.pin.pin) {
        Ok(pin) => {
            let line = FlexLine::new(pin, cfg.pin.inverted, cfg.pin.pull_up);
            info!("Sensor on gpio{} ({})", cfg.pin.pin, cfg.variant);
            Some(DhtSensor::new(line, EmbassyMicros, Delay, cfg.variant))
        }
        Err(e) => {
            error!("Sensor pin gpio{} unavailable: {}", cfg.pin.pin, e);
            None
        }
    }
}

/// Bring up the RTC bus
///
/// I2C0 is wired to GPIO16/17 on this board; any other assignment leaves
/// the clock disabled.
fn init_rtc(
    cfg: &RtcConfig,
    i2c0: Peri<'static, I2C0>,
    sda: Option<Peri<'static, PIN_16>>,
    scl: Option<Peri<'static, PIN_17>>,
) -> Option<Rtc> {
    if cfg.sda_pin != RTC_SDA_PIN || cfg.scl_pin != RTC_SCL_PIN {
        error!(
            "RTC must use gpio{}/gpio{}, got gpio{}/gpio{}",
            RTC_SDA_PIN, RTC_SCL_PIN, cfg.sda_pin, cfg.scl_pin
        );
        return None;
    }
    let (Some(sda), Some(scl)) = (sda, scl) else {
        error!("RTC pins already in use");
        return None;
    };

    let bus = I2c::new_async(i2c0, scl, sda, Irqs, i2c::Config::default());
    info!("RTC bus initialized");
    Some(Ds1307::new(bus))
}
