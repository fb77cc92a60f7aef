//! Output-enable PWM channel
//!
//! The matrix output-enable line sits on GPIO13, channel B of PWM slice 6.
//! The counter wraps at [`OE_TOP`]. Duty runs `0..=OE_TOP + 1`, where the top
//! value holds the line high for the whole period (panel fully blanked).

use embassy_rp::peripherals::{PIN_13, PWM_SLICE6};
use embassy_rp::pwm::{Config, Pwm};
use embassy_rp::Peri;
use hubclock_hal::{full_duty, PwmOutput};

/// Counter wrap value
pub const OE_TOP: u16 = 1023;

/// GPIO carrying output-enable
pub const OE_PIN: u8 = 13;

/// PWM-driven output-enable line
pub struct OePwm<'d> {
    pwm: Pwm<'d>,
    config: Config,
}

impl<'d> OePwm<'d> {
    /// Start the slice with the panel blanked (full duty)
    pub fn new(slice: Peri<'d, PWM_SLICE6>, pin: Peri<'d, PIN_13>) -> Self {
        let mut config = Config::default();
        config.top = OE_TOP;
        config.compare_b = full_duty(OE_TOP);
        let pwm = Pwm::new_output_b(slice, pin, config.clone());
        Self { pwm, config }
    }
}

impl PwmOutput for OePwm<'_> {
    fn max_duty(&self) -> u16 {
        full_duty(self.config.top)
    }

    fn set_duty(&mut self, duty: u16) {
        self.config.compare_b = duty.min(self.max_duty());
        self.pwm.set_config(&self.config);
    }

    fn duty(&self) -> u16 {
        self.config.compare_b
    }
}
