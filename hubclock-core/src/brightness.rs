//! Output-enable brightness mapping
//!
//! HUB75 output-enable is active low, so a higher PWM duty keeps the panel
//! blanked for longer. Brightness level 0 maps to the largest duty (dimmest)
//! and 255 to the smallest (brightest):
//!
//! ```text
//! duty = MAX_DUTY - level * SCALE
//! ```
//!
//! The result is expressed on a 10-bit scale and then rescaled to whatever
//! resolution the PWM peripheral offers.

/// Duty at brightness 0 on the 10-bit reference scale
pub const MAX_DUTY: u16 = 1023;

/// Duty step per brightness level
pub const SCALE: u16 = 4;

/// Default brightness at power-up
pub const DEFAULT_LEVEL: u8 = 128;

/// Reference (10-bit) duty for a brightness level
pub const fn reference_duty(level: u8) -> u16 {
    MAX_DUTY - level as u16 * SCALE
}

/// Output-enable duty for `level` on a PWM whose full scale is `max_duty`
///
/// Monotonic: a higher level never yields a higher duty.
pub fn oe_duty(level: u8, max_duty: u16) -> u16 {
    let duty = reference_duty(level) as u32 * max_duty as u32 / MAX_DUTY as u32;
    duty.min(max_duty as u32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extremes_reference_scale() {
        assert_eq!(oe_duty(0, MAX_DUTY), 1023);
        assert_eq!(oe_duty(255, MAX_DUTY), 3);
    }

    #[test]
    fn test_rescaled_to_pwm_resolution() {
        assert_eq!(oe_duty(0, 65535), 65535);
        assert_eq!(oe_duty(255, 65535), 192);
        assert_eq!(oe_duty(0, 0), 0);
    }

    #[test]
    fn test_full_period_channel() {
        // 10-bit counter whose top duty holds the line for the whole period
        assert_eq!(oe_duty(0, 1024), 1024);
        assert_eq!(oe_duty(255, 1024), 3);
    }

    proptest! {
        #[test]
        fn duty_is_monotonic(level in 0u8..255, max in any::<u16>()) {
            prop_assert!(oe_duty(level + 1, max) <= oe_duty(level, max));
            prop_assert!(oe_duty(level, max) <= max);
        }
    }
}
