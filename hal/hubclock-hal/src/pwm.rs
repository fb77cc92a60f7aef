//! PWM output abstraction

/// Single PWM channel with a fixed resolution
pub trait PwmOutput {
    /// Largest duty value accepted by [`PwmOutput::set_duty`] (100% high)
    fn max_duty(&self) -> u16;

    /// Set the high-time of the output, clamped to `max_duty()`
    fn set_duty(&mut self, duty: u16);

    /// Currently programmed duty value
    fn duty(&self) -> u16;
}

/// Compare value that keeps a wrapping counter's output high at every count
///
/// Counter-compare PWM drives the output high while `count < compare`, with
/// the counter running `0..=top`. `top` itself still leaves one low count
/// per period, so 100% needs `top + 1`.
pub const fn full_duty(top: u16) -> u16 {
    top.saturating_add(1)
}
