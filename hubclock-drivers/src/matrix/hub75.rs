//! HUB75 RGB matrix driver
//!
//! Drives a single 1/(height/2) scan panel with one bit per color channel.
//! A refresh walks every address row and, for each, shifts a full row pair
//! into the panel:
//!
//! ```text
//! OE  ‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾\_PWM_
//! A-E  =====row 0=====X=====row 1=====X ...
//! RGB  =c0=X=c1=X ... X=cN=X
//! CLK  _/\__/\_ ... _/\_
//! LAT                    _/\_
//! ```
//!
//! Output-enable is active low and doubles as the brightness control: the
//! PWM is forced to full duty (blanked) for the sweep and returned to the
//! brightness duty afterwards.

use hubclock_core::brightness::{oe_duty, DEFAULT_LEVEL};
use hubclock_core::geometry::{address_bits, PanelGeometry};
use hubclock_core::traits::{Canvas, InitFailure, MatrixDisplay, MatrixError};
use hubclock_core::{Framebuffer, Rgb};
use hubclock_hal::{OutputPin, PwmOutput};

/// The thirteen plain outputs of a HUB75 connector
pub struct Hub75Pins<P> {
    pub r1: P,
    pub g1: P,
    pub b1: P,
    pub r2: P,
    pub g2: P,
    pub b2: P,
    /// Row address A..E, A is bit 0
    pub addr: [P; 5],
    pub clk: P,
    pub lat: P,
}

impl<P: OutputPin> Hub75Pins<P> {
    fn set_all_low(&mut self) {
        for pin in [
            &mut self.r1,
            &mut self.g1,
            &mut self.b1,
            &mut self.r2,
            &mut self.g2,
            &mut self.b2,
            &mut self.clk,
            &mut self.lat,
        ] {
            pin.set_low();
        }
        for pin in self.addr.iter_mut() {
            pin.set_low();
        }
    }

    fn select_row(&mut self, row: u16) {
        for (pin, bit) in self.addr.iter_mut().zip(address_bits(row)) {
            pin.set_state(bit);
        }
    }

    fn shift_pixel(&mut self, top: Rgb, bottom: Rgb) {
        let [r1, g1, b1] = top.binarize();
        let [r2, g2, b2] = bottom.binarize();
        self.r1.set_state(r1);
        self.g1.set_state(g1);
        self.b1.set_state(b1);
        self.r2.set_state(r2);
        self.g2.set_state(g2);
        self.b2.set_state(b2);
        self.clk.pulse();
    }
}

/// Framebuffer-backed HUB75 panel
pub struct Hub75Matrix<P, W> {
    pins: Hub75Pins<P>,
    oe: W,
    geometry: PanelGeometry,
    framebuffer: Framebuffer,
    brightness: u8,
}

impl<P: OutputPin, W: PwmOutput> Hub75Matrix<P, W> {
    /// Take ownership of the panel lines
    ///
    /// All outputs start low and brightness starts at the default level.
    pub fn new(
        pins: Hub75Pins<P>,
        oe: W,
        width: u16,
        height: u16,
    ) -> Result<Self, MatrixError> {
        let geometry = PanelGeometry::new(width, height)?;
        let framebuffer =
            Framebuffer::new(width, height).ok_or(InitFailure::InvalidGeometry)?;

        let mut matrix = Self {
            pins,
            oe,
            geometry,
            framebuffer,
            brightness: DEFAULT_LEVEL,
        };
        matrix.pins.set_all_low();
        matrix.set_brightness(DEFAULT_LEVEL);
        Ok(matrix)
    }

    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Release the panel lines
    pub fn release(self) -> (Hub75Pins<P>, W) {
        (self.pins, self.oe)
    }
}

impl<P: OutputPin, W: PwmOutput> Canvas for Hub75Matrix<P, W> {
    fn width(&self) -> u16 {
        self.geometry.width()
    }

    fn height(&self) -> u16 {
        self.geometry.height()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: impl Into<Rgb>) {
        self.framebuffer.set_pixel(x, y, color);
    }

    fn fill(&mut self, color: impl Into<Rgb>) {
        self.framebuffer.fill(color);
    }
}

impl<P: OutputPin, W: PwmOutput> MatrixDisplay for Hub75Matrix<P, W> {
    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
        let duty = oe_duty(level, self.oe.max_duty());
        self.oe.set_duty(duty);
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn flip(&mut self) {
        let max = self.oe.max_duty();
        self.oe.set_duty(max);

        let pixels = self.framebuffer.pixels();
        for row in 0..self.geometry.scan_rows() {
            self.pins.select_row(row);
            for col in 0..self.geometry.width() {
                let top = pixels[self.geometry.top_index(row, col)];
                let bottom = pixels[self.geometry.bottom_index(row, col)];
                self.pins.shift_pixel(top, bottom);
            }
            self.pins.lat.pulse();
        }

        self.oe.set_duty(oe_duty(self.brightness, max));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::{Cell, RefCell};

    const R1: usize = 0;
    const G1: usize = 1;
    const B1: usize = 2;
    const R2: usize = 3;
    const G2: usize = 4;
    const B2: usize = 5;
    const ADDR: usize = 6;
    const CLK: usize = 11;
    const LAT: usize = 12;

    const PWM_MAX: u16 = 1000;

    /// Shared view of every line, updated by the mock pins
    #[derive(Default)]
    struct Bus {
        levels: [Cell<bool>; 13],
        oe_duty: Cell<u16>,
        clocks: Cell<u32>,
        /// clock edges with each color line high, indexed R1..B2
        color_clocks: [Cell<u32>; 6],
        clocks_while_lit: Cell<u32>,
        latches: Cell<u32>,
        /// address seen at each latch
        latched_rows: RefCell<heapless::Vec<u16, 32>>,
        /// (address, column) of clock edges with R2 high
        r2_hits: RefCell<heapless::Vec<(u16, u32), 16>>,
        clocks_in_row: Cell<u32>,
    }

    impl Bus {
        fn address(&self) -> u16 {
            (0..5)
                .filter(|i| self.levels[ADDR + i].get())
                .map(|i| 1u16 << i)
                .sum()
        }

        fn rising_edge(&self, line: usize) {
            match line {
                CLK => {
                    self.clocks.set(self.clocks.get() + 1);
                    if self.oe_duty.get() != PWM_MAX {
                        self.clocks_while_lit.set(self.clocks_while_lit.get() + 1);
                    }
                    for (i, count) in self.color_clocks.iter().enumerate() {
                        if self.levels[i].get() {
                            count.set(count.get() + 1);
                        }
                    }
                    if self.levels[R2].get() {
                        let _ = self
                            .r2_hits
                            .borrow_mut()
                            .push((self.address(), self.clocks_in_row.get()));
                    }
                    self.clocks_in_row.set(self.clocks_in_row.get() + 1);
                }
                LAT => {
                    self.latches.set(self.latches.get() + 1);
                    let _ = self.latched_rows.borrow_mut().push(self.address());
                    self.clocks_in_row.set(0);
                }
                _ => {}
            }
        }
    }

    struct MockPin<'a> {
        line: usize,
        bus: &'a Bus,
    }

    impl OutputPin for MockPin<'_> {
        fn set_high(&mut self) {
            if !self.bus.levels[self.line].get() {
                self.bus.rising_edge(self.line);
            }
            self.bus.levels[self.line].set(true);
        }

        fn set_low(&mut self) {
            self.bus.levels[self.line].set(false);
        }

        fn is_set_high(&self) -> bool {
            self.bus.levels[self.line].get()
        }
    }

    struct MockPwm<'a> {
        bus: &'a Bus,
    }

    impl PwmOutput for MockPwm<'_> {
        fn max_duty(&self) -> u16 {
            PWM_MAX
        }

        fn set_duty(&mut self, duty: u16) {
            self.bus.oe_duty.set(duty.min(PWM_MAX));
        }

        fn duty(&self) -> u16 {
            self.bus.oe_duty.get()
        }
    }

    fn matrix(bus: &Bus, width: u16, height: u16) -> Result<Hub75Matrix<MockPin<'_>, MockPwm<'_>>, MatrixError> {
        let pin = |line| MockPin { line, bus };
        let pins = Hub75Pins {
            r1: pin(R1),
            g1: pin(G1),
            b1: pin(B1),
            r2: pin(R2),
            g2: pin(G2),
            b2: pin(B2),
            addr: [pin(ADDR), pin(ADDR + 1), pin(ADDR + 2), pin(ADDR + 3), pin(ADDR + 4)],
            clk: pin(CLK),
            lat: pin(LAT),
        };
        Hub75Matrix::new(pins, MockPwm { bus }, width, height)
    }

    #[test]
    fn test_invalid_geometry_reported() {
        let bus = Bus::default();
        assert_eq!(
            matrix(&bus, 64, 31).err(),
            Some(MatrixError::InitializationFailed(InitFailure::InvalidGeometry))
        );
    }

    #[test]
    fn test_flip_full_white() {
        let bus = Bus::default();
        let mut m = matrix(&bus, 64, 32).unwrap();
        m.fill(Rgb::gray(200));
        m.flip();

        assert_eq!(bus.clocks.get(), 64 * 16);
        for count in &bus.color_clocks {
            assert_eq!(count.get(), 64 * 16);
        }
        assert_eq!(bus.latches.get(), 16);
    }

    #[test]
    fn test_flip_threshold_is_exclusive() {
        let bus = Bus::default();
        let mut m = matrix(&bus, 32, 16).unwrap();
        m.fill(Rgb::gray(128));
        m.flip();
        for count in &bus.color_clocks {
            assert_eq!(count.get(), 0);
        }
    }

    #[test]
    fn test_rows_latched_in_order() {
        let bus = Bus::default();
        let mut m = matrix(&bus, 64, 64).unwrap();
        m.flip();
        let rows = bus.latched_rows.borrow();
        assert_eq!(rows.len(), 32);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(*row, i as u16);
        }
    }

    #[test]
    fn test_bottom_half_pixel_routing() {
        let bus = Bus::default();
        let mut m = matrix(&bus, 64, 32).unwrap();
        m.set_pixel(3, 20, Rgb::RED);
        m.flip();

        assert_eq!(bus.r2_hits.borrow().as_slice(), &[(4, 3)]);
        assert_eq!(bus.color_clocks[R2].get(), 1);
        assert_eq!(bus.color_clocks[R1].get(), 0);
        assert_eq!(bus.color_clocks[G2].get(), 0);
        assert_eq!(bus.color_clocks[B2].get(), 0);
    }

    #[test]
    fn test_top_half_only_drives_upper_lines() {
        let bus = Bus::default();
        let mut m = matrix(&bus, 8, 4).unwrap();
        for x in 0..8 {
            m.set_pixel(x, 0, Rgb::CYAN);
            m.set_pixel(x, 1, Rgb::CYAN);
        }
        m.flip();
        assert_eq!(bus.color_clocks[R1].get(), 0);
        assert_eq!(bus.color_clocks[G1].get(), 16);
        assert_eq!(bus.color_clocks[B1].get(), 16);
        assert_eq!(bus.color_clocks[B2].get(), 0);
    }

    #[test]
    fn test_panel_blanked_during_flip() {
        let bus = Bus::default();
        let mut m = matrix(&bus, 16, 8).unwrap();
        m.set_brightness(255);
        m.fill(Rgb::WHITE);
        m.flip();
        assert_eq!(bus.clocks_while_lit.get(), 0);
        assert_eq!(bus.oe_duty.get(), oe_duty(255, PWM_MAX));
    }

    #[test]
    fn test_brightness_extremes() {
        let bus = Bus::default();
        let mut m = matrix(&bus, 16, 8).unwrap();
        assert_eq!(m.brightness(), DEFAULT_LEVEL);

        m.set_brightness(0);
        assert_eq!(bus.oe_duty.get(), PWM_MAX);
        m.set_brightness(255);
        assert_eq!(bus.oe_duty.get(), oe_duty(255, PWM_MAX));
        assert!(bus.oe_duty.get() < 10);
        assert_eq!(m.brightness(), 255);
    }

    #[test]
    fn test_out_of_range_pixel_ignored() {
        let bus = Bus::default();
        let mut m = matrix(&bus, 16, 8).unwrap();
        m.set_pixel(-1, 0, Rgb::WHITE);
        m.set_pixel(16, 7, Rgb::WHITE);
        m.set_pixel(0, 8, Rgb::WHITE);
        assert!(m.framebuffer().pixels().iter().all(|p| *p == Rgb::BLACK));
    }
}
