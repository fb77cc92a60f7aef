//! RGB framebuffer
//!
//! Dense row-major array of `width * height` pixels, 8 bits per channel.
//! There is no second buffer: writes are visible to the next refresh, so a
//! frame should be fully drawn before it is pushed to the panel.

use heapless::Vec;

use crate::color::Rgb;
use crate::traits::Canvas;

/// Widest supported panel
pub const MAX_WIDTH: u16 = 128;

/// Tallest supported panel (two halves of 32 scan rows)
pub const MAX_HEIGHT: u16 = 64;

/// Pixel capacity of a framebuffer
pub const MAX_PIXELS: usize = MAX_WIDTH as usize * MAX_HEIGHT as usize;

/// In-memory image of the panel
#[derive(Clone)]
pub struct Framebuffer {
    width: u16,
    height: u16,
    pixels: Vec<Rgb, MAX_PIXELS>,
}

impl Framebuffer {
    /// Create a black framebuffer
    ///
    /// Returns `None` if either dimension is zero or the panel does not fit
    /// in [`MAX_PIXELS`].
    pub fn new(width: u16, height: u16) -> Option<Self> {
        let len = width as usize * height as usize;
        if len == 0 || len > MAX_PIXELS {
            return None;
        }

        let mut pixels = Vec::new();
        pixels.resize(len, Rgb::BLACK).ok()?;
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Row-major index of (`x`, `y`), or `None` if out of bounds
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Read a pixel
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// One row of pixels
    pub fn row(&self, y: u16) -> &[Rgb] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }
}

impl Canvas for Framebuffer {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: impl Into<Rgb>) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.into();
        }
    }

    fn fill(&mut self, color: impl Into<Rgb>) {
        let color = color.into();
        for p in self.pixels.iter_mut() {
            *p = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_rejects_bad_sizes() {
        assert!(Framebuffer::new(0, 32).is_none());
        assert!(Framebuffer::new(64, 0).is_none());
        assert!(Framebuffer::new(MAX_WIDTH + 1, MAX_HEIGHT).is_none());
        assert!(Framebuffer::new(64, 32).is_some());
    }

    #[test]
    fn test_row_major_layout() {
        let mut fb = Framebuffer::new(4, 2).unwrap();
        fb.set_pixel(3, 1, Rgb::RED);
        assert_eq!(fb.index(3, 1), Some(7));
        assert_eq!(fb.pixels()[7], Rgb::RED);
        assert_eq!(fb.row(1)[3], Rgb::RED);
    }

    #[test]
    fn test_fill() {
        let mut fb = Framebuffer::new(8, 4).unwrap();
        fb.fill(200u8);
        assert!(fb.pixels().iter().all(|p| *p == Rgb::gray(200)));
        fb.clear();
        assert!(fb.pixels().iter().all(|p| *p == Rgb::BLACK));
    }

    proptest! {
        #[test]
        fn out_of_bounds_set_pixel_is_noop(
            x in -200i32..200,
            y in -200i32..200,
            level in any::<u8>(),
        ) {
            prop_assume!(x < 0 || y < 0 || x >= 16 || y >= 8);
            let mut fb = Framebuffer::new(16, 8).unwrap();
            fb.fill(Rgb::new(1, 2, 3));
            let before = fb.clone();
            fb.set_pixel(x, y, level);
            prop_assert_eq!(before.pixels(), fb.pixels());
        }
    }
}
