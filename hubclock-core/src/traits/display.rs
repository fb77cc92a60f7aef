//! Display traits for the RGB LED matrix

use crate::color::Rgb;
use crate::font::Font;
use crate::text;

/// Reason a matrix driver could not be brought up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitFailure {
    /// Width/height unsupported (odd height, too many scan rows, too large)
    InvalidGeometry,
    /// Same GPIO assigned to two panel signals, or GPIO number out of range
    PinConflict(u8),
    /// GPIO could not be claimed from the chip
    PinUnavailable(u8),
    /// No PWM channel available for output-enable
    PwmUnavailable,
}

/// Errors that can occur with the matrix display
///
/// Reported once at construction; a driver that failed to initialize is
/// never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatrixError {
    /// Pin claim or PWM setup failed
    InitializationFailed(InitFailure),
}

impl From<InitFailure> for MatrixError {
    fn from(failure: InitFailure) -> Self {
        MatrixError::InitializationFailed(failure)
    }
}

/// Pixel-addressable drawing surface
///
/// Writes outside `[0, width) x [0, height)` are silently ignored.
pub trait Canvas {
    /// Width in pixels
    fn width(&self) -> u16;

    /// Height in pixels
    fn height(&self) -> u16;

    /// Set a single pixel; accepts an intensity (`u8`) or an RGB triple
    fn set_pixel(&mut self, x: i32, y: i32, color: impl Into<Rgb>);

    /// Set every pixel to `color`
    fn fill(&mut self, color: impl Into<Rgb>);

    /// Fill the canvas with black
    fn clear(&mut self) {
        self.fill(Rgb::BLACK);
    }
}

/// A canvas backed by a physical panel
pub trait MatrixDisplay: Canvas {
    /// Set the output-enable brightness level (0 = dimmest, 255 = brightest)
    fn set_brightness(&mut self, level: u8);

    /// Current brightness level
    fn brightness(&self) -> u8;

    /// Push the whole framebuffer to the panel
    fn flip(&mut self);
}

// An unavailable display swallows every operation so the application can
// keep its render loop unchanged.
impl<T: Canvas> Canvas for Option<T> {
    fn width(&self) -> u16 {
        self.as_ref().map_or(0, Canvas::width)
    }

    fn height(&self) -> u16 {
        self.as_ref().map_or(0, Canvas::height)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: impl Into<Rgb>) {
        if let Some(inner) = self {
            inner.set_pixel(x, y, color);
        }
    }

    fn fill(&mut self, color: impl Into<Rgb>) {
        if let Some(inner) = self {
            inner.fill(color);
        }
    }
}

impl<T: MatrixDisplay> MatrixDisplay for Option<T> {
    fn set_brightness(&mut self, level: u8) {
        if let Some(inner) = self {
            inner.set_brightness(level);
        }
    }

    fn brightness(&self) -> u8 {
        self.as_ref().map_or(0, MatrixDisplay::brightness)
    }

    fn flip(&mut self) {
        if let Some(inner) = self {
            inner.flip();
        }
    }
}

/// Helper trait for drawing text on any canvas
pub trait TextExt: Canvas {
    /// Draw `text` with its top-left corner at (`x`, `y`)
    ///
    /// Returns the cursor x position after the last character.
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: impl Into<Rgb>,
        font: &Font,
        scale: u8,
    ) -> i32 {
        text::draw_text(self, text, x, y, color.into(), font, scale)
    }

    /// Draw `text` horizontally centered on the canvas at row `y`
    fn draw_text_centered(
        &mut self,
        text: &str,
        y: i32,
        color: impl Into<Rgb>,
        font: &Font,
        scale: u8,
    ) -> i32 {
        let width = text::text_width(text, font, scale);
        let x = (self.width() as i32 - width) / 2;
        text::draw_text(self, text, x, y, color.into(), font, scale)
    }
}

// Blanket implementation for all canvases
impl<T: Canvas> TextExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;

    #[test]
    fn test_unavailable_display_is_noop() {
        let mut display: Option<Framebuffer> = None;
        display.fill(Rgb::WHITE);
        display.set_pixel(0, 0, Rgb::RED);
        assert_eq!(display.width(), 0);
        assert_eq!(display.height(), 0);
    }

    #[test]
    fn test_available_display_forwards() {
        let mut display = Framebuffer::new(4, 2);
        display.fill(Rgb::BLUE);
        display.set_pixel(1, 1, 200u8);
        let fb = display.as_ref().unwrap();
        assert_eq!(fb.pixel(0, 0), Some(Rgb::BLUE));
        assert_eq!(fb.pixel(1, 1), Some(Rgb::gray(200)));
    }

    #[test]
    fn test_text_ext_methods() {
        use crate::font::STANDARD_5X7;

        let mut fb = Framebuffer::new(32, 8).unwrap();
        let end = fb.draw_text("1", 0, 0, Rgb::RED, &STANDARD_5X7, 1);
        assert_eq!(end, text::text_width("1", &STANDARD_5X7, 1));
        assert!(fb.pixels().iter().any(|p| *p == Rgb::RED));

        let mut centered = Framebuffer::new(32, 8).unwrap();
        let width = text::text_width("11", &STANDARD_5X7, 1);
        let end = centered.draw_text_centered("11", 0, Rgb::GREEN, &STANDARD_5X7, 1);
        assert_eq!(end, (32 - width) / 2 + width);

        // Also drawable through an unavailable display
        let mut none: Option<Framebuffer> = None;
        let w = text::text_width("1", &STANDARD_5X7, 1);
        let end = none.draw_text_centered("1", 0, Rgb::WHITE, &STANDARD_5X7, 1);
        assert_eq!(end, -w / 2 + w);
    }
}
