//! Text layout on a canvas
//!
//! Characters are drawn left to right with one pixel of spacing. There is no
//! wrapping; anything past the canvas edge is clipped by `set_pixel`.

use crate::color::Rgb;
use crate::font::Font;
use crate::traits::Canvas;

/// Advance for a character the font does not contain, in unscaled pixels
pub const MISSING_GLYPH_ADVANCE: i32 = 6;

/// Gap between characters
pub const SPACING: i32 = 1;

/// Cursor advance for one character
fn advance(font: &Font, ch: char, scale: i32) -> i32 {
    match font.glyph(ch) {
        None => MISSING_GLYPH_ADVANCE * scale + SPACING,
        Some(g) if g.width == 0 => SPACING,
        Some(g) => g.width as i32 * scale + SPACING,
    }
}

/// Draw `text` with its top-left corner at (`x`, `y`)
///
/// Each glyph pixel becomes a `scale` x `scale` block. Returns the cursor
/// position after the last character.
pub fn draw_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &str,
    x: i32,
    y: i32,
    color: Rgb,
    font: &Font,
    scale: u8,
) -> i32 {
    let scale = scale.max(1) as i32;
    let mut cursor = x;

    for ch in text.chars() {
        if let Some(glyph) = font.glyph(ch) {
            for row in 0..glyph.height {
                for col in 0..glyph.width {
                    if !glyph.is_set(col, row) {
                        continue;
                    }
                    let px = cursor + col as i32 * scale;
                    let py = y + row as i32 * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            canvas.set_pixel(px + dx, py + dy, color);
                        }
                    }
                }
            }
        }
        cursor += advance(font, ch, scale);
    }

    cursor
}

/// Horizontal space `text` occupies, including trailing spacing
pub fn text_width(text: &str, font: &Font, scale: u8) -> i32 {
    let scale = scale.max(1) as i32;
    text.chars().map(|ch| advance(font, ch, scale)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{COMPACT_3X5, STANDARD_5X7};
    use crate::framebuffer::Framebuffer;

    fn lit(fb: &Framebuffer) -> usize {
        fb.pixels().iter().filter(|p| **p != Rgb::BLACK).count()
    }

    #[test]
    fn test_cursor_advance() {
        let mut fb = Framebuffer::new(64, 32).unwrap();
        // '1' is 3 columns wide in the compact font
        assert_eq!(draw_text(&mut fb, "11", 0, 0, Rgb::WHITE, &COMPACT_3X5, 1), 8);
        assert_eq!(draw_text(&mut fb, "1", 0, 0, Rgb::WHITE, &COMPACT_3X5, 2), 7);
        assert_eq!(text_width("11", &COMPACT_3X5, 1), 8);
    }

    #[test]
    fn test_missing_glyph_reserves_space() {
        let mut fb = Framebuffer::new(64, 32).unwrap();
        fb.fill(Rgb::new(10, 20, 30));
        let before = fb.clone();

        let end = draw_text(&mut fb, "~", 5, 5, Rgb::WHITE, &STANDARD_5X7, 1);
        assert_eq!(end, 5 + MISSING_GLYPH_ADVANCE + SPACING);
        assert_eq!(before.pixels(), fb.pixels());

        let end = draw_text(&mut fb, "~", 0, 0, Rgb::WHITE, &STANDARD_5X7, 3);
        assert_eq!(end, MISSING_GLYPH_ADVANCE * 3 + SPACING);
    }

    #[test]
    fn test_glyph_pixels() {
        let mut fb = Framebuffer::new(16, 8).unwrap();
        draw_text(&mut fb, "|", 2, 1, Rgb::RED, &COMPACT_3X5, 1);
        for y in 1..6 {
            assert_eq!(fb.pixel(2, y), Some(Rgb::RED));
        }
        assert_eq!(lit(&fb), 5);
    }

    #[test]
    fn test_scaled_glyph() {
        let mut fb = Framebuffer::new(16, 16).unwrap();
        draw_text(&mut fb, ".", 0, 0, Rgb::GREEN, &COMPACT_3X5, 2);
        // single bottom pixel becomes a 2x2 block at rows 8..10
        assert_eq!(lit(&fb), 4);
        assert_eq!(fb.pixel(1, 9), Some(Rgb::GREEN));
    }

    #[test]
    fn test_clipped_at_right_edge() {
        let mut fb = Framebuffer::new(4, 8).unwrap();
        let end = draw_text(&mut fb, "88", 2, 0, Rgb::WHITE, &COMPACT_3X5, 1);
        assert_eq!(end, 10);
        // only columns 2 and 3 of the first glyph land on the canvas
        assert!(fb.pixel(2, 0).is_some_and(|p| p == Rgb::WHITE));
        assert_eq!(fb.pixel(0, 0), Some(Rgb::BLACK));
    }
}
