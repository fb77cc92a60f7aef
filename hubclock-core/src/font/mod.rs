//! Bitmap fonts
//!
//! A glyph is a small 1-bit bitmap. Two storage layouts are in use:
//!
//! - [`GlyphLayout::Rows`]: one integer per row, bit `width - 1` is the
//!   leftmost column.
//! - [`GlyphLayout::Columns`]: one integer per column, bit `height - 1` is
//!   the topmost row.
//!
//! Both render identically through [`Glyph::is_set`].

mod compact;
mod standard;

pub use compact::COMPACT_3X5;
pub use standard::STANDARD_5X7;

/// How a glyph's bit patterns are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphLayout {
    Rows,
    Columns,
}

/// One character bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub width: u8,
    pub height: u8,
    pub layout: GlyphLayout,
    bits: &'static [u16],
}

impl Glyph {
    /// Row-major glyph; height is the number of rows given
    pub const fn rows(width: u8, bits: &'static [u16]) -> Self {
        Self {
            width,
            height: bits.len() as u8,
            layout: GlyphLayout::Rows,
            bits,
        }
    }

    /// Column-major glyph; width is the number of columns given
    pub const fn columns(height: u8, bits: &'static [u16]) -> Self {
        Self {
            width: bits.len() as u8,
            height,
            layout: GlyphLayout::Columns,
            bits,
        }
    }

    /// Whether the pixel at (`col`, `row`) is lit
    ///
    /// Positions beyond the 16 bits a pattern can hold are never lit.
    pub fn is_set(&self, col: u8, row: u8) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        let (pattern, shift) = match self.layout {
            GlyphLayout::Rows => (self.bits.get(row as usize), self.width - 1 - col),
            GlyphLayout::Columns => (self.bits.get(col as usize), self.height - 1 - row),
        };
        pattern
            .and_then(|&bits| bits.checked_shr(shift as u32))
            .is_some_and(|bits| bits & 1 != 0)
    }
}

/// A character-to-glyph table
#[derive(Debug, Clone, Copy)]
pub struct Font {
    /// Nominal line height in pixels
    pub height: u8,
    glyphs: &'static [(char, Glyph)],
}

impl Font {
    pub const fn new(height: u8, glyphs: &'static [(char, Glyph)]) -> Self {
        Self { height, glyphs }
    }

    /// Look up a character
    ///
    /// ASCII lowercase letters fall back to their uppercase glyph. Absence is
    /// not an error; the text layer reserves blank space instead.
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.find(ch)
            .or_else(|| ch.is_ascii_lowercase().then(|| self.find(ch.to_ascii_uppercase())).flatten())
    }

    fn find(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.iter().find(|(c, _)| *c == ch).map(|(_, g)| g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_agree() {
        // A 3x2 "L" stored both ways
        let rows = Glyph::rows(3, &[0b100, 0b111]);
        let cols = Glyph::columns(2, &[0b11, 0b01, 0b01]);
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(rows.is_set(col, row), cols.is_set(col, row));
            }
        }
        assert!(rows.is_set(0, 0));
        assert!(!rows.is_set(1, 0));
        assert!(!rows.is_set(3, 0));
    }

    #[test]
    fn test_oversized_glyph_is_blank_beyond_pattern() {
        let wide = Glyph::rows(17, &[0xFFFF]);
        assert!(!wide.is_set(0, 0));
        assert!(wide.is_set(1, 0));
        assert!(wide.is_set(16, 0));

        let tall = Glyph::columns(20, &[0xFFFF]);
        assert!(!tall.is_set(0, 3));
        assert!(tall.is_set(0, 4));
        assert!(tall.is_set(0, 19));
    }

    #[test]
    fn test_lookup() {
        assert!(STANDARD_5X7.glyph('A').is_some());
        assert_eq!(STANDARD_5X7.glyph('a'), STANDARD_5X7.glyph('A'));
        assert!(STANDARD_5X7.glyph('~').is_none());
        assert!(COMPACT_3X5.glyph('7').is_some());
        assert!(COMPACT_3X5.glyph('Z').is_none());
    }

    #[test]
    fn test_glyph_heights_match_font() {
        for font in [&STANDARD_5X7, &COMPACT_3X5] {
            for (_, g) in font.glyphs {
                assert_eq!(g.height, font.height);
            }
        }
    }
}
