//! HUB75 scan geometry
//!
//! A HUB75 panel is scanned as two halves driven simultaneously: address row
//! `r` lights framebuffer row `r` on the upper color lines (R1/G1/B1) and
//! row `r + height/2` on the lower color lines (R2/G2/B2).

use crate::framebuffer::{MAX_HEIGHT, MAX_PIXELS};
use crate::traits::InitFailure;

/// Number of row-address lines (A..E)
pub const ADDRESS_LINES: usize = 5;

/// Largest addressable scan row count
pub const MAX_SCAN_ROWS: u16 = 1 << ADDRESS_LINES;

/// Panel dimensions, fixed at driver construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelGeometry {
    width: u16,
    height: u16,
}

impl PanelGeometry {
    /// Validate panel dimensions
    ///
    /// Height must be even and split into at most [`MAX_SCAN_ROWS`] address
    /// rows; the whole panel must fit in a framebuffer.
    pub fn new(width: u16, height: u16) -> Result<Self, InitFailure> {
        let pixels = width as usize * height as usize;
        if width == 0
            || height == 0
            || height % 2 != 0
            || height > MAX_HEIGHT
            || height / 2 > MAX_SCAN_ROWS
            || pixels > MAX_PIXELS
        {
            return Err(InitFailure::InvalidGeometry);
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Address rows per refresh (`height / 2`)
    pub const fn scan_rows(&self) -> u16 {
        self.height / 2
    }

    /// Framebuffer index of the upper-half pixel for `row`, `col`
    #[inline]
    pub const fn top_index(&self, row: u16, col: u16) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Framebuffer index of the lower-half pixel for `row`, `col`
    #[inline]
    pub const fn bottom_index(&self, row: u16, col: u16) -> usize {
        (row + self.scan_rows()) as usize * self.width as usize + col as usize
    }
}

/// Levels of the five address lines for a scan row, bit 0 (line A) first
pub const fn address_bits(row: u16) -> [bool; ADDRESS_LINES] {
    [
        row & 0x01 != 0,
        row & 0x02 != 0,
        row & 0x04 != 0,
        row & 0x08 != 0,
        row & 0x10 != 0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_geometry() {
        let g = PanelGeometry::new(64, 32).unwrap();
        assert_eq!(g.scan_rows(), 16);
        assert_eq!(g.top_index(0, 0), 0);
        assert_eq!(g.bottom_index(0, 0), 16 * 64);
        assert_eq!(g.bottom_index(15, 63), 31 * 64 + 63);
    }

    #[test]
    fn test_invalid_geometry() {
        assert_eq!(PanelGeometry::new(64, 31), Err(InitFailure::InvalidGeometry));
        assert_eq!(PanelGeometry::new(0, 32), Err(InitFailure::InvalidGeometry));
        assert_eq!(PanelGeometry::new(64, 66), Err(InitFailure::InvalidGeometry));
        assert_eq!(PanelGeometry::new(256, 64), Err(InitFailure::InvalidGeometry));
        assert!(PanelGeometry::new(128, 64).is_ok());
    }

    #[test]
    fn test_address_bits() {
        assert_eq!(address_bits(0), [false; 5]);
        assert_eq!(address_bits(5), [true, false, true, false, false]);
        assert_eq!(address_bits(31), [true; 5]);
    }
}
