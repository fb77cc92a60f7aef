//! RGB color model
//!
//! The framebuffer stores 8 bits per channel, but the panel is driven with a
//! single bit per channel. Channels are binarized at [`THRESHOLD`] during a
//! refresh.

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Channel values strictly above this light the LED
pub const THRESHOLD: u8 = 128;

/// One framebuffer pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same intensity on all three channels
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// On/off state of each channel as driven onto the panel
    pub const fn binarize(self) -> [bool; 3] {
        [self.r > THRESHOLD, self.g > THRESHOLD, self.b > THRESHOLD]
    }

    /// Convert an indexed palette color (1-7)
    ///
    /// 1=red, 2=green, 3=yellow, 4=blue, 5=magenta, 6=cyan, 7=white.
    /// Any other index maps to white.
    pub const fn from_palette(index: u8) -> Self {
        match index {
            1 => Self::RED,
            2 => Self::GREEN,
            3 => Self::YELLOW,
            4 => Self::BLUE,
            5 => Self::MAGENTA,
            6 => Self::CYAN,
            _ => Self::WHITE,
        }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as `#rrggbb`
    pub fn to_hex(self) -> String<7> {
        let mut out = String::new();
        // 7 bytes always fit
        let _ = write!(out, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
        out
    }
}

impl From<u8> for Rgb {
    fn from(level: u8) -> Self {
        Self::gray(level)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binarize_threshold() {
        assert_eq!(Rgb::new(128, 129, 0).binarize(), [false, true, false]);
        assert_eq!(Rgb::WHITE.binarize(), [true, true, true]);
        assert_eq!(Rgb::gray(128).binarize(), [false, false, false]);
    }

    #[test]
    fn test_intensity_conversion() {
        let c: Rgb = 200u8.into();
        assert_eq!(c, Rgb::new(200, 200, 200));
        let c: Rgb = (1, 2, 3).into();
        assert_eq!(c, Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_palette() {
        assert_eq!(Rgb::from_palette(1), Rgb::RED);
        assert_eq!(Rgb::from_palette(4), Rgb::BLUE);
        assert_eq!(Rgb::from_palette(7), Rgb::WHITE);
        assert_eq!(Rgb::from_palette(0), Rgb::WHITE);
        assert_eq!(Rgb::from_palette(42), Rgb::WHITE);
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::from_hex("#ff8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::from_hex("00FF10"), Some(Rgb::new(0, 255, 16)));
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
        assert_eq!(Rgb::new(255, 128, 0).to_hex().as_str(), "#ff8000");
    }
}
