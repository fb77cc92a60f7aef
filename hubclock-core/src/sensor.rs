//! Single-wire climate sensor frames
//!
//! One read produces 40 bits, packed MSB-first into five bytes:
//!
//! ```text
//! [humidity_high, humidity_low, temp_high, temp_low, checksum]
//! ```
//!
//! The checksum is the low byte of the sum of the first four. A frame that
//! fails the checksum is discarded whole.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::SensorError;

/// Bytes per frame
pub const FRAME_LEN: usize = 5;

/// Bits per frame
pub const FRAME_BITS: usize = FRAME_LEN * 8;

/// Sensor family member, selects the payload decode rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DhtVariant {
    /// Integer and tenths bytes, no sign
    #[default]
    Dht11,
    /// 16-bit tenths, sign-magnitude temperature
    Dht22,
}

/// Decoded measurement
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorReading {
    pub temperature_celsius: f32,
    pub humidity_percent: f32,
}

impl SensorReading {
    pub fn temperature_fahrenheit(&self) -> f32 {
        self.temperature_celsius * 9.0 / 5.0 + 32.0
    }
}

/// Raw 5-byte frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorFrame([u8; FRAME_LEN]);

impl SensorFrame {
    pub const fn new(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// Checksum byte as received
    pub const fn checksum(&self) -> u8 {
        self.0[4]
    }

    /// Checksum computed over the payload
    pub fn expected_checksum(&self) -> u8 {
        self.0[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
    }

    pub fn is_valid(&self) -> bool {
        self.checksum() == self.expected_checksum()
    }

    /// Validate and decode according to `variant`
    pub fn decode(&self, variant: DhtVariant) -> Result<SensorReading, SensorError> {
        if !self.is_valid() {
            return Err(SensorError::ChecksumMismatch);
        }

        let [b0, b1, b2, b3, _] = self.0;
        let reading = match variant {
            DhtVariant::Dht11 => SensorReading {
                humidity_percent: b0 as f32 + b1 as f32 / 10.0,
                temperature_celsius: b2 as f32 + b3 as f32 / 10.0,
            },
            DhtVariant::Dht22 => {
                let humidity = u16::from_be_bytes([b0, b1]);
                let magnitude = u16::from_be_bytes([b2 & 0x7F, b3]) as f32 / 10.0;
                SensorReading {
                    humidity_percent: humidity as f32 / 10.0,
                    temperature_celsius: if b2 & 0x80 != 0 { -magnitude } else { magnitude },
                }
            }
        };
        Ok(reading)
    }
}

/// Accumulates bits MSB-first into a frame
#[derive(Debug, Default)]
pub struct FrameBuilder {
    bytes: [u8; FRAME_LEN],
    bits: usize,
}

impl FrameBuilder {
    pub const fn new() -> Self {
        Self {
            bytes: [0; FRAME_LEN],
            bits: 0,
        }
    }

    /// Append one bit; bits beyond [`FRAME_BITS`] are dropped
    pub fn push_bit(&mut self, bit: bool) {
        if self.bits >= FRAME_BITS {
            return;
        }
        let byte = &mut self.bytes[self.bits / 8];
        *byte = (*byte << 1) | bit as u8;
        self.bits += 1;
    }

    pub const fn is_complete(&self) -> bool {
        self.bits == FRAME_BITS
    }

    pub const fn finish(self) -> SensorFrame {
        SensorFrame(self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn frame(payload: [u8; 4]) -> SensorFrame {
        let sum = payload.iter().fold(0u8, |a, b| a.wrapping_add(*b));
        SensorFrame::new([payload[0], payload[1], payload[2], payload[3], sum])
    }

    fn approx(a: f32, b: f32) -> bool {
        let d = a - b;
        d > -0.01 && d < 0.01
    }

    #[test]
    fn test_dht11_decode() {
        let r = frame([60, 0, 25, 0]).decode(DhtVariant::Dht11).unwrap();
        assert_eq!(r.humidity_percent, 60.0);
        assert_eq!(r.temperature_celsius, 25.0);
    }

    #[test]
    fn test_dht22_decode() {
        let r = frame([0x02, 0x58, 0x01, 0x0A]).decode(DhtVariant::Dht22).unwrap();
        assert!(approx(r.humidity_percent, 60.0));
        assert!(approx(r.temperature_celsius, 26.6));
    }

    #[test]
    fn test_dht22_negative_temperature() {
        let r = frame([0x02, 0x58, 0x81, 0x0A]).decode(DhtVariant::Dht22).unwrap();
        assert!(approx(r.temperature_celsius, -26.6));
    }

    #[test]
    fn test_checksum_wraps() {
        let f = SensorFrame::new([0xFF, 0xFF, 0x02, 0x00, 0x00]);
        assert!(f.is_valid());
    }

    #[test]
    fn test_fahrenheit() {
        let r = SensorReading {
            temperature_celsius: 25.0,
            humidity_percent: 0.0,
        };
        assert!(approx(r.temperature_fahrenheit(), 77.0));
    }

    #[test]
    fn test_builder_msb_first() {
        let mut b = FrameBuilder::new();
        for byte in [0xA5u8, 0x01, 0x80, 0xFF, 0x25] {
            for i in (0..8).rev() {
                b.push_bit(byte & (1 << i) != 0);
            }
        }
        assert!(b.is_complete());
        b.push_bit(true);
        assert_eq!(b.finish().bytes(), &[0xA5, 0x01, 0x80, 0xFF, 0x25]);
    }

    proptest! {
        #[test]
        fn valid_checksum_always_decodes(payload in any::<[u8; 4]>()) {
            let f = frame(payload);
            prop_assert!(f.decode(DhtVariant::Dht11).is_ok());
            prop_assert!(f.decode(DhtVariant::Dht22).is_ok());
        }

        #[test]
        fn bad_checksum_never_decodes(payload in any::<[u8; 4]>(), delta in 1u8..=255) {
            let good = frame(payload);
            let mut bytes = *good.bytes();
            bytes[4] = bytes[4].wrapping_add(delta);
            let bad = SensorFrame::new(bytes);
            prop_assert_eq!(bad.decode(DhtVariant::Dht11), Err(SensorError::ChecksumMismatch));
            prop_assert_eq!(bad.decode(DhtVariant::Dht22), Err(SensorError::ChecksumMismatch));
        }
    }
}
