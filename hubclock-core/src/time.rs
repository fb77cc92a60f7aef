//! Calendar time as kept by the battery-backed RTC

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Years before this mean the RTC lost power and was never set
pub const MIN_PLAUSIBLE_YEAR: u16 = 2023;

/// Broken-down calendar time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    /// 1-7, Monday = 1
    pub weekday: u8,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
}

impl DateTime {
    /// Every field is inside its calendar range
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && (1..=31).contains(&self.day)
            && (1..=7).contains(&self.weekday)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }

    /// Valid and recent enough to have been set deliberately
    pub fn is_plausible(&self) -> bool {
        self.is_valid() && self.year >= MIN_PLAUSIBLE_YEAR
    }

    /// `HH:MM`, zero padded
    pub fn format_hhmm(&self) -> String<5> {
        let mut out = String::new();
        let _ = write!(out, "{:02}:{:02}", self.hour % 100, self.minute % 100);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DateTime {
        DateTime {
            year: 2024,
            month: 3,
            day: 9,
            weekday: 6,
            hour: 7,
            minute: 5,
            second: 0,
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(sample().format_hhmm().as_str(), "07:05");
    }

    #[test]
    fn test_plausibility() {
        assert!(sample().is_plausible());
        let stale = DateTime { year: 2000, ..sample() };
        assert!(stale.is_valid());
        assert!(!stale.is_plausible());
        let garbage = DateTime { hour: 25, ..sample() };
        assert!(!garbage.is_plausible());
    }
}
