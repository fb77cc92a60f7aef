//! DS1307 battery-backed RTC
//!
//! Seven BCD registers starting at 0x00:
//!
//! | Reg | Contents                              |
//! |-----|---------------------------------------|
//! | 00  | CH (bit 7), seconds                   |
//! | 01  | minutes                               |
//! | 02  | 12/24 (bit 6), AM/PM (bit 5), hours   |
//! | 03  | weekday 1-7                           |
//! | 04  | day of month                          |
//! | 05  | month                                 |
//! | 06  | year 00-99                            |
//!
//! The oscillator is stopped while CH is set, which is the power-on state of
//! a fresh chip.

use embedded_hal_async::i2c::I2c;
use hubclock_core::traits::{RealTimeClock, RtcError};
use hubclock_core::DateTime;

/// Fixed 7-bit bus address
pub const ADDRESS: u8 = 0x68;

const REG_SECONDS: u8 = 0x00;
const CLOCK_HALT: u8 = 0x80;
const MODE_12H: u8 = 0x40;
const PM: u8 = 0x20;
const CENTURY: u16 = 2000;

fn bcd_to_bin(v: u8) -> u8 {
    (v >> 4) * 10 + (v & 0x0F)
}

fn bin_to_bcd(v: u8) -> u8 {
    ((v / 10) << 4) | (v % 10)
}

fn decode(regs: &[u8; 7]) -> DateTime {
    let hour_reg = regs[2];
    let hour = if hour_reg & MODE_12H != 0 {
        let h = bcd_to_bin(hour_reg & 0x1F) % 12;
        if hour_reg & PM != 0 {
            h + 12
        } else {
            h
        }
    } else {
        bcd_to_bin(hour_reg & 0x3F)
    };

    DateTime {
        second: bcd_to_bin(regs[0] & 0x7F),
        minute: bcd_to_bin(regs[1] & 0x7F),
        hour,
        weekday: bcd_to_bin(regs[3] & 0x07),
        day: bcd_to_bin(regs[4] & 0x3F),
        month: bcd_to_bin(regs[5] & 0x1F),
        year: CENTURY + bcd_to_bin(regs[6]) as u16,
    }
}

fn encode(dt: &DateTime) -> [u8; 7] {
    [
        bin_to_bcd(dt.second),
        bin_to_bcd(dt.minute),
        bin_to_bcd(dt.hour),
        bin_to_bcd(dt.weekday),
        bin_to_bcd(dt.day),
        bin_to_bcd(dt.month),
        bin_to_bcd((dt.year - CENTURY) as u8),
    ]
}

/// DS1307 on an async I2C bus
pub struct Ds1307<I> {
    i2c: I,
}

impl<I: I2c> Ds1307<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    pub fn release(self) -> I {
        self.i2c
    }

    async fn read_registers(&mut self) -> Result<[u8; 7], RtcError<I::Error>> {
        let mut regs = [0u8; 7];
        self.i2c
            .write_read(ADDRESS, &[REG_SECONDS], &mut regs)
            .await
            .map_err(RtcError::Bus)?;
        Ok(regs)
    }

    /// Whether the oscillator is running
    pub async fn is_running(&mut self) -> Result<bool, RtcError<I::Error>> {
        let regs = self.read_registers().await?;
        Ok(regs[0] & CLOCK_HALT == 0)
    }

    /// Clear the clock-halt bit, keeping the stored seconds
    pub async fn start(&mut self) -> Result<(), RtcError<I::Error>> {
        let regs = self.read_registers().await?;
        if regs[0] & CLOCK_HALT == 0 {
            return Ok(());
        }
        self.i2c
            .write(ADDRESS, &[REG_SECONDS, regs[0] & !CLOCK_HALT])
            .await
            .map_err(RtcError::Bus)
    }
}

impl<I: I2c> RealTimeClock for Ds1307<I> {
    type Error = I::Error;

    async fn datetime(&mut self) -> Result<DateTime, RtcError<Self::Error>> {
        let dt = decode(&self.read_registers().await?);
        if !dt.is_valid() {
            return Err(RtcError::InvalidData);
        }
        Ok(dt)
    }

    /// Writes all seven registers in 24-hour mode and starts the oscillator
    async fn set_datetime(&mut self, dt: &DateTime) -> Result<(), RtcError<Self::Error>> {
        if !dt.is_valid() || !(CENTURY..CENTURY + 100).contains(&dt.year) {
            return Err(RtcError::InvalidData);
        }
        let regs = encode(dt);
        let mut buf = [0u8; 8];
        buf[0] = REG_SECONDS;
        buf[1..].copy_from_slice(&regs);
        self.i2c.write(ADDRESS, &buf).await.map_err(RtcError::Bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    /// Register file behind an auto-incrementing pointer
    struct MockBus {
        regs: [u8; 8],
        pointer: usize,
        fail: bool,
    }

    impl MockBus {
        fn new(regs: [u8; 7]) -> Self {
            let mut all = [0u8; 8];
            all[..7].copy_from_slice(&regs);
            Self {
                regs: all,
                pointer: 0,
                fail: false,
            }
        }
    }

    impl ErrorType for MockBus {
        type Error = ErrorKind;
    }

    impl I2c for MockBus {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail || address != ADDRESS {
                return Err(ErrorKind::Other);
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if let Some((reg, data)) = bytes.split_first() {
                            self.pointer = *reg as usize;
                            for b in data {
                                self.regs[self.pointer % 8] = *b;
                                self.pointer += 1;
                            }
                        }
                    }
                    Operation::Read(buf) => {
                        for b in buf.iter_mut() {
                            *b = self.regs[self.pointer % 8];
                            self.pointer += 1;
                        }
                    }
                }
            }
            Ok(())
        }
    }

    fn sample() -> DateTime {
        DateTime {
            year: 2024,
            month: 12,
            day: 31,
            weekday: 2,
            hour: 23,
            minute: 59,
            second: 58,
        }
    }

    #[test]
    fn test_read_24h() {
        let bus = MockBus::new([0x58, 0x59, 0x23, 0x02, 0x31, 0x12, 0x24]);
        let mut rtc = Ds1307::new(bus);
        assert_eq!(block_on(rtc.datetime()), Ok(sample()));
    }

    #[test]
    fn test_read_12h_pm() {
        // 11 PM in 12-hour mode
        let bus = MockBus::new([0x00, 0x30, MODE_12H | PM | 0x11, 0x01, 0x01, 0x01, 0x24]);
        let mut rtc = Ds1307::new(bus);
        let dt = block_on(rtc.datetime()).unwrap();
        assert_eq!(dt.hour, 23);
        assert_eq!(dt.minute, 30);
    }

    #[test]
    fn test_halted_clock_ignores_ch_bit() {
        let bus = MockBus::new([CLOCK_HALT | 0x12, 0x00, 0x00, 0x01, 0x01, 0x01, 0x00]);
        let mut rtc = Ds1307::new(bus);
        assert_eq!(block_on(rtc.is_running()), Ok(false));
        let dt = block_on(rtc.datetime()).unwrap();
        assert_eq!(dt.second, 12);
        assert_eq!(dt.year, 2000);
        assert!(!dt.is_plausible());
    }

    #[test]
    fn test_start_clears_halt() {
        let bus = MockBus::new([CLOCK_HALT | 0x12, 0, 0, 1, 1, 1, 0]);
        let mut rtc = Ds1307::new(bus);
        block_on(rtc.start()).unwrap();
        assert_eq!(block_on(rtc.is_running()), Ok(true));
        assert_eq!(rtc.release().regs[0], 0x12);
    }

    #[test]
    fn test_garbage_registers() {
        let bus = MockBus::new([0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        let mut rtc = Ds1307::new(bus);
        assert_eq!(block_on(rtc.datetime()), Err(RtcError::InvalidData));
    }

    #[test]
    fn test_set_then_read() {
        let mut rtc = Ds1307::new(MockBus::new([CLOCK_HALT, 0, 0, 1, 1, 1, 0]));
        block_on(rtc.set_datetime(&sample())).unwrap();
        assert_eq!(block_on(rtc.is_running()), Ok(true));
        assert_eq!(block_on(rtc.datetime()), Ok(sample()));
        let regs = rtc.release().regs;
        assert_eq!(&regs[..7], &[0x58, 0x59, 0x23, 0x02, 0x31, 0x12, 0x24]);
    }

    #[test]
    fn test_set_rejects_out_of_century() {
        let mut rtc = Ds1307::new(MockBus::new([0; 7]));
        let dt = DateTime { year: 2100, ..sample() };
        assert_eq!(block_on(rtc.set_datetime(&dt)), Err(RtcError::InvalidData));
    }

    #[test]
    fn test_bus_error() {
        let mut bus = MockBus::new([0; 7]);
        bus.fail = true;
        let mut rtc = Ds1307::new(bus);
        assert_eq!(block_on(rtc.datetime()), Err(RtcError::Bus(ErrorKind::Other)));
    }
}
