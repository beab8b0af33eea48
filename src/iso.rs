//! This module implements the internal ISO field slots.
//!
//! The two types of slots are:
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDate` represents the `[[ISOYear]]`, `[[ISOMonth]]`, and `[[ISODay]]` internal slots.
//!
//! An `IsoTime` represents the `[[ISOHour]]`, `[[ISOMinute]]`, `[[ISOsecond]]`, `[[ISOmillisecond]]`,
//! `[[ISOmicrosecond]]`, and `[[ISOnanosecond]]` internal slots.

use crate::{options::ArithmeticOverflow, utils, ValueError, ValueResult};

// ==== `IsoDate` section ====

/// A trait for accessing the `IsoDate` across the various Temporal objects
pub trait IsoDateSlots {
    /// Returns the target's internal `IsoDate`.
    fn iso_date(&self) -> IsoDate;
}

/// `IsoDate` serves as a record for the `[[ISOYear]]`, `[[ISOMonth]]`,
/// and `[[ISODay]]` internal fields.
///
/// These fields are used for the `Temporal.PlainDate` object, the
/// `Temporal.YearMonth` object, and the `Temporal.MonthDay` object.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Default for IsoDate {
    fn default() -> Self {
        Self::new_unchecked(1970, 1, 1)
    }
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new regulated `IsoDate`.
    ///
    /// `Reject` fails on any field outside of its domain, while `Constrain`
    /// clamps the month to 1..=12 and the day to the length of that month.
    pub fn new_with_overflow(
        year: i32,
        month: i32,
        day: i32,
        overflow: ArithmeticOverflow,
    ) -> ValueResult<Self> {
        match overflow {
            ArithmeticOverflow::Constrain => {
                let month = month.clamp(1, 12);
                let day = constrain_iso_day(year, month, day);
                crate::value_assert!(
                    is_valid_iso_day(year, month, day.into()),
                    "constrained day {day} is outside of month {month}"
                );
                // NOTE: Values are clamped in a u8 range.
                Ok(Self::new_unchecked(year, month as u8, day))
            }
            ArithmeticOverflow::Reject => {
                if !is_valid_date(year, month, day) {
                    return Err(ValueError::range().with_message("Not a valid date."));
                }
                // NOTE: Values have been verified to be in a u8 range.
                Ok(Self::new_unchecked(year, month as u8, day as u8))
            }
        }
    }

    /// Functionally the same as Date's abstract operation `MakeDay`
    ///
    /// Equivalent to `IsoDateToEpochDays`
    #[inline]
    #[must_use]
    pub fn to_epoch_days(self) -> i64 {
        utils::iso_date_to_epoch_days(self.year, self.month, self.day)
    }

    /// Returns if the current `IsoDate` is valid.
    #[inline]
    #[must_use]
    pub fn is_valid(self) -> bool {
        is_valid_date(self.year, self.month.into(), self.day.into())
    }
}

// ==== `IsoTime` section ====

/// An `IsoTime` record that contains `Temporal`'s
/// time slots.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,         // 0..=23
    pub minute: u8,       // 0..=59
    pub second: u8,       // 0..=59
    pub millisecond: u16, // 0..=999
    pub microsecond: u16, // 0..=999
    pub nanosecond: u16,  // 0..=999
}

impl IsoTime {
    /// Creates a new `IsoTime` without any validation.
    pub(crate) const fn new_unchecked(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
        nanosecond: u16,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
        }
    }

    /// Creates a new regulated `IsoTime`.
    ///
    /// No carry happens between fields: with `Reject` a second of 60 is an
    /// error, with `Constrain` it becomes 59.
    pub fn new(
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
        microsecond: i32,
        nanosecond: i32,
        overflow: ArithmeticOverflow,
    ) -> ValueResult<IsoTime> {
        match overflow {
            ArithmeticOverflow::Constrain => {
                let h = hour.clamp(0, 23) as u8;
                let min = minute.clamp(0, 59) as u8;
                let sec = second.clamp(0, 59) as u8;
                let milli = millisecond.clamp(0, 999) as u16;
                let micro = microsecond.clamp(0, 999) as u16;
                let nano = nanosecond.clamp(0, 999) as u16;
                Ok(Self::new_unchecked(h, min, sec, milli, micro, nano))
            }
            ArithmeticOverflow::Reject => {
                if !is_valid_time(hour, minute, second, millisecond, microsecond, nanosecond) {
                    return Err(ValueError::range().with_message("Not a valid time."));
                };
                Ok(Self::new_unchecked(
                    hour as u8,
                    minute as u8,
                    second as u8,
                    millisecond as u16,
                    microsecond as u16,
                    nanosecond as u16,
                ))
            }
        }
    }

    /// Balances and creates a new `IsoTime` with `day` overflow from the provided values.
    pub(crate) fn balance(
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
        microsecond: i64,
        nanosecond: i64,
    ) -> (i64, Self) {
        // 1. Set microsecond to microsecond + floor(nanosecond / 1000).
        // 2. Set nanosecond to nanosecond modulo 1000.
        let (quotient, nanosecond) = div_mod(nanosecond, 1000);
        let microsecond = microsecond.saturating_add(quotient);

        // 3. Set millisecond to millisecond + floor(microsecond / 1000).
        // 4. Set microsecond to microsecond modulo 1000.
        let (quotient, microsecond) = div_mod(microsecond, 1000);
        let millisecond = millisecond.saturating_add(quotient);

        // 5. Set second to second + floor(millisecond / 1000).
        // 6. Set millisecond to millisecond modulo 1000.
        let (quotient, millisecond) = div_mod(millisecond, 1000);
        let second = second.saturating_add(quotient);

        // 7. Set minute to minute + floor(second / 60).
        // 8. Set second to second modulo 60.
        let (quotient, second) = div_mod(second, 60);
        let minute = minute.saturating_add(quotient);

        // 9. Set hour to hour + floor(minute / 60).
        // 10. Set minute to minute modulo 60.
        let (quotient, minute) = div_mod(minute, 60);
        let hour = hour.saturating_add(quotient);

        // 11. Let days be floor(hour / 24).
        // 12. Set hour to hour modulo 24.
        let (days, hour) = div_mod(hour, 24);

        let time = Self::new_unchecked(
            hour as u8,
            minute as u8,
            second as u8,
            millisecond as u16,
            microsecond as u16,
            nanosecond as u16,
        );

        (days, time)
    }

    /// Checks if the time is a valid `IsoTime`
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_time(
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
            self.millisecond.into(),
            self.microsecond.into(),
            self.nanosecond.into(),
        )
    }
}

// ==== `IsoDate` specific utility functions ====

#[inline]
/// Determines if the month and day are valid for the given year.
///
/// This is the single validation routine backing `PlainDate`,
/// `PlainYearMonth`, and `PlainMonthDay`.
pub(crate) fn is_valid_date(year: i32, month: i32, day: i32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    is_valid_iso_day(year, month, day)
}

#[inline]
pub(crate) fn constrain_iso_day(year: i32, month: i32, day: i32) -> u8 {
    let days_in_month = utils::iso_days_in_month(year, month);
    day.clamp(1, days_in_month) as u8
}

#[inline]
pub(crate) fn is_valid_iso_day(year: i32, month: i32, day: i32) -> bool {
    let days_in_month = utils::iso_days_in_month(year, month);
    (1..=days_in_month).contains(&day)
}

// ==== `IsoTime` specific utilities ====

#[inline]
fn is_valid_time(hour: i32, minute: i32, second: i32, ms: i32, mis: i32, ns: i32) -> bool {
    if !(0..=23).contains(&hour) {
        return false;
    }

    let min_sec = 0..=59;
    if !min_sec.contains(&minute) || !min_sec.contains(&second) {
        return false;
    }

    let sub_second = 0..=999;
    sub_second.contains(&ms) && sub_second.contains(&mis) && sub_second.contains(&ns)
}

#[inline]
fn div_mod(dividend: i64, divisor: i64) -> (i64, i64) {
    (dividend.div_euclid(divisor), dividend.rem_euclid(divisor))
}

#[cfg(test)]
mod tests {
    use super::{is_valid_date, IsoDate, IsoTime};
    use crate::options::ArithmeticOverflow;

    #[test]
    fn leap_day_boundaries() {
        assert!(is_valid_date(2000, 2, 29));
        assert!(!is_valid_date(1900, 2, 29));
        assert!(is_valid_date(2004, 2, 29));
        assert!(!is_valid_date(2001, 2, 29));
    }

    #[test]
    fn accepted_dates_satisfy_field_ranges() {
        for year in [-400, -1, 0, 1, 1900, 1999, 2000, 2023, 2024] {
            for month in -1..=14 {
                for day in -1..=33 {
                    let accepted = is_valid_date(year, month, day);
                    let expected = (1..=12).contains(&month)
                        && day >= 1
                        && day <= crate::utils::iso_days_in_month(year, month);
                    assert_eq!(accepted, expected, "{year}-{month}-{day}");
                }
            }
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let first = is_valid_date(2024, 2, 29);
        for _ in 0..16 {
            assert_eq!(is_valid_date(2024, 2, 29), first);
        }
    }

    #[test]
    fn extreme_years_are_representable() {
        assert!(is_valid_date(i32::MAX, 12, 31));
        assert!(is_valid_date(i32::MIN, 1, 1));
    }

    #[test]
    fn constrain_date() {
        let date = IsoDate::new_with_overflow(2001, 2, 31, ArithmeticOverflow::Constrain).unwrap();
        assert_eq!((date.year, date.month, date.day), (2001, 2, 28));

        let date = IsoDate::new_with_overflow(2001, 14, 0, ArithmeticOverflow::Constrain).unwrap();
        assert_eq!((date.year, date.month, date.day), (2001, 12, 1));

        let err = IsoDate::new_with_overflow(2001, 2, 31, ArithmeticOverflow::Reject).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn time_no_carry() {
        assert!(IsoTime::new(0, 0, 60, 0, 0, 0, ArithmeticOverflow::Reject).is_err());
        let constrained = IsoTime::new(0, 0, 60, 0, 0, 0, ArithmeticOverflow::Constrain).unwrap();
        assert_eq!((constrained.minute, constrained.second), (0, 59));
    }

    #[test]
    fn time_balance() {
        let (days, time) = IsoTime::balance(23, 59, 59, 999, 999, 1_000);
        assert_eq!(days, 1);
        assert_eq!(time, IsoTime::default());

        let (days, time) = IsoTime::balance(0, 0, 0, 0, 0, -1);
        assert_eq!(days, -1);
        assert_eq!(time, IsoTime::new_unchecked(23, 59, 59, 999, 999, 999));
        assert!(time.is_valid());
        assert!(IsoTime::new_unchecked(12, 0, 0, 0, 0, 0) < time);
    }
}
