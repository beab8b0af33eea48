//! This module implements `Date` and any directly related algorithms.

use core::cmp::Ordering;

use crate::{
    builtins::core::{calendar::Calendar, PlainMonthDay, PlainYearMonth},
    iso::{IsoDate, IsoDateSlots},
    options::ArithmeticOverflow,
    MonthCode, ValueError, ValueResult,
};

/// The native Rust implementation of `Temporal.PlainDate`.
///
/// A `PlainDate` always holds a valid ISO date and a reference to the
/// calendar it was created with.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlainDate {
    pub(crate) iso: IsoDate,
    calendar: Calendar,
}

// ==== Private API ====

impl PlainDate {
    /// Create a new `PlainDate` with the date values and calendar slot.
    #[inline]
    #[must_use]
    pub(crate) fn new_unchecked(iso: IsoDate, calendar: Calendar) -> Self {
        Self { iso, calendar }
    }
}

// ==== Public API ====

impl PlainDate {
    /// Creates a new `PlainDate` automatically constraining any values that may be invalid.
    #[inline]
    pub fn new(year: i32, month: i32, day: i32, calendar: Calendar) -> ValueResult<Self> {
        Self::new_with_overflow(year, month, day, calendar, ArithmeticOverflow::Constrain)
    }

    /// Creates a new `PlainDate` rejecting any date that may be invalid.
    ///
    /// ```rust
    /// use immutable_values::{Calendar, PlainDate};
    ///
    /// assert!(PlainDate::try_new(2000, 2, 29, Calendar::default()).is_ok());
    /// assert!(PlainDate::try_new(1900, 2, 29, Calendar::default()).is_err());
    /// ```
    #[inline]
    pub fn try_new(year: i32, month: i32, day: i32, calendar: Calendar) -> ValueResult<Self> {
        Self::new_with_overflow(year, month, day, calendar, ArithmeticOverflow::Reject)
    }

    /// Creates a new `PlainDate` with the specified overflow.
    ///
    /// This operation is the public facing API to Temporal's `RegulateIsoDate`
    #[inline]
    pub fn new_with_overflow(
        year: i32,
        month: i32,
        day: i32,
        calendar: Calendar,
        overflow: ArithmeticOverflow,
    ) -> ValueResult<Self> {
        let iso = match overflow {
            ArithmeticOverflow::Reject => {
                if !calendar.is_valid_date(year, month, day) {
                    return Err(ValueError::range().with_message("Not a valid date."));
                }
                // NOTE: Month and day were validated to be in a u8 range.
                IsoDate::new_unchecked(year, month as u8, day as u8)
            }
            ArithmeticOverflow::Constrain => {
                IsoDate::new_with_overflow(year, month, day, ArithmeticOverflow::Constrain)?
            }
        };
        Ok(Self::new_unchecked(iso, calendar))
    }

    /// Compares one `PlainDate` to another `PlainDate` using their
    /// `IsoDate` representation.
    ///
    /// # Note on Ordering.
    ///
    /// `immutable_values` does not implement `PartialOrd`/`Ord` as `PlainDate` does
    /// not fulfill all the conditions required to implement the traits. However,
    /// it is possible to compare `PlainDate`'s as their `IsoDate` representation.
    #[inline]
    #[must_use]
    pub fn compare_iso(&self, other: &Self) -> Ordering {
        self.iso.cmp(&other.iso)
    }

    /// `DaysUntil`
    ///
    /// Calculates the epoch days between two `PlainDate`s
    #[inline]
    #[must_use]
    pub fn days_until(&self, other: &Self) -> i64 {
        other.iso.to_epoch_days() - self.iso.to_epoch_days()
    }

    /// Returns this date's ISO year value.
    #[inline]
    #[must_use]
    pub const fn iso_year(&self) -> i32 {
        self.iso.year
    }

    /// Returns this date's ISO month value.
    #[inline]
    #[must_use]
    pub const fn iso_month(&self) -> u8 {
        self.iso.month
    }

    /// Returns this date's ISO day value.
    #[inline]
    #[must_use]
    pub const fn iso_day(&self) -> u8 {
        self.iso.day
    }

    /// Returns a reference to this date's calendar.
    #[inline]
    #[must_use]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Returns the calendar identifier.
    #[inline]
    #[must_use]
    pub fn calendar_id(&self) -> &'static str {
        self.calendar.identifier()
    }

    /// Returns the number of days since 1970-01-01.
    #[inline]
    #[must_use]
    pub fn epoch_days(&self) -> i64 {
        self.iso.to_epoch_days()
    }
}

// ==== Calendar-derived Public API ====

impl PlainDate {
    /// Returns the calendar year value.
    pub fn year(&self) -> i32 {
        self.calendar.year(&self.iso)
    }

    /// Returns the calendar month value.
    pub fn month(&self) -> u8 {
        self.calendar.month(&self.iso)
    }

    /// Returns the calendar month code value.
    pub fn month_code(&self) -> ValueResult<MonthCode> {
        self.calendar.month_code(&self.iso)
    }

    /// Returns the calendar day value.
    pub fn day(&self) -> u8 {
        self.calendar.day(&self.iso)
    }

    /// Returns the calendar day of week value, where Monday is 1.
    pub fn day_of_week(&self) -> u16 {
        self.calendar.day_of_week(&self.iso)
    }

    /// Returns the calendar day of year value.
    pub fn day_of_year(&self) -> u16 {
        self.calendar.day_of_year(&self.iso)
    }

    /// Returns the calendar week of year value.
    pub fn week_of_year(&self) -> u16 {
        self.calendar.week_of_year(&self.iso)
    }

    /// Returns the calendar year of week value.
    pub fn year_of_week(&self) -> i32 {
        self.calendar.year_of_week(&self.iso)
    }

    /// Returns the calendar days in week value.
    pub fn days_in_week(&self) -> u16 {
        self.calendar.days_in_week(&self.iso)
    }

    /// Returns the calendar days in month value.
    pub fn days_in_month(&self) -> u16 {
        self.calendar.days_in_month(&self.iso)
    }

    /// Returns the calendar days in year value.
    pub fn days_in_year(&self) -> u16 {
        self.calendar.days_in_year(&self.iso)
    }

    /// Returns the calendar months in year value.
    pub fn months_in_year(&self) -> u16 {
        self.calendar.months_in_year(&self.iso)
    }

    /// Returns whether the date is in a leap year of its calendar.
    pub fn in_leap_year(&self) -> bool {
        self.calendar.in_leap_year(&self.iso)
    }
}

// ==== Conversions ====

impl PlainDate {
    /// Converts the current `PlainDate` into a `PlainYearMonth`
    ///
    /// The day of this date is dropped, the result anchors on day 1.
    pub fn to_plain_year_month(&self) -> ValueResult<PlainYearMonth> {
        PlainYearMonth::try_new(
            self.iso_year(),
            self.iso_month().into(),
            None,
            self.calendar,
        )
    }

    /// Converts the current `PlainDate` into a `PlainMonthDay`
    pub fn to_plain_month_day(&self) -> ValueResult<PlainMonthDay> {
        PlainMonthDay::try_new(
            self.iso_month().into(),
            self.iso_day().into(),
            self.calendar,
            None,
        )
    }
}

impl IsoDateSlots for PlainDate {
    /// Returns the structs `IsoDate`
    fn iso_date(&self) -> IsoDate {
        self.iso
    }
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use super::PlainDate;
    use crate::{options::ArithmeticOverflow, Calendar};

    #[test]
    fn leap_year_validation() {
        let cal = Calendar::default();
        assert!(PlainDate::try_new(2000, 2, 29, cal).is_ok());
        assert!(PlainDate::try_new(2004, 2, 29, cal).is_ok());

        let err = PlainDate::try_new(1900, 2, 29, cal).unwrap_err();
        assert!(err.is_range());
        assert_eq!(err.message(), "Not a valid date.");
        assert!(PlainDate::try_new(2001, 2, 29, cal).is_err());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let cal = Calendar::default();
        assert!(PlainDate::try_new(2020, 0, 1, cal).is_err());
        assert!(PlainDate::try_new(2020, 13, 1, cal).is_err());
        assert!(PlainDate::try_new(2020, 4, 31, cal).is_err());
        assert!(PlainDate::try_new(2020, 1, 0, cal).is_err());
        assert!(PlainDate::try_new(2020, 1, 256, cal).is_err());
        assert!(PlainDate::try_new(-271_821, 4, 19, cal).is_ok());
    }

    #[test]
    fn constrain_overflow() {
        let date = PlainDate::new(2021, 2, 31, Calendar::default()).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2021, 2, 28));

        let date = PlainDate::new_with_overflow(
            2021,
            13,
            40,
            Calendar::default(),
            ArithmeticOverflow::Constrain,
        )
        .unwrap();
        assert_eq!((date.iso_month(), date.iso_day()), (12, 31));
    }

    #[test]
    fn calendar_fields() {
        let date = PlainDate::try_new(2024, 2, 29, Calendar::default()).unwrap();
        assert_eq!(date.calendar_id(), "iso8601");
        assert_eq!(date.month_code().unwrap().as_str(), "M02");
        assert_eq!(date.day_of_week(), 4);
        assert_eq!(date.day_of_year(), 60);
        assert_eq!(date.week_of_year(), 9);
        assert_eq!(date.year_of_week(), 2024);
        assert_eq!(date.days_in_week(), 7);
        assert_eq!(date.days_in_month(), 29);
        assert_eq!(date.days_in_year(), 366);
        assert_eq!(date.months_in_year(), 12);
        assert!(date.in_leap_year());
    }

    #[test]
    fn ordering_and_distance() {
        let cal = Calendar::default();
        let one = PlainDate::try_new(1969, 12, 31, cal).unwrap();
        let two = PlainDate::try_new(1970, 1, 1, cal).unwrap();
        assert_eq!(one.compare_iso(&two), Ordering::Less);
        assert_eq!(two.compare_iso(&two), Ordering::Equal);
        assert_eq!(one.days_until(&two), 1);
        assert_eq!(two.epoch_days(), 0);
    }

    #[test]
    fn conversions() {
        let date = PlainDate::try_new(2024, 2, 29, Calendar::default()).unwrap();

        let year_month = date.to_plain_year_month().unwrap();
        assert_eq!(year_month.iso_year(), 2024);
        assert_eq!(year_month.iso_month(), 2);

        let month_day = date.to_plain_month_day().unwrap();
        assert_eq!(month_day.iso_month(), 2);
        assert_eq!(month_day.iso_day(), 29);
        assert!(month_day.to_plain_date(2023).is_err());
        assert_eq!(month_day.to_plain_date(2024).unwrap(), date);
    }
}
