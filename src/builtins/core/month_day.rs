//! This module implements `MonthDay` and any directly related algorithms.

use core::hash::{Hash, Hasher};

use crate::{
    builtins::core::{calendar::Calendar, PlainDate},
    iso::{IsoDate, IsoDateSlots},
    options::ArithmeticOverflow,
    MonthCode, StructuralEq, ValueError, ValueResult,
};

/// The reference year used when none is provided.
///
/// 1972 is the first leap year after the epoch, so `--02-29` is representable.
const DEFAULT_REFERENCE_YEAR: i32 = 1972;

/// The native Rust implementation of `Temporal.PlainMonthDay`
///
/// The ISO year slot is a calendar calculation anchor and is not an
/// observable field. Use [`PlainMonthDay::same_month_day`] to compare the
/// logical month and day.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainMonthDay {
    pub(crate) iso: IsoDate,
    calendar: Calendar,
}

impl PlainMonthDay {
    /// Creates a new unchecked `PlainMonthDay`
    #[inline]
    #[must_use]
    pub(crate) fn new_unchecked(iso: IsoDate, calendar: Calendar) -> Self {
        Self { iso, calendar }
    }

    /// Creates a new `PlainMonthDay`, rejecting any invalid field.
    ///
    /// ```rust
    /// use immutable_values::{Calendar, PlainMonthDay};
    ///
    /// let leap_day = PlainMonthDay::try_new(2, 29, Calendar::default(), None).unwrap();
    /// assert_eq!(leap_day.iso_year(), 1972);
    /// assert!(PlainMonthDay::try_new(2, 29, Calendar::default(), Some(1971)).is_err());
    /// ```
    #[inline]
    pub fn try_new(
        month: i32,
        day: i32,
        calendar: Calendar,
        reference_year: Option<i32>,
    ) -> ValueResult<Self> {
        Self::new_with_overflow(
            month,
            day,
            calendar,
            ArithmeticOverflow::Reject,
            reference_year,
        )
    }

    /// Creates a new valid `MonthDay`.
    #[inline]
    pub fn new_with_overflow(
        month: i32,
        day: i32,
        calendar: Calendar,
        overflow: ArithmeticOverflow,
        reference_year: Option<i32>,
    ) -> ValueResult<Self> {
        let year = reference_year.unwrap_or(DEFAULT_REFERENCE_YEAR);
        if overflow == ArithmeticOverflow::Reject && !calendar.is_valid_date(year, month, day) {
            return Err(ValueError::range().with_message("Not a valid date."));
        }
        let iso = IsoDate::new_with_overflow(year, month, day, overflow)?;
        Ok(Self::new_unchecked(iso, calendar))
    }

    /// Returns the ISO day value of `PlainMonthDay`.
    #[inline]
    #[must_use]
    pub fn iso_day(&self) -> u8 {
        self.iso.day
    }

    // Returns the ISO month value of `PlainMonthDay`.
    #[inline]
    #[must_use]
    pub fn iso_month(&self) -> u8 {
        self.iso.month
    }

    // Returns the ISO reference year of `PlainMonthDay`.
    #[inline]
    #[must_use]
    pub fn iso_year(&self) -> i32 {
        self.iso.year
    }

    /// Returns the string identifier for the current `Calendar`.
    #[inline]
    #[must_use]
    pub fn calendar_id(&self) -> &'static str {
        self.calendar.identifier()
    }

    /// Returns a reference to `PlainMonthDay`'s inner `Calendar`.
    #[inline]
    #[must_use]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Returns the calendar `monthCode` value of `PlainMonthDay`.
    #[inline]
    pub fn month_code(&self) -> ValueResult<MonthCode> {
        self.calendar.month_code(&self.iso)
    }

    /// Returns the calendar day value of `PlainMonthDay`.
    #[inline]
    pub fn day(&self) -> u8 {
        self.calendar.day(&self.iso)
    }

    /// Returns whether both values denote the same month and day of the same
    /// calendar, regardless of their reference years.
    #[inline]
    #[must_use]
    pub fn same_month_day(&self, other: &Self) -> bool {
        self.iso.month == other.iso.month
            && self.iso.day == other.iso.day
            && self.calendar == other.calendar
    }

    /// Creates a `PlainDate` for this month and day in `year`.
    ///
    /// Fails with a `RangeError` when the day does not exist in `year`.
    pub fn to_plain_date(&self, year: i32) -> ValueResult<PlainDate> {
        PlainDate::try_new(
            year,
            self.iso.month.into(),
            self.iso.day.into(),
            self.calendar,
        )
    }
}

impl PartialEq for PlainMonthDay {
    fn eq(&self, other: &Self) -> bool {
        self.same_month_day(other)
    }
}

impl Eq for PlainMonthDay {}

impl Hash for PlainMonthDay {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_into(state);
    }
}

impl IsoDateSlots for PlainMonthDay {
    fn iso_date(&self) -> IsoDate {
        self.iso
    }
}

#[cfg(test)]
mod tests {
    use core::hash::{Hash, Hasher};

    use rustc_hash::FxHasher;

    use super::PlainMonthDay;
    use crate::{options::ArithmeticOverflow, Calendar};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = FxHasher::default();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn reference_year_validation() {
        let cal = Calendar::default();
        let month_day = PlainMonthDay::try_new(5, 15, cal, None).unwrap();
        assert_eq!(month_day.iso_year(), 1972);
        assert_eq!(month_day.month_code().unwrap().as_str(), "M05");
        assert_eq!(month_day.day(), 15);

        assert!(PlainMonthDay::try_new(2, 29, cal, Some(2000)).is_ok());
        let err = PlainMonthDay::try_new(2, 29, cal, Some(1900)).unwrap_err();
        assert!(err.is_range());
        assert!(PlainMonthDay::try_new(4, 31, cal, None).is_err());
        assert!(PlainMonthDay::try_new(13, 1, cal, None).is_err());
    }

    #[test]
    fn constrain_month_day() {
        let month_day = PlainMonthDay::new_with_overflow(
            2,
            30,
            Calendar::default(),
            ArithmeticOverflow::Constrain,
            None,
        )
        .unwrap();
        assert_eq!((month_day.iso_month(), month_day.iso_day()), (2, 29));
    }

    #[test]
    fn reference_year_is_not_identity() {
        let cal = Calendar::default();
        let one = PlainMonthDay::try_new(3, 1, cal, Some(1972)).unwrap();
        let two = PlainMonthDay::try_new(3, 1, cal, Some(2001)).unwrap();
        assert!(one.same_month_day(&two));
        assert_eq!(one, two);
        assert_eq!((one.iso_year(), two.iso_year()), (1972, 2001));
        assert_eq!(hash_of(&one), hash_of(&two));

        let other = PlainMonthDay::try_new(3, 2, cal, Some(1972)).unwrap();
        assert!(!one.same_month_day(&other));
    }

    #[test]
    fn to_plain_date_with_year() {
        let month_day = PlainMonthDay::try_new(5, 15, Calendar::default(), None).unwrap();
        let date = month_day.to_plain_date(2025).unwrap();
        assert_eq!(date.iso_year(), 2025);
        assert_eq!(date.iso_month(), 5);
        assert_eq!(date.iso_day(), 15);

        let leap_day = PlainMonthDay::try_new(2, 29, Calendar::default(), None).unwrap();
        assert!(leap_day.to_plain_date(2023).is_err());
        assert!(leap_day.to_plain_date(2024).is_ok());
    }
}
