//! This module implements `YearMonth` and any directly related algorithms.

use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::{
    builtins::core::{calendar::Calendar, PlainDate},
    iso::{IsoDate, IsoDateSlots},
    options::ArithmeticOverflow,
    MonthCode, StructuralEq, ValueError, ValueResult,
};

/// The reference day used when none is provided.
const DEFAULT_REFERENCE_DAY: i32 = 1;

/// The native Rust implementation of `Temporal.YearMonth`.
///
/// The ISO day slot is only an anchor that keeps the value computable by
/// its calendar. It is not an observable field.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainYearMonth {
    pub(crate) iso: IsoDate,
    calendar: Calendar,
}

impl PlainYearMonth {
    /// Creates an unvalidated `YearMonth`.
    #[inline]
    #[must_use]
    pub(crate) fn new_unchecked(iso: IsoDate, calendar: Calendar) -> Self {
        Self { iso, calendar }
    }

    /// Creates a new `YearMonth`, rejecting any invalid field.
    ///
    /// ```rust
    /// use immutable_values::{Calendar, PlainYearMonth};
    ///
    /// let year_month = PlainYearMonth::try_new(2024, 2, None, Calendar::default()).unwrap();
    /// assert_eq!(year_month.days_in_month(), 29);
    /// assert!(PlainYearMonth::try_new(2024, 13, None, Calendar::default()).is_err());
    /// ```
    #[inline]
    pub fn try_new(
        year: i32,
        month: i32,
        reference_day: Option<i32>,
        calendar: Calendar,
    ) -> ValueResult<Self> {
        Self::new_with_overflow(
            year,
            month,
            reference_day,
            calendar,
            ArithmeticOverflow::Reject,
        )
    }

    /// Creates a new valid `YearMonth`.
    #[inline]
    pub fn new_with_overflow(
        year: i32,
        month: i32,
        reference_day: Option<i32>,
        calendar: Calendar,
        overflow: ArithmeticOverflow,
    ) -> ValueResult<Self> {
        let day = reference_day.unwrap_or(DEFAULT_REFERENCE_DAY);
        if overflow == ArithmeticOverflow::Reject && !calendar.is_valid_date(year, month, day) {
            return Err(ValueError::range().with_message("Not a valid date."));
        }
        let iso = IsoDate::new_with_overflow(year, month, day, overflow)?;
        Ok(Self::new_unchecked(iso, calendar))
    }

    /// Returns the iso year value for this `YearMonth`.
    #[inline]
    #[must_use]
    pub fn iso_year(&self) -> i32 {
        self.iso.year
    }

    /// Returns the iso month value for this `YearMonth`.
    #[inline]
    #[must_use]
    pub fn iso_month(&self) -> u8 {
        self.iso.month
    }

    /// Returns the reference day for this `YearMonth`.
    #[inline]
    #[must_use]
    pub fn reference_day(&self) -> u8 {
        self.iso.day
    }

    pub fn year(&self) -> i32 {
        self.calendar.year(&self.iso)
    }

    pub fn month(&self) -> u8 {
        self.calendar.month(&self.iso)
    }

    pub fn month_code(&self) -> ValueResult<MonthCode> {
        self.calendar.month_code(&self.iso)
    }

    #[inline]
    #[must_use]
    pub fn in_leap_year(&self) -> bool {
        self.calendar.in_leap_year(&self.iso)
    }

    pub fn days_in_month(&self) -> u16 {
        self.calendar.days_in_month(&self.iso)
    }

    pub fn days_in_year(&self) -> u16 {
        self.calendar.days_in_year(&self.iso)
    }

    #[inline]
    #[must_use]
    pub fn months_in_year(&self) -> u16 {
        self.calendar.months_in_year(&self.iso)
    }

    /// Returns the Calendar value.
    #[inline]
    #[must_use]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Returns the string identifier for the current calendar.
    #[inline]
    #[must_use]
    pub fn calendar_id(&self) -> &'static str {
        self.calendar.identifier()
    }

    /// Compares the year and month of two `YearMonth`s, ignoring the
    /// reference day.
    #[inline]
    #[must_use]
    pub fn compare_iso(&self, other: &Self) -> Ordering {
        (self.iso.year, self.iso.month).cmp(&(other.iso.year, other.iso.month))
    }

    /// Returns whether both values denote the same year and month of the
    /// same calendar, ignoring the reference day.
    #[inline]
    #[must_use]
    pub fn same_year_month(&self, other: &Self) -> bool {
        self.compare_iso(other) == Ordering::Equal && self.calendar == other.calendar
    }

    /// Creates a `PlainDate` on `day` of this year and month.
    pub fn to_plain_date(&self, day: i32) -> ValueResult<PlainDate> {
        PlainDate::try_new(self.iso.year, self.iso.month.into(), day, self.calendar)
    }
}

impl PartialEq for PlainYearMonth {
    fn eq(&self, other: &Self) -> bool {
        self.same_year_month(other)
    }
}

impl Eq for PlainYearMonth {}

impl Hash for PlainYearMonth {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_into(state);
    }
}

impl IsoDateSlots for PlainYearMonth {
    fn iso_date(&self) -> IsoDate {
        self.iso
    }
}
