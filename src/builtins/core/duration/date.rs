//! Implementation of a `DateDuration`

use crate::{Sign, ValueError, ValueResult};

use super::{duration_sign, is_valid_duration};

/// `DateDuration` represents the date portion of a `Duration`.
///
/// Its components always agree in sign, so it converts into a `Duration`
/// without further checks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateDuration {
    /// `DateDuration`'s internal year value.
    pub(crate) years: i64,
    /// `DateDuration`'s internal month value.
    pub(crate) months: i64,
    /// `DateDuration`'s internal week value.
    pub(crate) weeks: i64,
    /// `DateDuration`'s internal day value.
    pub(crate) days: i64,
}

impl DateDuration {
    /// Creates a new, non-validated `DateDuration`.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(years: i64, months: i64, weeks: i64, days: i64) -> Self {
        Self {
            years,
            months,
            weeks,
            days,
        }
    }

    /// Creates a new `DateDuration` with provided values.
    pub fn new(years: i64, months: i64, weeks: i64, days: i64) -> ValueResult<Self> {
        let result = Self::new_unchecked(years, months, weeks, days);
        if !is_valid_duration(&result.fields()) {
            return Err(ValueError::range().with_message("Given duration outside range."));
        }
        Ok(result)
    }

    /// Returns the years component.
    #[inline]
    #[must_use]
    pub const fn years(&self) -> i64 {
        self.years
    }

    /// Returns the months component.
    #[inline]
    #[must_use]
    pub const fn months(&self) -> i64 {
        self.months
    }

    /// Returns the weeks component.
    #[inline]
    #[must_use]
    pub const fn weeks(&self) -> i64 {
        self.weeks
    }

    /// Returns the days component.
    #[inline]
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.days
    }

    /// Returns the fields of `DateDuration` in canonical order.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> [i64; 4] {
        [self.years, self.months, self.weeks, self.days]
    }

    /// Returns a negated `DateDuration`.
    #[inline]
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            years: self.years.saturating_neg(),
            months: self.months.saturating_neg(),
            weeks: self.weeks.saturating_neg(),
            days: self.days.saturating_neg(),
        }
    }

    /// Returns a new `DateDuration` representing the absolute value of the current.
    #[inline]
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            years: self.years.saturating_abs(),
            months: self.months.saturating_abs(),
            weeks: self.weeks.saturating_abs(),
            days: self.days.saturating_abs(),
        }
    }

    /// Returns the sign for the current `DateDuration`.
    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        duration_sign(&self.fields())
    }
}
