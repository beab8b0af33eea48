//! An implementation of `TimeDuration` and it's methods.

use crate::{Sign, ValueError, ValueResult};

use super::{duration_sign, is_valid_duration};

/// `TimeDuration` represents the time portion of a `Duration`.
///
/// Its components always agree in sign, so it converts into a `Duration`
/// without further checks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeDuration {
    /// `TimeDuration`'s internal hour value.
    pub(crate) hours: i64,
    /// `TimeDuration`'s internal minute value.
    pub(crate) minutes: i64,
    /// `TimeDuration`'s internal second value.
    pub(crate) seconds: i64,
    /// `TimeDuration`'s internal millisecond value.
    pub(crate) milliseconds: i64,
    /// `TimeDuration`'s internal microsecond value.
    pub(crate) microseconds: i64,
    /// `TimeDuration`'s internal nanosecond value.
    pub(crate) nanoseconds: i64,
}

impl TimeDuration {
    /// Creates a new `TimeDuration`.
    #[must_use]
    pub(crate) const fn new_unchecked(
        hours: i64,
        minutes: i64,
        seconds: i64,
        milliseconds: i64,
        microseconds: i64,
        nanoseconds: i64,
    ) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
            nanoseconds,
        }
    }

    /// Creates a new validated `TimeDuration`.
    pub fn new(
        hours: i64,
        minutes: i64,
        seconds: i64,
        milliseconds: i64,
        microseconds: i64,
        nanoseconds: i64,
    ) -> ValueResult<Self> {
        let result = Self::new_unchecked(
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
            nanoseconds,
        );
        if !is_valid_duration(&result.fields()) {
            return Err(ValueError::range().with_message("Given duration outside range."));
        }
        Ok(result)
    }

    /// Returns the hours component.
    #[inline]
    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.hours
    }

    /// Returns the minutes component.
    #[inline]
    #[must_use]
    pub const fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Returns the seconds component.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the milliseconds component.
    #[inline]
    #[must_use]
    pub const fn milliseconds(&self) -> i64 {
        self.milliseconds
    }

    /// Returns the microseconds component.
    #[inline]
    #[must_use]
    pub const fn microseconds(&self) -> i64 {
        self.microseconds
    }

    /// Returns the nanoseconds component.
    #[inline]
    #[must_use]
    pub const fn nanoseconds(&self) -> i64 {
        self.nanoseconds
    }

    /// Returns the fields of `TimeDuration` in canonical order.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> [i64; 6] {
        [
            self.hours,
            self.minutes,
            self.seconds,
            self.milliseconds,
            self.microseconds,
            self.nanoseconds,
        ]
    }

    /// Returns a negated `TimeDuration`.
    #[inline]
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            hours: self.hours.saturating_neg(),
            minutes: self.minutes.saturating_neg(),
            seconds: self.seconds.saturating_neg(),
            milliseconds: self.milliseconds.saturating_neg(),
            microseconds: self.microseconds.saturating_neg(),
            nanoseconds: self.nanoseconds.saturating_neg(),
        }
    }

    /// Returns the current `TimeDuration` as an absolute value.
    #[inline]
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            hours: self.hours.saturating_abs(),
            minutes: self.minutes.saturating_abs(),
            seconds: self.seconds.saturating_abs(),
            milliseconds: self.milliseconds.saturating_abs(),
            microseconds: self.microseconds.saturating_abs(),
            nanoseconds: self.nanoseconds.saturating_abs(),
        }
    }

    /// Returns the sign for the current `TimeDuration`.
    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        duration_sign(&self.fields())
    }
}
