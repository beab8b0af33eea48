//! This module implements `Time` and any directly related algorithms.

use crate::{iso::IsoTime, options::ArithmeticOverflow, ValueError, ValueResult};

/// A `PartialTime` represents partially filled `Time` fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PartialTime {
    // A potentially set `hour` field.
    pub hour: Option<i32>,
    // A potentially set `minute` field.
    pub minute: Option<i32>,
    // A potentially set `second` field.
    pub second: Option<i32>,
    // A potentially set `millisecond` field.
    pub millisecond: Option<i32>,
    // A potentially set `microsecond` field.
    pub microsecond: Option<i32>,
    // A potentially set `nanosecond` field.
    pub nanosecond: Option<i32>,
}

impl PartialTime {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Convenience methods for building a `PartialTime`
impl PartialTime {
    pub const fn new() -> Self {
        Self {
            hour: None,
            minute: None,
            second: None,
            millisecond: None,
            microsecond: None,
            nanosecond: None,
        }
    }

    pub const fn with_hour(mut self, hour: Option<i32>) -> Self {
        self.hour = hour;
        self
    }

    pub const fn with_minute(mut self, minute: Option<i32>) -> Self {
        self.minute = minute;
        self
    }

    pub const fn with_second(mut self, second: Option<i32>) -> Self {
        self.second = second;
        self
    }

    pub const fn with_millisecond(mut self, millisecond: Option<i32>) -> Self {
        self.millisecond = millisecond;
        self
    }

    pub const fn with_microsecond(mut self, microsecond: Option<i32>) -> Self {
        self.microsecond = microsecond;
        self
    }

    pub const fn with_nanosecond(mut self, nanosecond: Option<i32>) -> Self {
        self.nanosecond = nanosecond;
        self
    }
}

/// The native Rust implementation of `Temporal.PlainTime`.
///
/// Every field is range checked on its own. Construction never carries an
/// overflowing field into the next larger one.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainTime {
    pub(crate) iso: IsoTime,
}

// ==== Private API ====

impl PlainTime {
    #[inline]
    #[must_use]
    /// Creates a new unvalidated `Time`.
    pub(crate) fn new_unchecked(iso: IsoTime) -> Self {
        Self { iso }
    }
}

// ==== Public API ====

impl PlainTime {
    /// Creates a new `PlainTime`, constraining any field into a valid range.
    ///
    /// ```rust
    /// use immutable_values::PlainTime;
    ///
    /// let time = PlainTime::new(23, 59, 60, 999, 999, 999).unwrap();
    /// assert_eq!(time.second(), 59);
    /// ```
    pub fn new(
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
        microsecond: i32,
        nanosecond: i32,
    ) -> ValueResult<Self> {
        Self::new_with_overflow(
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
            ArithmeticOverflow::Constrain,
        )
    }

    /// Creates a new `PlainTime`, rejecting any field that is not in a valid range.
    ///
    /// ```rust
    /// use immutable_values::PlainTime;
    ///
    /// let time = PlainTime::try_new(23, 59, 59, 999, 999, 999).unwrap();
    ///
    /// let invalid_time = PlainTime::try_new(24, 59, 59, 999, 999, 999);
    /// assert!(invalid_time.is_err());
    /// ```
    pub fn try_new(
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
        microsecond: i32,
        nanosecond: i32,
    ) -> ValueResult<Self> {
        Self::new_with_overflow(
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
            ArithmeticOverflow::Reject,
        )
    }

    /// Creates a new `PlainTime` with the provided [`ArithmeticOverflow`] option.
    #[inline]
    pub fn new_with_overflow(
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
        microsecond: i32,
        nanosecond: i32,
        overflow: ArithmeticOverflow,
    ) -> ValueResult<Self> {
        let time = IsoTime::new(
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
            overflow,
        )?;
        Ok(Self::new_unchecked(time))
    }

    /// Creates a new `PlainTime` from a `PartialTime`, with midnight as the
    /// fallback for missing fields.
    ///
    /// ```rust
    /// use immutable_values::{partial::PartialTime, PlainTime};
    ///
    /// let partial_time = PartialTime {
    ///     hour: Some(22),
    ///     ..Default::default()
    /// };
    ///
    /// let time = PlainTime::from_partial(partial_time, None).unwrap();
    ///
    /// assert_eq!(time.hour(), 22);
    /// assert_eq!(time.minute(), 0);
    /// ```
    pub fn from_partial(
        partial: PartialTime,
        overflow: Option<ArithmeticOverflow>,
    ) -> ValueResult<Self> {
        PlainTime::default().with(partial, overflow)
    }

    /// Creates a new `PlainTime` using the current `PlainTime` fields as a fallback.
    pub fn with(
        &self,
        partial: PartialTime,
        overflow: Option<ArithmeticOverflow>,
    ) -> ValueResult<Self> {
        // NOTE: A partial time record requires one field to be set.
        if partial.is_empty() {
            return Err(ValueError::r#type().with_message("PartialTime cannot be empty."));
        }

        Self::new_with_overflow(
            partial.hour.unwrap_or(self.hour().into()),
            partial.minute.unwrap_or(self.minute().into()),
            partial.second.unwrap_or(self.second().into()),
            partial.millisecond.unwrap_or(self.millisecond().into()),
            partial.microsecond.unwrap_or(self.microsecond().into()),
            partial.nanosecond.unwrap_or(self.nanosecond().into()),
            overflow.unwrap_or(ArithmeticOverflow::Constrain),
        )
    }

    /// `BalanceTime`
    ///
    /// Carries unbounded fields into a valid time, returning the number of
    /// whole days that overflowed along with the balanced time.
    ///
    /// ```rust
    /// use immutable_values::PlainTime;
    ///
    /// let (days, time) = PlainTime::balance(25, 0, 0, 0, 0, 0);
    /// assert_eq!(days, 1);
    /// assert_eq!(time.hour(), 1);
    /// ```
    #[must_use]
    pub fn balance(
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
        microsecond: i64,
        nanosecond: i64,
    ) -> (i64, Self) {
        let (days, iso) = IsoTime::balance(
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
        );
        (days, Self::new_unchecked(iso))
    }

    /// Returns the internal `hour` field.
    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.iso.hour
    }

    /// Returns the internal `minute` field.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.iso.minute
    }

    /// Returns the internal `second` field.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.iso.second
    }

    /// Returns the internal `millisecond` field.
    #[inline]
    #[must_use]
    pub const fn millisecond(&self) -> u16 {
        self.iso.millisecond
    }

    /// Returns the internal `microsecond` field.
    #[inline]
    #[must_use]
    pub const fn microsecond(&self) -> u16 {
        self.iso.microsecond
    }

    /// Returns the internal `nanosecond` field.
    #[inline]
    #[must_use]
    pub const fn nanosecond(&self) -> u16 {
        self.iso.nanosecond
    }

    /// Returns the underlying `IsoTime` record.
    #[inline]
    #[must_use]
    pub const fn iso_time(&self) -> IsoTime {
        self.iso
    }
}

#[cfg(test)]
mod tests {
    use super::{PartialTime, PlainTime};
    use crate::options::ArithmeticOverflow;

    fn assert_time(result: PlainTime, values: (u8, u8, u8, u16, u16, u16)) {
        assert_eq!(result.hour(), values.0);
        assert_eq!(result.minute(), values.1);
        assert_eq!(result.second(), values.2);
        assert_eq!(result.millisecond(), values.3);
        assert_eq!(result.microsecond(), values.4);
        assert_eq!(result.nanosecond(), values.5);
    }

    #[test]
    fn time_field_boundaries() {
        let max = PlainTime::try_new(23, 59, 59, 999, 999, 999).unwrap();
        assert_time(max, (23, 59, 59, 999, 999, 999));
        assert!(max.iso_time().is_valid());

        let err = PlainTime::try_new(24, 0, 0, 0, 0, 0).unwrap_err();
        assert!(err.is_range());
        assert_eq!(err.message(), "Not a valid time.");
        assert!(PlainTime::try_new(0, 60, 0, 0, 0, 0).is_err());
        assert!(PlainTime::try_new(0, 0, 60, 0, 0, 0).is_err());
        assert!(PlainTime::try_new(0, 0, 0, 1000, 0, 0).is_err());
        assert!(PlainTime::try_new(0, 0, 0, 0, 1000, 0).is_err());
        assert!(PlainTime::try_new(0, 0, 0, 0, 0, 1000).is_err());
        assert!(PlainTime::try_new(-1, 0, 0, 0, 0, 0).is_err());
    }

    #[test]
    fn constrain_clamps_without_carry() {
        let time = PlainTime::new_with_overflow(
            25,
            60,
            -1,
            1000,
            -5,
            2000,
            ArithmeticOverflow::Constrain,
        )
        .unwrap();
        assert_time(time, (23, 59, 0, 999, 0, 999));
    }

    #[test]
    fn partial_time() {
        assert!(PlainTime::from_partial(PartialTime::new(), None)
            .unwrap_err()
            .is_type());

        let initial = PlainTime::try_new(15, 30, 12, 123, 456, 789).unwrap();
        let time = initial
            .with(PartialTime::new().with_hour(Some(22)), None)
            .unwrap();
        assert_time(time, (22, 30, 12, 123, 456, 789));

        let rejected = initial.with(
            PartialTime::new().with_minute(Some(61)),
            Some(ArithmeticOverflow::Reject),
        );
        assert!(rejected.is_err());
    }

    #[test]
    fn time_ordering() {
        let earlier = PlainTime::try_new(8, 0, 0, 0, 0, 0).unwrap();
        let later = PlainTime::try_new(8, 0, 0, 0, 0, 1).unwrap();
        assert!(earlier < later);
        assert_eq!(earlier.max(later), later);
    }
}
