//! The realm context that every host construction call goes through.
//!
//! A [`Realm`] owns the calendar registry and the host's [`HostHooks`]. Its
//! `construct_*` methods take raw host numbers, convert and validate them,
//! and only then hand the payload to the host for wrapping.

use crate::{
    host::{BuiltinValue, HostHooks},
    primitive::FiniteF64,
    Calendar, CalendarRegistry, Duration, PlainDate, PlainMonthDay, PlainTime, PlainYearMonth,
    Tuple, Value, ValueResult,
};

/// `ToIntegerWithTruncation` narrowed to an `i32` field.
fn to_integer_with_truncation(value: f64) -> ValueResult<i32> {
    FiniteF64::try_from(value)?.as_date_value()
}

/// `ToIntegerIfIntegral` narrowed to an `i64` field.
fn to_integer_if_integral(value: f64) -> ValueResult<i64> {
    FiniteF64::try_from(value)?.as_integer_if_integral::<i64>()
}

/// The construction context for one host realm.
///
/// ```rust
/// use immutable_values::Realm;
///
/// let realm = Realm::new();
/// let date = realm.construct_plain_date(2024.0, 2.0, 29.0, None).unwrap();
/// assert!(date.is_plain_date());
///
/// let err = realm.construct_plain_date(2023.0, 2.0, 29.0, None).unwrap_err();
/// assert_eq!(err.message(), "Not a valid date.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Realm<H = ()> {
    registry: CalendarRegistry,
    hooks: H,
}

impl Realm {
    /// Creates a realm with the built-in calendars and the identity hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: HostHooks> Realm<H> {
    /// Creates a realm that wraps values with `hooks`.
    pub fn with_hooks(hooks: H) -> Self {
        Self {
            registry: CalendarRegistry::default(),
            hooks,
        }
    }

    /// Creates a realm from an existing registry.
    pub fn with_registry(registry: CalendarRegistry, hooks: H) -> Self {
        Self { registry, hooks }
    }

    /// Returns this realm's calendar registry.
    #[inline]
    pub fn registry(&self) -> &CalendarRegistry {
        &self.registry
    }

    /// Returns the host hooks.
    #[inline]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// The calendar realm lookup.
    #[inline]
    pub fn default_calendar(&self) -> Calendar {
        self.registry.default_calendar()
    }

    fn resolve_calendar(&self, identifier: Option<&str>) -> ValueResult<Calendar> {
        identifier.map_or(Ok(self.default_calendar()), |id| self.registry.resolve(id))
    }

    /// Runs a validating step and wraps its payload. Nothing reaches the
    /// hooks when the step fails.
    fn construct<T, F>(&self, validate: F) -> ValueResult<H::Object>
    where
        T: Into<BuiltinValue>,
        F: FnOnce() -> ValueResult<T>,
    {
        match validate() {
            Ok(value) => Ok(self.hooks.wrap(value.into())),
            Err(err) => {
                #[cfg(feature = "log")]
                log::debug!("construction rejected: {err}");
                Err(err)
            }
        }
    }

    /// `Temporal.PlainDate ( isoYear, isoMonth, isoDay [ , calendar ] )`
    pub fn construct_plain_date(
        &self,
        year: f64,
        month: f64,
        day: f64,
        calendar: Option<&str>,
    ) -> ValueResult<H::Object> {
        self.construct(|| {
            let year = to_integer_with_truncation(year)?;
            let month = to_integer_with_truncation(month)?;
            let day = to_integer_with_truncation(day)?;
            let calendar = self.resolve_calendar(calendar)?;
            PlainDate::try_new(year, month, day, calendar)
        })
    }

    /// `Temporal.PlainTime ( [ hour [ , minute [ , second [ , millisecond [ , microsecond [ , nanosecond ] ] ] ] ] ] )`
    ///
    /// Every field is range checked on its own. Nothing carries.
    pub fn construct_plain_time(
        &self,
        hour: f64,
        minute: f64,
        second: f64,
        millisecond: f64,
        microsecond: f64,
        nanosecond: f64,
    ) -> ValueResult<H::Object> {
        self.construct(|| {
            PlainTime::try_new(
                to_integer_with_truncation(hour)?,
                to_integer_with_truncation(minute)?,
                to_integer_with_truncation(second)?,
                to_integer_with_truncation(millisecond)?,
                to_integer_with_truncation(microsecond)?,
                to_integer_with_truncation(nanosecond)?,
            )
        })
    }

    /// `Temporal.PlainYearMonth ( isoYear, isoMonth [ , calendar [ , referenceISODay ] ] )`
    pub fn construct_plain_year_month(
        &self,
        year: f64,
        month: f64,
        calendar: Option<&str>,
        reference_day: Option<f64>,
    ) -> ValueResult<H::Object> {
        self.construct(|| {
            let year = to_integer_with_truncation(year)?;
            let month = to_integer_with_truncation(month)?;
            let calendar = self.resolve_calendar(calendar)?;
            let reference_day = reference_day.map(to_integer_with_truncation).transpose()?;
            PlainYearMonth::try_new(year, month, reference_day, calendar)
        })
    }

    /// `Temporal.PlainMonthDay ( isoMonth, isoDay [ , calendar [ , referenceISOYear ] ] )`
    pub fn construct_plain_month_day(
        &self,
        month: f64,
        day: f64,
        calendar: Option<&str>,
        reference_year: Option<f64>,
    ) -> ValueResult<H::Object> {
        self.construct(|| {
            let month = to_integer_with_truncation(month)?;
            let day = to_integer_with_truncation(day)?;
            let calendar = self.resolve_calendar(calendar)?;
            let reference_year = reference_year.map(to_integer_with_truncation).transpose()?;
            PlainMonthDay::try_new(month, day, calendar, reference_year)
        })
    }

    /// `Temporal.Duration ( [ years [ , months [ , weeks [ , days [ , hours [ , minutes [ , seconds [ , milliseconds [ , microseconds [ , nanoseconds ] ] ] ] ] ] ] ] ] ] )`
    ///
    /// `fields` is in canonical order, from years to nanoseconds.
    pub fn construct_duration(&self, fields: [f64; 10]) -> ValueResult<H::Object> {
        self.construct(|| {
            let mut values = [0i64; 10];
            for (slot, field) in values.iter_mut().zip(fields) {
                *slot = to_integer_if_integral(field)?;
            }
            let [
                years,
                months,
                weeks,
                days,
                hours,
                minutes,
                seconds,
                milliseconds,
                microseconds,
                nanoseconds,
            ] = values;
            Duration::new(
                years,
                months,
                weeks,
                days,
                hours,
                minutes,
                seconds,
                milliseconds,
                microseconds,
                nanoseconds,
            )
        })
    }

    /// `Tuple ( ...items )`
    pub fn construct_tuple<I>(&self, items: I) -> ValueResult<H::Object>
    where
        I: IntoIterator<Item = Value>,
    {
        self.construct(|| Tuple::try_from_values(items))
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::Realm;
    use crate::host::{BuiltinValue, HostHooks};

    #[derive(Default)]
    struct CountingHooks {
        wrapped: Cell<usize>,
    }

    impl HostHooks for CountingHooks {
        type Object = usize;

        fn wrap(&self, _: BuiltinValue) -> usize {
            self.wrapped.set(self.wrapped.get() + 1);
            self.wrapped.get()
        }
    }

    #[test]
    fn wraps_only_on_success() {
        let realm = Realm::with_hooks(CountingHooks::default());
        assert_eq!(realm.construct_plain_date(2000.0, 2.0, 29.0, None), Ok(1));
        assert!(realm.construct_plain_date(1900.0, 2.0, 29.0, None).is_err());
        assert!(realm.construct_plain_time(0.0, 60.0, 0.0, 0.0, 0.0, 0.0).is_err());
        assert!(realm.construct_plain_date(2000.0, 1.0, 1.0, Some("gregorian")).is_err());
        assert_eq!(realm.hooks().wrapped.get(), 1);
    }

    #[test]
    fn host_numbers_are_converted() {
        let realm = Realm::new();
        let date = realm.construct_plain_date(2024.9, 2.5, 29.99, None).unwrap();
        let date = date.as_plain_date().unwrap();
        assert_eq!((date.iso_year(), date.iso_month(), date.iso_day()), (2024, 2, 29));

        assert!(realm.construct_plain_date(f64::NAN, 1.0, 1.0, None).unwrap_err().is_range());
        assert!(realm
            .construct_plain_date(f64::INFINITY, 1.0, 1.0, None)
            .unwrap_err()
            .is_range());
        assert!(realm.construct_plain_date(2024.0, 300.0, 1.0, None).is_err());

        let mut fields = [0.0; 10];
        fields[3] = 1.5;
        assert!(realm.construct_duration(fields).unwrap_err().is_range());
    }

    #[test]
    fn calendar_lookup() {
        let realm = Realm::new();
        assert_eq!(realm.default_calendar().identifier(), "iso8601");
        assert!(realm.construct_plain_month_day(2.0, 29.0, Some("ISO8601"), None).is_ok());
        let err = realm
            .construct_plain_year_month(2024.0, 1.0, Some("gregorian"), None)
            .unwrap_err();
        assert_eq!(err.message(), "Given calendar id not supported.");
    }
}
