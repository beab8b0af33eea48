//! This module implements the calendar traits and related components.
//!
//! A calendar is a named rule set for interpreting `(year, month, day)`
//! triples. The rules are expressed by the [`CalendarRules`] capability
//! trait, implemented once per calendar system and collected into the
//! [`AnyCalendar`] tagged variant. Values never own a calendar: a
//! [`Calendar`] is a copyable handle to a `'static` rule set.

use core::{fmt, hash::Hash, str::FromStr};

use crate::{iso::IsoDate, utils, ValueError, ValueResult};

mod registry;
mod types;

pub use registry::CalendarRegistry;
pub use types::MonthCode;

/// The identifier of the ISO 8601 calendar.
pub(crate) const ISO8601_IDENTIFIER: &str = "iso8601";

/// The capability interface every calendar system provides.
pub trait CalendarRules {
    /// Returns the canonical, lowercase identifier of this calendar.
    fn identifier(&self) -> &'static str;

    /// `IsValidISODate`
    ///
    /// Returns whether the triple forms a valid date in this calendar.
    fn is_valid_date(&self, year: i32, month: i32, day: i32) -> bool;

    /// Returns the number of days in `month` of `year`.
    fn days_in_month(&self, year: i32, month: u8) -> u8;

    /// Returns the number of days in `year`.
    fn days_in_year(&self, year: i32) -> u16;

    /// Returns the number of months in `year`.
    fn months_in_year(&self, year: i32) -> u8;

    /// Returns whether `year` is a leap year.
    fn in_leap_year(&self, year: i32) -> bool;
}

/// The proleptic ISO 8601 calendar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Iso8601;

impl CalendarRules for Iso8601 {
    fn identifier(&self) -> &'static str {
        ISO8601_IDENTIFIER
    }

    fn is_valid_date(&self, year: i32, month: i32, day: i32) -> bool {
        crate::iso::is_valid_date(year, month, day)
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        utils::iso_days_in_month(year, month.into()) as u8
    }

    fn days_in_year(&self, year: i32) -> u16 {
        utils::mathematical_days_in_year(year) as u16
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        12
    }

    fn in_leap_year(&self, year: i32) -> bool {
        utils::is_leap_year(year)
    }
}

/// The kinds of calendar this crate ships.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyCalendarKind {
    Iso8601,
}

impl AnyCalendarKind {
    /// Every built-in kind.
    pub const ALL: [Self; 1] = [Self::Iso8601];

    /// Looks up a calendar kind from an identifier, ignoring ASCII case.
    pub fn get_for_identifier(bytes: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.identifier().as_bytes().eq_ignore_ascii_case(bytes))
    }

    /// Returns the canonical identifier of this kind.
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::Iso8601 => ISO8601_IDENTIFIER,
        }
    }
}

/// A tagged variant over every built-in calendar.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyCalendar {
    Iso8601(Iso8601),
}

impl AnyCalendar {
    /// Returns the kind of this calendar.
    pub const fn kind(&self) -> AnyCalendarKind {
        match self {
            Self::Iso8601(_) => AnyCalendarKind::Iso8601,
        }
    }
}

impl CalendarRules for AnyCalendar {
    fn identifier(&self) -> &'static str {
        match self {
            Self::Iso8601(c) => c.identifier(),
        }
    }

    fn is_valid_date(&self, year: i32, month: i32, day: i32) -> bool {
        match self {
            Self::Iso8601(c) => c.is_valid_date(year, month, day),
        }
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        match self {
            Self::Iso8601(c) => c.days_in_month(year, month),
        }
    }

    fn days_in_year(&self, year: i32) -> u16 {
        match self {
            Self::Iso8601(c) => c.days_in_year(year),
        }
    }

    fn months_in_year(&self, year: i32) -> u8 {
        match self {
            Self::Iso8601(c) => c.months_in_year(year),
        }
    }

    fn in_leap_year(&self, year: i32) -> bool {
        match self {
            Self::Iso8601(c) => c.in_leap_year(year),
        }
    }
}

/// A shared reference to a calendar's rules.
///
/// Two calendars are equal when their identifiers are equal.
#[derive(Debug, Clone, Copy)]
pub struct Calendar(&'static AnyCalendar);

impl Default for Calendar {
    fn default() -> Self {
        Calendar::new(AnyCalendarKind::Iso8601)
    }
}

impl PartialEq for Calendar {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
    }
}

impl Eq for Calendar {}

impl Hash for Calendar {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.identifier().hash(state);
    }
}

impl Calendar {
    #[warn(clippy::wildcard_enum_match_arm)] // Warns if the calendar kind gets out of sync.
    pub const fn new(kind: AnyCalendarKind) -> Self {
        let cal = match kind {
            AnyCalendarKind::Iso8601 => &AnyCalendar::Iso8601(Iso8601),
        };
        Self(cal)
    }

    /// Returns a `Calendar` from a slice of UTF-8 encoded bytes.
    pub fn from_utf8(bytes: &[u8]) -> ValueResult<Self> {
        let Some(kind) = AnyCalendarKind::get_for_identifier(bytes) else {
            return Err(ValueError::range().with_message("Given calendar id not supported."));
        };
        Ok(Calendar::new(kind))
    }

    /// Returns the calendar rules behind this handle.
    #[inline]
    pub fn rules(&self) -> &'static AnyCalendar {
        self.0
    }

    /// Returns whether the current calendar is `ISO`
    #[inline]
    pub fn is_iso(&self) -> bool {
        matches!(self.0, AnyCalendar::Iso8601(_))
    }

    /// Returns the identifier of this calendar.
    #[inline]
    pub fn identifier(&self) -> &'static str {
        self.0.identifier()
    }

    /// Validates a date triple against this calendar.
    #[inline]
    pub fn is_valid_date(&self, year: i32, month: i32, day: i32) -> bool {
        self.0.is_valid_date(year, month, day)
    }
}

impl FromStr for Calendar {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Calendar::from_utf8(s.as_bytes())
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

// ==== Public calendar field methods ====

impl Calendar {
    /// `CalendarYear`
    pub fn year(&self, iso_date: &IsoDate) -> i32 {
        iso_date.year
    }

    /// `CalendarMonth`
    pub fn month(&self, iso_date: &IsoDate) -> u8 {
        iso_date.month
    }

    /// `CalendarMonthCode`
    pub fn month_code(&self, iso_date: &IsoDate) -> ValueResult<MonthCode> {
        MonthCode::try_from_month(iso_date.month)
    }

    /// `CalendarDay`
    pub fn day(&self, iso_date: &IsoDate) -> u8 {
        iso_date.day
    }

    /// `CalendarDayOfWeek`
    pub fn day_of_week(&self, iso_date: &IsoDate) -> u16 {
        utils::iso_day_of_week(iso_date.year, iso_date.month, iso_date.day)
    }

    /// `CalendarDayOfYear`
    pub fn day_of_year(&self, iso_date: &IsoDate) -> u16 {
        utils::iso_day_of_year(iso_date.year, iso_date.month, iso_date.day)
    }

    /// `CalendarWeekOfYear`
    pub fn week_of_year(&self, iso_date: &IsoDate) -> u16 {
        utils::iso_week_of_year(iso_date.year, iso_date.month, iso_date.day).0
    }

    /// `CalendarYearOfWeek`
    pub fn year_of_week(&self, iso_date: &IsoDate) -> i32 {
        utils::iso_week_of_year(iso_date.year, iso_date.month, iso_date.day).1
    }

    /// `CalendarDaysInWeek`
    pub fn days_in_week(&self, _iso_date: &IsoDate) -> u16 {
        7
    }

    /// `CalendarDaysInMonth`
    pub fn days_in_month(&self, iso_date: &IsoDate) -> u16 {
        self.0.days_in_month(iso_date.year, iso_date.month).into()
    }

    /// `CalendarDaysInYear`
    pub fn days_in_year(&self, iso_date: &IsoDate) -> u16 {
        self.0.days_in_year(iso_date.year)
    }

    /// `CalendarMonthsInYear`
    pub fn months_in_year(&self, iso_date: &IsoDate) -> u16 {
        self.0.months_in_year(iso_date.year).into()
    }

    /// `CalendarInLeapYear`
    pub fn in_leap_year(&self, iso_date: &IsoDate) -> bool {
        self.0.in_leap_year(iso_date.year)
    }
}
