//! The `immutable_values` crate implements the built-in immutable value
//! layer of a dynamic-language runtime: the calendar-aware `Temporal`
//! plain values, `Duration`, and the deeply-immutable `Tuple`.
//!
//! ```rust
//! use immutable_values::{Calendar, PlainDate, Tuple, Primitive};
//!
//! // Create a date with the ISO calendar
//! let date = PlainDate::try_new(2024, 2, 29, Calendar::default()).unwrap();
//! assert_eq!(date.day_of_week(), 4);
//! assert!(PlainDate::try_new(2023, 2, 29, Calendar::default()).is_err());
//!
//! // Tuples compare structurally
//! let one = Tuple::of([Primitive::from(1), Primitive::from("a")]);
//! let two = Tuple::of([Primitive::from(1), Primitive::from("a")]);
//! assert_eq!(one, two);
//! ```
//!
//! Every value in this crate is validated when it is constructed and is
//! never mutated afterwards. A value either exists in a fully valid form
//! or construction fails with a [`ValueError`] of kind `Range` or `Type`.
//!
//! The surrounding runtime (object shapes, prototypes, allocation) is
//! reached only through the [`host`] traits and the [`Realm`] context.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // It may be worth to look if we can fix the issues highlighted by these lints.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod host;
pub mod iso;
pub mod options;
pub mod primitive;
pub mod realm;
pub mod value;

mod builtins;

#[doc(hidden)]
pub(crate) mod utils;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::ValueError;

/// The result type returned by every fallible operation in this crate.
pub type ValueResult<T> = Result<T, ValueError>;

pub mod partial {
    //! Partial component records.
    pub use crate::builtins::core::{PartialDuration, PartialTime};
}

pub mod calendar {
    //! The calendar capability interface and its built-in implementations.
    pub use crate::builtins::core::calendar::{
        AnyCalendar, AnyCalendarKind, Calendar, CalendarRegistry, CalendarRules, Iso8601,
        MonthCode,
    };
}

pub use crate::builtins::core::{
    calendar::{Calendar, CalendarRegistry, MonthCode},
    equality::StructuralEq,
    DateDuration, Duration, PlainDate, PlainMonthDay, PlainTime, PlainYearMonth, TimeDuration,
    Tuple,
};
pub use crate::realm::Realm;
pub use crate::value::{ObjectHandle, Primitive, Symbol, Value};

/// A library specific trait for unwrapping assertions.
pub(crate) trait ValueUnwrap {
    type Output;

    /// Crate based assertion for unwrapping. This will panic in
    /// debug builds, but returns an error during runtime.
    fn value_unwrap(self) -> ValueResult<Self::Output>;
}

impl<T> ValueUnwrap for Option<T> {
    type Output = T;

    fn value_unwrap(self) -> ValueResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(ValueError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! value_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::ValueError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::ValueError::assert());
        }
    };
}

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i8> for Sign {
    fn from(value: i8) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

impl From<i64> for Sign {
    fn from(value: i64) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

impl Sign {
    /// Returns the opposite `Sign`.
    #[must_use]
    pub fn negate(&self) -> Sign {
        Sign::from(-(*self as i8))
    }
}
