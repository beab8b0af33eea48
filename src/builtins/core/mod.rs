//! The core implementation of the built-in values.
//!
//! Every value here is validated on construction and never mutated
//! afterwards. Derivations return new values.

pub mod calendar;
pub mod equality;

mod date;
mod duration;
mod month_day;
mod time;
mod tuple;
mod year_month;

#[doc(inline)]
pub use date::PlainDate;
#[doc(inline)]
pub use duration::{DateDuration, Duration, PartialDuration, TimeDuration};
#[doc(inline)]
pub use month_day::PlainMonthDay;
#[doc(inline)]
pub use time::{PartialTime, PlainTime};
#[doc(inline)]
pub use tuple::Tuple;
#[doc(inline)]
pub use year_month::PlainYearMonth;
