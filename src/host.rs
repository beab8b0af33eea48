//! Trait definitions for handing validated values to the host environment.
//!
//! NOTE: This is a power user API.

use crate::{
    Duration, PlainDate, PlainMonthDay, PlainTime, PlainYearMonth, Tuple,
};

/// A fully validated payload, ready to be exposed to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum BuiltinValue {
    PlainDate(PlainDate),
    PlainTime(PlainTime),
    PlainYearMonth(PlainYearMonth),
    PlainMonthDay(PlainMonthDay),
    Duration(Duration),
    Tuple(Tuple),
}

macro_rules! builtin_value_kind {
    ($($variant:ident, $is:ident, $as:ident;)+) => {
        impl BuiltinValue {
            $(
                #[doc = concat!("Returns whether this payload is a `", stringify!($variant), "`.")]
                #[inline]
                #[must_use]
                pub const fn $is(&self) -> bool {
                    matches!(self, Self::$variant(_))
                }

                #[inline]
                #[must_use]
                pub const fn $as(&self) -> Option<&$variant> {
                    match self {
                        Self::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            )+
        }

        $(
            impl From<$variant> for BuiltinValue {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

builtin_value_kind! {
    PlainDate, is_plain_date, as_plain_date;
    PlainTime, is_plain_time, as_plain_time;
    PlainYearMonth, is_plain_year_month, as_plain_year_month;
    PlainMonthDay, is_plain_month_day, as_plain_month_day;
    Duration, is_duration, as_duration;
    Tuple, is_tuple, as_tuple;
}

impl BuiltinValue {
    /// Returns the name of the built-in this payload belongs to.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::PlainDate(_) => "Temporal.PlainDate",
            Self::PlainTime(_) => "Temporal.PlainTime",
            Self::PlainYearMonth(_) => "Temporal.PlainYearMonth",
            Self::PlainMonthDay(_) => "Temporal.PlainMonthDay",
            Self::Duration(_) => "Temporal.Duration",
            Self::Tuple(_) => "Tuple",
        }
    }
}

/// `HostHooks` is the boxing operation the host supplies.
///
/// `wrap` binds a payload to the host's prototype and realm. It is only ever
/// called with a payload that passed validation.
pub trait HostHooks {
    /// The host's representation of a wrapped value.
    type Object;

    fn wrap(&self, value: BuiltinValue) -> Self::Object;
}

// Implement the identity wrapper

impl HostHooks for () {
    type Object = BuiltinValue;

    fn wrap(&self, value: BuiltinValue) -> Self::Object {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{BuiltinValue, HostHooks};
    use crate::{Calendar, Duration, PlainDate, PlainMonthDay, Tuple};

    #[test]
    fn type_checks_discriminate() {
        let date = BuiltinValue::from(PlainDate::try_new(2020, 1, 1, Calendar::default()).unwrap());
        assert!(date.is_plain_date());
        assert!(!date.is_plain_month_day());
        assert!(date.as_duration().is_none());
        assert_eq!(date.as_plain_date().map(PlainDate::iso_year), Some(2020));

        let month_day =
            BuiltinValue::from(PlainMonthDay::try_new(1, 1, Calendar::default(), None).unwrap());
        assert!(month_day.is_plain_month_day());
        assert!(!month_day.is_plain_date());
        assert!(!month_day.is_tuple());

        let tuple = BuiltinValue::from(Tuple::empty());
        assert!(tuple.is_tuple());
        assert_eq!(tuple.type_name(), "Tuple");
    }

    #[test]
    fn unit_hooks_are_identity() {
        let duration = BuiltinValue::from(Duration::default());
        assert_eq!(().wrap(duration.clone()), duration);
    }
}
