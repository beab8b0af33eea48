//! Implementation of the `FiniteF64` primitive and the host number conversions.

use crate::{ValueError, ValueResult};
// Float methods are only inherent with `std`.
#[allow(unused_imports)]
use core_maths::CoreFloat;
use num_traits::{FromPrimitive, PrimInt};

/// A host number that is known to be finite.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct FiniteF64(pub(crate) f64);

impl FiniteF64 {
    #[inline]
    pub fn as_inner(&self) -> f64 {
        self.0
    }

    /// Returns whether the value has no fractional part.
    #[inline]
    pub fn is_integral(&self) -> bool {
        self.0.fract() == 0.0
    }

    /// `ToIntegerWithTruncation`
    ///
    /// Truncates toward zero. The result is normalized so that `-0` becomes `+0`.
    #[inline]
    #[must_use]
    pub fn truncated(&self) -> Self {
        Self(self.0.trunc() + 0.0)
    }

    /// Truncates the value and narrows it to an `i32` field.
    pub(crate) fn as_date_value(&self) -> ValueResult<i32> {
        let truncated = self.truncated().0;
        if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&truncated) {
            return Err(ValueError::range().with_message("number exceeds a valid date value."));
        }
        Ok(truncated as i32)
    }

    /// `ToIntegerIfIntegral`
    ///
    /// Fails with a `RangeError` when the value is fractional or does not
    /// fit into the target type.
    pub fn as_integer_if_integral<T: PrimInt + FromPrimitive>(&self) -> ValueResult<T> {
        if !self.is_integral() {
            return Err(ValueError::range().with_message("value must be integral."));
        }
        T::from_f64(self.0)
            .ok_or(ValueError::range().with_message("integer value exceeds the field range."))
    }
}

impl TryFrom<f64> for FiniteF64 {
    type Error = ValueError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ValueError::range().with_message("number value is not a finite value."));
        }
        Ok(Self(value))
    }
}
