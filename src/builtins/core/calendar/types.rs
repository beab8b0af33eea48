//! Types shared by the calendar implementations.

use core::{fmt, str::FromStr};

use tinystr::{tinystr, TinyAsciiStr};

use crate::{ValueError, ValueResult};

// MonthCode constants.
const MONTH_ONE: TinyAsciiStr<4> = tinystr!(4, "M01");
const MONTH_TWO: TinyAsciiStr<4> = tinystr!(4, "M02");
const MONTH_THREE: TinyAsciiStr<4> = tinystr!(4, "M03");
const MONTH_FOUR: TinyAsciiStr<4> = tinystr!(4, "M04");
const MONTH_FIVE: TinyAsciiStr<4> = tinystr!(4, "M05");
const MONTH_SIX: TinyAsciiStr<4> = tinystr!(4, "M06");
const MONTH_SEVEN: TinyAsciiStr<4> = tinystr!(4, "M07");
const MONTH_EIGHT: TinyAsciiStr<4> = tinystr!(4, "M08");
const MONTH_NINE: TinyAsciiStr<4> = tinystr!(4, "M09");
const MONTH_TEN: TinyAsciiStr<4> = tinystr!(4, "M10");
const MONTH_ELEVEN: TinyAsciiStr<4> = tinystr!(4, "M11");
const MONTH_TWELVE: TinyAsciiStr<4> = tinystr!(4, "M12");

const COMMON_MONTH_CODES: [TinyAsciiStr<4>; 12] = [
    MONTH_ONE,
    MONTH_TWO,
    MONTH_THREE,
    MONTH_FOUR,
    MONTH_FIVE,
    MONTH_SIX,
    MONTH_SEVEN,
    MONTH_EIGHT,
    MONTH_NINE,
    MONTH_TEN,
    MONTH_ELEVEN,
    MONTH_TWELVE,
];

/// A calendar independent identifier for a month, e.g. `"M02"`.
///
/// Only the twelve common month codes exist for the ISO calendar, leap
/// month codes (`"M05L"`) are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCode(pub(crate) TinyAsciiStr<4>);

impl MonthCode {
    /// Returns the month code for an ordinal month in `1..=12`.
    pub fn try_from_month(month: u8) -> ValueResult<Self> {
        month
            .checked_sub(1)
            .and_then(|idx| COMMON_MONTH_CODES.get(usize::from(idx)))
            .map(|code| Self(*code))
            .ok_or(ValueError::range().with_message("Month value is outside of the valid range."))
    }

    /// Returns the ordinal month this code denotes.
    pub fn to_month_integer(&self) -> u8 {
        COMMON_MONTH_CODES
            .iter()
            .position(|code| *code == self.0)
            .map_or(0, |idx| idx as u8 + 1)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for MonthCode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = TinyAsciiStr::<4>::try_from_str(s)
            .map_err(|_| ValueError::range().with_message("Invalid MonthCode."))?;
        if !COMMON_MONTH_CODES.contains(&code) {
            return Err(ValueError::range().with_message("Invalid MonthCode."));
        }
        Ok(Self(code))
    }
}

impl fmt::Display for MonthCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::MonthCode;

    #[test]
    fn month_code_round_trip() {
        let code = MonthCode::try_from_month(2).unwrap();
        assert_eq!(code.as_str(), "M02");
        assert_eq!(code.to_month_integer(), 2);
        assert_eq!(MonthCode::from_str("M12").unwrap().to_month_integer(), 12);
    }

    #[test]
    fn invalid_month_codes() {
        assert!(MonthCode::try_from_month(0).is_err());
        assert!(MonthCode::try_from_month(13).is_err());
        assert!(MonthCode::from_str("M13").is_err());
        assert!(MonthCode::from_str("M05L").is_err());
        assert!(MonthCode::from_str("month").is_err());
    }
}
