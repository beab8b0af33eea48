//! Native implementation of the construction options.
//!
//! The options here are typed knobs that control how a constructor handles
//! fields outside of their domain.

use core::{fmt, str::FromStr};

/// `ArithmeticOverflow` can also be used as an
/// assignment overflow and consists of the "constrain"
/// and "reject" options.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOverflow {
    /// Constrain option
    #[default]
    Constrain,
    /// Reject option
    Reject,
}

/// A parsing error for `ArithmeticOverflow`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseArithmeticOverflowError;

impl fmt::Display for ParseArithmeticOverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid overflow value")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseArithmeticOverflowError {}

impl FromStr for ArithmeticOverflow {
    type Err = ParseArithmeticOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constrain" => Ok(Self::Constrain),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseArithmeticOverflowError),
        }
    }
}

impl fmt::Display for ArithmeticOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constrain => "constrain",
            Self::Reject => "reject",
        }
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::str::FromStr;

    use super::ArithmeticOverflow;

    #[test]
    fn overflow_from_str() {
        assert_eq!(
            ArithmeticOverflow::from_str("reject"),
            Ok(ArithmeticOverflow::Reject)
        );
        assert_eq!(
            ArithmeticOverflow::from_str("constrain"),
            Ok(ArithmeticOverflow::Constrain)
        );
        assert!(ArithmeticOverflow::from_str("Reject").is_err());
        assert_eq!(ArithmeticOverflow::Reject.to_string(), "reject");
        assert_eq!(ArithmeticOverflow::default(), ArithmeticOverflow::Constrain);
    }
}
