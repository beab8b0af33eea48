//! This module implements the error type returned by value construction.

use alloc::borrow::Cow;
use core::fmt;

/// The categories of error a construction may raise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Error does not fall into a category.
    #[default]
    Generic,
    /// A structural precondition on a value's type was violated.
    Type,
    /// A field or a combination of fields is outside of its legal domain.
    Range,
    /// An internal invariant failed.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Type => "TypeError",
            Self::Range => "RangeError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type raised while constructing or deriving a value.
///
/// The crate only ever raises these errors. Translating them into
/// language level exceptions is the responsibility of the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl ValueError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a type error.
    #[inline]
    #[must_use]
    pub const fn r#type() -> Self {
        Self::new(ErrorKind::Type)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    pub(crate) const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }

    /// Returns whether this is a `RangeError`.
    #[inline]
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self.kind, ErrorKind::Range)
    }

    /// Returns whether this is a `TypeError`.
    #[inline]
    #[must_use]
    pub const fn is_type(&self) -> bool {
        matches!(self.kind, ErrorKind::Type)
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValueError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{ErrorKind, ValueError};

    #[test]
    fn display_includes_kind_and_message() {
        let err = ValueError::range().with_message("Not a valid date.");
        assert_eq!(err.to_string(), "RangeError: Not a valid date.");
        assert_eq!(err.kind(), ErrorKind::Range);

        let err = ValueError::r#type();
        assert_eq!(err.to_string(), "TypeError");
        assert!(err.is_type());
    }
}
