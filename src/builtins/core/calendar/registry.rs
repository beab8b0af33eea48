//! The realm-scoped calendar registry.

use alloc::vec::Vec;

use super::{AnyCalendarKind, Calendar};
use crate::{ValueError, ValueResult};

/// Resolves calendar identifiers to calendars.
///
/// A registry is populated once when it is created and is read-only
/// afterwards, so lookups need no synchronization.
#[derive(Debug, Clone)]
pub struct CalendarRegistry {
    calendars: Vec<Calendar>,
    default: Calendar,
}

impl Default for CalendarRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl CalendarRegistry {
    /// Creates a registry holding every built-in calendar, with ISO 8601 as
    /// the default calendar.
    pub fn with_builtins() -> Self {
        Self {
            calendars: AnyCalendarKind::ALL
                .into_iter()
                .map(Calendar::new)
                .collect(),
            default: Calendar::new(AnyCalendarKind::Iso8601),
        }
    }

    /// Resolves an identifier to a registered calendar.
    ///
    /// Identifiers are matched ignoring ASCII case only.
    pub fn resolve(&self, identifier: &str) -> ValueResult<Calendar> {
        self.get(identifier).ok_or_else(|| {
            #[cfg(feature = "log")]
            log::debug!("rejected calendar identifier {identifier:?}");
            ValueError::range().with_message("Given calendar id not supported.")
        })
    }

    /// Returns the registered calendar for `identifier`, if any.
    pub fn get(&self, identifier: &str) -> Option<Calendar> {
        self.calendars.iter().copied().find(|calendar| {
            calendar
                .identifier()
                .as_bytes()
                .eq_ignore_ascii_case(identifier.as_bytes())
        })
    }

    /// Returns whether `identifier` names a registered calendar.
    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }

    /// The calendar used when a constructor receives no calendar.
    pub fn default_calendar(&self) -> Calendar {
        self.default
    }

    /// Iterates over the canonical identifiers of every registered calendar.
    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.calendars.iter().map(Calendar::identifier)
    }
}
