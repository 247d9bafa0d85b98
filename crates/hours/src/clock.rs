//! Wall-clock capability used by the "today" and "open now" lookups.

use chrono::{Datelike, Local, NaiveDateTime, Timelike, Weekday};

/// Source of the current local date and time.
pub trait Clock {
    /// Current local wall time.
    fn now(&self) -> NaiveDateTime;

    /// Current local weekday.
    fn weekday(&self) -> Weekday {
        self.now().weekday()
    }

    /// Current time encoded as `hour * 100 + minute`.
    fn hhmm(&self) -> u32 {
        let now = self.now();
        now.hour() * 100 + now.minute()
    }
}

/// Reads the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Builds a clock from a `YYYY-MM-DD HH:MM` literal.
    pub fn parse(datetime: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M").map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
