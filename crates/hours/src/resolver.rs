//! Resolution of a single day entry into display text and open state.

use crate::entry::{DayEntry, DayRecord};
use serde::Serialize;

/// Label shown for closed days.
pub const CLOSED_LABEL: &str = "Cerrado";

/// Label shown for days flagged open without explicit hours.
pub const ALL_DAY_LABEL: &str = "24 horas";

/// A resolved day: what to display and whether the business is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDay {
    pub display_text: String,
    pub is_open: bool,
}

impl ResolvedDay {
    fn open(text: impl Into<String>) -> Self {
        Self {
            display_text: text.into(),
            is_open: true,
        }
    }

    /// The closed default.
    pub fn closed() -> Self {
        Self {
            display_text: CLOSED_LABEL.to_string(),
            is_open: false,
        }
    }
}

/// Resolves a day entry. Total over every entry shape.
///
/// Structured records are evaluated in a fixed order so conflicting fields
/// resolve deterministically: `closed: true` wins over everything, then
/// `isOpen: false`, then `time`, then `open`/`close`, then `isOpen: true`.
///
/// ```
/// use chapashop_hours::{resolve_day, DayEntry};
///
/// let day = resolve_day(&DayEntry::from("9-6"));
/// assert_eq!(day.display_text, "9-6");
/// assert!(day.is_open);
///
/// assert!(!resolve_day(&DayEntry::from("cerrado")).is_open);
/// ```
pub fn resolve_day(entry: &DayEntry) -> ResolvedDay {
    match entry {
        DayEntry::Missing => ResolvedDay::closed(),
        DayEntry::Text(text) if text.is_empty() || is_closed_text(text) => ResolvedDay::closed(),
        DayEntry::Text(text) => ResolvedDay::open(text.as_str()),
        DayEntry::Record(record) => resolve_record(record),
    }
}

fn resolve_record(record: &DayRecord) -> ResolvedDay {
    if record.closed == Some(true) || record.is_open == Some(false) {
        return ResolvedDay::closed();
    }

    if let Some(time) = record.time() {
        return ResolvedDay {
            display_text: time.to_string(),
            is_open: !is_closed_text(time),
        };
    }

    if let Some((open, close)) = record.open_close() {
        return ResolvedDay::open(format!("{open} - {close}"));
    }

    if record.is_open == Some(true) {
        return ResolvedDay::open(record.hours().unwrap_or(ALL_DAY_LABEL));
    }

    ResolvedDay::closed()
}

/// Display text for a single day, without the open flag.
pub fn format_day_hours(entry: &DayEntry) -> String {
    resolve_day(entry).display_text
}

fn is_closed_text(text: &str) -> bool {
    text.to_lowercase() == "cerrado"
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record() -> DayRecord {
        DayRecord::default()
    }

    #[test]
    fn test_missing_is_closed() {
        assert_eq!(resolve_day(&DayEntry::Missing), ResolvedDay::closed());
    }

    #[test]
    fn test_text_entries() {
        assert_eq!(resolve_day(&"".into()), ResolvedDay::closed());
        assert_eq!(resolve_day(&"Cerrado".into()), ResolvedDay::closed());
        assert_eq!(resolve_day(&"CERRADO".into()), ResolvedDay::closed());

        let day = resolve_day(&"9-6".into());
        assert_eq!(day.display_text, "9-6");
        assert!(day.is_open);
    }

    #[test]
    fn test_closed_overrides_hours() {
        let entry = DayEntry::Record(DayRecord {
            closed: Some(true),
            open: Some("09:00".into()),
            close: Some("18:00".into()),
            time: Some("9-6".into()),
            ..record()
        });
        assert_eq!(resolve_day(&entry), ResolvedDay::closed());
    }

    #[test]
    fn test_is_open_false_overrides_hours() {
        let entry = DayEntry::Record(DayRecord {
            is_open: Some(false),
            open: Some("09:00".into()),
            close: Some("18:00".into()),
            ..record()
        });
        assert_eq!(resolve_day(&entry), ResolvedDay::closed());
    }

    #[test]
    fn test_time_takes_precedence_over_open_close() {
        let entry = DayEntry::Record(DayRecord {
            time: Some("10:00 - 14:00".into()),
            open: Some("09:00".into()),
            close: Some("18:00".into()),
            ..record()
        });
        let day = resolve_day(&entry);
        assert_eq!(day.display_text, "10:00 - 14:00");
        assert!(day.is_open);
    }

    #[test]
    fn test_time_cerrado_is_closed_but_verbatim() {
        let entry = DayEntry::Record(DayRecord {
            time: Some("cerrado".into()),
            ..record()
        });
        let day = resolve_day(&entry);
        assert_eq!(day.display_text, "cerrado");
        assert!(!day.is_open);
    }

    #[test]
    fn test_open_close_pair() {
        let entry = DayEntry::Record(DayRecord {
            open: Some("09:00".into()),
            close: Some("18:00".into()),
            ..record()
        });
        assert_eq!(resolve_day(&entry).display_text, "09:00 - 18:00");
    }

    #[test]
    fn test_open_without_close_falls_through() {
        let entry = DayEntry::Record(DayRecord {
            open: Some("09:00".into()),
            ..record()
        });
        assert_eq!(resolve_day(&entry), ResolvedDay::closed());
    }

    #[test]
    fn test_is_open_true_uses_hours_or_all_day() {
        let flagged = DayEntry::Record(DayRecord {
            is_open: Some(true),
            ..record()
        });
        assert_eq!(resolve_day(&flagged).display_text, ALL_DAY_LABEL);

        let with_hours = DayEntry::Record(DayRecord {
            is_open: Some(true),
            hours: Some("Solo mañanas".into()),
            ..record()
        });
        let day = resolve_day(&with_hours);
        assert_eq!(day.display_text, "Solo mañanas");
        assert!(day.is_open);
    }

    #[test]
    fn test_empty_record_is_closed() {
        assert_eq!(resolve_day(&DayEntry::Record(record())), ResolvedDay::closed());
    }

    #[test]
    fn test_format_day_hours_matches_display() {
        let entry = DayEntry::Record(DayRecord {
            open: Some("08:30".into()),
            close: Some("13:00".into()),
            ..record()
        });
        assert_eq!(format_day_hours(&entry), "08:30 - 13:00");
        assert_eq!(format_day_hours(&DayEntry::Missing), CLOSED_LABEL);
    }

    proptest! {
        #[test]
        fn prop_closed_always_wins(
            is_open in proptest::option::of(any::<bool>()),
            open in proptest::option::of("[0-9]{2}:[0-9]{2}"),
            close in proptest::option::of("[0-9]{2}:[0-9]{2}"),
            time in proptest::option::of("[a-zA-Z0-9 :-]{0,12}"),
            hours in proptest::option::of("[a-z ]{0,8}"),
        ) {
            let entry = DayEntry::Record(DayRecord {
                closed: Some(true),
                is_open,
                open,
                close,
                time,
                hours,
            });
            let day = resolve_day(&entry);
            prop_assert!(!day.is_open);
            prop_assert_eq!(day.display_text, CLOSED_LABEL);
        }
    }
}
