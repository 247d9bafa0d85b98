//! "Open right now" check against today's raw entry.
//!
//! This path reads the raw record directly and does not go through
//! [`resolve_day`](crate::resolve_day). The two can disagree: a plain text
//! entry such as `"9-6"` displays as open but is never open here.

use crate::clock::Clock;
use crate::entry::{DayEntry, WeeklySchedule};

/// Returns true if the business is open at the clock's current time.
///
/// Times are compared as `hour * 100 + minute` with both bounds inclusive.
/// Ranges that close after midnight (`close < open`) are never open.
///
/// ```
/// use chapashop_hours::{is_open_now, FixedClock, WeeklySchedule};
/// use serde_json::json;
///
/// let schedule = WeeklySchedule::from_value(&json!({
///     "monday": {"open": "09:00", "close": "18:00"}
/// }));
/// let noon = FixedClock::parse("2024-06-10 12:00").unwrap();
/// assert!(is_open_now(&schedule, &noon));
/// ```
pub fn is_open_now(schedule: &WeeklySchedule, clock: &impl Clock) -> bool {
    let DayEntry::Record(record) = schedule.get(clock.weekday()) else {
        return false;
    };

    if record.closed == Some(true) || record.is_open == Some(false) {
        return false;
    }

    if let Some((open, close)) = record.open_close() {
        let (Some(open), Some(close)) = (parse_hhmm(open), parse_hhmm(close)) else {
            tracing::debug!(open, close, "Unparseable opening hours");
            return false;
        };
        let now = clock.hhmm();
        return open <= now && now <= close;
    }

    record.is_open == Some(true)
}

/// Parses `"HH:MM"` (extra `:SS` ignored) into `hour * 100 + minute`.
///
/// Values too large to encode yield `None`.
fn parse_hhmm(value: &str) -> Option<u32> {
    let mut parts = value.split(':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = parts.next()?.trim().parse().ok()?;
    hour.checked_mul(100)?.checked_add(minute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::resolve_day;
    use chrono::Weekday;
    use serde_json::json;

    // 2024-06-10 was a Monday
    fn at(time: &str) -> FixedClock {
        FixedClock::parse(&format!("2024-06-10 {time}")).unwrap()
    }

    fn monday(entry: serde_json::Value) -> WeeklySchedule {
        WeeklySchedule::from_value(&json!({ "monday": entry }))
    }

    #[test]
    fn test_within_hours() {
        let schedule = monday(json!({"open": "09:00", "close": "18:00"}));
        assert!(is_open_now(&schedule, &at("12:00")));
        assert!(!is_open_now(&schedule, &at("20:00")));
        assert!(!is_open_now(&schedule, &at("08:59")));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let schedule = monday(json!({"open": "09:00", "close": "18:00"}));
        assert!(is_open_now(&schedule, &at("09:00")));
        assert!(is_open_now(&schedule, &at("18:00")));
        assert!(!is_open_now(&schedule, &at("18:01")));
    }

    #[test]
    fn test_overnight_range_never_open() {
        let schedule = monday(json!({"open": "20:00", "close": "02:00"}));
        assert!(!is_open_now(&schedule, &at("23:00")));
        assert!(!is_open_now(&schedule, &at("01:00")));
    }

    #[test]
    fn test_closed_flags_win() {
        let closed = monday(json!({"closed": true, "open": "00:00", "close": "23:59"}));
        assert!(!is_open_now(&closed, &at("12:00")));

        let not_open = monday(json!({"isOpen": false, "open": "00:00", "close": "23:59"}));
        assert!(!is_open_now(&not_open, &at("12:00")));
    }

    #[test]
    fn test_raw_flag_fallback() {
        assert!(is_open_now(&monday(json!({"isOpen": true})), &at("03:00")));
        assert!(!is_open_now(&monday(json!({"hours": "9-6"})), &at("12:00")));
    }

    #[test]
    fn test_missing_day_or_schedule() {
        assert!(!is_open_now(&WeeklySchedule::new(), &at("12:00")));
        let tuesday_only = WeeklySchedule::new().with_day(Weekday::Tue, "9-6");
        assert!(!is_open_now(&tuesday_only, &at("12:00")));
    }

    #[test]
    fn test_text_entry_disagrees_with_resolver() {
        let schedule = monday(json!("09:00 - 18:00"));
        assert!(resolve_day(schedule.get(Weekday::Mon)).is_open);
        assert!(!is_open_now(&schedule, &at("12:00")));
    }

    #[test]
    fn test_unparseable_times() {
        let schedule = monday(json!({"open": "nueve", "close": "18:00"}));
        assert!(!is_open_now(&schedule, &at("12:00")));
    }

    #[test]
    fn test_oversized_hours_not_open() {
        let schedule = monday(json!({"open": "50000000:00", "close": "18:00"}));
        assert!(!is_open_now(&schedule, &at("12:00")));

        let schedule = monday(json!({"open": "09:00", "close": "18:4294967295"}));
        assert!(!is_open_now(&schedule, &at("12:00")));
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("09:30"), Some(930));
        assert_eq!(parse_hhmm("9:05"), Some(905));
        assert_eq!(parse_hhmm("18:00:00"), Some(1800));
        assert_eq!(parse_hhmm("18"), None);
        assert_eq!(parse_hhmm("50000000:00"), None);
    }
}
