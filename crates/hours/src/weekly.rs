//! Weekly table and "today" lookup.

use crate::clock::Clock;
use crate::entry::WeeklySchedule;
use crate::resolver::{resolve_day, CLOSED_LABEL};
use chrono::Weekday;
use serde::Serialize;

/// Label used when today's row cannot be found.
pub const TODAY_LABEL: &str = "Hoy";

/// One row of the weekly table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day: String,
    pub time: String,
    pub is_open: bool,
}

impl DaySchedule {
    fn today_fallback() -> Self {
        Self {
            day: TODAY_LABEL.to_string(),
            time: CLOSED_LABEL.to_string(),
            is_open: false,
        }
    }
}

/// Localised (Spanish) name of a weekday.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Formats the full week, always seven rows in Monday-first order.
pub fn format_weekly_schedule(schedule: &WeeklySchedule) -> Vec<DaySchedule> {
    schedule
        .iter()
        .map(|(day, entry)| {
            let resolved = resolve_day(entry);
            DaySchedule {
                day: day_name(day).to_string(),
                time: resolved.display_text,
                is_open: resolved.is_open,
            }
        })
        .collect()
}

/// Row for the clock's current weekday.
///
/// The lookup goes by localised name so it stays consistent with
/// [`format_weekly_schedule`]; a miss yields a closed "Hoy" row.
pub fn get_today_hours(schedule: &WeeklySchedule, clock: &impl Clock) -> DaySchedule {
    let today = day_name(clock.weekday());

    format_weekly_schedule(schedule)
        .into_iter()
        .find(|row| row.day == today)
        .unwrap_or_else(|| {
            tracing::debug!(today, "No weekly row matched today");
            DaySchedule::today_fallback()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::entry::{DayEntry, DayRecord, DAY_KEYS};
    use proptest::prelude::*;
    use serde_json::json;

    fn sample() -> WeeklySchedule {
        WeeklySchedule::from_value(&json!({
            "sunday": "Cerrado",
            "saturday": {"time": "10:00 - 14:00"},
            "monday": {"open": "09:00", "close": "18:00"},
            "wednesday": {"closed": true, "open": "09:00", "close": "18:00"},
            "friday": {"isOpen": true}
        }))
    }

    #[test]
    fn test_weekly_order_and_values() {
        let rows = format_weekly_schedule(&sample());
        let names: Vec<&str> = rows.iter().map(|r| r.day.as_str()).collect();
        assert_eq!(
            names,
            ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado", "Domingo"]
        );

        assert_eq!(rows[0].time, "09:00 - 18:00");
        assert!(rows[0].is_open);
        assert_eq!(rows[1].time, CLOSED_LABEL);
        assert!(!rows[2].is_open);
        assert_eq!(rows[4].time, "24 horas");
        assert_eq!(rows[5].time, "10:00 - 14:00");
        assert!(!rows[6].is_open);
    }

    #[test]
    fn test_empty_schedule_all_closed() {
        let rows = format_weekly_schedule(&WeeklySchedule::new());
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|r| !r.is_open && r.time == CLOSED_LABEL));
    }

    #[test]
    fn test_today_on_sunday() {
        // 2024-06-09 was a Sunday, day index 0 in the browser convention
        let clock = FixedClock::parse("2024-06-09 12:00").unwrap();
        let today = get_today_hours(&sample(), &clock);
        assert_eq!(today.day, "Domingo");
        assert!(!today.is_open);
    }

    #[test]
    fn test_today_on_monday() {
        let clock = FixedClock::parse("2024-06-10 08:00").unwrap();
        let today = get_today_hours(&sample(), &clock);
        assert_eq!(today.day, "Lunes");
        assert_eq!(today.time, "09:00 - 18:00");
        assert!(today.is_open);
    }

    #[test]
    fn test_today_serializes_camel_case() {
        let clock = FixedClock::parse("2024-06-10 08:00").unwrap();
        let value = serde_json::to_value(get_today_hours(&sample(), &clock)).unwrap();
        assert_eq!(value["isOpen"], json!(true));
    }

    fn arb_entry() -> impl Strategy<Value = DayEntry> {
        prop_oneof![
            Just(DayEntry::Missing),
            "[a-zA-Z0-9 :-]{0,10}".prop_map(DayEntry::Text),
            (any::<bool>(), proptest::option::of("[0-9]{2}:[0-9]{2}")).prop_map(
                |(closed, open)| DayEntry::Record(DayRecord {
                    closed: Some(closed),
                    open: open.clone(),
                    close: open,
                    ..DayRecord::default()
                })
            ),
        ]
    }

    proptest! {
        #[test]
        fn prop_always_seven_rows_monday_first(
            entries in proptest::collection::vec(arb_entry(), 7)
        ) {
            let mut schedule = WeeklySchedule::new();
            // Fill in reverse so insertion order differs from week order
            for (i, entry) in entries.into_iter().enumerate().rev() {
                schedule.set(DAY_KEYS[i].0, entry);
            }
            let rows = format_weekly_schedule(&schedule);
            prop_assert_eq!(rows.len(), 7);
            prop_assert_eq!(rows[0].day.as_str(), "Lunes");
            prop_assert_eq!(rows[6].day.as_str(), "Domingo");
        }
    }
}
