//! Schedule input model.
//!
//! Backend rows store opening hours as loosely shaped JSON. Each day may be
//! a display string, a partial record, or missing entirely. Parsing here is
//! total: wrong-typed values are treated as absent instead of failing.

use chrono::Weekday;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Day keys in week order, Monday first.
pub const DAY_KEYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "monday"),
    (Weekday::Tue, "tuesday"),
    (Weekday::Wed, "wednesday"),
    (Weekday::Thu, "thursday"),
    (Weekday::Fri, "friday"),
    (Weekday::Sat, "saturday"),
    (Weekday::Sun, "sunday"),
];

/// A single day's schedule as supplied by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DayEntry {
    /// Key missing, null, or not a string/object.
    #[default]
    Missing,
    /// Plain display string such as `"9:00 - 18:00"` or `"Cerrado"`.
    Text(String),
    /// Structured record with any subset of fields.
    Record(DayRecord),
}

/// Structured day record. Every field is optional in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayRecord {
    pub closed: Option<bool>,
    pub is_open: Option<bool>,
    pub open: Option<String>,
    pub close: Option<String>,
    pub time: Option<String>,
    pub hours: Option<String>,
}

impl DayRecord {
    /// Opening and closing times, only when both are non-empty.
    pub(crate) fn open_close(&self) -> Option<(&str, &str)> {
        match (non_empty(&self.open), non_empty(&self.close)) {
            (Some(open), Some(close)) => Some((open, close)),
            _ => None,
        }
    }

    pub(crate) fn time(&self) -> Option<&str> {
        non_empty(&self.time)
    }

    pub(crate) fn hours(&self) -> Option<&str> {
        non_empty(&self.hours)
    }

    fn from_object(map: &serde_json::Map<String, Value>) -> Self {
        let string = |key: &str| map.get(key).and_then(Value::as_str).map(String::from);
        let flag = |key: &str| map.get(key).and_then(Value::as_bool);

        Self {
            closed: flag("closed"),
            is_open: flag("isOpen"),
            open: string("open"),
            close: string("close"),
            time: string("time"),
            hours: string("hours"),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl DayEntry {
    /// Builds an entry from an arbitrary JSON value.
    ///
    /// ```
    /// use chapashop_hours::DayEntry;
    /// use serde_json::json;
    ///
    /// assert_eq!(DayEntry::from_value(&json!(null)), DayEntry::Missing);
    /// assert_eq!(DayEntry::from_value(&json!(42)), DayEntry::Missing);
    /// assert_eq!(DayEntry::from_value(&json!("9-6")), DayEntry::Text("9-6".into()));
    /// ```
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => DayEntry::Text(s.clone()),
            Value::Object(map) => DayEntry::Record(DayRecord::from_object(map)),
            Value::Null => DayEntry::Missing,
            other => {
                tracing::trace!(value = %other, "Ignoring non-object day entry");
                DayEntry::Missing
            }
        }
    }

    /// Returns the structured record, if any.
    pub fn as_record(&self) -> Option<&DayRecord> {
        match self {
            DayEntry::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl From<DayRecord> for DayEntry {
    fn from(record: DayRecord) -> Self {
        DayEntry::Record(record)
    }
}

impl From<&str> for DayEntry {
    fn from(text: &str) -> Self {
        DayEntry::Text(text.to_string())
    }
}

impl<'de> Deserialize<'de> for DayEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(DayEntry::from_value(&value))
    }
}

/// Seven day slots, Monday first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [DayEntry; 7],
}

impl WeeklySchedule {
    /// Creates an empty schedule where every day is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry for a day.
    pub fn with_day(mut self, day: Weekday, entry: impl Into<DayEntry>) -> Self {
        self.set(day, entry);
        self
    }

    pub fn set(&mut self, day: Weekday, entry: impl Into<DayEntry>) {
        self.days[day.num_days_from_monday() as usize] = entry.into();
    }

    /// Returns the entry for a day.
    pub fn get(&self, day: Weekday) -> &DayEntry {
        &self.days[day.num_days_from_monday() as usize]
    }

    /// Iterates over `(weekday, entry)` in fixed Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayEntry)> {
        DAY_KEYS.iter().map(move |(day, _)| (*day, self.get(*day)))
    }

    /// Returns true if no day has any entry.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| *d == DayEntry::Missing)
    }

    /// Builds a schedule from an arbitrary JSON value.
    ///
    /// Non-object input yields an all-missing schedule. Unknown keys are
    /// ignored.
    pub fn from_value(value: &Value) -> Self {
        let mut schedule = Self::new();
        let Some(map) = value.as_object() else {
            if !value.is_null() {
                tracing::debug!("Schedule is not an object, treating every day as closed");
            }
            return schedule;
        };

        for (day, key) in DAY_KEYS {
            if let Some(raw) = map.get(key) {
                schedule.set(day, DayEntry::from_value(raw));
            }
        }

        schedule
    }
}

impl<'de> Deserialize<'de> for WeeklySchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(WeeklySchedule::from_value(&value))
    }
}
