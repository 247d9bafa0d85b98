//! Business-hours resolution for ChapaShop listings.
//!
//! This crate turns loosely shaped weekly schedules from the backend into a
//! uniform display model:
//! - Per-day resolution into display text and an open flag
//! - A fixed Monday-first weekly table with Spanish day names
//! - Today's row and an "open right now" check against an injected clock
//!
//! # Example
//!
//! ```
//! use chapashop_hours::{format_weekly_schedule, WeeklySchedule};
//! use serde_json::json;
//!
//! let schedule = WeeklySchedule::from_value(&json!({
//!     "monday": {"open": "09:00", "close": "18:00"},
//!     "sunday": "Cerrado"
//! }));
//!
//! let week = format_weekly_schedule(&schedule);
//! assert_eq!(week.len(), 7);
//! assert_eq!(week[0].time, "09:00 - 18:00");
//! ```

#![warn(clippy::all)]

mod clock;
mod entry;
mod open_now;
mod resolver;
mod weekly;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::{DayEntry, DayRecord, WeeklySchedule, DAY_KEYS};
pub use open_now::is_open_now;
pub use resolver::{format_day_hours, resolve_day, ResolvedDay, ALL_DAY_LABEL, CLOSED_LABEL};
pub use weekly::{day_name, format_weekly_schedule, get_today_hours, DaySchedule, TODAY_LABEL};
