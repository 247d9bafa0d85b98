//! Business-hours commands

use super::{print_json, read_json};
use crate::OutputFormat;
use chapashop_core::{Error, Result};
use chapashop_hours::{
    format_weekly_schedule, get_today_hours, is_open_now, Clock, DaySchedule, FixedClock,
    SystemClock, WeeklySchedule,
};
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

/// Clock selected by the `--at` flag.
enum CliClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for CliClock {
    fn now(&self) -> NaiveDateTime {
        match self {
            CliClock::System(clock) => clock.now(),
            CliClock::Fixed(clock) => clock.now(),
        }
    }
}

fn clock(at: Option<&str>) -> Result<CliClock> {
    match at {
        None => Ok(CliClock::System(SystemClock)),
        Some(raw) => FixedClock::parse(raw)
            .map(CliClock::Fixed)
            .map_err(|e| {
                Error::validation(format!("Invalid --at value '{}': {}", raw, e))
                    .with_suggestion("Use the format YYYY-MM-DD HH:MM")
            }),
    }
}

fn load_schedule(file: &Path) -> Result<WeeklySchedule> {
    Ok(WeeklySchedule::from_value(&read_json(file)?))
}

fn print_row(row: &DaySchedule) {
    let status = if row.is_open {
        "abierto".green().to_string()
    } else {
        "cerrado".red().to_string()
    };
    println!("  {:<10} {:<20} {}", row.day.bold(), row.time, status);
}

/// Print the seven-day table under the configured application name
pub fn weekly(file: &Path, app_name: &str, format: OutputFormat) -> Result<()> {
    let rows = format_weekly_schedule(&load_schedule(file)?);

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Text => {
            println!("{}", format!("{app_name} · Horario").bold());
            rows.iter().for_each(print_row);
            Ok(())
        }
    }
}

/// Print today's row
pub fn today(file: &Path, at: Option<&str>, format: OutputFormat) -> Result<()> {
    let row = get_today_hours(&load_schedule(file)?, &clock(at)?);

    match format {
        OutputFormat::Json => print_json(&row),
        OutputFormat::Text => {
            print_row(&row);
            Ok(())
        }
    }
}

/// Print whether the business is open at the given time
pub fn open_now(file: &Path, at: Option<&str>, format: OutputFormat) -> Result<()> {
    let clock = clock(at)?;
    let open = is_open_now(&load_schedule(file)?, &clock);

    match format {
        OutputFormat::Json => print_json(&json!({
            "isOpen": open,
            "at": clock.now().format("%Y-%m-%d %H:%M").to_string(),
        })),
        OutputFormat::Text => {
            if open {
                println!("{}", "Abierto ahora".green().bold());
            } else {
                println!("{}", "Cerrado ahora".red().bold());
            }
            Ok(())
        }
    }
}
