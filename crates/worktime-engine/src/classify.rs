//! Pure predicates over instants and calendar dates.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};

use crate::config::CalendarConfig;
use crate::window::window_for;

/// Whether `date` is open for business under `config`.
///
/// Precedence: a holiday is never a working day; a date with a per-date
/// window override is always a working day (even outside the work week);
/// otherwise membership in the work week decides.
pub fn is_working_day(date: NaiveDate, config: &CalendarConfig) -> bool {
    if config.is_holiday(date) {
        return false;
    }
    if config.date_window(date).is_some() {
        return true;
    }
    config.work_week().contains(&date.weekday())
}

/// Whether `date` falls on a configured work-week weekday.
///
/// Ignores holidays and per-date overrides — this is purely about the
/// weekday, where [`is_working_day`] is about the date.
pub fn is_work_week_day(date: NaiveDate, config: &CalendarConfig) -> bool {
    config.work_week().contains(&date.weekday())
}

/// Whether `instant` falls inside the effective work-hour window of its own
/// calendar date. The window is half-open: the start instant counts as
/// working time, the end instant does not.
pub fn is_within_window(instant: DateTime<FixedOffset>, config: &CalendarConfig) -> bool {
    match window_for(instant.date_naive(), *instant.offset(), config) {
        Some(win) => win.contains(instant),
        None => false,
    }
}
