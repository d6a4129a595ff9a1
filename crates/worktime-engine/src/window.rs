//! Effective work-hour window resolution for a calendar date.
//!
//! Combines the time-of-day window chosen by override precedence with a
//! concrete date and UTC offset, producing absolute window boundaries.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::classify::is_working_day;
use crate::config::CalendarConfig;

/// The absolute `[start, end)` business window of one working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl DayWindow {
    /// Length of the window.
    pub fn length(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether `instant` falls inside the window (start inclusive, end
    /// exclusive).
    pub fn contains(&self, instant: DateTime<FixedOffset>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Resolve the business window for `date`, or `None` when the date is not a
/// working day.
///
/// The boundaries carry `offset` — the UTC offset of whatever reference
/// instant produced `date`. Precedence for the time-of-day pair: per-date
/// override, then per-weekday override, then the default window.
pub fn window_for(
    date: NaiveDate,
    offset: FixedOffset,
    config: &CalendarConfig,
) -> Option<DayWindow> {
    if !is_working_day(date, config) {
        return None;
    }
    let times = config
        .date_window(date)
        .or_else(|| config.weekday_window(date.weekday()))
        .unwrap_or_else(|| config.default_window());
    Some(DayWindow {
        start: instant_at(date, times.start(), offset),
        end: instant_at(date, times.end(), offset),
    })
}

/// The window start of the instant's own date, or `None` on a non-working day.
pub fn beginning_of_workday(
    instant: DateTime<FixedOffset>,
    config: &CalendarConfig,
) -> Option<DateTime<FixedOffset>> {
    window_for(instant.date_naive(), *instant.offset(), config).map(|w| w.start)
}

/// The window end of the instant's own date, or `None` on a non-working day.
pub fn end_of_workday(
    instant: DateTime<FixedOffset>,
    config: &CalendarConfig,
) -> Option<DateTime<FixedOffset>> {
    window_for(instant.date_naive(), *instant.offset(), config).map(|w| w.end)
}

/// Combine a local date and time of day with a fixed offset into an absolute
/// instant. Total for fixed offsets — there are no DST gaps to fall into.
fn instant_at(date: NaiveDate, time: NaiveTime, offset: FixedOffset) -> DateTime<FixedOffset> {
    let local = date.and_time(time);
    let utc = local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, offset)
}
