//! Calendar rule snapshot: work week, work-hour windows, holidays, overrides.
//!
//! A [`CalendarConfig`] is an immutable, validated snapshot built through
//! [`CalendarConfigBuilder`]. Every calculation in this crate borrows a config;
//! nothing mutates one. "Switching profiles" is binding a different snapshot,
//! not editing a shared one.
//!
//! # Precedence
//!
//! For "is this date working, and with which window":
//! 1. date in `holidays` → not working (always wins)
//! 2. date has a per-date window → working, with that window
//! 3. weekday not in `work_week` → not working
//! 4. per-weekday window if present, else the default window

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use chrono::{NaiveDate, NaiveTime, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorktimeError};

/// A time-of-day work window `[start, end)`, not tied to any date.
///
/// Validated at construction: `start` must be strictly before `end`, so
/// overnight windows are rejected and every window has positive length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl WorkWindow {
    /// Create a window from two times of day.
    ///
    /// # Errors
    ///
    /// Returns [`WorktimeError::InvalidConfig`] if `start >= end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(WorktimeError::InvalidConfig(format!(
                "work window start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Create a window from hour/minute pairs, e.g. `from_hm(9, 0, 17, 30)`.
    ///
    /// # Errors
    ///
    /// Returns [`WorktimeError::InvalidConfig`] if either time is out of range
    /// or the window is empty or inverted.
    pub fn from_hm(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Result<Self> {
        let start = NaiveTime::from_hms_opt(start_hour, start_min, 0).ok_or_else(|| {
            WorktimeError::InvalidConfig(format!(
                "invalid window start time {start_hour:02}:{start_min:02}"
            ))
        })?;
        let end = NaiveTime::from_hms_opt(end_hour, end_min, 0).ok_or_else(|| {
            WorktimeError::InvalidConfig(format!(
                "invalid window end time {end_hour:02}:{end_min:02}"
            ))
        })?;
        Self::new(start, end)
    }

    /// Window start time of day (inclusive).
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Window end time of day (exclusive).
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Length of the window.
    pub fn length(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Immutable business-calendar rules.
///
/// Construct via [`CalendarConfig::builder`]. The default shape matches the
/// common office calendar: Monday through Friday, 09:00–17:00.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    work_week: HashSet<Weekday>,
    default_window: WorkWindow,
    weekday_windows: HashMap<Weekday, WorkWindow>,
    holidays: BTreeSet<NaiveDate>,
    date_windows: BTreeMap<NaiveDate, WorkWindow>,
}

impl CalendarConfig {
    /// Start building a config from the Mon–Fri 09:00–17:00 baseline.
    pub fn builder() -> CalendarConfigBuilder {
        CalendarConfigBuilder::default()
    }

    /// The weekdays that count as working days absent overrides.
    pub fn work_week(&self) -> &HashSet<Weekday> {
        &self.work_week
    }

    /// The window applied to working days without a more specific override.
    pub fn default_window(&self) -> WorkWindow {
        self.default_window
    }

    /// Per-weekday window override, if one is configured for `weekday`.
    pub fn weekday_window(&self, weekday: Weekday) -> Option<WorkWindow> {
        self.weekday_windows.get(&weekday).copied()
    }

    /// Whether `date` is an explicitly declared holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Per-date window override, if one is configured for `date`.
    pub fn date_window(&self, date: NaiveDate) -> Option<WorkWindow> {
        self.date_windows.get(&date).copied()
    }
}

/// Builder for [`CalendarConfig`].
///
/// Windows are validated as they are supplied ([`WorkWindow`] construction),
/// so the only thing left for [`build`](Self::build) to reject is an empty
/// work week — a calendar with zero working weekdays would make every scan
/// non-terminating.
#[derive(Debug, Clone)]
pub struct CalendarConfigBuilder {
    work_week: HashSet<Weekday>,
    default_window: WorkWindow,
    weekday_windows: HashMap<Weekday, WorkWindow>,
    holidays: BTreeSet<NaiveDate>,
    date_windows: BTreeMap<NaiveDate, WorkWindow>,
}

impl Default for CalendarConfigBuilder {
    fn default() -> Self {
        let nine_to_five = WorkWindow {
            start: NaiveTime::from_hms_opt(9, 0, 0).expect("literal time"),
            end: NaiveTime::from_hms_opt(17, 0, 0).expect("literal time"),
        };
        Self {
            work_week: [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ]
            .into_iter()
            .collect(),
            default_window: nine_to_five,
            weekday_windows: HashMap::new(),
            holidays: BTreeSet::new(),
            date_windows: BTreeMap::new(),
        }
    }
}

impl CalendarConfigBuilder {
    /// Replace the work week with the given weekdays.
    pub fn work_week(mut self, weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        self.work_week = weekdays.into_iter().collect();
        self
    }

    /// Set the default work-hour window.
    pub fn default_window(mut self, window: WorkWindow) -> Self {
        self.default_window = window;
        self
    }

    /// Override the window for one weekday.
    pub fn weekday_window(mut self, weekday: Weekday, window: WorkWindow) -> Self {
        self.weekday_windows.insert(weekday, window);
        self
    }

    /// Declare a holiday. Holidays are never working days, regardless of
    /// weekday or per-date windows.
    pub fn holiday(mut self, date: NaiveDate) -> Self {
        self.holidays.insert(date);
        self
    }

    /// Declare several holidays at once.
    pub fn holidays(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.holidays.extend(dates);
        self
    }

    /// Override the window for one specific date. A date with such an
    /// override is a working day even outside the work week, unless it is
    /// also a holiday.
    pub fn date_window(mut self, date: NaiveDate, window: WorkWindow) -> Self {
        self.date_windows.insert(date, window);
        self
    }

    /// Finalize the config.
    ///
    /// # Errors
    ///
    /// Returns [`WorktimeError::InvalidConfig`] if the work week is empty.
    pub fn build(self) -> Result<CalendarConfig> {
        if self.work_week.is_empty() {
            return Err(WorktimeError::InvalidConfig(
                "work week must contain at least one weekday".to_string(),
            ));
        }
        Ok(CalendarConfig {
            work_week: self.work_week,
            default_window: self.default_window,
            weekday_windows: self.weekday_windows,
            holidays: self.holidays,
            date_windows: self.date_windows,
        })
    }
}
