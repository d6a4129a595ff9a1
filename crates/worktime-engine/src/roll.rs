//! Snap an instant to the nearest valid business instant.
//!
//! Rolling never crosses an instant in the wrong direction: a backward roll
//! result is `<=` the input, a forward roll result is `>=` it, and an instant
//! already inside its window is returned unchanged.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::error::{Result, WorktimeError};
use crate::window::{window_for, DayWindow};

/// Safety valve for day scans. A well-formed config has at least one working
/// weekday, so only a holiday run longer than ten years can trip this.
const MAX_SCAN_DAYS: u32 = 3_660;

/// Direction in which [`roll`] moves an out-of-window instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollDirection {
    Forward,
    Backward,
}

/// Snap `instant` to the nearest valid business instant in `direction`.
///
/// Within-window instants are returned unchanged. Otherwise:
///
/// - `Backward`: same-day window end if the instant is past it; the previous
///   working day's window end if the instant is before the same-day window
///   start or the day is non-working.
/// - `Forward`: symmetric — same-day window start if the instant precedes it;
///   the next working day's window start otherwise.
///
/// # Errors
///
/// Returns [`WorktimeError::ScanExhausted`] if no working day exists within
/// the defensive scan cap — only reachable with holiday runs covering years.
pub fn roll(
    instant: DateTime<FixedOffset>,
    direction: RollDirection,
    config: &CalendarConfig,
) -> Result<DateTime<FixedOffset>> {
    let offset = *instant.offset();
    let date = instant.date_naive();
    match direction {
        RollDirection::Forward => {
            if let Some(win) = window_for(date, offset, config) {
                if instant <= win.start {
                    return Ok(win.start);
                }
                if instant < win.end {
                    return Ok(instant);
                }
            }
            next_working_window(date, offset, config).map(|w| w.start)
        }
        RollDirection::Backward => {
            if let Some(win) = window_for(date, offset, config) {
                if instant >= win.end {
                    return Ok(win.end);
                }
                if instant >= win.start {
                    return Ok(instant);
                }
            }
            prev_working_window(date, offset, config).map(|w| w.end)
        }
    }
}

/// Window start of the first working day strictly after the instant's date.
///
/// Morning-of-next-business-day semantics: Monday 14:00 rolls to Tuesday's
/// window start, and a Friday evening rolls over the weekend.
pub fn next_business_day(
    instant: DateTime<FixedOffset>,
    config: &CalendarConfig,
) -> Result<DateTime<FixedOffset>> {
    next_working_window(instant.date_naive(), *instant.offset(), config).map(|w| w.start)
}

/// Window start of the last working day strictly before the instant's date.
pub fn previous_business_day(
    instant: DateTime<FixedOffset>,
    config: &CalendarConfig,
) -> Result<DateTime<FixedOffset>> {
    prev_working_window(instant.date_naive(), *instant.offset(), config).map(|w| w.start)
}

/// Window of the first working day strictly after `date`.
pub(crate) fn next_working_window(
    date: NaiveDate,
    offset: FixedOffset,
    config: &CalendarConfig,
) -> Result<DayWindow> {
    let mut current = date;
    for _ in 0..MAX_SCAN_DAYS {
        current = current
            .succ_opt()
            .ok_or(WorktimeError::ScanExhausted(MAX_SCAN_DAYS))?;
        if let Some(win) = window_for(current, offset, config) {
            return Ok(win);
        }
    }
    Err(WorktimeError::ScanExhausted(MAX_SCAN_DAYS))
}

/// Window of the last working day strictly before `date`.
pub(crate) fn prev_working_window(
    date: NaiveDate,
    offset: FixedOffset,
    config: &CalendarConfig,
) -> Result<DayWindow> {
    let mut current = date;
    for _ in 0..MAX_SCAN_DAYS {
        current = current
            .pred_opt()
            .ok_or(WorktimeError::ScanExhausted(MAX_SCAN_DAYS))?;
        if let Some(win) = window_for(current, offset, config) {
            return Ok(win);
        }
    }
    Err(WorktimeError::ScanExhausted(MAX_SCAN_DAYS))
}
