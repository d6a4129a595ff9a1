//! Signed business durations and duration offsetting.
//!
//! Business duration counts only time inside effective work-hour windows:
//! weekends, holidays, and out-of-window hours contribute nothing. Both
//! algorithms clamp their anchors into windows with [`roll`] and then walk
//! the calendar day by day.

use chrono::{DateTime, FixedOffset, TimeDelta};

use crate::config::CalendarConfig;
use crate::error::Result;
use crate::roll::{next_working_window, prev_working_window, roll, RollDirection};
use crate::window::window_for;

/// Signed elapsed business time between `a` and `b`.
///
/// Antisymmetric: swapping the endpoints negates the result. Endpoints
/// outside working time are clamped inward first (the start forward, the end
/// backward), so out-of-window slack at either end contributes nothing.
///
/// # Errors
///
/// Propagates [`crate::WorktimeError::ScanExhausted`] from the clamping rolls.
pub fn business_duration_between(
    a: DateTime<FixedOffset>,
    b: DateTime<FixedOffset>,
    config: &CalendarConfig,
) -> Result<TimeDelta> {
    if a <= b {
        forward_elapsed(a, b, config)
    } else {
        forward_elapsed(b, a, config).map(|elapsed| -elapsed)
    }
}

/// Elapsed business time from `from` to `to`, requiring `from <= to`.
///
/// Sums, for each calendar day in the clamped range, the overlap between
/// that day's window and the range. When the endpoints carry different UTC
/// offsets the walk runs on `from`'s local calendar.
fn forward_elapsed(
    from: DateTime<FixedOffset>,
    to: DateTime<FixedOffset>,
    config: &CalendarConfig,
) -> Result<TimeDelta> {
    let start = roll(from, RollDirection::Forward, config)?;
    let end = roll(to, RollDirection::Backward, config)?.with_timezone(from.offset());
    if end <= start {
        // Both endpoints in the same non-working gap.
        return Ok(TimeDelta::zero());
    }

    let offset = *from.offset();
    let mut total = TimeDelta::zero();
    let mut date = start.date_naive();
    let last = end.date_naive();
    while date <= last {
        if let Some(win) = window_for(date, offset, config) {
            let lo = win.start.max(start);
            let hi = win.end.min(end);
            if hi > lo {
                total = total + (hi - lo);
            }
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    Ok(total)
}

/// The instant reached by moving `amount` of business time from `start`.
///
/// Positive amounts consume working time forward: the start is rolled into a
/// window, each day's remaining capacity is spent, and exhausted days advance
/// to the next working day's window start. Negative amounts are symmetric,
/// consuming from window ends backward. A zero amount anchors to
/// `roll(start, Forward)`.
///
/// # Errors
///
/// Propagates [`crate::WorktimeError::ScanExhausted`] from rolling or from
/// the day-advance scans.
pub fn offset_by(
    start: DateTime<FixedOffset>,
    amount: TimeDelta,
    config: &CalendarConfig,
) -> Result<DateTime<FixedOffset>> {
    let offset = *start.offset();
    if amount > TimeDelta::zero() {
        let mut cursor = roll(start, RollDirection::Forward, config)?;
        let mut remaining = amount;
        loop {
            if let Some(win) = window_for(cursor.date_naive(), offset, config) {
                let capacity = win.end - cursor;
                if remaining <= capacity {
                    return Ok(cursor + remaining);
                }
                remaining = remaining - capacity;
            }
            cursor = next_working_window(cursor.date_naive(), offset, config)?.start;
        }
    } else if amount < TimeDelta::zero() {
        let mut cursor = roll(start, RollDirection::Backward, config)?;
        let mut remaining = -amount;
        loop {
            if let Some(win) = window_for(cursor.date_naive(), offset, config) {
                let capacity = cursor - win.start;
                if remaining <= capacity {
                    return Ok(cursor - remaining);
                }
                remaining = remaining - capacity;
            }
            cursor = prev_working_window(cursor.date_naive(), offset, config)?.end;
        }
    } else {
        roll(start, RollDirection::Forward, config)
    }
}
