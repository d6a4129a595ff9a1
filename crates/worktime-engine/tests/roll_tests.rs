//! Tests for rolling instants into business time and business-day stepping.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Weekday};
use chrono_tz::US::Alaska;
use worktime_engine::{
    next_business_day, previous_business_day, roll, CalendarConfig, RollDirection, WorkWindow,
};

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
}

fn standard() -> CalendarConfig {
    CalendarConfig::builder().build().unwrap()
}

// ── roll backward ───────────────────────────────────────────────────────────

#[test]
fn backward_after_hours_rolls_to_same_day_window_end() {
    // 2012-05-09 is a Wednesday.
    let config = standard();
    let late = utc(2012, 5, 9, 23, 0);
    assert_eq!(
        roll(late, RollDirection::Backward, &config).unwrap(),
        utc(2012, 5, 9, 17, 0)
    );
}

#[test]
fn backward_before_hours_rolls_to_previous_day_window_end() {
    let config = standard();
    let early = utc(2012, 5, 9, 4, 0);
    assert_eq!(
        roll(early, RollDirection::Backward, &config).unwrap(),
        utc(2012, 5, 8, 17, 0)
    );
}

#[test]
fn backward_on_a_sunday_rolls_to_friday_window_end() {
    // 2012-05-06 is a Sunday; 2012-05-04 the previous Friday.
    let config = standard();
    let sunday = utc(2012, 5, 6, 12, 0);
    assert_eq!(
        roll(sunday, RollDirection::Backward, &config).unwrap(),
        utc(2012, 5, 4, 17, 0)
    );
}

#[test]
fn roll_is_identity_within_the_window() {
    let config = standard();
    let midday = utc(2012, 5, 8, 12, 0);
    assert_eq!(roll(midday, RollDirection::Backward, &config).unwrap(), midday);
    assert_eq!(roll(midday, RollDirection::Forward, &config).unwrap(), midday);
}

#[test]
fn backward_respects_a_sparse_work_week() {
    // Wednesdays 09:00-12:00 and Saturdays 13:00-14:00 only. Saturday noon
    // precedes that day's window, so the target is Wednesday's window end.
    let config = CalendarConfig::builder()
        .work_week([Weekday::Wed, Weekday::Sat])
        .weekday_window(Weekday::Wed, WorkWindow::from_hm(9, 0, 12, 0).unwrap())
        .weekday_window(Weekday::Sat, WorkWindow::from_hm(13, 0, 14, 0).unwrap())
        .build()
        .unwrap();

    let saturday_noon = utc(2010, 12, 25, 12, 0);
    assert_eq!(
        roll(saturday_noon, RollDirection::Backward, &config).unwrap(),
        utc(2010, 12, 22, 12, 0)
    );
}

// ── roll forward ────────────────────────────────────────────────────────────

#[test]
fn forward_before_hours_rolls_to_same_day_window_start() {
    let config = standard();
    let early = utc(2012, 5, 9, 4, 0);
    assert_eq!(
        roll(early, RollDirection::Forward, &config).unwrap(),
        utc(2012, 5, 9, 9, 0)
    );
}

#[test]
fn forward_after_hours_rolls_to_next_day_window_start() {
    let config = standard();
    let late = utc(2012, 5, 9, 23, 0);
    assert_eq!(
        roll(late, RollDirection::Forward, &config).unwrap(),
        utc(2012, 5, 10, 9, 0)
    );
}

#[test]
fn forward_on_a_saturday_rolls_to_monday_window_start() {
    // 2012-05-05 is a Saturday; 2012-05-07 the next Monday.
    let config = standard();
    let saturday = utc(2012, 5, 5, 12, 0);
    assert_eq!(
        roll(saturday, RollDirection::Forward, &config).unwrap(),
        utc(2012, 5, 7, 9, 0)
    );
}

#[test]
fn forward_skips_holidays() {
    // 2011-07-04 is a Monday holiday; Friday evening lands on Tuesday morning.
    let config = CalendarConfig::builder()
        .holiday(NaiveDate::from_ymd_opt(2011, 7, 4).unwrap())
        .build()
        .unwrap();

    let friday_evening = utc(2011, 7, 1, 19, 0);
    assert_eq!(
        roll(friday_evening, RollDirection::Forward, &config).unwrap(),
        utc(2011, 7, 5, 9, 0)
    );
}

// ── business-day stepping ───────────────────────────────────────────────────

#[test]
fn next_business_day_starts_the_following_morning() {
    // 2008-07-07 is a Monday.
    let config = standard();
    let monday_afternoon = utc(2008, 7, 7, 14, 0);
    assert_eq!(
        next_business_day(monday_afternoon, &config).unwrap(),
        utc(2008, 7, 8, 9, 0)
    );
}

#[test]
fn previous_business_day_starts_the_prior_morning() {
    // 2008-07-03 is a Thursday.
    let config = standard();
    let thursday_afternoon = utc(2008, 7, 3, 14, 0);
    assert_eq!(
        previous_business_day(thursday_afternoon, &config).unwrap(),
        utc(2008, 7, 2, 9, 0)
    );
}

#[test]
fn next_business_day_skips_a_holiday_run() {
    // 2014-12-25 (Thu) and 2014-12-26 (Fri) are holidays; from Wednesday the
    // next business day is Monday the 29th.
    let config = CalendarConfig::builder()
        .holidays([
            NaiveDate::from_ymd_opt(2014, 12, 25).unwrap(),
            NaiveDate::from_ymd_opt(2014, 12, 26).unwrap(),
        ])
        .build()
        .unwrap();

    let wednesday = utc(2014, 12, 24, 14, 0);
    assert_eq!(
        next_business_day(wednesday, &config).unwrap(),
        utc(2014, 12, 29, 9, 0)
    );
}

#[test]
fn previous_business_day_skips_a_holiday() {
    // 2014-12-12 is a Friday; 2014-12-13 a Saturday. With the Friday declared
    // a holiday, stepping back from Saturday lands on Thursday morning.
    let config = CalendarConfig::builder()
        .holiday(NaiveDate::from_ymd_opt(2014, 12, 12).unwrap())
        .build()
        .unwrap();

    let saturday = utc(2014, 12, 13, 4, 0);
    assert_eq!(
        previous_business_day(saturday, &config).unwrap(),
        utc(2014, 12, 11, 9, 0)
    );
}

// ── offset preservation ─────────────────────────────────────────────────────

#[test]
fn stepping_preserves_the_instants_utc_offset() {
    // An Alaska-time afternoon; the next business day must stay on Alaska's
    // local calendar rather than snapping to UTC.
    let config = standard();
    let day = Alaska
        .with_ymd_and_hms(2014, 12, 23, 13, 55, 10)
        .unwrap()
        .fixed_offset();
    let next = next_business_day(day, &config).unwrap();

    assert_eq!(
        next,
        Alaska
            .with_ymd_and_hms(2014, 12, 24, 9, 0, 0)
            .unwrap()
            .fixed_offset()
    );
    assert_eq!(next.offset(), day.offset());
}

#[test]
fn rolling_preserves_the_instants_utc_offset() {
    let config = standard();
    let offset = FixedOffset::east_opt(3 * 3600).unwrap();
    let evening = offset.with_ymd_and_hms(2012, 5, 9, 23, 0, 0).unwrap();

    let rolled = roll(evening, RollDirection::Backward, &config).unwrap();
    assert_eq!(rolled, offset.with_ymd_and_hms(2012, 5, 9, 17, 0, 0).unwrap());
    assert_eq!(rolled.offset(), &offset);
}
