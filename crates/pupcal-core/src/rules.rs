//! Date rules: walking duration, weekly milestones, anniversaries.
//!
//! All functions are pure and take the birth date explicitly.
//!
//! # Walking table
//!
//! Age in months is `days_since_birth / 30.44`.  The table is half-open on
//! the upper bound of each row:
//!
//! | Age (months) | Minutes per walk |
//! |--------------|------------------|
//! | `< 3`        | 10               |
//! | `< 4`        | 15               |
//! | `< 5`        | 20               |
//! | `< 6`        | 25               |
//! | otherwise    | 30               |

use chrono::{Datelike, NaiveDate, Weekday};

use crate::LeapDayPolicy;

/// Average days per month used for the age-in-months approximation.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// `(upper bound in months, minutes)` rows, ascending.
const WALK_TABLE: [(f64, u32); 4] = [(3.0, 10), (4.0, 15), (5.0, 20), (6.0, 25)];
const WALK_MINUTES_MAX: u32 = 30;

/// Days elapsed from `birth` to `date` (negative before birth).
#[inline]
pub fn age_in_days(date: NaiveDate, birth: NaiveDate) -> i64 {
    (date - birth).num_days()
}

/// Completed weeks from `birth` to `date`, floored.
#[inline]
pub fn age_in_weeks(date: NaiveDate, birth: NaiveDate) -> i64 {
    age_in_days(date, birth).div_euclid(7)
}

/// Minutes per walk for an age expressed in (fractional) months.
pub fn minutes_for_age_months(months: f64) -> u32 {
    WALK_TABLE
        .iter()
        .find(|(upper, _)| months < *upper)
        .map_or(WALK_MINUTES_MAX, |(_, mins)| *mins)
}

/// Minutes per walk on `date`.
pub fn walking_minutes(date: NaiveDate, birth: NaiveDate) -> u32 {
    minutes_for_age_months(age_in_days(date, birth) as f64 / DAYS_PER_MONTH)
}

/// `true` on the first day of the week (Monday).
#[inline]
pub fn is_weekly_milestone(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

/// `true` when `date` is an anniversary of `birth` in a later year.
///
/// A Feb-29 birth has no exact match in non-leap years; `policy` picks the
/// substitute day (or none).
pub fn is_anniversary(date: NaiveDate, birth: NaiveDate, policy: LeapDayPolicy) -> bool {
    if date.year() <= birth.year() {
        return false;
    }
    if date.month() == birth.month() && date.day() == birth.day() {
        return true;
    }
    let leap_birth = birth.month() == 2 && birth.day() == 29;
    if !leap_birth || is_leap_year(date.year()) {
        return false;
    }
    match policy {
        LeapDayPolicy::Feb28 => date.month() == 2 && date.day() == 28,
        LeapDayPolicy::Mar1 => date.month() == 3 && date.day() == 1,
        LeapDayPolicy::Skip => false,
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Whole years elapsed, approximated as `days / 365`.
#[inline]
pub fn years_elapsed(date: NaiveDate, birth: NaiveDate) -> i64 {
    age_in_days(date, birth).div_euclid(365)
}
