//! Date arithmetic for recurring events
//!
//! Two kinds of recurrence exist: a fixed number of days (pay cadence) and a
//! day of the month (bills). Both are computed in closed form so long
//! horizons never walk the calendar one day at a time.

use chrono::{Datelike, Days, NaiveDate};

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// The given day of a month, pulled back to the month's last day if the
/// month is shorter
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day.min(days_in_month(year, month)))
}

/// The clamped `due_day` in the month `offset` months after `date`'s month
fn due_in_month(date: NaiveDate, offset: i64, due_day: u32) -> Option<NaiveDate> {
    let index = i64::from(date.year()) * 12 + i64::from(date.month0()) + offset;
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
    clamped_date(year, month, due_day)
}

/// True for a day of the month that can be scheduled
pub fn is_valid_due_day(due_day: u32) -> bool {
    (1..=31).contains(&due_day)
}

/// Next occurrence of `due_day` on or after `today`
pub fn next_due_on_or_after(today: NaiveDate, due_day: u32) -> Option<NaiveDate> {
    monthly_occurrences(today, due_day).next()
}

/// Every occurrence of `due_day` on or after `today`, one per month
///
/// Each month is clamped from the configured day, so a day-31 bill falls on
/// Feb 28 and then returns to Mar 31.
pub fn monthly_occurrences(today: NaiveDate, due_day: u32) -> impl Iterator<Item = NaiveDate> {
    let valid = is_valid_due_day(due_day);
    let start = match due_in_month(today, 0, due_day) {
        Some(this_month) if this_month < today => 1,
        _ => 0,
    };
    (start..)
        .take_while(move |_| valid)
        .map_while(move |offset| due_in_month(today, offset, due_day))
}

/// First occurrence of a `cadence_days` recurrence strictly after `today`
///
/// Counts the whole cadences elapsed since `last`, rounds up to the next
/// boundary, and steps once more if that boundary is not after `today`.
/// Returns `None` for a non-positive cadence or a date out of range.
pub fn first_occurrence_after(last: NaiveDate, cadence_days: i64, today: NaiveDate) -> Option<NaiveDate> {
    if cadence_days <= 0 {
        return None;
    }
    let elapsed = (today - last).num_days();
    let cadences = if elapsed > 0 {
        (elapsed - 1) / cadence_days + 1
    } else {
        0
    };
    let step = u64::try_from(cadence_days).ok()?;
    let offset = u64::try_from(cadences).ok()?.checked_mul(step)?;
    let candidate = last.checked_add_days(Days::new(offset))?;
    if candidate > today {
        Some(candidate)
    } else {
        candidate.checked_add_days(Days::new(step))
    }
}

/// Every occurrence strictly after `today`, one per cadence
pub fn cadence_occurrences(
    last: NaiveDate,
    cadence_days: i64,
    today: NaiveDate,
) -> impl Iterator<Item = NaiveDate> {
    let step = u64::try_from(cadence_days).unwrap_or(0);
    std::iter::successors(first_occurrence_after(last, cadence_days, today), move |date| {
        date.checked_add_days(Days::new(step))
    })
}
