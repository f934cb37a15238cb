// Date utility functions
// Pure calendar arithmetic over day-granularity dates.
// Conventions: months are 1-based, quarters are 3-month blocks starting
// January, weeks start on the caller-supplied weekday (0 = Sunday).

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// First day of `date`'s month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Last day of `date`'s month.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let day = last_day_of_month(date.year(), date.month());
    NaiveDate::from_ymd_opt(date.year(), date.month(), day).expect("valid calendar date")
}

/// Day count of `date`'s month (28-31).
pub fn days_in_month(date: NaiveDate) -> u32 {
    last_day_of_month(date.year(), date.month())
}

/// First day of the month before `date`'s, rolling over year boundaries
/// (January maps to the previous December).
pub fn start_of_previous_month(date: NaiveDate) -> NaiveDate {
    start_of_month(shift_month(date, -1))
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn start_of_week(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// Six days after [`start_of_week`].
pub fn end_of_week(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    start_of_week(date, first_day_of_week) + Duration::days(6)
}

/// First day of the 3-month block containing `date` (Jan/Apr/Jul/Oct 1).
pub fn start_of_quarter(date: NaiveDate) -> NaiveDate {
    let quarter_start_month = (date.month0() / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), quarter_start_month, 1).expect("valid calendar date")
}

/// Last day of the 3-month block containing `date`.
pub fn end_of_quarter(date: NaiveDate) -> NaiveDate {
    let quarter_end_month = (date.month0() / 3) * 3 + 3;
    let day = last_day_of_month(date.year(), quarter_end_month);
    NaiveDate::from_ymd_opt(date.year(), quarter_end_month, day).expect("valid calendar date")
}

pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).expect("valid calendar date")
}

pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).expect("valid calendar date")
}

/// All days of `date`'s month plus the leading days needed so the first
/// entry falls on the configured week start.
///
/// The sequence is ascending and duplicate-free, and ends exactly at
/// [`end_of_month`]; no trailing days are padded in. Whether the last row
/// is stretched to 7 columns is the renderer's decision.
pub fn month_grid(date: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    let last = end_of_month(date);
    let mut day = start_of_week(start_of_month(date), first_day_of_week);
    let mut days = Vec::with_capacity(37);
    while day <= last {
        days.push(day);
        day += Duration::days(1);
    }
    days
}

/// Exactly 7 consecutive days starting at [`start_of_week`].
pub fn week_grid(date: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    let start = start_of_week(date, first_day_of_week);
    (0..7).map(|offset| start + Duration::days(offset)).collect()
}

/// Shift `date` by `delta_months` whole months, preserving the day-of-month
/// where possible and clamping to the target month's last valid day
/// otherwise (Jan 31 + 1 month lands on Feb 28/29).
pub fn shift_month(date: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) + 1;
    clamp_day(new_year, new_month as u32, date.day())
}

/// Shift `date` by `delta_weeks` whole weeks.
pub fn shift_week(date: NaiveDate, delta_weeks: i32) -> NaiveDate {
    date + Duration::weeks(delta_weeks as i64)
}

/// `desired_day` clamped into the valid range of the given month.
pub fn clamp_day(year: i32, month: u32, desired_day: u32) -> NaiveDate {
    let max_day = last_day_of_month(year, month);
    let day = desired_day.min(max_day);
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, max_day))
        .expect("valid calendar date")
}

pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid next month");
    first_of_next.pred_opt().expect("previous day exists").day()
}
