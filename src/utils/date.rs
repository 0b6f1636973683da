//! Calendar arithmetic: leap years, month lengths, validation, comparison
//! and day rollover. Gregorian rules only, years 1900..=2100.

use crate::models::date::{Date, Time};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use std::cmp::Ordering;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

const DAYS_IN_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based). Returns 0 for months outside 1..=12.
pub fn days_in_month(month: i32, year: i32) -> i32 {
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    usize::try_from(month - 1)
        .ok()
        .and_then(|i| DAYS_IN_MONTH.get(i).copied())
        .unwrap_or(0)
}

pub fn is_valid_date(day: i32, month: i32, year: i32) -> bool {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return false;
    }
    if !(1..=12).contains(&month) {
        return false;
    }
    day >= 1 && day <= days_in_month(month, year)
}

/// Lexicographic comparison by (year, month, day).
pub fn compare_dates(d1: &Date, d2: &Date) -> Ordering {
    d1.year
        .cmp(&d2.year)
        .then(d1.month.cmp(&d2.month))
        .then(d1.day.cmp(&d2.day))
}

/// Local calendar date of the host.
pub fn current_date() -> Date {
    from_naive(chrono::Local::now().date_naive())
}

/// `date` plus `days`, rolling the day over month and year ends.
///
/// The result may exceed `MAX_YEAR`; it is only used as a range bound.
pub fn add_days(date: Date, days: u32) -> Date {
    let mut out = date;
    let mut remaining = days;

    while remaining > 0 {
        let left_in_month = (days_in_month(out.month, out.year) - out.day).max(0) as u32;
        if remaining <= left_in_month {
            out.day += remaining as i32;
            break;
        }
        // jump to the first day of the next month
        remaining -= left_in_month + 1;
        out.day = 1;
        out.month += 1;
        if out.month > 12 {
            out.month = 1;
            out.year += 1;
        }
    }

    out
}

/// Accepts `YYYY-MM-DD` or `DD/MM/YYYY`.
pub fn parse_date(s: &str) -> Option<Date> {
    let s = s.trim();
    let naive = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()?;
    let date = from_naive(naive);
    date.is_valid().then_some(date)
}

/// Accepts `HH:MM` (24h).
pub fn parse_time(s: &str) -> Option<Time> {
    let t = NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()?;
    Time::new(t.hour() as i32, t.minute() as i32).ok()
}

fn from_naive(d: NaiveDate) -> Date {
    Date {
        day: d.day() as i32,
        month: d.month() as i32,
        year: d.year(),
    }
}
