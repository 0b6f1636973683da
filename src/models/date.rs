use crate::errors::{AppError, AppResult};
use crate::utils::date::{compare_dates, is_valid_date};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Calendar date as stored in the data file (day, month, year).
///
/// Values built through [`Date::new`] always satisfy `is_valid_date`.
/// The fields stay public so the codec can rebuild a record verbatim and
/// validate it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Date {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl Date {
    pub fn new(day: i32, month: i32, year: i32) -> AppResult<Self> {
        if !is_valid_date(day, month, year) {
            return Err(AppError::InvalidDate(format!(
                "{:02}/{:02}/{}",
                day, month, year
            )));
        }
        Ok(Self { day, month, year })
    }

    pub fn is_valid(&self) -> bool {
        is_valid_date(self.day, self.month, self.year)
    }

    /// ISO form, used by JSON export and log lines.
    pub fn iso(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_dates(self, other)
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

/// Time of day (24h). Ignored for all-day events, which store 00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Time {
    pub hour: i32,
    pub minute: i32,
}

impl Time {
    pub fn new(hour: i32, minute: i32) -> AppResult<Self> {
        if !Self::in_range(hour, minute) {
            return Err(AppError::InvalidTime(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    pub fn midnight() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        Self::in_range(self.hour, self.minute)
    }

    fn in_range(hour: i32, minute: i32) -> bool {
        (0..=23).contains(&hour) && (0..=59).contains(&minute)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
