use super::{category::Category, date::Date, date::Time, priority::Priority};
use serde::Serialize;

/// Maximum stored description length in bytes (the on-disk buffer holds
/// one more byte for the NUL terminator).
pub const MAX_DESC_LEN: usize = 99;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: i32,
    pub date: Date,
    pub time: Time,
    pub description: String,
    pub priority: Priority,
    pub category: Category,
    pub is_all_day: bool,
}

/// Input of `EventStore::insert`: everything but the id, which the store
/// assigns.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub date: Date,
    pub time: Time,
    pub description: String,
    pub priority: Priority,
    pub category: Category,
    pub is_all_day: bool,
}

impl NewEvent {
    /// Timed event.
    pub fn timed(
        date: Date,
        time: Time,
        description: impl Into<String>,
        priority: Priority,
        category: Category,
    ) -> Self {
        Self {
            date,
            time,
            description: description.into(),
            priority,
            category,
            is_all_day: false,
        }
    }

    /// All-day event; the time is normalised to 00:00.
    pub fn all_day(
        date: Date,
        description: impl Into<String>,
        priority: Priority,
        category: Category,
    ) -> Self {
        Self {
            date,
            time: Time::midnight(),
            description: description.into(),
            priority,
            category,
            is_all_day: true,
        }
    }

    pub(crate) fn into_event(self, id: i32) -> Event {
        Event {
            id,
            date: self.date,
            time: self.time,
            description: truncate_description(&self.description),
            priority: self.priority,
            category: self.category,
            is_all_day: self.is_all_day,
        }
    }
}

impl Event {
    pub fn date_str(&self) -> String {
        self.date.to_string()
    }

    /// "HH:MM", or "All Day" when the time is not meaningful.
    pub fn time_str(&self) -> String {
        if self.is_all_day {
            "All Day".to_string()
        } else {
            self.time.to_string()
        }
    }
}

/// Cut `desc` to at most [`MAX_DESC_LEN`] bytes without splitting a
/// character.
pub fn truncate_description(desc: &str) -> String {
    if desc.len() <= MAX_DESC_LEN {
        return desc.to_string();
    }
    let mut end = MAX_DESC_LEN;
    while !desc.is_char_boundary(end) {
        end -= 1;
    }
    desc[..end].to_string()
}
