//! Read-only views over the store.
//!
//! Every query is a linear pass that keeps store order. An empty result
//! means "nothing found"; no query mutates the store.

use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::date::Date;
use crate::models::event::Event;
use crate::models::priority::Priority;
use crate::utils::date::{add_days, current_date};

/// A named selection over the store, as chosen from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Today,
    Month(i32),
    Category(Category),
    Priority(Priority),
    Upcoming(u32),
    Range(Date, Date),
    Keyword(String),
}

impl Filter {
    pub fn apply<'a>(&self, store: &'a EventStore) -> AppResult<Vec<&'a Event>> {
        let out = match self {
            Filter::All => store.iter().collect(),
            Filter::Today => today(store),
            Filter::Month(m) => by_month(store, *m),
            Filter::Category(c) => by_category(store, *c),
            Filter::Priority(p) => by_priority(store, *p),
            Filter::Upcoming(days) => upcoming(store, *days),
            Filter::Range(start, end) => by_date_range(store, *start, *end)?,
            Filter::Keyword(k) => by_keyword(store, k),
        };
        Ok(out)
    }

    /// Title shown above the results.
    pub fn title(&self) -> String {
        match self {
            Filter::All => "ALL SCHEDULED EVENTS".to_string(),
            Filter::Today => format!("TODAY'S EVENTS ({})", current_date()),
            Filter::Month(m) => format!("EVENTS FOR MONTH {:02}", m),
            Filter::Category(c) => format!("EVENTS IN CATEGORY: {}", c.label()),
            Filter::Priority(p) => format!("EVENTS WITH PRIORITY: {}", p.label()),
            Filter::Upcoming(d) => format!("UPCOMING EVENTS (Next {} days)", d),
            Filter::Range(s, e) => format!("EVENTS FROM {} TO {}", s, e),
            Filter::Keyword(k) => format!("SEARCH RESULTS for '{}'", k),
        }
    }

    /// Message shown when the selection is empty.
    pub fn empty_message(&self) -> String {
        match self {
            Filter::All => "The calendar is empty.".to_string(),
            Filter::Today => "No events scheduled for today.".to_string(),
            Filter::Month(m) => format!("No events found for month {:02}.", m),
            Filter::Category(_) => "No events found in this category.".to_string(),
            Filter::Priority(_) => "No events found with this priority.".to_string(),
            Filter::Upcoming(d) => format!("No upcoming events in the next {} days.", d),
            Filter::Range(..) => "No events found in this date range.".to_string(),
            Filter::Keyword(k) => format!("No events found matching '{}'.", k),
        }
    }
}

/// Events in `month` of any year.
pub fn by_month(store: &EventStore, month: i32) -> Vec<&Event> {
    select(store, |e| e.date.month == month)
}

pub fn by_category(store: &EventStore, category: Category) -> Vec<&Event> {
    select(store, |e| e.category == category)
}

pub fn by_priority(store: &EventStore, priority: Priority) -> Vec<&Event> {
    select(store, |e| e.priority == priority)
}

pub fn on_date(store: &EventStore, date: Date) -> Vec<&Event> {
    select(store, |e| e.date == date)
}

pub fn today(store: &EventStore) -> Vec<&Event> {
    on_date(store, current_date())
}

/// Events from today through today + `days`, both ends included.
pub fn upcoming(store: &EventStore, days: u32) -> Vec<&Event> {
    upcoming_from(store, current_date(), days)
}

pub fn upcoming_from(store: &EventStore, today: Date, days: u32) -> Vec<&Event> {
    let end = add_days(today, days);
    select(store, |e| e.date >= today && e.date <= end)
}

/// Events with `start <= date <= end`. Fails when `start` is after `end`.
pub fn by_date_range(store: &EventStore, start: Date, end: Date) -> AppResult<Vec<&Event>> {
    if start > end {
        return Err(AppError::InvalidRange(format!(
            "end date {} is before start date {}",
            end, start
        )));
    }
    Ok(select(store, |e| e.date >= start && e.date <= end))
}

/// Case-insensitive substring search in descriptions.
pub fn by_keyword<'a>(store: &'a EventStore, keyword: &str) -> Vec<&'a Event> {
    let needle = keyword.to_lowercase();
    select(store, |e| e.description.to_lowercase().contains(&needle))
}

fn select<F>(store: &EventStore, pred: F) -> Vec<&Event>
where
    F: Fn(&Event) -> bool,
{
    store.iter().filter(|e| pred(e)).collect()
}
