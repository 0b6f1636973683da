// src/export/model.rs

use crate::models::event::Event;
use serde::Serialize;

/// Flat row used by every export format.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Priority")]
    pub priority: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl From<&Event> for EventExport {
    fn from(ev: &Event) -> Self {
        Self {
            id: ev.id,
            date: ev.date_str(),
            time: ev.time_str(),
            priority: ev.priority.label().to_string(),
            category: ev.category.label().to_string(),
            description: ev.description.clone(),
        }
    }
}

/// Header for CSV, in column order.
pub(crate) const HEADERS: [&str; 6] = ["ID", "Date", "Time", "Priority", "Category", "Description"];
