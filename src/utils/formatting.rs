//! Formatting utilities used for CLI outputs.

use crate::core::stats::Statistics;
use crate::models::event::Event;
use crate::utils::colors::{BOLD, GREEN, RED, RESET, YELLOW, category_color, paint, priority_color};
use crate::utils::table::{Cell, Column, Table};

pub fn bold(s: &str, color: bool) -> String {
    if color {
        format!("{BOLD}{s}{RESET}")
    } else {
        s.to_string()
    }
}

/// Render events as a table, in the order given.
pub fn events_table<'a, I>(events: I, color: bool) -> String
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("Date", 10),
        Column::new("Time", 7),
        Column::new("Priority", 8),
        Column::new("Category", 11),
        Column::wrapped("Description", 40),
    ]);

    for ev in events {
        table.add_row(vec![
            Cell::plain(ev.id.to_string()),
            Cell::plain(ev.date_str()),
            Cell::plain(ev.time_str()),
            Cell::colored(ev.priority.label(), priority_color(ev.priority)),
            Cell::colored(ev.category.label(), category_color(ev.category)),
            Cell::plain(ev.description.clone()),
        ]);
    }

    table.render(color)
}

/// One-event detail block (used before edit/delete confirmations).
pub fn event_details(ev: &Event, color: bool) -> String {
    format!(
        "{} | Date: {} | Time: {} | Priority: {} | Category: {}\nDescription: {}",
        bold(&format!("ID: {}", ev.id), color),
        ev.date_str(),
        ev.time_str(),
        paint(ev.priority.label(), priority_color(ev.priority), color),
        paint(ev.category.label(), category_color(ev.category), color),
        ev.description
    )
}

pub fn statistics(stats: &Statistics, color: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("Total Events: {}\n", bold(&stats.total.to_string(), color)));
    out.push_str(&format!("\n{}\n", bold("Priority Distribution:", color)));
    out.push_str(&format!("  {} {}\n", paint("High:", RED, color), stats.high));
    out.push_str(&format!("  {} {}\n", paint("Medium:", YELLOW, color), stats.medium));
    out.push_str(&format!("  {} {}\n", paint("Low:", GREEN, color), stats.low));

    out.push_str(&format!("\n{}\n", bold("Category Distribution:", color)));
    for (category, count) in stats.used_categories() {
        let label = format!("{}:", category.label());
        out.push_str(&format!(
            "  {} {}\n",
            paint(&label, category_color(category), color),
            count
        ));
    }

    out
}
