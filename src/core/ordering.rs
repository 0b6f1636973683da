//! Total order of events inside the store.
//!
//! Tie-break chain: date, then all-day before timed, then hour and minute
//! (timed events only), then priority rank (HIGH < MEDIUM < LOW).

use crate::models::event::Event;
use crate::utils::date::compare_dates;
use std::cmp::Ordering;

pub fn compare_events(e1: &Event, e2: &Event) -> Ordering {
    let by_date = compare_dates(&e1.date, &e2.date);
    if by_date != Ordering::Equal {
        return by_date;
    }

    match (e1.is_all_day, e2.is_all_day) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {
            let by_time = e1
                .time
                .hour
                .cmp(&e2.time.hour)
                .then(e1.time.minute.cmp(&e2.time.minute));
            if by_time != Ordering::Equal {
                return by_time;
            }
        }
        // time fields of all-day events are not compared
        (true, true) => {}
    }

    e1.priority.code().cmp(&e2.priority.code())
}

/// Index at which `event` must be inserted into the sorted `events` so that
/// it lands after every element it ties with.
pub fn insertion_index(events: &[Event], event: &Event) -> usize {
    events
        .iter()
        .position(|existing| compare_events(event, existing) == Ordering::Less)
        .unwrap_or(events.len())
}

/// True when every adjacent pair is in order.
pub fn is_sorted(events: &[Event]) -> bool {
    events
        .windows(2)
        .all(|w| compare_events(&w[0], &w[1]) != Ordering::Greater)
}
