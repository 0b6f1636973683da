//! In-memory event store.
//!
//! The store owns every event and keeps them sorted by
//! [`compare_events`](crate::core::ordering::compare_events) after each
//! mutation. Ids come from a counter that only grows, so a deleted id is
//! never handed out again during the life of the store.

use crate::core::ordering::{compare_events, insertion_index, is_sorted};
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::event::{Event, NewEvent, truncate_description};
use crate::models::priority::Priority;
use log::{debug, warn};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: i32,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a store from persisted parts.
    ///
    /// Ids must be positive and unique and the counter positive; anything
    /// else is `Corrupt`. Events are stable-sorted, so input that is already
    /// in order is kept as is. The counter is raised above the largest id if
    /// needed.
    pub fn from_parts(next_id: i32, mut events: Vec<Event>) -> AppResult<Self> {
        if next_id <= 0 {
            return Err(AppError::Corrupt(format!("invalid id counter {}", next_id)));
        }

        let mut seen = HashSet::with_capacity(events.len());
        for ev in &events {
            if ev.id <= 0 {
                return Err(AppError::Corrupt(format!("invalid event id {}", ev.id)));
            }
            if !seen.insert(ev.id) {
                return Err(AppError::Corrupt(format!("duplicate event id {}", ev.id)));
            }
        }

        if !is_sorted(&events) {
            warn!("persisted events were out of order; re-sorting {} events", events.len());
            events.sort_by(compare_events);
        }

        let min_next = match events.iter().map(|e| e.id).max() {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                AppError::Corrupt(format!("event id {} leaves no room for new ids", max))
            })?,
            None => 1,
        };
        let next_id = if next_id < min_next {
            warn!("id counter {} is behind stored ids; using {}", next_id, min_next);
            min_next
        } else {
            next_id
        };

        Ok(Self { events, next_id })
    }

    /// Add an event at its sorted position and return its new id.
    ///
    /// Among events that compare equal the new one goes last.
    pub fn insert(&mut self, new: NewEvent) -> AppResult<i32> {
        let id = self.next_id;
        let next = id.checked_add(1).ok_or(AppError::IdsExhausted)?;

        self.events
            .try_reserve(1)
            .map_err(|_| AppError::Allocation)?;
        self.next_id = next;

        let event = new.into_event(id);
        let idx = insertion_index(&self.events, &event);
        debug!("insert event {} at position {} ({})", id, idx, event.date.iso());
        self.events.insert(idx, event);

        Ok(id)
    }

    /// Remove the event with `id` and hand it back.
    pub fn delete(&mut self, id: i32) -> AppResult<Event> {
        let idx = self.position(id).ok_or(AppError::NotFound(id))?;
        debug!("delete event {} at position {}", id, idx);
        Ok(self.events.remove(idx))
    }

    /// Update description (only when `description` is non-empty), priority
    /// and category. Date, time, all-day flag and id never change.
    ///
    /// A new priority can change the event's rank among same-slot events,
    /// so the event is moved to its sorted position afterwards.
    pub fn edit(
        &mut self,
        id: i32,
        description: &str,
        priority: Priority,
        category: Category,
    ) -> AppResult<()> {
        let idx = self.position(id).ok_or(AppError::NotFound(id))?;

        let mut event = self.events.remove(idx);
        if !description.is_empty() {
            event.description = truncate_description(description);
        }
        event.priority = priority;
        event.category = category;

        let new_idx = insertion_index(&self.events, &event);
        if new_idx != idx {
            debug!("edit moved event {} from {} to {}", id, idx, new_idx);
        }
        self.events.insert(new_idx, event);

        Ok(())
    }

    /// Drop every event. The id counter keeps its value.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn get(&self, id: i32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn next_id(&self) -> i32 {
        self.next_id
    }

    pub fn is_sorted(&self) -> bool {
        is_sorted(&self.events)
    }

    fn position(&self, id: i32) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Date, Time};

    fn timed(store: &mut EventStore, day: i32, hour: i32, p: Priority) -> i32 {
        let date = Date::new(day, 3, 2024).unwrap();
        let time = Time::new(hour, 0).unwrap();
        store
            .insert(NewEvent::timed(date, time, "timed", p, Category::Work))
            .unwrap()
    }

    #[test]
    fn new_store_is_empty_and_counts_from_one() {
        let store = EventStore::new();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn delete_missing_id_leaves_store_untouched() {
        let mut store = EventStore::new();
        timed(&mut store, 1, 9, Priority::High);
        let before = store.clone();

        let err = store.delete(42).unwrap_err();
        assert!(matches!(err, AppError::NotFound(42)));
        assert_eq!(store, before);
    }

    #[test]
    fn edit_keeps_description_when_empty() {
        let mut store = EventStore::new();
        let id = timed(&mut store, 1, 9, Priority::High);

        store.edit(id, "", Priority::Low, Category::Meeting).unwrap();
        let ev = store.get(id).unwrap();
        assert_eq!(ev.description, "timed");
        assert_eq!(ev.priority, Priority::Low);
        assert_eq!(ev.category, Category::Meeting);
    }

    #[test]
    fn edit_priority_restores_order() {
        let mut store = EventStore::new();
        let a = timed(&mut store, 1, 9, Priority::High);
        let b = timed(&mut store, 1, 9, Priority::Medium);
        assert_eq!(store.events()[0].id, a);

        store.edit(a, "", Priority::Low, Category::Work).unwrap();
        assert!(store.is_sorted());
        assert_eq!(store.events()[0].id, b);
        assert_eq!(store.events()[1].id, a);
    }

    #[test]
    fn clear_keeps_counter() {
        let mut store = EventStore::new();
        timed(&mut store, 1, 9, Priority::High);
        timed(&mut store, 2, 9, Priority::High);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(timed(&mut store, 3, 9, Priority::High), 3);
    }

    #[test]
    fn from_parts_sorts_and_repairs_counter() {
        let mut source = EventStore::new();
        timed(&mut source, 5, 9, Priority::High);
        timed(&mut source, 1, 9, Priority::High);
        let mut events = source.events().to_vec();
        events.reverse();

        let store = EventStore::from_parts(1, events).unwrap();
        assert!(store.is_sorted());
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn from_parts_rejects_bad_ids() {
        let mut source = EventStore::new();
        timed(&mut source, 1, 9, Priority::High);
        timed(&mut source, 2, 9, Priority::High);

        let mut dup = source.events().to_vec();
        dup[1].id = dup[0].id;
        assert!(matches!(EventStore::from_parts(3, dup), Err(AppError::Corrupt(_))));

        let mut negative = source.events().to_vec();
        negative[0].id = -5;
        assert!(matches!(EventStore::from_parts(3, negative), Err(AppError::Corrupt(_))));

        let events = source.events().to_vec();
        assert!(matches!(EventStore::from_parts(0, events), Err(AppError::Corrupt(_))));
    }

    #[test]
    fn largest_id_leaves_no_counter_value() {
        let mut source = EventStore::new();
        timed(&mut source, 1, 9, Priority::High);
        let mut events = source.events().to_vec();
        events[0].id = i32::MAX;

        assert!(matches!(EventStore::from_parts(1, events), Err(AppError::Corrupt(_))));
    }

    #[test]
    fn insert_fails_cleanly_when_ids_run_out() {
        let mut store = EventStore::from_parts(i32::MAX, Vec::new()).unwrap();
        let date = Date::new(1, 3, 2024).unwrap();

        let err = store
            .insert(NewEvent::all_day(date, "last", Priority::Low, Category::Other))
            .unwrap_err();
        assert!(matches!(err, AppError::IdsExhausted));
        assert!(store.is_empty());
        assert_eq!(store.next_id(), i32::MAX);
    }
}
