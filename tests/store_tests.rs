mod common;
use common::{add_all_day, add_timed, date, ids, time};
use rcalendar::core::ordering::compare_events;
use rcalendar::core::store::EventStore;
use rcalendar::errors::AppError;
use rcalendar::models::{Category, NewEvent, Priority};
use std::cmp::Ordering;

/// Small deterministic generator so the sequence is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

fn assert_sorted(store: &EventStore) {
    for pair in store.events().windows(2) {
        assert_ne!(
            compare_events(&pair[0], &pair[1]),
            Ordering::Greater,
            "events {} and {} out of order",
            pair[0].id,
            pair[1].id
        );
    }
}

#[test]
fn insert_ordering_scenario() {
    let mut store = EventStore::new();
    let a = add_timed(&mut store, date(10, 3, 2024), time(9, 0), "A", Priority::Medium);
    let b = add_all_day(&mut store, date(10, 3, 2024), "B", Priority::Medium);
    let c = add_timed(&mut store, date(9, 3, 2024), time(23, 0), "C", Priority::Medium);

    assert_eq!(ids(&store), vec![c, b, a]);
}

#[test]
fn delete_then_insert_never_reuses_ids() {
    let mut store = EventStore::new();
    for day in 1..=3 {
        add_timed(&mut store, date(day, 1, 2024), time(8, 0), "x", Priority::Low);
    }
    assert_eq!(ids(&store), vec![1, 2, 3]);

    store.delete(2).unwrap();
    let new_id = add_timed(&mut store, date(2, 1, 2024), time(8, 0), "y", Priority::Low);
    assert_eq!(new_id, 4);
    assert_eq!(ids(&store), vec![1, 4, 3]);
}

#[test]
fn equal_events_keep_insertion_order() {
    let mut store = EventStore::new();
    let first = add_timed(&mut store, date(1, 2, 2024), time(10, 0), "first", Priority::High);
    let second = add_timed(&mut store, date(1, 2, 2024), time(10, 0), "second", Priority::High);
    let third = add_timed(&mut store, date(1, 2, 2024), time(10, 0), "third", Priority::High);
    assert_eq!(ids(&store), vec![first, second, third]);
}

#[test]
fn random_inserts_and_deletes_stay_sorted_with_increasing_ids() {
    let mut rng = Lcg(42);
    let mut store = EventStore::new();
    let mut last_id = 0;

    for _ in 0..500 {
        if store.len() > 5 && rng.next(4) == 0 {
            let victim = store.events()[rng.next(store.len() as u64) as usize].id;
            store.delete(victim).unwrap();
            assert!(store.get(victim).is_none());
        } else {
            let d = date(rng.next(28) as i32 + 1, rng.next(12) as i32 + 1, 2020 + rng.next(5) as i32);
            let priority = Priority::ALL[rng.next(3) as usize];
            let id = if rng.next(3) == 0 {
                add_all_day(&mut store, d, "all day", priority)
            } else {
                let t = time(rng.next(24) as i32, rng.next(60) as i32);
                add_timed(&mut store, d, t, "timed", priority)
            };
            assert!(id > last_id, "ids must strictly increase");
            last_id = id;
        }
        assert_sorted(&store);
    }
}

#[test]
fn delete_missing_reports_not_found() {
    let mut store = EventStore::new();
    add_all_day(&mut store, date(1, 1, 2024), "New year", Priority::High);
    match store.delete(99) {
        Err(AppError::NotFound(99)) => {}
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(store.len(), 1);
}

#[test]
fn edit_missing_reports_not_found() {
    let mut store = EventStore::new();
    let err = store
        .edit(7, "nope", Priority::Low, Category::Other)
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(7)));
}

#[test]
fn edit_changes_only_mutable_fields() {
    let mut store = EventStore::new();
    let id = add_timed(&mut store, date(5, 5, 2024), time(14, 30), "Dentist", Priority::Low);
    let before = store.get(id).unwrap().clone();

    store
        .edit(id, "Dentist (moved room)", Priority::High, Category::Appointment)
        .unwrap();
    let after = store.get(id).unwrap();

    assert_eq!(after.id, before.id);
    assert_eq!(after.date, before.date);
    assert_eq!(after.time, before.time);
    assert_eq!(after.is_all_day, before.is_all_day);
    assert_eq!(after.description, "Dentist (moved room)");
    assert_eq!(after.priority, Priority::High);
    assert_eq!(after.category, Category::Appointment);
}

#[test]
fn edit_keeps_store_sorted() {
    let mut store = EventStore::new();
    let slot = (date(3, 3, 2024), time(9, 0));
    let high = add_timed(&mut store, slot.0, slot.1, "h", Priority::High);
    let medium = add_timed(&mut store, slot.0, slot.1, "m", Priority::Medium);
    let low = add_timed(&mut store, slot.0, slot.1, "l", Priority::Low);

    store.edit(high, "", Priority::Low, Category::Work).unwrap();
    assert_sorted(&store);
    assert_eq!(ids(&store), vec![medium, low, high]);

    store.edit(low, "", Priority::High, Category::Work).unwrap();
    assert_sorted(&store);
    assert_eq!(ids(&store), vec![low, medium, high]);
}

#[test]
fn long_descriptions_are_truncated_on_insert_and_edit() {
    let mut store = EventStore::new();
    let long = "a".repeat(250);
    let id = store
        .insert(NewEvent::all_day(date(1, 1, 2024), long.clone(), Priority::Low, Category::Other))
        .unwrap();
    assert_eq!(store.get(id).unwrap().description.len(), 99);

    store.edit(id, &"b".repeat(120), Priority::Low, Category::Other).unwrap();
    assert_eq!(store.get(id).unwrap().description, "b".repeat(99));
}

#[test]
fn clear_empties_but_keeps_counter() {
    let mut store = EventStore::new();
    add_all_day(&mut store, date(1, 1, 2024), "a", Priority::Low);
    add_all_day(&mut store, date(2, 1, 2024), "b", Priority::Low);
    store.clear();

    assert!(store.is_empty());
    assert_eq!(store.next_id(), 3);
}
