#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rcalendar::core::store::EventStore;
use rcalendar::models::{Category, Date, NewEvent, Priority, Time};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home directory + data file for one test.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join("calendar_data.bin")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// The binary, with HOME pointing at the temp dir and the data file
    /// passed explicitly.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rcalendar");
        cmd.env("HOME", self.dir.path())
            .env("APPDATA", self.dir.path())
            .env_remove("RUST_LOG")
            .arg("--no-color")
            .arg("--file")
            .arg(self.data_file());
        cmd
    }
}

pub fn date(day: i32, month: i32, year: i32) -> Date {
    Date::new(day, month, year).expect("valid test date")
}

pub fn time(hour: i32, minute: i32) -> Time {
    Time::new(hour, minute).expect("valid test time")
}

pub fn add_timed(
    store: &mut EventStore,
    d: Date,
    t: Time,
    desc: &str,
    priority: Priority,
) -> i32 {
    store
        .insert(NewEvent::timed(d, t, desc, priority, Category::Work))
        .expect("insert")
}

pub fn add_all_day(store: &mut EventStore, d: Date, desc: &str, priority: Priority) -> i32 {
    store
        .insert(NewEvent::all_day(d, desc, priority, Category::Personal))
        .expect("insert")
}

pub fn ids(store: &EventStore) -> Vec<i32> {
    store.iter().map(|e| e.id).collect()
}

pub fn read_bytes(path: &Path) -> Vec<u8> {
    std::fs::read(path).expect("read file")
}
