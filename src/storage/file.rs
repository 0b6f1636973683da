//! Loading and saving the calendar data file.

use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::storage::codec::{read_store, write_store};
use log::{debug, info};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// Result of a load attempt that did not fail.
#[derive(Debug)]
pub enum LoadOutcome {
    /// No data file yet (first run): start from an empty store.
    Missing,
    Loaded(EventStore),
}

impl LoadOutcome {
    pub fn into_store(self) -> EventStore {
        match self {
            LoadOutcome::Missing => EventStore::new(),
            LoadOutcome::Loaded(store) => store,
        }
    }
}

/// Write `store` to `path`, replacing any previous content.
///
/// The in-memory store is never touched, so a failed save can be retried.
pub fn save(store: &EventStore, path: &Path) -> AppResult<usize> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    let count = write_store(store, &mut out)?;
    out.flush()?;

    info!("saved {} events to {}", count, path.display());
    Ok(count)
}

/// Read the data file at `path`.
///
/// A missing file is not an error. On any error nothing is returned, so a
/// caller's existing store stays as it was.
pub fn load(path: &Path) -> AppResult<LoadOutcome> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("data file {} not found; starting empty", path.display());
            return Ok(LoadOutcome::Missing);
        }
        Err(e) => return Err(e.into()),
    };

    let mut input = BufReader::new(file);
    let store = read_store(&mut input)?;

    info!("loaded {} events from {}", store.len(), path.display());
    Ok(LoadOutcome::Loaded(store))
}
