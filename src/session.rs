//! One CLI invocation's view of the calendar: the store loaded from the
//! data file at start, saved back at the end if a command changed it.

use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::storage::{self, LoadOutcome};
use crate::ui::messages::{info, success};
use log::debug;
use std::path::{Path, PathBuf};

pub struct Session {
    pub store: EventStore,
    path: PathBuf,
    dirty: bool,
}

impl Session {
    /// Load the data file at `path`. A missing file starts an empty
    /// calendar; a corrupt one is an error and the file is left alone.
    pub fn open(path: &Path) -> AppResult<Self> {
        let store = match storage::load(path)? {
            LoadOutcome::Missing => {
                info("Data file not found. Starting with empty calendar.");
                EventStore::new()
            }
            outcome => outcome.into_store(),
        };

        Ok(Self {
            store,
            path: path.to_path_buf(),
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mutable access to the store; marks the session for saving.
    pub fn store_mut(&mut self) -> &mut EventStore {
        self.dirty = true;
        &mut self.store
    }

    /// Persist the store when it was modified.
    pub fn close(self) -> AppResult<()> {
        if !self.dirty {
            debug!("no changes; {} left untouched", self.path.display());
            return Ok(());
        }
        let count = storage::save(&self.store, &self.path)?;
        success(format!(
            "Successfully saved {} events to {}.",
            count,
            self.path.display()
        ));
        Ok(())
    }
}
