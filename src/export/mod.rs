// src/export/mod.rs

mod model;
mod writers;

pub use model::EventExport;

use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::export::writers::{export_csv, export_json};
use clap::ValueEnum;
use log::info;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// High-level export of the whole store, in store order.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every event to `path`, replacing any existing file, and
    /// return the number of rows written.
    pub fn export(store: &EventStore, format: ExportFormat, path: &Path) -> AppResult<usize> {
        let rows: Vec<EventExport> = store.iter().map(EventExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        info!(
            "exported {} events as {} to {}",
            rows.len(),
            format.as_str(),
            path.display()
        );
        Ok(rows.len())
    }
}
