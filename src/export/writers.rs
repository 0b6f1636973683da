// src/export/writers.rs

use crate::errors::AppResult;
use crate::export::model::{EventExport, HEADERS};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write rows as CSV. The header is always written, even with no rows.
pub(crate) fn export_csv(rows: &[EventExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)?;

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write rows as a pretty-printed JSON array.
pub(crate) fn export_json(rows: &[EventExport], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}
