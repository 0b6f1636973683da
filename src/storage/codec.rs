//! Binary layout of the calendar data file.
//!
//! All integers are little-endian and fixed width.
//!
//! Header (12 bytes): magic `RCAL`, format version (`u32`), next id (`i32`).
//!
//! Record (136 bytes): id, day, month, year, hour, minute (`i32` each),
//! description (100 bytes, UTF-8, NUL padded), priority code, category
//! code, all-day flag (`i32` each). Records follow the header back to back.

use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::date::{Date, Time};
use crate::models::event::{Event, MAX_DESC_LEN};
use crate::models::priority::Priority;
use log::warn;
use std::io::{self, Read, Write};

pub const MAGIC: [u8; 4] = *b"RCAL";
pub const FORMAT_VERSION: u32 = 1;

pub const HEADER_SIZE: usize = 12;
pub const DESC_FIELD_SIZE: usize = MAX_DESC_LEN + 1;
pub const RECORD_SIZE: usize = 6 * 4 + DESC_FIELD_SIZE + 3 * 4;

/// Write the header and every event, in store order. Returns the number
/// of records written.
pub fn write_store<W: Write>(store: &EventStore, out: &mut W) -> io::Result<usize> {
    out.write_all(&MAGIC)?;
    out.write_all(&FORMAT_VERSION.to_le_bytes())?;
    out.write_all(&store.next_id().to_le_bytes())?;

    let mut count = 0;
    for ev in store {
        out.write_all(&encode_record(ev))?;
        count += 1;
    }
    Ok(count)
}

/// Read a whole data file image.
///
/// A header that is short or unknown aborts with `Corrupt`. Records are
/// read until end of input; a trailing partial record is dropped.
pub fn read_store<R: Read>(input: &mut R) -> AppResult<EventStore> {
    let mut header = [0u8; HEADER_SIZE];
    read_exact_or_corrupt(input, &mut header, "could not read file header")?;

    if header[0..4] != MAGIC {
        return Err(AppError::Corrupt("not a calendar data file".into()));
    }
    let version = u32::from_le_bytes(word(&header, 4));
    if version != FORMAT_VERSION {
        return Err(AppError::Corrupt(format!(
            "unsupported format version {} (expected {})",
            version, FORMAT_VERSION
        )));
    }
    let next_id = i32::from_le_bytes(word(&header, 8));

    let mut events = Vec::new();
    let mut record = [0u8; RECORD_SIZE];
    loop {
        let n = read_full(input, &mut record)?;
        if n == 0 {
            break;
        }
        if n < RECORD_SIZE {
            warn!("ignoring trailing partial record ({} of {} bytes)", n, RECORD_SIZE);
            break;
        }
        events.push(decode_record(&record)?);
    }

    EventStore::from_parts(next_id, events)
}

pub fn encode_store(store: &EventStore) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + store.len() * RECORD_SIZE);
    // writing into a Vec cannot fail
    let _ = write_store(store, &mut buf);
    buf
}

pub fn decode_store(bytes: &[u8]) -> AppResult<EventStore> {
    let mut cursor = bytes;
    read_store(&mut cursor)
}

pub fn encode_record(ev: &Event) -> [u8; RECORD_SIZE] {
    let mut rec = [0u8; RECORD_SIZE];
    let ints_head = [
        ev.id,
        ev.date.day,
        ev.date.month,
        ev.date.year,
        ev.time.hour,
        ev.time.minute,
    ];
    for (i, v) in ints_head.iter().enumerate() {
        rec[i * 4..i * 4 + 4].copy_from_slice(&v.to_le_bytes());
    }

    // at most MAX_DESC_LEN bytes, the rest stays NUL
    let desc = ev.description.as_bytes();
    let len = desc.len().min(MAX_DESC_LEN);
    rec[24..24 + len].copy_from_slice(&desc[..len]);

    let tail_at = 24 + DESC_FIELD_SIZE;
    let ints_tail = [
        ev.priority.code(),
        ev.category.code(),
        i32::from(ev.is_all_day),
    ];
    for (i, v) in ints_tail.iter().enumerate() {
        let at = tail_at + i * 4;
        rec[at..at + 4].copy_from_slice(&v.to_le_bytes());
    }

    rec
}

pub fn decode_record(rec: &[u8; RECORD_SIZE]) -> AppResult<Event> {
    let int = |at: usize| i32::from_le_bytes(word(rec, at));

    let id = int(0);
    let date = Date {
        day: int(4),
        month: int(8),
        year: int(12),
    };
    let time = Time {
        hour: int(16),
        minute: int(20),
    };
    if !date.is_valid() {
        return Err(AppError::Corrupt(format!("event {}: invalid date {}", id, date)));
    }
    if !time.is_valid() {
        return Err(AppError::Corrupt(format!("event {}: invalid time {}", id, time)));
    }

    let desc_field = &rec[24..24 + DESC_FIELD_SIZE];
    let desc_len = desc_field
        .iter()
        .position(|b| *b == 0)
        .unwrap_or(MAX_DESC_LEN)
        .min(MAX_DESC_LEN);
    let description = std::str::from_utf8(&desc_field[..desc_len])
        .map_err(|_| AppError::Corrupt(format!("event {}: description is not UTF-8", id)))?
        .to_string();

    let tail_at = 24 + DESC_FIELD_SIZE;
    let priority = Priority::from_code(int(tail_at)).ok_or_else(|| {
        AppError::Corrupt(format!("event {}: unknown priority code {}", id, int(tail_at)))
    })?;
    let category = Category::from_code(int(tail_at + 4)).ok_or_else(|| {
        AppError::Corrupt(format!(
            "event {}: unknown category code {}",
            id,
            int(tail_at + 4)
        ))
    })?;
    let is_all_day = int(tail_at + 8) != 0;

    Ok(Event {
        id,
        date,
        time,
        description,
        priority,
        category,
        is_all_day,
    })
}

fn word(buf: &[u8], at: usize) -> [u8; 4] {
    [buf[at], buf[at + 1], buf[at + 2], buf[at + 3]]
}

/// Fill `buf` as far as the input allows; returns the byte count read.
fn read_full<R: Read>(input: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

fn read_exact_or_corrupt<R: Read>(input: &mut R, buf: &mut [u8], what: &str) -> AppResult<()> {
    match input.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(AppError::Corrupt(what.into())),
        Err(e) => Err(AppError::Io(e)),
    }
}
