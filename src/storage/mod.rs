//! Binary persistence of the event store.

pub mod codec;
pub mod file;

pub use file::{LoadOutcome, load, save};
