pub mod ordering;
pub mod query;
pub mod stats;
pub mod store;

pub use query::Filter;
pub use stats::Statistics;
pub use store::EventStore;
