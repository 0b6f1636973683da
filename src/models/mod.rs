pub mod category;
pub mod date;
pub mod event;
pub mod priority;

pub use category::Category;
pub use date::{Date, Time};
pub use event::{Event, NewEvent};
pub use priority::Priority;
