pub mod storage;
pub mod store;

pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{TrackedEventsStore, TRACKED_EVENTS_KEY};
