mod store;

pub use store::{TranscriptStore, DEFAULT_EVENT_CAPACITY};
