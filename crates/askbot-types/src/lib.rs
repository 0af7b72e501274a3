pub mod entry;
pub mod events;

pub use entry::{ChatEntry, EntryRole, ANSWER_LABEL, ERROR_PLACEHOLDER, QUESTION_LABEL};
pub use events::TranscriptEvent;
