use serde::{Deserialize, Serialize};

use crate::entry::ChatEntry;

/// Change notification emitted by the transcript store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TranscriptEvent {
    /// A new entry was appended at `index` (zero-based, chronological)
    Appended {
        index: usize,
        entry: ChatEntry,
    },
}

impl TranscriptEvent {
    pub fn entry(&self) -> &ChatEntry {
        match self {
            Self::Appended { entry, .. } => entry,
        }
    }
}
