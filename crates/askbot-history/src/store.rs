use askbot_types::{ChatEntry, EntryRole, TranscriptEvent};
use tokio::sync::broadcast;

/// Buffered notifications per subscriber before it starts lagging
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Append-only chat transcript, oldest entry first.
///
/// The only mutation is [`TranscriptStore::append`] (or [`TranscriptStore::push`]);
/// every append is broadcast to subscribers so a view layer can redraw
/// without sharing the underlying vector.
#[derive(Debug)]
pub struct TranscriptStore {
    entries: Vec<ChatEntry>,
    events: broadcast::Sender<TranscriptEvent>,
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::with_event_capacity(DEFAULT_EVENT_CAPACITY)
    }

    pub fn with_event_capacity(capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity.max(1));
        Self {
            entries: Vec::new(),
            events,
        }
    }

    /// Append a new entry built from `role` and `text`
    pub fn append(&mut self, role: EntryRole, text: impl Into<String>) -> &ChatEntry {
        self.push(ChatEntry::new(role, text))
    }

    /// Append an already-built entry
    pub fn push(&mut self, entry: ChatEntry) -> &ChatEntry {
        let index = self.entries.len();
        tracing::debug!(index, role = %entry.role(), "transcript append");

        // Send only fails when nobody is listening
        let _ = self.events.send(TranscriptEvent::Appended {
            index,
            entry: entry.clone(),
        });

        self.entries.push(entry);
        &self.entries[index]
    }

    /// Read view, oldest first
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Subscribe to future appends. Entries already stored are not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<TranscriptEvent> {
        self.events.subscribe()
    }
}

impl Default for TranscriptStore {
    fn default() -> Self {
        Self::new()
    }
}
