use askbot_types::ChatEntry;

/// Result of context assembly
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextWindow {
    /// Assembled context, newest entry first, trimmed
    pub context: String,
    /// How many of the most recent entries made it in
    pub entries_used: usize,
    /// True when older entries were left out for lack of budget
    pub truncated: bool,
}

/// Strategy for building the context string sent with each question
pub trait ContextStrategy: Send + Sync {
    /// Assemble a context window from the full transcript (oldest first).
    ///
    /// Must be total: any input, including an empty transcript, yields a window.
    fn context_window(&self, entries: &[ChatEntry]) -> ContextWindow;
}
