use askbot_history::TranscriptStore;
use askbot_types::ChatEntry;

use crate::budget::{text_len, ContextBudget};
use crate::strategy::{ContextStrategy, ContextWindow};

/// Greedy recency fill of a character budget.
///
/// Walks the transcript from the newest entry backwards, appending
/// `text + "\n"` while the running length stays within the budget, and
/// stops at the first entry that does not fit. Lines are never split and
/// shorter older entries are never tried once one has been refused.
///
/// The output lists entries newest first. It is not re-reversed into
/// chronological order before being returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextBuilder {
    budget: ContextBudget,
}

impl ContextBuilder {
    pub fn new(budget: impl Into<ContextBudget>) -> Self {
        Self {
            budget: budget.into(),
        }
    }

    /// Context for the current contents of `store`
    pub fn build(&self, store: &TranscriptStore) -> String {
        self.build_from_entries(store.entries())
    }

    /// Context for a transcript snapshot given oldest first
    pub fn build_from_entries(&self, entries: &[ChatEntry]) -> String {
        self.context_window(entries).context
    }
}

impl ContextStrategy for ContextBuilder {
    fn context_window(&self, entries: &[ChatEntry]) -> ContextWindow {
        let max_chars = self.budget.max_chars();
        let mut context = String::new();
        // UTF-16 units, not bytes
        let mut used = 0usize;
        let mut entries_used = 0usize;

        for entry in entries.iter().rev() {
            let line_chars = text_len(entry.text()) + 1;
            if used + line_chars > max_chars {
                break;
            }
            context.push_str(entry.text());
            context.push('\n');
            used += line_chars;
            entries_used += 1;
        }

        let window = ContextWindow {
            context: context.trim().to_string(),
            entries_used,
            truncated: entries_used < entries.len(),
        };

        tracing::debug!(
            budget = max_chars,
            entries_total = entries.len(),
            entries_used = window.entries_used,
            truncated = window.truncated,
            "assembled context"
        );

        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askbot_types::EntryRole;

    fn entries(texts: &[&str]) -> Vec<ChatEntry> {
        texts
            .iter()
            .map(|t| ChatEntry::new(EntryRole::Question, *t))
            .collect()
    }

    #[test]
    fn test_empty_transcript() {
        let builder = ContextBuilder::default();
        assert_eq!(builder.build_from_entries(&[]), "");
        assert_eq!(builder.build(&TranscriptStore::new()), "");
    }

    #[test]
    fn test_single_entry_fits() {
        let builder = ContextBuilder::new(3000usize);
        assert_eq!(builder.build_from_entries(&entries(&["Hello"])), "Hello");
    }

    #[test]
    fn test_newest_first_and_inclusive_limit() {
        let builder = ContextBuilder::new(4usize);
        let window = builder.context_window(&entries(&["A", "B", "C"]));
        assert_eq!(window.context, "C\nB");
        assert_eq!(window.entries_used, 2);
        assert!(window.truncated);
    }

    #[test]
    fn test_stops_at_first_oversized_entry() {
        // "tiny" would fit after "long..." is refused, but scanning stops
        let builder = ContextBuilder::new(12usize);
        let context = builder.build_from_entries(&entries(&["tiny", "much too long", "abc"]));
        assert_eq!(context, "abc");
    }

    #[test]
    fn test_oversized_single_entry() {
        let builder = ContextBuilder::new(5usize);
        // 5 chars + newline = 6 > 5
        assert_eq!(builder.build_from_entries(&entries(&["Hello"])), "");
        // 4 chars + newline = 5 <= 5
        assert_eq!(builder.build_from_entries(&entries(&["Hell"])), "Hell");
    }

    #[test]
    fn test_zero_and_negative_budget() {
        let all = entries(&["A", "B"]);
        assert_eq!(ContextBuilder::new(0usize).build_from_entries(&all), "");
        assert_eq!(ContextBuilder::new(-10i64).build_from_entries(&all), "");
    }

    #[test]
    fn test_embedded_newlines_are_verbatim() {
        let builder = ContextBuilder::new(100usize);
        let context = builder.build_from_entries(&entries(&["line1\nline2", "next"]));
        assert_eq!(context, "next\nline1\nline2");
    }

    #[test]
    fn test_budget_counts_chars_not_bytes() {
        // Four chars, twelve bytes in UTF-8
        let builder = ContextBuilder::new(5usize);
        assert_eq!(builder.build_from_entries(&entries(&["日本語だ"])), "日本語だ");
    }

    #[test]
    fn test_astral_chars_count_as_two_units() {
        // One emoji is two UTF-16 units, plus the newline
        let emoji = entries(&["😀"]);
        assert_eq!(ContextBuilder::new(2usize).build_from_entries(&emoji), "");
        assert_eq!(ContextBuilder::new(3usize).build_from_entries(&emoji), "😀");

        let window = ContextBuilder::new(5usize).context_window(&entries(&["😀", "😀"]));
        assert_eq!(window.context, "😀");
        assert_eq!(window.entries_used, 1);
    }

    #[test]
    fn test_build_reads_store() {
        let mut store = TranscriptStore::new();
        store.push(ChatEntry::question("hi"));
        store.push(ChatEntry::answer("hello"));
        let builder = ContextBuilder::default();
        assert_eq!(builder.build(&store), "System: hello\nYou: hi");
    }
}
