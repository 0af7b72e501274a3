use askbot_context::{text_len, ContextBudget, ContextBuilder, ContextStrategy};
use askbot_history::TranscriptStore;
use askbot_types::{ChatEntry, EntryRole};

/// Small transcripts with varied line lengths, including empty and multi-line text
fn transcripts() -> Vec<Vec<ChatEntry>> {
    let pool = ["", "a", "bb", "ccc", "dddd dddd", "e\nf", "ggggggggggggggg", "ü", "😀x"];
    let mut out = vec![Vec::new()];
    for len in 1..=5 {
        for seed in 0..pool.len() {
            let entries = (0..len)
                .map(|i| {
                    let text = pool[(seed * 3 + i * 5) % pool.len()];
                    let role = if i % 2 == 0 {
                        EntryRole::Question
                    } else {
                        EntryRole::Answer
                    };
                    ChatEntry::new(role, text)
                })
                .collect();
            out.push(entries);
        }
    }
    out
}

#[test]
fn test_append_only_order() {
    let mut store = TranscriptStore::new();
    let mut appended = Vec::new();
    for i in 0..20 {
        let entry = if i % 2 == 0 {
            ChatEntry::question(&format!("q{}", i))
        } else {
            ChatEntry::answer(&format!("a{}", i))
        };
        appended.push(entry.clone());
        store.push(entry);
        assert_eq!(store.entries().len(), i + 1);
    }
    assert_eq!(store.entries(), appended.as_slice());
}

#[test]
fn test_budget_is_respected() {
    for entries in transcripts() {
        for budget in 0..40usize {
            let context = ContextBuilder::new(budget).build_from_entries(&entries);
            assert!(
                text_len(&context) <= budget,
                "context {:?} exceeds budget {}",
                context,
                budget
            );
        }
    }
}

#[test]
fn test_included_entries_are_a_recent_suffix() {
    for entries in transcripts() {
        for budget in 0..40usize {
            let window = ContextBuilder::new(budget).context_window(&entries);
            let used = window.entries_used;
            assert!(used <= entries.len());

            // Exactly the newest `used` entries, newest first, and nothing older
            let expected: String = entries[entries.len() - used..]
                .iter()
                .rev()
                .map(|e| format!("{}\n", e.text()))
                .collect();
            assert_eq!(window.context, expected.trim());

            // The next older entry, if any, must be the one that did not fit
            if used < entries.len() {
                let refused = &entries[entries.len() - used - 1];
                let used_chars = text_len(&expected);
                assert!(used_chars + text_len(refused.text()) + 1 > budget);
                assert!(window.truncated);
            } else {
                assert!(!window.truncated);
            }
        }
    }
}

#[test]
fn test_empty_transcript_for_any_budget() {
    for budget in [-5i64, 0, 1, 3000, i64::MAX] {
        assert_eq!(
            ContextBuilder::new(ContextBudget::from_signed(budget)).build_from_entries(&[]),
            ""
        );
    }
}

#[test]
fn test_oversized_single_entry_is_dropped() {
    for text in ["x", "hello", "a longer line of text", "😀"] {
        let entry = [ChatEntry::new(EntryRole::Answer, text)];
        let too_small = text_len(text);
        assert_eq!(ContextBuilder::new(too_small).build_from_entries(&entry), "");
        assert_eq!(
            ContextBuilder::new(too_small + 1).build_from_entries(&entry),
            text
        );
    }
}

#[test]
fn test_reference_scenarios() {
    let builder = ContextBuilder::default();
    assert_eq!(builder.build(&TranscriptStore::new()), "");

    let mut store = TranscriptStore::new();
    store.append(EntryRole::Question, "Hello");
    assert_eq!(builder.build(&store), "Hello");

    let mut store = TranscriptStore::new();
    store.append(EntryRole::Question, "A");
    store.append(EntryRole::Answer, "B");
    store.append(EntryRole::Question, "C");
    assert_eq!(ContextBuilder::new(4usize).build(&store), "C\nB");
}
