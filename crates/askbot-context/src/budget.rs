use serde::{Deserialize, Serialize};

/// Default context budget, a character-count stand-in for the backend's token limit
pub const DEFAULT_MAX_CHARS: usize = 3000;

/// Length of `text` as the budget counts it: UTF-16 code units, so
/// characters outside the Basic Multilingual Plane count twice.
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Maximum length, in characters, of an assembled context string.
///
/// Signed values are accepted from configuration; anything zero or below
/// becomes an empty budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct ContextBudget(usize);

impl ContextBudget {
    pub const fn new(max_chars: usize) -> Self {
        Self(max_chars)
    }

    pub fn from_signed(max_chars: i64) -> Self {
        Self(usize::try_from(max_chars).unwrap_or(0))
    }

    pub const fn max_chars(&self) -> usize {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ContextBudget {
    fn default() -> Self {
        Self(DEFAULT_MAX_CHARS)
    }
}

impl From<usize> for ContextBudget {
    fn from(max_chars: usize) -> Self {
        Self::new(max_chars)
    }
}

impl From<i64> for ContextBudget {
    fn from(max_chars: i64) -> Self {
        Self::from_signed(max_chars)
    }
}

impl From<ContextBudget> for i64 {
    fn from(budget: ContextBudget) -> Self {
        i64::try_from(budget.0).unwrap_or(i64::MAX)
    }
}
