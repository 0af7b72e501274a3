use serde::{Deserialize, Serialize};

/// Display label prefixed to user questions
pub const QUESTION_LABEL: &str = "You";

/// Display label prefixed to service answers
pub const ANSWER_LABEL: &str = "System";

/// Answer text recorded when the service could not be reached
pub const ERROR_PLACEHOLDER: &str = "System: Error: Unable to retrieve data.";

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryRole {
    Question,
    Answer,
}

impl EntryRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
        }
    }
}

impl std::fmt::Display for EntryRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the chat transcript.
///
/// Entries are immutable once built: fields are private and only exposed
/// through shared accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    role: EntryRole,
    text: String,
}

impl ChatEntry {
    pub fn new(role: EntryRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    /// Question entry rendered as `You: <question>`
    pub fn question(question: &str) -> Self {
        Self::new(EntryRole::Question, format!("{}: {}", QUESTION_LABEL, question))
    }

    /// Answer entry rendered as `System: <answer>`
    pub fn answer(answer: &str) -> Self {
        Self::new(EntryRole::Answer, format!("{}: {}", ANSWER_LABEL, answer))
    }

    /// Answer entry recorded after a transport failure
    pub fn error_placeholder() -> Self {
        Self::new(EntryRole::Answer, ERROR_PLACEHOLDER)
    }

    pub fn role(&self) -> EntryRole {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_answer(&self) -> bool {
        self.role == EntryRole::Answer
    }
}
