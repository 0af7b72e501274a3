use std::sync::Arc;
use std::time::Instant;

use askbot_client::{AskRequest, QaClient};
use askbot_context::{text_len, ContextBudget, ContextBuilder, ContextStrategy};
use askbot_history::TranscriptStore;
use askbot_types::{ChatEntry, TranscriptEvent};
use tokio::sync::{broadcast, watch, Mutex};

use crate::state::{SubmissionState, SubmitOutcome};

/// Orchestrates one question/answer round trip at a time.
///
/// The transcript lock is only held for appends and context assembly,
/// never across the service call.
pub struct SubmissionController {
    store: Arc<Mutex<TranscriptStore>>,
    client: Arc<dyn QaClient>,
    strategy: Arc<dyn ContextStrategy>,
    state: watch::Sender<SubmissionState>,
}

impl SubmissionController {
    /// Controller with a fresh transcript and the greedy recency context builder
    pub fn new(client: Arc<dyn QaClient>, budget: ContextBudget) -> Self {
        Self::with_strategy(client, Arc::new(ContextBuilder::new(budget)))
    }

    pub fn with_strategy(client: Arc<dyn QaClient>, strategy: Arc<dyn ContextStrategy>) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            store: Arc::new(Mutex::new(TranscriptStore::new())),
            client,
            strategy,
            state,
        }
    }

    /// Submit a question.
    ///
    /// Returns [`SubmitOutcome::Rejected`] without touching the transcript
    /// when another submission is still pending.
    pub async fn submit(&self, question: &str) -> SubmitOutcome {
        let Some(_guard) = self.begin() else {
            tracing::warn!("submission rejected: previous question still pending");
            return SubmitOutcome::Rejected;
        };

        let window = {
            let mut store = self.store.lock().await;
            store.push(ChatEntry::question(question));
            self.strategy.context_window(store.entries())
        };

        tracing::info!(
            question_chars = text_len(question),
            context_entries = window.entries_used,
            context_truncated = window.truncated,
            "submitting question"
        );

        let start = Instant::now();
        let result = self
            .client
            .ask(AskRequest::new(question, window.context))
            .await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let (entry, outcome) = match result {
            Ok(response) => {
                tracing::info!(duration_ms, "answer received");
                (ChatEntry::answer(&response.answer), SubmitOutcome::Answered)
            }
            Err(e) => {
                tracing::error!(duration_ms, error = %e, "question failed");
                (ChatEntry::error_placeholder(), SubmitOutcome::Failed)
            }
        };

        self.store.lock().await.push(entry);
        outcome
    }

    /// Current machine state
    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    pub fn is_pending(&self) -> bool {
        self.state().is_pending()
    }

    /// Watch state transitions (e.g. to enable/disable a submit control)
    pub fn subscribe_state(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Watch transcript appends
    pub async fn subscribe_transcript(&self) -> broadcast::Receiver<TranscriptEvent> {
        self.store.lock().await.subscribe()
    }

    /// Snapshot of the transcript, oldest first
    pub async fn entries(&self) -> Vec<ChatEntry> {
        self.store.lock().await.entries().to_vec()
    }

    pub async fn transcript_len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Idle -> Pending, atomically. `None` when already pending.
    fn begin(&self) -> Option<PendingGuard<'_>> {
        let accepted = self.state.send_if_modified(|state| {
            if state.is_pending() {
                false
            } else {
                *state = SubmissionState::Pending;
                true
            }
        });
        accepted.then(|| PendingGuard { state: &self.state })
    }
}

/// Returns the machine to Idle when dropped
struct PendingGuard<'a> {
    state: &'a watch::Sender<SubmissionState>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_replace(SubmissionState::Idle);
    }
}
