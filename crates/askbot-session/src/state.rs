/// Two-state submission machine.
///
/// `submit` is accepted only in `Idle`; it moves to `Pending` for the
/// duration of the service call and back to `Idle` once the outcome entry
/// is recorded, whether the call succeeded or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Derived view for the submit control: disabled while pending
    pub fn submit_enabled(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// What a call to `submit` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SubmitOutcome {
    /// The service answered and the answer was recorded
    Answered,
    /// The service call failed and the error placeholder was recorded
    Failed,
    /// Another submission was in flight; nothing was recorded
    Rejected,
}
