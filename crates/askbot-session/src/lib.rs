mod controller;
mod state;

pub use controller::SubmissionController;
pub use state::{SubmissionState, SubmitOutcome};
