use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use askbot_session::{SubmissionController, SubmitOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use crate::render::{render_transcript, BANNER, BUSY_NOTICE, PROMPT};

const QUIT_COMMAND: &str = "/quit";

/// Line-oriented chat loop over stdin
pub async fn run(controller: Arc<SubmissionController>) -> Result<()> {
    run_with_input(controller, BufReader::new(tokio::io::stdin())).await
}

/// One input line is one submission.
///
/// Input typed while an answer is pending is reported and dropped. On EOF or
/// `/quit` the loop waits for any in-flight answer before returning. The
/// transcript is printed to stdout until the last handle on `controller`
/// is gone.
pub async fn run_with_input<R>(controller: Arc<SubmissionController>, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let renderer = tokio::spawn(render_transcript(
        controller.subscribe_transcript().await,
        std::io::stdout(),
    ));

    println!("{}", BANNER);
    print_prompt();

    let mut lines = input.lines();
    let mut in_flight: Option<JoinHandle<SubmitOutcome>> = None;

    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read input")?
    {
        if line.trim() == QUIT_COMMAND {
            break;
        }

        if !controller.state().submit_enabled() {
            println!("{}", BUSY_NOTICE);
            continue;
        }

        let controller = Arc::clone(&controller);
        in_flight = Some(tokio::spawn(async move {
            let outcome = controller.submit(&line).await;
            if outcome == SubmitOutcome::Rejected {
                println!("{}", BUSY_NOTICE);
            }
            outcome
        }));
    }

    if let Some(handle) = in_flight {
        if controller.is_pending() {
            tracing::info!("waiting for the pending answer before exiting");
        }
        let outcome = handle.await.context("Submission task panicked")?;
        tracing::debug!(?outcome, "last submission finished");
    }

    // Dropping the last handle on the transcript closes the render stream
    drop(controller);
    renderer
        .await
        .context("Render task panicked")?
        .context("Failed to write transcript")?;

    tracing::info!("session ended");
    Ok(())
}

fn print_prompt() {
    print!("{}", PROMPT);
    let _ = std::io::stdout().flush();
}
