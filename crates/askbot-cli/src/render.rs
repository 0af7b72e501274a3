use std::io::Write;

use askbot_types::{ChatEntry, TranscriptEvent};
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

pub const BANNER: &str = "Chatbot";
pub const PROMPT: &str = "> ";
pub const BUSY_NOTICE: &str = "(still waiting for the previous answer)";

/// Printable form of an entry: its text with blank lines dropped.
///
/// Only the display is affected; the stored entry keeps its text verbatim.
pub fn render_entry(entry: &ChatEntry) -> String {
    entry
        .text()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print every appended entry to `out` until the transcript is dropped.
///
/// A prompt follows each answer. Entries missed because the receiver lagged
/// are logged and skipped.
pub async fn render_transcript<W: Write + Send>(
    events: broadcast::Receiver<TranscriptEvent>,
    mut out: W,
) -> std::io::Result<()> {
    let mut stream = BroadcastStream::new(events);

    while let Some(event) = stream.next().await {
        match event {
            Ok(event) => {
                let entry = event.entry();
                writeln!(out, "{}", render_entry(entry))?;
                if entry.is_answer() {
                    write!(out, "{}", PROMPT)?;
                }
                out.flush()?;
            }
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "renderer fell behind; entries not shown");
            }
        }
    }

    Ok(())
}
