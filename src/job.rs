// ABOUTME: Waiting on generic asynchronous platform jobs.
// ABOUTME: Consumes a stream of poll events, optionally returning early while the job still runs.

use crate::output::Ui;
use crate::platform::{JobEvent, JobState, PlatformError};
use tokio::sync::mpsc;

/// Consume job poll events until the job completes, fails, or the caller stops caring.
///
/// Returns `Ok(true)` when the job is known to be complete (or there was no
/// job at all) and `Ok(false)` when the caller chose not to wait and the job
/// is still polling. Event warnings are shown as they arrive.
pub async fn wait_for_result(
    events: Option<mpsc::Receiver<JobEvent>>,
    ui: &dyn Ui,
    wait_for_completion: bool,
) -> Result<bool, PlatformError> {
    let Some(mut events) = events else {
        return Ok(true);
    };

    if wait_for_completion {
        ui.text("Waiting for the operation to complete");
    }

    let result = consume(&mut events, ui, wait_for_completion).await;

    if wait_for_completion {
        ui.newline();
    }
    result
}

async fn consume(
    events: &mut mpsc::Receiver<JobEvent>,
    ui: &dyn Ui,
    wait_for_completion: bool,
) -> Result<bool, PlatformError> {
    while let Some(event) = events.recv().await {
        if wait_for_completion {
            ui.progress();
        }
        ui.warnings(&event.warnings);

        if let Some(error) = event.error {
            tracing::debug!(%error, "job failed");
            return Err(error);
        }

        if event.state == JobState::Polling && !wait_for_completion {
            tracing::debug!("job still polling, not waiting for completion");
            return Ok(false);
        }
    }

    Ok(true)
}
