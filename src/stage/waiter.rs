// ABOUTME: Staging fan-in: a select loop over five sources feeding a state machine.
// ABOUTME: Finishes on the first build error or once all three build streams close.

use super::{StageEvent, StagedBuild};
use crate::output::Ui;
use crate::platform::{BuildArtifact, BuildStreams, LogStreams, LogTailError, PlatformError};

/// Shown instead of the raw error when the log backend times out.
pub const LOG_TIMEOUT_WARNING: &str = "timeout connecting to log server, no log will be shown";

/// Tracks which staging sources are still open and the latest artifact seen.
///
/// Log streams are tracked only so the select loop stops polling them once
/// closed; they never gate completion.
#[derive(Debug)]
pub struct StageWaiter {
    artifact: Option<BuildArtifact>,
    artifacts_open: bool,
    warnings_open: bool,
    build_errors_open: bool,
    logs_open: bool,
    log_errors_open: bool,
}

impl Default for StageWaiter {
    fn default() -> Self {
        Self {
            artifact: None,
            artifacts_open: true,
            warnings_open: true,
            build_errors_open: true,
            logs_open: true,
            log_errors_open: true,
        }
    }
}

impl StageWaiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event, displaying whatever it carries.
    ///
    /// Returns `Some` once the wait is over.
    pub fn apply(
        &mut self,
        event: StageEvent,
        ui: &dyn Ui,
    ) -> Option<Result<StagedBuild, PlatformError>> {
        match event {
            StageEvent::Artifact(artifact) => {
                tracing::debug!(build = %artifact.guid, state = ?artifact.state, "build artifact received");
                self.artifact = Some(artifact);
            }
            StageEvent::ArtifactsClosed => self.artifacts_open = false,
            StageEvent::Warnings(warnings) => ui.warnings(&warnings),
            StageEvent::WarningsClosed => self.warnings_open = false,
            StageEvent::BuildError(error) => {
                tracing::warn!(%error, "staging failed");
                return Some(Err(error));
            }
            StageEvent::BuildErrorsClosed => self.build_errors_open = false,
            StageEvent::Log(message) => {
                if message.is_staging() {
                    ui.log_message(&message);
                }
            }
            StageEvent::LogsClosed => self.logs_open = false,
            StageEvent::LogError(LogTailError::Timeout) => ui.warning(LOG_TIMEOUT_WARNING),
            StageEvent::LogError(error) => {
                tracing::debug!(%error, "log tail error");
                ui.warning(&error.to_string());
            }
            StageEvent::LogErrorsClosed => self.log_errors_open = false,
        }

        self.build_finished().then(|| self.finish())
    }

    fn build_finished(&self) -> bool {
        !self.artifacts_open && !self.warnings_open && !self.build_errors_open
    }

    fn finish(&mut self) -> Result<StagedBuild, PlatformError> {
        let artifact = self.artifact.take();
        match &artifact {
            Some(artifact) => tracing::info!(build = %artifact.guid, "staging complete"),
            None => tracing::debug!("build streams closed without an artifact"),
        }
        Ok(StagedBuild::new(artifact))
    }
}

/// Wait for a build to finish while showing its warnings and staging logs.
///
/// Returns the last artifact the build reported (possibly none) once its
/// result, warning and error streams have all closed, or the first build
/// error as soon as it arrives. Log streams are drained while waiting but never hold up the
/// outcome; the caller still owns the log tail and stops it afterwards.
pub async fn wait_for_build(
    build: BuildStreams,
    logs: &mut LogStreams,
    ui: &dyn Ui,
) -> Result<StagedBuild, PlatformError> {
    let BuildStreams {
        results: mut artifacts,
        mut warnings,
        errors: mut build_errors,
    } = build;
    let mut waiter = StageWaiter::new();

    loop {
        // Build sources come first so a chatty log stream cannot starve them.
        // Warnings precede errors so a batch sent before a failure is shown.
        let event = tokio::select! {
            biased;

            item = warnings.recv(), if waiter.warnings_open => StageEvent::from_warnings(item),
            item = artifacts.recv(), if waiter.artifacts_open => StageEvent::from_artifact(item),
            item = build_errors.recv(), if waiter.build_errors_open => StageEvent::from_build_error(item),
            item = logs.messages.recv(), if waiter.logs_open => StageEvent::from_log(item),
            item = logs.errors.recv(), if waiter.log_errors_open => StageEvent::from_log_error(item),
            // Unreachable while any build source is open; apply() has already
            // returned once all three close.
            else => return waiter.finish(),
        };

        if let Some(outcome) = waiter.apply(event, ui) {
            return outcome;
        }
    }
}
