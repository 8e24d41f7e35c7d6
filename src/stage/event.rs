// ABOUTME: Tagged union of everything the staging fan-in can observe.
// ABOUTME: One variant per item and one per end-of-stream, for each of the five sources.

use crate::diagnostics::Warnings;
use crate::platform::{BuildArtifact, LogMessage, LogTailError, PlatformError};

/// A single observation from one of the five staging sources.
#[derive(Debug, Clone, PartialEq)]
pub enum StageEvent {
    Artifact(BuildArtifact),
    ArtifactsClosed,
    Warnings(Warnings),
    WarningsClosed,
    BuildError(PlatformError),
    BuildErrorsClosed,
    Log(LogMessage),
    LogsClosed,
    LogError(LogTailError),
    LogErrorsClosed,
}

impl StageEvent {
    pub(crate) fn from_artifact(item: Option<BuildArtifact>) -> Self {
        item.map_or(StageEvent::ArtifactsClosed, StageEvent::Artifact)
    }

    pub(crate) fn from_warnings(item: Option<Warnings>) -> Self {
        item.map_or(StageEvent::WarningsClosed, StageEvent::Warnings)
    }

    pub(crate) fn from_build_error(item: Option<PlatformError>) -> Self {
        item.map_or(StageEvent::BuildErrorsClosed, StageEvent::BuildError)
    }

    pub(crate) fn from_log(item: Option<LogMessage>) -> Self {
        item.map_or(StageEvent::LogsClosed, StageEvent::Log)
    }

    pub(crate) fn from_log_error(item: Option<LogTailError>) -> Self {
        item.map_or(StageEvent::LogErrorsClosed, StageEvent::LogError)
    }
}
