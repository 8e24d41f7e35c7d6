// ABOUTME: Events emitted while polling a generic asynchronous platform job.

use super::PlatformError;
use crate::diagnostics::Warnings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    /// The job is still running on the platform.
    Polling,
    Complete,
}

/// One poll result for a long-running job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobEvent {
    pub warnings: Warnings,
    pub state: JobState,
    pub error: Option<PlatformError>,
}

impl JobEvent {
    pub fn polling(warnings: impl Into<Warnings>) -> Self {
        Self {
            warnings: warnings.into(),
            state: JobState::Polling,
            error: None,
        }
    }

    pub fn complete(warnings: impl Into<Warnings>) -> Self {
        Self {
            warnings: warnings.into(),
            state: JobState::Complete,
            error: None,
        }
    }

    pub fn failed(error: PlatformError, warnings: impl Into<Warnings>) -> Self {
        Self {
            warnings: warnings.into(),
            state: JobState::Complete,
            error: Some(error),
        }
    }
}
