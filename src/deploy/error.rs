// ABOUTME: Step-tagged error for staging and activation.
// ABOUTME: Uses SNAFU context selectors; Display stays the platform's own message.

use snafu::Snafu;

use crate::platform::PlatformError;

/// Failure of one step of staging or starting an app.
///
/// Each variant wraps the platform error of the step that failed. The
/// message is passed through unchanged so the CLI can print it as-is.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum StageError {
    #[snafu(display("{source}"))]
    LogTail { source: PlatformError },

    #[snafu(display("{source}"))]
    Staging { source: PlatformError },

    #[snafu(display("{source}"))]
    CreateDeployment { source: PlatformError },

    #[snafu(display("{source}"))]
    PollDeployment { source: PlatformError },

    #[snafu(display("{source}"))]
    StopApp { source: PlatformError },

    #[snafu(display("{source}"))]
    SetBuild { source: PlatformError },

    #[snafu(display("{source}"))]
    StartApp { source: PlatformError },

    #[snafu(display("{source}"))]
    PollStart { source: PlatformError },

    #[snafu(display("{source}"))]
    Summary { source: PlatformError },

    #[snafu(display("rolling back to a revision requires the rolling deployment strategy"))]
    RevisionRequiresRolling,
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageErrorKind {
    LogTail,
    Staging,
    CreateDeployment,
    PollDeployment,
    StopApp,
    SetBuild,
    StartApp,
    PollStart,
    Summary,
    InvalidTarget,
}

impl StageError {
    /// Returns the step that failed.
    pub fn kind(&self) -> StageErrorKind {
        match self {
            StageError::LogTail { .. } => StageErrorKind::LogTail,
            StageError::Staging { .. } => StageErrorKind::Staging,
            StageError::CreateDeployment { .. } => StageErrorKind::CreateDeployment,
            StageError::PollDeployment { .. } => StageErrorKind::PollDeployment,
            StageError::StopApp { .. } => StageErrorKind::StopApp,
            StageError::SetBuild { .. } => StageErrorKind::SetBuild,
            StageError::StartApp { .. } => StageErrorKind::StartApp,
            StageError::PollStart { .. } => StageErrorKind::PollStart,
            StageError::Summary { .. } => StageErrorKind::Summary,
            StageError::RevisionRequiresRolling => StageErrorKind::InvalidTarget,
        }
    }

    /// Returns the underlying platform error, if a platform call failed.
    pub fn platform_error(&self) -> Option<&PlatformError> {
        match self {
            StageError::LogTail { source }
            | StageError::Staging { source }
            | StageError::CreateDeployment { source }
            | StageError::PollDeployment { source }
            | StageError::StopApp { source }
            | StageError::SetBuild { source }
            | StageError::StartApp { source }
            | StageError::PollStart { source }
            | StageError::Summary { source } => Some(source),
            StageError::RevisionRequiresRolling => None,
        }
    }
}
