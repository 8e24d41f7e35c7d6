// ABOUTME: Waiting for a package to finish staging into a build artifact.
// ABOUTME: Fans five build and log streams into one outcome.

mod event;
mod waiter;

pub use event::StageEvent;
pub use waiter::{LOG_TIMEOUT_WARNING, StageWaiter, wait_for_build};

use crate::platform::BuildArtifact;
use crate::types::BuildGuid;

/// Outcome of a staging run that finished with no error.
///
/// Only [`wait_for_build`] can produce one, so holding a `StagedBuild` means
/// its artifact is safe to activate. The build streams may close without ever
/// reporting an artifact; starting an empty `StagedBuild` keeps the app's
/// current build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedBuild(Option<BuildArtifact>);

impl StagedBuild {
    pub(crate) fn new(artifact: Option<BuildArtifact>) -> Self {
        Self(artifact)
    }

    pub fn guid(&self) -> Option<&BuildGuid> {
        self.0.as_ref().map(|artifact| &artifact.guid)
    }

    pub fn artifact(&self) -> Option<&BuildArtifact> {
        self.0.as_ref()
    }

    pub fn into_artifact(self) -> Option<BuildArtifact> {
        self.0
    }
}
