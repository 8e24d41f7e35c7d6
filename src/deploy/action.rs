// ABOUTME: The user-facing action a start is performed as.
// ABOUTME: Drives flavor text and the already-started short-circuit.

use crate::stage::StagedBuild;
use crate::types::{BuildGuid, RevisionGuid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Starting,
    Restarting,
    RollingBack,
}

impl AppAction {
    pub const fn verb(&self) -> &'static str {
        match self {
            AppAction::Starting => "Starting",
            AppAction::Restarting => "Restarting",
            AppAction::RollingBack => "Rolling back",
        }
    }
}

/// What the app should run once started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartTarget {
    /// A build staged in this invocation. An empty one keeps the current build.
    Build(StagedBuild),
    /// A build staged earlier.
    ExistingBuild(BuildGuid),
    /// An earlier revision; only reachable through a rolling deployment.
    Revision(RevisionGuid),
    /// Whatever build the app already has.
    Current,
}

impl StartTarget {
    pub fn build_guid(&self) -> Option<&BuildGuid> {
        match self {
            StartTarget::Build(staged) => staged.guid(),
            StartTarget::ExistingBuild(guid) => Some(guid),
            StartTarget::Revision(_) | StartTarget::Current => None,
        }
    }
}

impl From<StagedBuild> for StartTarget {
    fn from(staged: StagedBuild) -> Self {
        StartTarget::Build(staged)
    }
}
