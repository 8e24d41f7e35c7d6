// ABOUTME: Build artifact types and the capability trait that stages a package.
// ABOUTME: A build reports through three independent streams: results, warnings, errors.

use super::PlatformError;
use crate::diagnostics::Warnings;
use crate::types::{AppName, BuildGuid, PackageGuid, SpaceGuid};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Lifecycle state of a build artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BuildState {
    Staged,
    Failed,
    Expired,
}

/// The executable bundle ("droplet") produced by staging a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildArtifact {
    pub guid: BuildGuid,
    pub created_at: DateTime<Utc>,
    pub state: BuildState,
}

/// The three streams of a running build. Each closes independently.
#[derive(Debug)]
pub struct BuildStreams {
    pub results: mpsc::Receiver<BuildArtifact>,
    pub warnings: mpsc::Receiver<Warnings>,
    pub errors: mpsc::Receiver<PlatformError>,
}

/// Build operations.
#[async_trait]
pub trait BuildOps: Send + Sync {
    /// Start staging a package. Progress and outcome arrive on the returned streams.
    async fn build_package(
        &self,
        package: &PackageGuid,
        app_name: &AppName,
        space: &SpaceGuid,
    ) -> BuildStreams;
}
