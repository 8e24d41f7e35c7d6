// ABOUTME: Composable capability traits for the platform API actor.
// ABOUTME: Defines LogOps, BuildOps, DeploymentOps, ApplicationOps and the Platform bundle.

mod application;
mod build;
mod deployment;
mod error;
mod job;
mod logs;

pub use application::{
    AppState, AppSummary, Application, ApplicationOps, InstanceDetailsFn, InstanceState,
    InstanceSummary, ProcessSummary,
};
pub use build::{BuildArtifact, BuildOps, BuildState, BuildStreams};
pub use deployment::DeploymentOps;
pub use error::PlatformError;
pub use job::{JobEvent, JobState};
pub use logs::{
    LogMessage, LogOps, LogSource, LogStreams, LogTail, LogTailCancel, LogTailError, LogTailGuard,
};

/// Every capability the stager needs from the platform.
///
/// Automatically implemented for any type providing all of them.
pub trait Platform: LogOps + BuildOps + DeploymentOps + ApplicationOps {}

impl<T> Platform for T where T: LogOps + BuildOps + DeploymentOps + ApplicationOps {}
