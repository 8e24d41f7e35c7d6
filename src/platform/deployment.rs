// ABOUTME: Deployment operations trait for rolling activation.
// ABOUTME: Creates platform-managed deployments and polls them until instances are healthy.

use super::InstanceDetailsFn;
use crate::diagnostics::Warned;
use crate::types::{AppGuid, BuildGuid, DeploymentGuid, RevisionGuid};
use async_trait::async_trait;

/// Rolling deployment operations.
#[async_trait]
pub trait DeploymentOps: Send + Sync {
    /// Create a rolling deployment that cuts the app over to a build.
    async fn create_deployment(&self, app: &AppGuid, build: &BuildGuid) -> Warned<DeploymentGuid>;

    /// Create a rolling deployment that cuts the app back to an earlier revision.
    async fn create_deployment_for_revision(
        &self,
        app: &AppGuid,
        revision: &RevisionGuid,
    ) -> Warned<DeploymentGuid>;

    /// Poll a deployment until its instances are healthy.
    ///
    /// With `no_wait` set the poll returns once the deployment is dispatched
    /// and the first instances report, without waiting for the full cutover.
    async fn poll_deployment_health(
        &self,
        app: &AppGuid,
        deployment: &DeploymentGuid,
        no_wait: bool,
        on_instances: InstanceDetailsFn<'_>,
    ) -> Warned<()>;
}
