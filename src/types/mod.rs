// ABOUTME: Type-safe GUIDs and validated domain types.
// ABOUTME: Uses phantom types to prevent GUID confusion at compile time.

mod app_name;
mod id;

pub use app_name::{AppName, AppNameError};
pub use id::{AppGuid, BuildGuid, DeploymentGuid, Guid, PackageGuid, RevisionGuid, SpaceGuid};
