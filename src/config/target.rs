// ABOUTME: The targeted org, space and user that staging runs against.

use crate::types::SpaceGuid;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    pub org: String,
    pub space: String,
    pub space_guid: SpaceGuid,
    pub user: String,
}
