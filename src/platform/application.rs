// ABOUTME: Application operations trait and the summary types it returns.
// ABOUTME: Stop, set build, start, health polling, and the detailed app summary.

use crate::diagnostics::Warned;
use crate::types::{AppGuid, AppName, BuildGuid, SpaceGuid};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Callback receiving pre-formatted instance details while a health poll runs.
pub type InstanceDetailsFn<'a> = &'a (dyn Fn(&str) + Send + Sync);

/// Requested state of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppState {
    Started,
    Stopped,
}

impl std::fmt::Display for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppState::Started => f.write_str("started"),
            AppState::Stopped => f.write_str("stopped"),
        }
    }
}

/// The application being staged and started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub guid: AppGuid,
    pub name: AppName,
    pub state: AppState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceState {
    Starting,
    Running,
    Crashed,
    Down,
}

impl std::fmt::Display for InstanceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InstanceState::Starting => "starting",
            InstanceState::Running => "running",
            InstanceState::Crashed => "crashed",
            InstanceState::Down => "down",
        };
        f.pad(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstanceSummary {
    pub index: u32,
    pub state: InstanceState,
    pub since: Option<DateTime<Utc>>,
    pub memory_bytes: u64,
    pub memory_quota_bytes: u64,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessSummary {
    pub process_type: String,
    pub instances: Vec<InstanceSummary>,
}

impl ProcessSummary {
    pub fn running_count(&self) -> usize {
        self.instances
            .iter()
            .filter(|i| i.state == InstanceState::Running)
            .count()
    }
}

/// Detailed app summary shown once the app is running.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSummary {
    pub name: String,
    pub state: AppState,
    pub routes: Vec<String>,
    pub stack: Option<String>,
    pub buildpacks: Vec<String>,
    pub processes: Vec<ProcessSummary>,
}

/// Application lifecycle operations.
#[async_trait]
pub trait ApplicationOps: Send + Sync {
    async fn stop_application(&self, app: &AppGuid) -> Warned<()>;

    /// Make `build` the build the app runs on next start.
    async fn set_application_build(&self, app: &AppGuid, build: &BuildGuid) -> Warned<()>;

    async fn start_application(&self, app: &AppGuid) -> Warned<()>;

    /// Poll the app's processes until instances are running.
    ///
    /// With `no_wait` set only the web process is waited on.
    async fn poll_application_health(
        &self,
        app: &AppGuid,
        no_wait: bool,
        on_instances: InstanceDetailsFn<'_>,
    ) -> Warned<()>;

    /// Fetch processes, instances, routes and buildpacks for display.
    async fn detailed_summary(
        &self,
        app_name: &AppName,
        space: &SpaceGuid,
        obfuscate_env: bool,
    ) -> Warned<AppSummary>;
}
