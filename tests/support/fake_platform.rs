// ABOUTME: Scripted in-memory implementation of the platform traits.
// ABOUTME: Records every call and counts log tail cancellations.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use stagehand::diagnostics::{Warned, Warnings};
use stagehand::platform::{
    AppState, AppSummary, ApplicationOps, BuildArtifact, BuildOps, BuildState, BuildStreams,
    DeploymentOps, InstanceDetailsFn, LogMessage, LogOps, LogTail, LogTailCancel, LogTailError,
    PlatformError,
};
use stagehand::types::{
    AppGuid, AppName, BuildGuid, DeploymentGuid, PackageGuid, RevisionGuid, SpaceGuid,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc;

/// One recorded platform call, with its arguments as plain strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    StartLogTail {
        app: String,
        space: String,
    },
    BuildPackage {
        package: String,
        app: String,
        space: String,
    },
    CreateDeployment {
        app: String,
        build: String,
    },
    CreateDeploymentForRevision {
        app: String,
        revision: String,
    },
    PollDeploymentHealth {
        app: String,
        deployment: String,
        no_wait: bool,
    },
    StopApplication {
        app: String,
    },
    SetApplicationBuild {
        app: String,
        build: String,
    },
    StartApplication {
        app: String,
    },
    PollApplicationHealth {
        app: String,
        no_wait: bool,
    },
    DetailedSummary {
        app: String,
        space: String,
        obfuscate_env: bool,
    },
}

/// What `build_package` emits. Every stream is closed after its items.
#[derive(Debug, Clone, Default)]
pub struct BuildScript {
    pub artifacts: Vec<BuildArtifact>,
    pub warnings: Vec<Warnings>,
    pub errors: Vec<PlatformError>,
}

impl BuildScript {
    pub fn staged(guid: &str) -> Self {
        Self {
            artifacts: vec![artifact(guid)],
            ..Self::default()
        }
    }
}

/// What `start_log_tail` emits. The streams stay open until cancelled.
#[derive(Debug, Clone, Default)]
pub struct LogScript {
    pub messages: Vec<LogMessage>,
    pub errors: Vec<LogTailError>,
}

/// Canned outcome for a call returning `Warned<T>`.
struct Scripted<T> {
    warnings: Warnings,
    result: Result<T, PlatformError>,
}

impl<T: Clone> Scripted<T> {
    fn ok(value: T) -> Mutex<Self> {
        Mutex::new(Self {
            warnings: Warnings::new(),
            result: Ok(value),
        })
    }

    fn outcome(slot: &Mutex<Self>) -> Warned<T> {
        let scripted = slot.lock();
        Warned {
            warnings: scripted.warnings.clone(),
            result: scripted.result.clone(),
        }
    }
}

fn set<T>(slot: &Mutex<Scripted<T>>, warnings: &[&str], result: Result<T, PlatformError>) {
    *slot.lock() = Scripted {
        warnings: warnings.iter().copied().collect(),
        result,
    };
}

pub fn artifact(guid: &str) -> BuildArtifact {
    BuildArtifact {
        guid: BuildGuid::new(guid),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        state: BuildState::Staged,
    }
}

pub fn summary(name: &str) -> AppSummary {
    AppSummary {
        name: name.to_string(),
        state: AppState::Started,
        routes: vec![format!("{name}.example.com")],
        stack: Some("cflinuxfs4".to_string()),
        buildpacks: Vec::new(),
        processes: Vec::new(),
    }
}

pub struct FakePlatform {
    calls: Mutex<Vec<Call>>,
    cancellations: Arc<AtomicUsize>,

    log_tail: Mutex<Scripted<()>>,
    log_script: Mutex<LogScript>,
    build_script: Mutex<BuildScript>,
    create_deployment: Mutex<Scripted<DeploymentGuid>>,
    poll_deployment: Mutex<Scripted<()>>,
    stop: Mutex<Scripted<()>>,
    set_build: Mutex<Scripted<()>>,
    start: Mutex<Scripted<()>>,
    poll_start: Mutex<Scripted<()>>,
    summary: Mutex<Scripted<AppSummary>>,
    instance_details: Mutex<Vec<String>>,
}

impl FakePlatform {
    /// Every call succeeds with no warnings; staging yields build `build-guid`.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            cancellations: Arc::new(AtomicUsize::new(0)),
            log_tail: Scripted::ok(()),
            log_script: Mutex::new(LogScript::default()),
            build_script: Mutex::new(BuildScript::staged("build-guid")),
            create_deployment: Scripted::ok(DeploymentGuid::new("deployment-guid")),
            poll_deployment: Scripted::ok(()),
            stop: Scripted::ok(()),
            set_build: Scripted::ok(()),
            start: Scripted::ok(()),
            poll_start: Scripted::ok(()),
            summary: Scripted::ok(summary("app-name")),
            instance_details: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// How many times a log tail's cancel function has run.
    pub fn log_tail_cancellations(&self) -> usize {
        self.cancellations.load(Ordering::SeqCst)
    }

    pub fn on_log_tail(&self, warnings: &[&str], result: Result<(), PlatformError>) {
        set(&self.log_tail, warnings, result);
    }

    pub fn with_logs(&self, script: LogScript) {
        *self.log_script.lock() = script;
    }

    pub fn with_build(&self, script: BuildScript) {
        *self.build_script.lock() = script;
    }

    pub fn on_create_deployment(
        &self,
        warnings: &[&str],
        result: Result<DeploymentGuid, PlatformError>,
    ) {
        set(&self.create_deployment, warnings, result);
    }

    pub fn on_poll_deployment(&self, warnings: &[&str], result: Result<(), PlatformError>) {
        set(&self.poll_deployment, warnings, result);
    }

    pub fn on_stop(&self, warnings: &[&str], result: Result<(), PlatformError>) {
        set(&self.stop, warnings, result);
    }

    pub fn on_set_build(&self, warnings: &[&str], result: Result<(), PlatformError>) {
        set(&self.set_build, warnings, result);
    }

    pub fn on_start(&self, warnings: &[&str], result: Result<(), PlatformError>) {
        set(&self.start, warnings, result);
    }

    pub fn on_poll_start(&self, warnings: &[&str], result: Result<(), PlatformError>) {
        set(&self.poll_start, warnings, result);
    }

    pub fn on_summary(&self, warnings: &[&str], result: Result<AppSummary, PlatformError>) {
        set(&self.summary, warnings, result);
    }

    /// Instance detail lines passed to the health-poll callbacks.
    pub fn with_instance_details(&self, details: &[&str]) {
        *self.instance_details.lock() = details.iter().map(|d| d.to_string()).collect();
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    fn report_instances(&self, on_instances: InstanceDetailsFn<'_>) {
        let details = self.instance_details.lock().clone();
        for line in &details {
            on_instances(line);
        }
    }
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self::new()
    }
}

/// Channel with room for every scripted item, preloaded and returned with its sender.
fn preloaded<T>(items: Vec<T>) -> (mpsc::Sender<T>, mpsc::Receiver<T>) {
    let (tx, rx) = mpsc::channel(items.len().max(1));
    for item in items {
        tx.try_send(item).unwrap();
    }
    (tx, rx)
}

#[async_trait]
impl LogOps for FakePlatform {
    async fn start_log_tail(&self, app_name: &AppName, space: &SpaceGuid) -> Warned<LogTail> {
        self.record(Call::StartLogTail {
            app: app_name.to_string(),
            space: space.to_string(),
        });

        let Warned { warnings, result } = Scripted::outcome(&self.log_tail);
        if let Err(error) = result {
            return Warned::err(error, warnings);
        }

        let script = self.log_script.lock().clone();
        let (message_tx, messages) = preloaded(script.messages);
        let (error_tx, errors) = preloaded(script.errors);
        let counter = Arc::clone(&self.cancellations);

        let cancel = LogTailCancel::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            drop(message_tx);
            drop(error_tx);
        });

        Warned::ok(
            LogTail {
                messages,
                errors,
                cancel,
            },
            warnings,
        )
    }
}

#[async_trait]
impl BuildOps for FakePlatform {
    async fn build_package(
        &self,
        package: &PackageGuid,
        app_name: &AppName,
        space: &SpaceGuid,
    ) -> BuildStreams {
        self.record(Call::BuildPackage {
            package: package.to_string(),
            app: app_name.to_string(),
            space: space.to_string(),
        });

        let script = self.build_script.lock().clone();
        let (_, results) = preloaded(script.artifacts);
        let (_, warnings) = preloaded(script.warnings);
        let (_, errors) = preloaded(script.errors);

        BuildStreams {
            results,
            warnings,
            errors,
        }
    }
}

#[async_trait]
impl DeploymentOps for FakePlatform {
    async fn create_deployment(&self, app: &AppGuid, build: &BuildGuid) -> Warned<DeploymentGuid> {
        self.record(Call::CreateDeployment {
            app: app.to_string(),
            build: build.to_string(),
        });
        Scripted::outcome(&self.create_deployment)
    }

    async fn create_deployment_for_revision(
        &self,
        app: &AppGuid,
        revision: &RevisionGuid,
    ) -> Warned<DeploymentGuid> {
        self.record(Call::CreateDeploymentForRevision {
            app: app.to_string(),
            revision: revision.to_string(),
        });
        Scripted::outcome(&self.create_deployment)
    }

    async fn poll_deployment_health(
        &self,
        app: &AppGuid,
        deployment: &DeploymentGuid,
        no_wait: bool,
        on_instances: InstanceDetailsFn<'_>,
    ) -> Warned<()> {
        self.record(Call::PollDeploymentHealth {
            app: app.to_string(),
            deployment: deployment.to_string(),
            no_wait,
        });
        self.report_instances(on_instances);
        Scripted::outcome(&self.poll_deployment)
    }
}

#[async_trait]
impl ApplicationOps for FakePlatform {
    async fn stop_application(&self, app: &AppGuid) -> Warned<()> {
        self.record(Call::StopApplication {
            app: app.to_string(),
        });
        Scripted::outcome(&self.stop)
    }

    async fn set_application_build(&self, app: &AppGuid, build: &BuildGuid) -> Warned<()> {
        self.record(Call::SetApplicationBuild {
            app: app.to_string(),
            build: build.to_string(),
        });
        Scripted::outcome(&self.set_build)
    }

    async fn start_application(&self, app: &AppGuid) -> Warned<()> {
        self.record(Call::StartApplication {
            app: app.to_string(),
        });
        Scripted::outcome(&self.start)
    }

    async fn poll_application_health(
        &self,
        app: &AppGuid,
        no_wait: bool,
        on_instances: InstanceDetailsFn<'_>,
    ) -> Warned<()> {
        self.record(Call::PollApplicationHealth {
            app: app.to_string(),
            no_wait,
        });
        self.report_instances(on_instances);
        Scripted::outcome(&self.poll_start)
    }

    async fn detailed_summary(
        &self,
        app_name: &AppName,
        space: &SpaceGuid,
        obfuscate_env: bool,
    ) -> Warned<AppSummary> {
        self.record(Call::DetailedSummary {
            app: app_name.to_string(),
            space: space.to_string(),
            obfuscate_env,
        });
        Scripted::outcome(&self.summary)
    }
}
