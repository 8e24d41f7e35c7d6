// ABOUTME: Stages a package into a build and activates it with the chosen strategy.
// ABOUTME: Every platform call shows its warnings before its error is looked at.

use snafu::ResultExt;

use super::action::{AppAction, StartTarget};
use super::error::{
    CreateDeploymentSnafu, LogTailSnafu, PollDeploymentSnafu, PollStartSnafu, SetBuildSnafu,
    StageError, StagingSnafu, StartAppSnafu, StopAppSnafu, SummarySnafu,
};
use super::strategy::DeployStrategy;
use crate::config::{Config, TargetConfig};
use crate::diagnostics::Warned;
use crate::output::Ui;
use crate::platform::{AppState, Application, Platform, PlatformError};
use crate::stage::{StagedBuild, wait_for_build};
use crate::types::{BuildGuid, PackageGuid};

/// Whether activation went far enough to be worth summarising.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activation {
    Started,
    AlreadyStarted,
}

/// Drives an app from a source package to running instances.
pub struct AppStager<'a, P> {
    platform: &'a P,
    ui: &'a dyn Ui,
    target: TargetConfig,
    strategy: DeployStrategy,
    no_wait: bool,
    obfuscate_env: bool,
}

impl<'a, P: Platform> AppStager<'a, P> {
    pub fn new(platform: &'a P, ui: &'a dyn Ui, config: &Config) -> Self {
        Self {
            platform,
            ui,
            target: config.target.clone(),
            strategy: DeployStrategy::for_config(config),
            no_wait: config.no_wait,
            obfuscate_env: config.obfuscate_env,
        }
    }

    /// [`stage_and_start`](Self::stage_and_start) with the strategy and
    /// `no_wait` taken from the configuration this stager was built with.
    pub async fn deploy(
        &self,
        app: &Application,
        package: &PackageGuid,
        action: AppAction,
    ) -> Result<(), StageError> {
        self.stage_and_start(app, package, self.strategy, self.no_wait, action)
            .await
    }

    /// Stage a package, activate the new build, and show the app summary.
    pub async fn stage_and_start(
        &self,
        app: &Application,
        package: &PackageGuid,
        strategy: DeployStrategy,
        no_wait: bool,
        action: AppAction,
    ) -> Result<(), StageError> {
        let staged = self.stage_app(app, package).await?;
        self.start_app(app, staged.into(), strategy, no_wait, action)
            .await
    }

    /// Stage a package while tracing its logs.
    ///
    /// The log tail is stopped before this returns, on success and failure alike.
    pub async fn stage_app(
        &self,
        app: &Application,
        package: &PackageGuid,
    ) -> Result<StagedBuild, StageError> {
        let space = &self.target.space_guid;

        let tail = self
            .surface(self.platform.start_log_tail(&app.name, space).await)
            .context(LogTailSnafu)?;
        let (mut logs, _tail_guard) = tail.into_guarded();

        tracing::info!(app = %app.name, package = %package, "staging package");
        self.ui.text("Staging app and tracing logs...");

        let build = self.platform.build_package(package, &app.name, space).await;
        let staged = wait_for_build(build, &mut logs, self.ui)
            .await
            .context(StagingSnafu)?;

        tracing::info!(app = %app.name, build = ?staged.guid(), "package staged");
        Ok(staged)
    }

    /// Activate `target` on the app using `strategy`, then show the app summary.
    pub async fn start_app(
        &self,
        app: &Application,
        target: StartTarget,
        strategy: DeployStrategy,
        no_wait: bool,
        action: AppAction,
    ) -> Result<(), StageError> {
        tracing::info!(app = %app.name, %strategy, ?action, no_wait, "activating app");

        let activation = match strategy {
            DeployStrategy::Rolling => self.deploy_rolling(app, &target, no_wait).await?,
            DeployStrategy::DirectReplace => {
                self.replace_directly(app, &target, no_wait, action).await?
            }
        };

        if activation == Activation::AlreadyStarted {
            return Ok(());
        }

        self.show_summary(app).await
    }

    async fn deploy_rolling(
        &self,
        app: &Application,
        target: &StartTarget,
        no_wait: bool,
    ) -> Result<Activation, StageError> {
        self.ui
            .text(&format!("Creating deployment for app {}...", app.name));

        let created = match target {
            StartTarget::Revision(revision) => {
                self.platform
                    .create_deployment_for_revision(&app.guid, revision)
                    .await
            }
            other => {
                // An empty build GUID asks the platform to redeploy the current build.
                let current = BuildGuid::new("");
                let build = other.build_guid().unwrap_or(&current);
                self.platform.create_deployment(&app.guid, build).await
            }
        };
        let deployment = self.surface(created).context(CreateDeploymentSnafu)?;
        tracing::debug!(app = %app.name, %deployment, "deployment created");

        self.ui.text("Waiting for app to deploy...");
        let on_instances = |details: &str| self.ui.instance_details(details);
        let polled = self
            .platform
            .poll_deployment_health(&app.guid, &deployment, no_wait, &on_instances)
            .await;
        self.surface(polled).context(PollDeploymentSnafu)?;

        Ok(Activation::Started)
    }

    async fn replace_directly(
        &self,
        app: &Application,
        target: &StartTarget,
        no_wait: bool,
        action: AppAction,
    ) -> Result<Activation, StageError> {
        if matches!(target, StartTarget::Revision(_)) {
            return Err(StageError::RevisionRequiresRolling);
        }

        self.ui.text(&format!(
            "{} app {} in org {} / space {} as {}...",
            action.verb(),
            app.name,
            self.target.org,
            self.target.space,
            self.target.user
        ));
        self.ui.newline();

        if app.state == AppState::Started {
            if action == AppAction::Starting {
                self.ui
                    .text(&format!("App '{}' is already started.", app.name));
                return Ok(Activation::AlreadyStarted);
            }

            self.ui.text("Stopping app...");
            self.ui.newline();
            self.surface(self.platform.stop_application(&app.guid).await)
                .context(StopAppSnafu)?;
        }

        if let Some(build) = target.build_guid() {
            tracing::debug!(app = %app.name, %build, "setting current build");
            self.surface(self.platform.set_application_build(&app.guid, build).await)
                .context(SetBuildSnafu)?;
        }

        self.ui.text("Waiting for app to start...");
        self.ui.newline();
        self.surface(self.platform.start_application(&app.guid).await)
            .context(StartAppSnafu)?;

        let on_instances = |details: &str| self.ui.instance_details(details);
        let polled = self
            .platform
            .poll_application_health(&app.guid, no_wait, &on_instances)
            .await;
        self.surface(polled).context(PollStartSnafu)?;

        Ok(Activation::Started)
    }

    async fn show_summary(&self, app: &Application) -> Result<(), StageError> {
        let fetched = self
            .platform
            .detailed_summary(&app.name, &self.target.space_guid, self.obfuscate_env)
            .await;
        let summary = self.surface(fetched).context(SummarySnafu)?;

        self.ui.summary(&summary);
        Ok(())
    }

    /// Show a call's warnings, then hand back its result.
    fn surface<T>(&self, outcome: Warned<T>) -> Result<T, PlatformError> {
        let (warnings, result) = outcome.into_parts();
        self.ui.warnings(&warnings);
        if let Err(error) = &result {
            tracing::warn!(%error, "platform call failed");
        }
        result
    }
}
