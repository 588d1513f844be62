//! Sequential launch orchestrator.
//!
//! Starts each app of an environment in launch order, one at a time, and
//! reports every state transition to an observer as it happens. A single
//! app's failure never aborts the batch.

use std::path::Path;

use tracing::warn;

use crate::{
    registry::EnvironmentRegistry,
    store::Environment,
    support::errors::RegistryError,
};

pub mod spawn;

pub use spawn::{DetachedSpawner, Spawner};

/// Per-app launch states. `Starting` is transient; the rest are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppLaunchState {
    Starting,
    /// The OS accepted the spawn; the child runs unsupervised.
    Started,
    /// The app has no executable path configured.
    SkippedMissingPath,
    /// The configured path did not exist at launch time.
    FileNotFound,
    /// The spawn attempt itself failed.
    LaunchError { message: String },
}

/// Receives launch progress incrementally, one transition at a time.
pub trait LaunchObserver {
    fn app_state(&mut self, app: &str, state: &AppLaunchState);

    /// The post-launch update of the last-used pointer failed. Non-fatal.
    fn pointer_update_failed(&mut self, error: &RegistryError) {
        let _ = error;
    }
}

/// Terminal state of one app after a launch pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOutcome {
    pub app: String,
    pub state: AppLaunchState,
}

/// Environment-level result of a launch pass.
#[derive(Debug, PartialEq, Eq)]
pub enum LaunchSummary {
    /// The environment had no apps; nothing was attempted and the last-used
    /// pointer was left unchanged.
    NoApps,
    /// Every app was attempted, in launch order.
    Completed { outcomes: Vec<AppOutcome> },
}

pub struct Launcher<'a, S: Spawner> {
    registry: &'a EnvironmentRegistry,
    spawner: S,
}

impl<'a, S: Spawner> Launcher<'a, S> {
    pub fn new(registry: &'a EnvironmentRegistry, spawner: S) -> Self {
        Self { registry, spawner }
    }

    /// Launch every app of the environment sequentially.
    ///
    /// App *n+1* is not attempted until app *n*'s spawn attempt has returned.
    /// After the pass the last-used pointer is persisted regardless of
    /// per-app outcomes; a pointer-persist failure is reported to the
    /// observer, never raised.
    pub fn launch(
        &self,
        environment: &Environment,
        observer: &mut dyn LaunchObserver,
    ) -> LaunchSummary {
        if environment.apps.is_empty() {
            return LaunchSummary::NoApps;
        }

        let apps = environment.sorted_apps();
        let mut outcomes = Vec::with_capacity(apps.len());
        for app in &apps {
            observer.app_state(&app.name, &AppLaunchState::Starting);
            let state = self.attempt(&app.route);
            observer.app_state(&app.name, &state);
            outcomes.push(AppOutcome {
                app: app.name.clone(),
                state,
            });
        }

        if let Err(err) = self.registry.set_last_used(&environment.name) {
            warn!(environment = %environment.name, reason = %err, "could not persist last-used environment");
            observer.pointer_update_failed(&err);
        }

        LaunchSummary::Completed { outcomes }
    }

    fn attempt(&self, route: &str) -> AppLaunchState {
        if route.trim().is_empty() {
            return AppLaunchState::SkippedMissingPath;
        }
        let path = Path::new(route);
        if !path.exists() {
            return AppLaunchState::FileNotFound;
        }
        match self.spawner.spawn_detached(path) {
            Ok(()) => AppLaunchState::Started,
            Err(err) => AppLaunchState::LaunchError {
                message: err.to_string(),
            },
        }
    }
}
