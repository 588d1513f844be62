use appdeck::{
    launcher::{AppLaunchState, DetachedSpawner, LaunchObserver, LaunchSummary, Launcher},
    support::errors::RegistryError,
};
use tempfile::tempdir;

use crate::common::registry_in;

#[derive(Default)]
struct CollectingObserver {
    transitions: Vec<(String, AppLaunchState)>,
}

impl LaunchObserver for CollectingObserver {
    fn app_state(&mut self, app: &str, state: &AppLaunchState) {
        self.transitions.push((app.into(), state.clone()));
    }

    fn pointer_update_failed(&mut self, _error: &RegistryError) {}
}

#[cfg(unix)]
#[test]
fn launch_starts_real_app_and_reports_missing_one() {
    use appdeck::store::Application;

    let temp = tempdir().expect("can create temp directory");
    let registry = registry_in(&temp);
    let missing = temp.path().join("missing").display().to_string();

    registry
        .add_environment(
            "dev",
            vec![
                Application {
                    name: "shell".into(),
                    route: "/bin/sh".into(),
                    launch_order: 1,
                },
                Application {
                    name: "ghost".into(),
                    route: missing,
                    launch_order: 2,
                },
            ],
        )
        .expect("add environment should succeed");

    let env = registry.environment("dev").expect("environment should exist");
    let launcher = Launcher::new(&registry, DetachedSpawner);
    let mut observer = CollectingObserver::default();

    let summary = launcher.launch(&env, &mut observer);

    let LaunchSummary::Completed { outcomes } = summary else {
        panic!("expected Completed summary");
    };
    let states: Vec<_> = outcomes.iter().map(|o| o.state.clone()).collect();
    assert_eq!(
        states,
        vec![AppLaunchState::Started, AppLaunchState::FileNotFound]
    );

    // The pointer updates even though one app failed, and the update is
    // durable: a fresh registry instance sees it.
    assert_eq!(registry_in(&temp).last_used(), Some("dev".into()));
}

#[test]
fn launching_an_empty_environment_reports_no_apps() {
    let temp = tempdir().expect("can create temp directory");
    let registry = registry_in(&temp);

    registry
        .add_environment("bare", Vec::new())
        .expect("add environment should succeed");
    registry
        .add_environment("other", Vec::new())
        .expect("add environment should succeed");
    registry
        .set_last_used("other")
        .expect("set_last_used should succeed");

    let env = registry.environment("bare").expect("environment should exist");
    let launcher = Launcher::new(&registry, DetachedSpawner);
    let mut observer = CollectingObserver::default();

    let summary = launcher.launch(&env, &mut observer);

    assert_eq!(summary, LaunchSummary::NoApps);
    assert!(observer.transitions.is_empty());
    assert_eq!(
        registry_in(&temp).last_used(),
        Some("other".into()),
        "NoApps must not move the last-used pointer"
    );
}
