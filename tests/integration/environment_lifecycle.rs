use appdeck::{store::Application, support::errors::RegistryError};
use tempfile::tempdir;

use crate::common::{fake_executable, registry_in};

#[test]
fn full_environment_lifecycle_round_trips_through_the_file() {
    let temp = tempdir().expect("can create temp directory");
    let registry = registry_in(&temp);
    let editor = fake_executable(&temp, "editor");
    let terminal = fake_executable(&temp, "terminal");

    registry
        .add_environment("dev", Vec::new())
        .expect("add environment should succeed");
    registry
        .add_app("dev", "editor", editor.to_str().unwrap(), Some(3))
        .expect("add app should succeed");
    registry
        .add_app("dev", "terminal", terminal.to_str().unwrap(), Some(1))
        .expect("add app should succeed");

    // A second registry over the same path sees everything: state lives in
    // the file, not in the instance.
    let second = registry_in(&temp);
    let listed = second.list_environments();
    assert_eq!(listed.len(), 1);
    let names: Vec<_> = listed[0].apps.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["terminal", "editor"], "apps listed in launch order");

    // No explicit order: the new app sorts last via max + 1.
    let added = second
        .add_app("dev", "browser", editor.to_str().unwrap(), None)
        .expect("add app should succeed");
    assert_eq!(added.launch_order, 4);

    second
        .rename_environment("DEV", "daily")
        .expect("rename should succeed");
    assert!(matches!(
        registry.environment("dev"),
        Err(RegistryError::EnvironmentNotFound { .. })
    ));
    assert!(registry.environment("daily").is_ok());

    registry
        .set_last_used("daily")
        .expect("set_last_used should succeed");
    registry
        .delete_environment("daily")
        .expect("delete should succeed");
    assert_eq!(registry.last_used(), None, "pointer cleared with its environment");
    assert!(registry.list_environments().is_empty());
}

#[test]
fn app_updates_are_visible_across_instances() {
    let temp = tempdir().expect("can create temp directory");
    let registry = registry_in(&temp);
    let tool = fake_executable(&temp, "tool");
    let replacement = fake_executable(&temp, "replacement");

    registry
        .add_environment("work", Vec::new())
        .expect("add environment should succeed");
    registry
        .add_app("work", "old", tool.to_str().unwrap(), None)
        .expect("add app should succeed");

    registry
        .update_app(
            "work",
            "OLD",
            Application {
                name: "new".into(),
                route: replacement.to_str().unwrap().into(),
                launch_order: 7,
            },
        )
        .expect("update should succeed");

    let env = registry_in(&temp)
        .environment("work")
        .expect("environment should exist");
    assert_eq!(env.apps.len(), 1);
    assert_eq!(env.apps[0].name, "new");
    assert_eq!(env.apps[0].launch_order, 7);

    registry
        .remove_app("work", "new")
        .expect("remove should succeed");
    let env = registry_in(&temp)
        .environment("work")
        .expect("environment should exist");
    assert!(env.apps.is_empty());
}
