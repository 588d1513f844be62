use std::fs;

use appdeck::store::{ConfigStore, Store};
use tempfile::tempdir;

use crate::common::{config_path_in, registry_in};

#[test]
fn corrupt_store_degrades_to_empty_and_stays_untouched_on_disk() {
    let temp = tempdir().expect("can create temp directory");
    let path = config_path_in(&temp);
    fs::create_dir_all(path.parent().unwrap()).expect("can create config dir");
    let garbage = b"[this is not json";
    fs::write(&path, garbage).expect("can write corrupt file");

    let registry = registry_in(&temp);
    assert!(registry.list_environments().is_empty());
    assert_eq!(registry.last_used(), None);

    let on_disk = fs::read(&path).expect("file should still exist");
    assert_eq!(on_disk, garbage, "bad file must stay byte-for-byte intact for manual recovery");
}

#[test]
fn hand_written_pascal_case_file_loads_and_resaves_canonically() {
    let temp = tempdir().expect("can create temp directory");
    let path = config_path_in(&temp);
    fs::create_dir_all(path.parent().unwrap()).expect("can create config dir");
    fs::write(
        &path,
        r#"{
            "Environment": [
                {
                    "Name": "Legacy",
                    "Apps": [
                        { "Name": "editor", "Route": "/opt/editor", "LaunchOrder": 2 },
                        { "Name": "terminal", "Route": "/opt/terminal", "LaunchOrder": 1 }
                    ]
                }
            ],
            "LastUsedEnvironment": "Legacy"
        }"#,
    )
    .expect("can write hand-edited file");

    let registry = registry_in(&temp);
    let listed = registry.list_environments();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Legacy");
    let names: Vec<_> = listed[0].apps.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["terminal", "editor"]);
    assert_eq!(registry.last_used(), Some("Legacy".into()));

    // Any mutation rewrites the file with the documented camelCase keys.
    registry
        .set_preferences(false, false)
        .expect("set_preferences should succeed");
    let text = fs::read_to_string(&path).expect("can read resaved file");
    assert!(text.contains("\"lastUsedEnvironment\""));
    assert!(text.contains("\"launchOrder\""));
}

#[test]
fn missing_file_is_created_as_an_empty_store() {
    let temp = tempdir().expect("can create temp directory");
    let path = config_path_in(&temp);
    let store = ConfigStore::new(path.clone());

    assert_eq!(store.load(), Store::default());
    assert!(path.exists(), "first load should persist the empty store");

    let text = fs::read_to_string(&path).expect("can read created file");
    let reparsed: Store = serde_json::from_str(&text).expect("created file should be valid JSON");
    assert_eq!(reparsed, Store::default());
}
