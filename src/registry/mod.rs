//! CRUD over environments and their ordered app lists.
//!
//! Every operation runs as a load-mutate-save transaction against the store
//! file, so edits made outside the process between operations are picked up.
//! Environment names are a case-insensitive unique key; app lookups within an
//! environment are case-insensitive first-match.

use std::path::Path;

use crate::{
    store::{Application, ConfigStore, Environment, Store},
    support::errors::RegistryError,
};

#[derive(Debug, Clone)]
pub struct EnvironmentRegistry {
    store: ConfigStore,
}

impl EnvironmentRegistry {
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Read-only snapshot with each environment's apps pre-sorted by launch
    /// order (insertion order on ties).
    pub fn list_environments(&self) -> Vec<Environment> {
        self.store
            .load()
            .environments
            .into_iter()
            .map(|env| Environment {
                apps: env.sorted_apps(),
                ..env
            })
            .collect()
    }

    /// Resolve one environment by name, apps in storage order.
    pub fn environment(&self, name: &str) -> Result<Environment, RegistryError> {
        self.store
            .load()
            .environment(name)
            .cloned()
            .ok_or_else(|| RegistryError::EnvironmentNotFound { name: name.into() })
    }

    pub fn last_used(&self) -> Option<String> {
        self.store.load().last_used_environment
    }

    pub fn preferences(&self) -> (bool, bool) {
        let store = self.store.load();
        (store.tutorial, store.zen_mode)
    }

    /// Append a new environment. The name must be non-empty and must not
    /// collide (case-insensitively) with an existing environment.
    pub fn add_environment(
        &self,
        name: &str,
        apps: Vec<Application>,
    ) -> Result<(), RegistryError> {
        let name = validated_name(name, "environment name")?;
        let mut store = self.store.load();
        ensure_name_free(&store, &name)?;

        store.environments.push(Environment { name, apps });
        self.store.save(&store)?;
        Ok(())
    }

    /// Rename an environment; the last-used pointer follows the rename.
    pub fn rename_environment(&self, name: &str, new_name: &str) -> Result<(), RegistryError> {
        let new_name = validated_name(new_name, "environment name")?;
        let mut store = self.store.load();

        let current = store
            .environment(name)
            .ok_or_else(|| RegistryError::EnvironmentNotFound { name: name.into() })?
            .name
            .clone();
        if !current.eq_ignore_ascii_case(&new_name) {
            ensure_name_free(&store, &new_name)?;
        }

        if pointer_matches(&store, &current) {
            store.last_used_environment = Some(new_name.clone());
        }
        if let Some(env) = store.environment_mut(&current) {
            env.name = new_name;
        }
        self.store.save(&store)?;
        Ok(())
    }

    /// Delete an environment, clearing the last-used pointer when it
    /// referenced the deleted one.
    pub fn delete_environment(&self, name: &str) -> Result<(), RegistryError> {
        let mut store = self.store.load();
        let index = store
            .environments
            .iter()
            .position(|env| env.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| RegistryError::EnvironmentNotFound { name: name.into() })?;

        let removed = store.environments.remove(index);
        if pointer_matches(&store, &removed.name) {
            store.last_used_environment = None;
        }
        self.store.save(&store)?;
        Ok(())
    }

    /// Add an app to an environment. With no explicit launch order the app is
    /// assigned `max(existing orders, 0) + 1` so it sorts last.
    pub fn add_app(
        &self,
        env_name: &str,
        app_name: &str,
        route: &str,
        launch_order: Option<i32>,
    ) -> Result<Application, RegistryError> {
        let app_name = validated_name(app_name, "app name")?;
        validate_route(route)?;

        let mut store = self.store.load();
        let env = store
            .environment_mut(env_name)
            .ok_or_else(|| RegistryError::EnvironmentNotFound {
                name: env_name.into(),
            })?;

        let app = Application {
            name: app_name,
            route: route.into(),
            launch_order: launch_order.unwrap_or_else(|| env.next_launch_order()),
        };
        env.apps.push(app.clone());
        self.store.save(&store)?;
        Ok(app)
    }

    /// Replace the first app matching `old_app_name`, keeping its position.
    pub fn update_app(
        &self,
        env_name: &str,
        old_app_name: &str,
        updated: Application,
    ) -> Result<(), RegistryError> {
        let new_name = validated_name(&updated.name, "app name")?;
        validate_route(&updated.route)?;

        let mut store = self.store.load();
        let env = store
            .environment_mut(env_name)
            .ok_or_else(|| RegistryError::EnvironmentNotFound {
                name: env_name.into(),
            })?;
        let app = env
            .apps
            .iter_mut()
            .find(|app| app.name.eq_ignore_ascii_case(old_app_name))
            .ok_or_else(|| RegistryError::AppNotFound {
                environment: env_name.into(),
                app: old_app_name.into(),
            })?;

        app.name = new_name;
        app.route = updated.route;
        app.launch_order = updated.launch_order;
        self.store.save(&store)?;
        Ok(())
    }

    /// Remove the first app matching `app_name` from an environment.
    pub fn remove_app(&self, env_name: &str, app_name: &str) -> Result<(), RegistryError> {
        let mut store = self.store.load();
        let env = store
            .environment_mut(env_name)
            .ok_or_else(|| RegistryError::EnvironmentNotFound {
                name: env_name.into(),
            })?;
        let index = env
            .apps
            .iter()
            .position(|app| app.name.eq_ignore_ascii_case(app_name))
            .ok_or_else(|| RegistryError::AppNotFound {
                environment: env_name.into(),
                app: app_name.into(),
            })?;

        env.apps.remove(index);
        self.store.save(&store)?;
        Ok(())
    }

    /// Point the last-used marker at an existing environment. Idempotent.
    pub fn set_last_used(&self, name: &str) -> Result<(), RegistryError> {
        let mut store = self.store.load();
        let canonical = store
            .environment(name)
            .ok_or_else(|| RegistryError::EnvironmentNotFound { name: name.into() })?
            .name
            .clone();

        store.last_used_environment = Some(canonical);
        self.store.save(&store)?;
        Ok(())
    }

    pub fn set_preferences(&self, tutorial: bool, zen_mode: bool) -> Result<(), RegistryError> {
        let mut store = self.store.load();
        store.tutorial = tutorial;
        store.zen_mode = zen_mode;
        self.store.save(&store)?;
        Ok(())
    }
}

fn validated_name(name: &str, field: &'static str) -> Result<String, RegistryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RegistryError::invalid(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn ensure_name_free(store: &Store, name: &str) -> Result<(), RegistryError> {
    if store.environment(name).is_some() {
        return Err(RegistryError::invalid(
            "environment name",
            format!("an environment named `{name}` already exists"),
        ));
    }
    Ok(())
}

fn pointer_matches(store: &Store, name: &str) -> bool {
    store
        .last_used_environment
        .as_deref()
        .is_some_and(|last| last.eq_ignore_ascii_case(name))
}

/// Best-effort check that the route names an existing file. The path can
/// still go stale before launch; the orchestrator re-checks at launch time.
fn validate_route(route: &str) -> Result<(), RegistryError> {
    if route.trim().is_empty() {
        return Err(RegistryError::invalid("route", "must not be empty"));
    }
    if !Path::new(route).is_file() {
        return Err(RegistryError::invalid(
            "route",
            format!("file `{route}` does not exist"),
        ));
    }
    Ok(())
}
