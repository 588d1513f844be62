//! Persisted data model: applications, environments, and the store itself.

use serde::{Deserialize, Serialize};

/// A single executable application inside an environment.
///
/// Identity within an environment is by `name`, case-insensitive; lookups
/// take the first match. `launch_order` carries no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    #[serde(alias = "Name", default)]
    pub name: String,
    /// Path to the executable file.
    #[serde(alias = "Route", default)]
    pub route: String,
    #[serde(rename = "launchOrder", alias = "LaunchOrder", default)]
    pub launch_order: i32,
}

/// A named, ordered collection of applications launched together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(alias = "Name", default)]
    pub name: String,
    /// Stored in insertion order; presentation order is by `launch_order`.
    #[serde(alias = "Apps", default)]
    pub apps: Vec<Application>,
}

impl Environment {
    /// Apps sorted by launch order ascending, insertion order on ties.
    pub fn sorted_apps(&self) -> Vec<Application> {
        let mut apps = self.apps.clone();
        apps.sort_by_key(|app| app.launch_order);
        apps
    }

    /// First app whose name matches, case-insensitive.
    pub fn app(&self, name: &str) -> Option<&Application> {
        self.apps
            .iter()
            .find(|app| app.name.eq_ignore_ascii_case(name))
    }

    /// Launch order assigned to an app added without an explicit one:
    /// `max(existing orders, 0) + 1`, so new apps sort last by default.
    pub fn next_launch_order(&self) -> i32 {
        self.apps
            .iter()
            .map(|app| app.launch_order)
            .fold(0, i32::max)
            .saturating_add(1)
    }
}

/// Root of the persisted JSON file.
///
/// Field aliases accept the PascalCase spellings older files and hand edits
/// use; unknown fields are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    #[serde(rename = "environment", alias = "Environment", alias = "environments", default)]
    pub environments: Vec<Environment>,
    /// Name of the most recently launched environment, if any. Always
    /// references an existing environment; cleared when that one is deleted.
    #[serde(rename = "lastUsedEnvironment", alias = "LastUsedEnvironment", default)]
    pub last_used_environment: Option<String>,
    #[serde(alias = "Tutorial", default = "default_tutorial")]
    pub tutorial: bool,
    #[serde(rename = "zenMode", alias = "ZenMode", default)]
    pub zen_mode: bool,
}

fn default_tutorial() -> bool {
    true
}

impl Default for Store {
    fn default() -> Self {
        Self {
            environments: Vec::new(),
            last_used_environment: None,
            tutorial: true,
            zen_mode: false,
        }
    }
}

impl Store {
    /// First environment whose name matches, case-insensitive.
    pub fn environment(&self, name: &str) -> Option<&Environment> {
        self.environments
            .iter()
            .find(|env| env.name.eq_ignore_ascii_case(name))
    }

    /// Mutable variant of [`Store::environment`].
    pub fn environment_mut(&mut self, name: &str) -> Option<&mut Environment> {
        self.environments
            .iter_mut()
            .find(|env| env.name.eq_ignore_ascii_case(name))
    }
}
