//! Best-effort scan for installed applications.
//!
//! Suggestions only: the registry never depends on these results, and the
//! user can always type a path by hand. The scan covers a fixed list of
//! conventional install directories, one level of immediate subdirectories,
//! and the directories on `PATH`. Each directory read is independently
//! fault-tolerant; an unreadable directory is skipped, not fatal.

use std::{
    collections::BTreeSet,
    env,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

/// A name/path suggestion produced by the scan.
///
/// Ordering is by name, then path, which makes a `BTreeSet` of these both
/// the deduplication and the deterministic sort.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DiscoveredApp {
    pub name: String,
    pub path: PathBuf,
}

/// Scan the conventional install locations of this machine.
pub fn find_installed_apps() -> Vec<DiscoveredApp> {
    scan(&default_roots(), env::var_os("PATH").as_deref())
}

/// Suggestions whose name contains `partial`, case-insensitive.
pub fn suggest(partial: &str) -> Vec<DiscoveredApp> {
    let needle = partial.to_lowercase();
    find_installed_apps()
        .into_iter()
        .filter(|app| app.name.to_lowercase().contains(&needle))
        .collect()
}

/// Scan explicit roots plus an optional `PATH`-style variable. Results are
/// deduplicated by (name, path) and sorted by name ascending regardless of
/// scan order.
pub fn scan(roots: &[PathBuf], search_path: Option<&OsStr>) -> Vec<DiscoveredApp> {
    let mut found = BTreeSet::new();

    for root in roots {
        if !root.is_dir() {
            continue;
        }
        collect_executables(root, &mut found);

        // One level of immediate subdirectories, no deeper.
        match fs::read_dir(root) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.is_dir() {
                        collect_executables(&path, &mut found);
                    }
                }
            }
            Err(err) => {
                debug!(dir = %root.display(), reason = %err, "skipping unreadable root");
            }
        }
    }

    if let Some(search_path) = search_path {
        for dir in env::split_paths(search_path) {
            if dir.is_dir() {
                collect_executables(&dir, &mut found);
            }
        }
    }

    found.into_iter().collect()
}

fn collect_executables(dir: &Path, out: &mut BTreeSet<DiscoveredApp>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(dir = %dir.display(), reason = %err, "skipping unreadable directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || !is_executable(&path) {
            continue;
        }
        let Some(name) = path.file_stem().and_then(OsStr::to_str) else {
            continue;
        };
        if is_valid_app_name(name) {
            out.insert(DiscoveredApp {
                name: name.to_string(),
                path,
            });
        }
    }
}

/// Filters out obvious non-applications: system component names and
/// temp/cache leftovers.
fn is_valid_app_name(name: &str) -> bool {
    !name.starts_with("Microsoft.")
        && !name.starts_with("Windows")
        && !name.eq_ignore_ascii_case("cmd")
        && !name.ends_with(".tmp")
        && !name.ends_with(".cache")
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("exe"))
}

#[cfg(not(windows))]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(windows)]
fn default_roots() -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = ["ProgramFiles", "ProgramFiles(x86)"]
        .iter()
        .filter_map(|var| env::var_os(var).map(PathBuf::from))
        .collect();
    if let Some(local) = dirs::data_local_dir() {
        roots.push(local.join("Programs"));
        roots.push(local);
    }
    if let Some(roaming) = dirs::data_dir() {
        roots.push(roaming);
    }
    roots
}

#[cfg(not(windows))]
fn default_roots() -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from("/usr/local/bin"), PathBuf::from("/opt")];
    if let Some(home) = dirs::home_dir() {
        roots.push(home.join(".local").join("bin"));
        roots.push(home.join("Applications"));
    }
    roots
}
