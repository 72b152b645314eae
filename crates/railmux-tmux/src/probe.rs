//! Real-host implementations of the environment and locator seams.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use railmux_core::{EnvLookup, Locator};

/// The current process environment. Non-UTF-8 values are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

/// Filesystem-backed locator rooted at a project directory.
#[derive(Debug, Clone)]
pub struct SystemLocator {
    root: PathBuf,
    search_path: Option<OsString>,
}

impl SystemLocator {
    pub fn new(root: impl Into<PathBuf>, search_path: Option<OsString>) -> Self {
        Self {
            root: root.into(),
            search_path,
        }
    }

    /// Rooted at the current directory, searching the process `PATH`.
    pub fn from_process() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?, std::env::var_os("PATH")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Locator for SystemLocator {
    fn is_executable_path(&self, path: &Path) -> bool {
        is_executable(&self.root.join(path))
    }

    fn is_on_search_path(&self, name: &str) -> bool {
        // A name with a separator is a path, not a PATH lookup.
        if name.contains(std::path::MAIN_SEPARATOR) {
            return self.is_executable_path(Path::new(name));
        }
        let Some(ref search_path) = self.search_path else {
            return false;
        };
        std::env::split_paths(search_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .any(|dir| is_executable(&dir.join(name)))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_file())
        .unwrap_or(false)
}
