//! Executable location seam.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Answers "can this be run?" for project-local paths and for bare
/// command names looked up on `PATH`.
pub trait Locator {
    /// `path` is relative to the project root unless absolute.
    fn is_executable_path(&self, path: &Path) -> bool;

    fn is_on_search_path(&self, name: &str) -> bool;
}

impl<T: Locator + ?Sized> Locator for &T {
    fn is_executable_path(&self, path: &Path) -> bool {
        (**self).is_executable_path(path)
    }

    fn is_on_search_path(&self, name: &str) -> bool {
        (**self).is_on_search_path(name)
    }
}

/// Fixed answers, no filesystem access.
#[derive(Debug, Clone, Default)]
pub struct StaticLocator {
    paths: HashSet<PathBuf>,
    commands: HashSet<String>,
}

impl StaticLocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_command(mut self, name: impl Into<String>) -> Self {
        self.commands.insert(name.into());
        self
    }
}

impl Locator for StaticLocator {
    fn is_executable_path(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    fn is_on_search_path(&self, name: &str) -> bool {
        self.commands.contains(name)
    }
}
