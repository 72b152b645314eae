//! Environment lookup seam and the launch configuration read from it.

use std::collections::HashMap;

use crate::types::Tool;

pub const EDITOR: &str = "EDITOR";
pub const BUNDLE_EXEC: &str = "BUNDLE_EXEC";
pub const RAILS_ENV: &str = "RAILS_ENV";

/// Read access to named environment variables.
///
/// `Some("")` (set but empty) and `None` (unset) are distinct: an empty
/// override is still an override.
pub trait EnvLookup {
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// In-memory environment, used by tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvLookup for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Launch-relevant environment, captured once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchEnv {
    pub editor: Option<String>,
    pub bundle_exec: Option<String>,
    pub rails: Option<String>,
    pub rake: Option<String>,
    pub rails_env: Option<String>,
}

impl LaunchEnv {
    pub fn from_lookup(env: &impl EnvLookup) -> Self {
        Self {
            editor: env.get(EDITOR),
            bundle_exec: env.get(BUNDLE_EXEC),
            rails: env.get(Tool::Rails.env_key()),
            rake: env.get(Tool::Rake.env_key()),
            rails_env: env.get(RAILS_ENV),
        }
    }

    pub fn tool_override(&self, tool: Tool) -> Option<&str> {
        match tool {
            Tool::Rails => self.rails.as_deref(),
            Tool::Rake => self.rake.as_deref(),
        }
    }
}
