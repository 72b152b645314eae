//! Launch-plan resolver.
//!
//! Each value is resolved independently, with a fixed precedence:
//!
//! - session: explicit argument > basename of the working directory
//! - editor: `EDITOR` > empty (interactive shell)
//! - bundle prefix: `BUNDLE_EXEC` > `bundle exec` if `bundle` is on PATH > empty
//! - rails / rake: `RAILS` / `RAKE` > `bin/<tool>` binstub > `<prefix> <tool>`
//! - environment: `RAILS_ENV` > `development`

use std::path::Path;

use crate::env::LaunchEnv;
use crate::error::CoreError;
use crate::locator::Locator;
use crate::types::{LaunchPlan, ResolvedCommands, Tool};

/// Bundler helper probed on the search path.
pub const BUNDLER: &str = "bundle";

pub const DEFAULT_BUNDLE_EXEC: &str = "bundle exec";

pub const DEFAULT_RAILS_ENV: &str = "development";

/// Resolve a full plan. `session_arg` is the optional first positional
/// argument; `cwd` supplies the fallback session name.
pub fn resolve(
    session_arg: Option<&str>,
    cwd: &Path,
    env: &LaunchEnv,
    locator: &impl Locator,
) -> Result<LaunchPlan, CoreError> {
    let session = session_name(session_arg, cwd)?;
    let commands = resolve_commands(env, locator);
    tracing::debug!(
        session = %session,
        rails = %commands.rails,
        rake = %commands.rake,
        rails_env = %commands.rails_env,
        "resolved launch plan"
    );
    Ok(LaunchPlan::new(session, commands))
}

/// An empty argument counts as absent.
pub fn session_name(session_arg: Option<&str>, cwd: &Path) -> Result<String, CoreError> {
    if let Some(name) = session_arg.filter(|s| !s.is_empty()) {
        return Ok(name.to_string());
    }
    cwd.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| CoreError::NoSessionName(cwd.to_path_buf()))
}

pub fn resolve_commands(env: &LaunchEnv, locator: &impl Locator) -> ResolvedCommands {
    let bundle_exec = bundle_exec_prefix(env, locator);
    let rails = tool_command(Tool::Rails, env, &bundle_exec, locator);
    let rake = tool_command(Tool::Rake, env, &bundle_exec, locator);
    ResolvedCommands {
        editor: env.editor.clone().unwrap_or_default(),
        bundle_exec,
        rails,
        rake,
        rails_env: env
            .rails_env
            .clone()
            .unwrap_or_else(|| DEFAULT_RAILS_ENV.to_string()),
    }
}

fn bundle_exec_prefix(env: &LaunchEnv, locator: &impl Locator) -> String {
    if let Some(prefix) = &env.bundle_exec {
        return prefix.clone();
    }
    if locator.is_on_search_path(BUNDLER) {
        DEFAULT_BUNDLE_EXEC.to_string()
    } else {
        tracing::debug!("{BUNDLER} not found on PATH; running tools without a prefix");
        String::new()
    }
}

fn tool_command(tool: Tool, env: &LaunchEnv, prefix: &str, locator: &impl Locator) -> String {
    if let Some(cmd) = env.tool_override(tool) {
        return cmd.to_string();
    }
    let binstub = tool.binstub();
    if locator.is_executable_path(Path::new(binstub)) {
        return binstub.to_string();
    }
    let prefix = prefix.trim();
    if prefix.is_empty() {
        tool.as_str().to_string()
    } else {
        format!("{prefix} {tool}")
    }
}
