//! railmux-core: launch-plan resolution for Rails workspaces.
//! Pure logic behind three seams (environment lookup, executable
//! location, session launcher). No process spawning lives here.

pub mod env;
pub mod error;
pub mod launcher;
pub mod locator;
pub mod resolver;
pub mod types;

pub use env::{EnvLookup, LaunchEnv, MapEnv};
pub use error::CoreError;
pub use launcher::{LaunchStatus, Launcher};
pub use locator::{Locator, StaticLocator};
pub use resolver::{resolve, resolve_commands, session_name};
pub use types::{INTERACTIVE_SHELL, LaunchPlan, ResolvedCommands, Tool, WINDOW_LABELS, WindowSpec};
