//! railmux-tmux: host IO boundary.
//! Provides the process environment, filesystem/PATH probes, the tmux
//! subprocess runner and the two session launchers. No resolution
//! logic lives here.

pub mod delegate;
pub mod error;
pub mod executor;
pub mod probe;
pub mod session;

pub use delegate::{DEFAULT_LAUNCHER, DelegateLauncher};
pub use error::TmuxError;
pub use executor::{TmuxCommandRunner, TmuxExecutor};
pub use probe::{ProcessEnv, SystemLocator};
pub use session::{TmuxLauncher, tmux_session_name};
