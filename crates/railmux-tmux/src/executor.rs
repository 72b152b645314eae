//! TmuxCommandRunner trait and TmuxExecutor (sync subprocess wrapper).
//! The trait is the mock-injection point for the tmux launcher tests.

use std::process::{Command, ExitStatus};

use crate::error::TmuxError;

/// Trait for executing tmux commands. Enables mock injection for testing.
pub trait TmuxCommandRunner {
    /// Run a command with captured output; non-zero exit is an error.
    fn run(&self, args: &[&str]) -> Result<String, TmuxError>;

    /// Run a command attached to the current terminal and return its exit
    /// code. Used for `attach-session`, which owns the terminal until the
    /// client detaches.
    fn run_attached(&self, args: &[&str]) -> Result<i32, TmuxError>;
}

impl<T: TmuxCommandRunner + ?Sized> TmuxCommandRunner for &T {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        (**self).run(args)
    }

    fn run_attached(&self, args: &[&str]) -> Result<i32, TmuxError> {
        (**self).run_attached(args)
    }
}

/// Real tmux executor using `std::process::Command`.
pub struct TmuxExecutor {
    tmux_bin: String,
    socket_name: Option<String>,
}

impl TmuxExecutor {
    pub fn new(tmux_bin: impl Into<String>) -> Self {
        Self {
            tmux_bin: tmux_bin.into(),
            socket_name: None,
        }
    }

    #[must_use]
    pub fn with_socket_name(mut self, name: impl Into<String>) -> Self {
        self.socket_name = Some(name.into());
        self
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.tmux_bin);
        if let Some(ref name) = self.socket_name {
            cmd.args(["-L", name]);
        }
        cmd.args(args);
        tracing::debug!(tmux = %self.tmux_bin, ?args, "tmux");
        cmd
    }
}

impl Default for TmuxExecutor {
    fn default() -> Self {
        Self::new("tmux")
    }
}

impl TmuxCommandRunner for TmuxExecutor {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        let output = self
            .command(args)
            .output()
            .map_err(|e| TmuxError::from_spawn(&self.tmux_bin, e))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TmuxError::CommandFailed(format!(
                "exit code {}: {}",
                exit_code(output.status),
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn run_attached(&self, args: &[&str]) -> Result<i32, TmuxError> {
        let status = self
            .command(args)
            .status()
            .map_err(|e| TmuxError::from_spawn(&self.tmux_bin, e))?;
        Ok(exit_code(status))
    }
}

/// Exit code of a finished child, with signal deaths reported the way a
/// shell does (`128 + signal`).
pub(crate) fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    1
}
