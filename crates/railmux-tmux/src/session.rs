//! Launcher that builds the session with tmux directly.

use railmux_core::{LaunchPlan, LaunchStatus, Launcher, WindowSpec};

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

/// Format for `-P -F`: print the id of the window just created.
const WINDOW_ID_FORMAT: &str = "#{window_id}";

/// Normalise a session name the way tmux does on creation.
/// tmux rewrites `.` and `:` to `_`; targeting must use the rewritten form.
pub fn tmux_session_name(name: &str) -> String {
    name.replace(['.', ':'], "_")
}

pub struct TmuxLauncher<R> {
    runner: R,
    program: String,
    nested: bool,
}

impl<R: TmuxCommandRunner> TmuxLauncher<R> {
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
            nested: false,
        }
    }

    /// Running inside a tmux client: switch instead of attaching.
    #[must_use]
    pub fn nested(mut self, nested: bool) -> Self {
        self.nested = nested;
        self
    }

    fn has_session(&self, exact: &str) -> Result<bool, TmuxError> {
        match self.runner.run(&["has-session", "-t", exact]) {
            Ok(_) => Ok(true),
            Err(TmuxError::CommandFailed(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn create(&self, name: &str, windows: &[WindowSpec]) -> Result<(), TmuxError> {
        let mut iter = windows.iter();
        let Some(first) = iter.next() else {
            self.runner.run(&["new-session", "-d", "-s", name])?;
            return Ok(());
        };

        let first_id = self.new_window_id(
            "new-session",
            &[
                "new-session", "-d", "-s", name, "-n", &first.label, "-P", "-F", WINDOW_ID_FORMAT,
            ],
        )?;
        self.send_command(&first_id, first)?;

        let target = format!("={name}:");
        for window in iter {
            let id = self.new_window_id(
                "new-window",
                &[
                    "new-window", "-d", "-t", &target, "-n", &window.label, "-P", "-F",
                    WINDOW_ID_FORMAT,
                ],
            )?;
            self.send_command(&id, window)?;
        }

        self.runner.run(&["select-window", "-t", &first_id])?;
        Ok(())
    }

    fn new_window_id(&self, command: &str, args: &[&str]) -> Result<String, TmuxError> {
        let output = self.runner.run(args)?;
        let id = output.trim();
        if !id.starts_with('@') {
            return Err(TmuxError::UnexpectedOutput {
                command: command.to_string(),
                output,
            });
        }
        Ok(id.to_string())
    }

    /// Type the command into the window's shell so the shell outlives it.
    fn send_command(&self, window_id: &str, window: &WindowSpec) -> Result<(), TmuxError> {
        if window.is_interactive() {
            return Ok(());
        }
        self.runner
            .run(&["send-keys", "-t", window_id, "-l", "--", &window.command])?;
        self.runner.run(&["send-keys", "-t", window_id, "Enter"])?;
        Ok(())
    }
}

impl<R: TmuxCommandRunner> Launcher for TmuxLauncher<R> {
    type Error = TmuxError;

    fn program(&self) -> &str {
        &self.program
    }

    fn launch(&self, plan: &LaunchPlan) -> Result<LaunchStatus, TmuxError> {
        let name = tmux_session_name(&plan.session);
        let exact = format!("={name}");

        if self.has_session(&exact)? {
            tracing::info!(session = %name, "session exists; attaching");
        } else {
            tracing::info!(session = %name, windows = plan.windows.len(), "creating session");
            if let Err(e) = self.create(&name, &plan.windows) {
                // A half-built session would be reattached as-is next time.
                if let Err(kill) = self.runner.run(&["kill-session", "-t", &exact]) {
                    tracing::debug!(session = %name, "kill-session after failed create: {kill}");
                }
                return Err(e);
            }
        }

        let verb = if self.nested {
            "switch-client"
        } else {
            "attach-session"
        };
        let code = self.runner.run_attached(&[verb, "-t", &exact])?;
        Ok(LaunchStatus::new(code))
    }
}
