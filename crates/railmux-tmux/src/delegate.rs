//! Launcher that hands the flattened plan to an external session helper.
//!
//! Contract with the helper: `program SESSION LABEL_1 CMD_1 ... LABEL_9 CMD_9`.
//! The helper owns the terminal; its stdio is inherited and its exit
//! status becomes ours.

use std::process::Command;

use railmux_core::{LaunchPlan, LaunchStatus, Launcher};

use crate::error::TmuxError;
use crate::executor::exit_code;

/// Helper program used when none is configured.
pub const DEFAULT_LAUNCHER: &str = "tmux-windows";

#[derive(Debug, Clone)]
pub struct DelegateLauncher {
    program: String,
}

impl DelegateLauncher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, plan: &LaunchPlan) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(plan.to_args());
        cmd
    }
}

impl Default for DelegateLauncher {
    fn default() -> Self {
        Self::new(DEFAULT_LAUNCHER)
    }
}

impl Launcher for DelegateLauncher {
    type Error = TmuxError;

    fn program(&self) -> &str {
        &self.program
    }

    fn launch(&self, plan: &LaunchPlan) -> Result<LaunchStatus, TmuxError> {
        tracing::info!(program = %self.program, session = %plan.session, "delegating session launch");
        let status = self
            .command(plan)
            .status()
            .map_err(|e| TmuxError::from_spawn(&self.program, e))?;
        let code = exit_code(status);
        if code != 0 {
            tracing::debug!(program = %self.program, code, "launcher exited non-zero");
        }
        Ok(LaunchStatus::new(code))
    }
}
