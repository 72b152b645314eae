//! Resolve-then-launch flow, generic over the host seams so it can be
//! driven by in-memory doubles.

use std::io::Write;
use std::path::Path;

use railmux_core::{LaunchEnv, LaunchPlan, Launcher, Locator, resolve};
use railmux_tmux::TmuxError;

/// Shell convention for "command not found".
pub const EXIT_NOT_FOUND: i32 = 127;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Launch,
    DryRun,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub mode: Mode,
    /// Treat a missing launcher as fatal.
    pub strict: bool,
}

/// Where a run reads its inputs from.
pub struct Host<'a, L> {
    pub cwd: &'a Path,
    pub env: &'a LaunchEnv,
    pub locator: &'a L,
}

/// Returns the process exit code.
pub fn run<L, Loc>(
    session: Option<&str>,
    host: &Host<'_, Loc>,
    launcher: &L,
    opts: RunOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<i32>
where
    L: Launcher<Error = TmuxError>,
    Loc: Locator,
{
    if opts.mode == Mode::Launch {
        let program = launcher.program();
        if !host.locator.is_on_search_path(program) {
            if opts.strict {
                writeln!(err, "railmux: {program} not found on PATH")?;
                return Ok(EXIT_NOT_FOUND);
            }
            writeln!(out, "railmux: {program} not found on PATH; trying anyway")?;
        }
    }

    let plan = resolve(session, host.cwd, host.env, host.locator)?;

    match opts.mode {
        Mode::DryRun => {
            print_args(&plan, out)?;
            Ok(0)
        }
        Mode::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&plan)?)?;
            Ok(0)
        }
        Mode::Launch => match launcher.launch(&plan) {
            Ok(status) => Ok(status.code),
            Err(e @ TmuxError::ProgramNotFound { .. }) => {
                writeln!(err, "railmux: {e}")?;
                Ok(EXIT_NOT_FOUND)
            }
            Err(e) => Err(e.into()),
        },
    }
}

fn print_args(plan: &LaunchPlan, out: &mut impl Write) -> std::io::Result<()> {
    for arg in plan.to_args() {
        writeln!(out, "{arg}")?;
    }
    Ok(())
}
