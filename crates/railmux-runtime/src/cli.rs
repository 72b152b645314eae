//! CLI definition using clap derive.

use clap::{Parser, ValueEnum};
use railmux_tmux::DEFAULT_LAUNCHER;

use crate::run::Mode;

#[derive(Parser, Debug)]
#[command(name = "railmux", version, about = "Open a tmux workspace for a Rails project")]
pub struct Cli {
    /// Session name (default: basename of the current directory)
    pub session: Option<String>,

    /// Session helper invoked as `PROGRAM SESSION LABEL CMD ...`
    #[arg(long, env = "RAILMUX_LAUNCHER", default_value = DEFAULT_LAUNCHER)]
    pub launcher: String,

    /// How the session is created
    #[arg(long, value_enum, env = "RAILMUX_BACKEND", default_value_t = Backend::Delegate)]
    pub backend: Backend,

    /// tmux binary for `--backend tmux`
    #[arg(long, env = "RAILMUX_TMUX", default_value = "tmux")]
    pub tmux_bin: String,

    /// tmux server socket name (`tmux -L`) for `--backend tmux`
    #[arg(long, env = "RAILMUX_TMUX_SOCKET")]
    pub tmux_socket: Option<String>,

    /// Abort if the launcher is not on PATH instead of trying anyway
    #[arg(long)]
    pub strict: bool,

    /// Print the launcher arguments, one per line, and exit
    #[arg(long, conflicts_with = "json")]
    pub dry_run: bool,

    /// Print the resolved plan as JSON and exit
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Hand the plan to the `--launcher` program
    Delegate,
    /// Drive tmux directly
    Tmux,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.json {
            Mode::Json
        } else if self.dry_run {
            Mode::DryRun
        } else {
            Mode::Launch
        }
    }
}
