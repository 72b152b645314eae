//! railmux: open a nine-window tmux workspace for a Rails project.
//! Resolves the session name and tool commands, then hands the plan to a
//! session launcher and exits with its status.

use clap::Parser;
use railmux_core::{EnvLookup, LaunchEnv};
use railmux_tmux::{DelegateLauncher, ProcessEnv, SystemLocator, TmuxExecutor, TmuxLauncher};

mod cli;
mod run;

fn init_logging() {
    let filter = std::env::var("RAILMUX_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    init_logging();

    let locator = SystemLocator::from_process()?;
    let env = LaunchEnv::from_lookup(&ProcessEnv);
    let host = run::Host {
        cwd: locator.root(),
        env: &env,
        locator: &locator,
    };
    let opts = run::RunOptions {
        mode: args.mode(),
        strict: args.strict,
    };
    tracing::debug!(backend = ?args.backend, cwd = %host.cwd.display(), "railmux starting");

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    let session = args.session.as_deref();

    let exit_code = match args.backend {
        cli::Backend::Delegate => {
            let launcher = DelegateLauncher::new(&args.launcher);
            run::run(session, &host, &launcher, opts, &mut stdout, &mut stderr)?
        }
        cli::Backend::Tmux => {
            let nested = ProcessEnv.get("TMUX").is_some_and(|v| !v.is_empty());
            let mut executor = TmuxExecutor::new(&args.tmux_bin);
            if let Some(ref socket) = args.tmux_socket {
                executor = executor.with_socket_name(socket);
            }
            let launcher = TmuxLauncher::new(executor, &args.tmux_bin).nested(nested);
            run::run(session, &host, &launcher, opts, &mut stdout, &mut stderr)?
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
