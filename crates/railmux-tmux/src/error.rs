//! Error types for the launch backends.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("tmux command failed: {0}")]
    CommandFailed(String),

    #[error("{program}: command not found")]
    ProgramNotFound { program: String },

    #[error("unexpected tmux output for {command}: {output:?}")]
    UnexpectedOutput { command: String, output: String },

    #[error("tmux io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TmuxError {
    /// Map a spawn failure, turning `NotFound` into [`TmuxError::ProgramNotFound`].
    pub fn from_spawn(program: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::ProgramNotFound {
                program: program.to_string(),
            }
        } else {
            Self::Io(err)
        }
    }
}
