//! Error types for plan resolution.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("cannot derive a session name from {}; pass one explicitly", .0.display())]
    NoSessionName(PathBuf),
}
