use std::fmt;
use std::io;

use nix::errno::Errno;
use thiserror::Error;

/// Prefix of every diagnostic line the shell writes to stderr.
pub const SHELL_NAME: &str = "pipesh";

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("{0}: missing argument")]
    MissingArgument(String),
    #[error("cd: cannot change directory to {path}")]
    ChangeDir {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot open {path}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("exec failed: {name}")]
    ExecFailed {
        name: String,
        #[source]
        source: Errno,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{op} failed: {source}")]
    Sys {
        op: &'static str,
        #[source]
        source: Errno,
    },
}

impl ExecError {
    pub fn sys(op: &'static str) -> impl FnOnce(Errno) -> ExecError {
        move |source| ExecError::Sys { op, source }
    }

    /// Exit status a unit reports when it fails with this error.
    pub fn status(&self) -> i32 {
        match self {
            ExecError::ExecFailed { source: Errno::ENOENT, .. } => 127,
            ExecError::ExecFailed { .. } => 126,
            _ => 1,
        }
    }
}

/// Writes a one-line diagnostic to stderr.
pub fn report<E: fmt::Display + ?Sized>(err: &E) {
    eprintln!("{}: {}", SHELL_NAME, err);
}
