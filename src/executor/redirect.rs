use std::fs::{File, OpenOptions};
use std::os::fd::AsRawFd;

use tracing::debug;

use super::process::{self, STDIN, STDOUT};
use crate::ast::AstNode;
use crate::error::ExecError;
use crate::executor::{ExecOutcome, ExecStatus, Executor};

pub struct RedirectHandler;

impl RedirectHandler {
    /// Opens both files in this process, then runs `node` in a child whose
    /// stdin/stdout are the opened files. If either open fails nothing is
    /// spawned.
    pub fn handle_redirect(
        node: &AstNode,
        input: Option<&str>,
        output: Option<&str>,
        executor: &mut dyn Executor,
    ) -> ExecStatus {
        if input.is_none() && output.is_none() {
            return executor.exec(node);
        }

        let stdin_file = input.map(open_input).transpose()?;
        let stdout_file = output.map(open_output).transpose()?;
        debug!(?input, ?output, "redirecting");

        // The closure owns the files: the child closes them after dup2, the
        // parent drops them unused once the fork returns.
        let pid = process::spawn(move || {
            if let Some(f) = &stdin_file {
                process::redirect_fd(f.as_raw_fd(), STDIN)?;
            }
            if let Some(f) = &stdout_file {
                process::redirect_fd(f.as_raw_fd(), STDOUT)?;
            }
            drop(stdin_file);
            drop(stdout_file);
            executor.exec(node)
        })?;

        Ok(ExecOutcome::Code(process::wait_for(pid)?))
    }
}

fn open_input(path: &str) -> Result<File, ExecError> {
    File::open(path).map_err(|source| ExecError::Open {
        path: path.to_string(),
        source,
    })
}

fn open_output(path: &str) -> Result<File, ExecError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| ExecError::Open {
            path: path.to_string(),
            source,
        })
}
