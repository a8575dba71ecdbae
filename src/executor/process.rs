//! Thin wrappers over the fork / dup2 / wait primitives.

use std::io::{self, Write};
use std::os::fd::RawFd;

use nix::errno::Errno;
use nix::sys::signal::{signal, SigHandler, Signal};
use nix::sys::wait::{wait, waitpid, WaitStatus};
use nix::unistd::{dup2, fork, ForkResult, Pid};
use tracing::debug;

use crate::error::{report, ExecError};
use crate::executor::ExecStatus;

pub const STDIN: RawFd = libc::STDIN_FILENO;
pub const STDOUT: RawFd = libc::STDOUT_FILENO;

/// Forks. The child runs `body` and terminates with its status; only the
/// parent returns, with the child's pid.
pub fn spawn<F>(body: F) -> Result<Pid, ExecError>
where
    F: FnOnce() -> ExecStatus,
{
    // Anything still buffered would otherwise be written twice.
    let _ = io::stdout().flush();

    match unsafe { fork() }.map_err(ExecError::sys("fork"))? {
        ForkResult::Parent { child } => {
            debug!(pid = child.as_raw(), "spawned child");
            Ok(child)
        }
        ForkResult::Child => exit_child(body()),
    }
}

/// Terminates a forked child, reporting its error if it failed.
pub fn exit_child(status: ExecStatus) -> ! {
    let code = match status {
        Ok(outcome) => outcome.code(),
        Err(e) => {
            report(&e);
            e.status()
        }
    };
    let _ = io::stdout().flush();
    unsafe { libc::_exit(code) }
}

/// Makes `target` refer to the same open file as `fd`.
pub fn redirect_fd(fd: RawFd, target: RawFd) -> Result<(), ExecError> {
    if fd != target {
        dup2(fd, target).map_err(ExecError::sys("dup2"))?;
    }
    Ok(())
}

/// Undoes signal dispositions the Rust runtime sets up, which would
/// otherwise survive exec. Programs expect to die on a broken pipe.
pub fn reset_signals() -> Result<(), ExecError> {
    unsafe { signal(Signal::SIGPIPE, SigHandler::SigDfl) }.map_err(ExecError::sys("signal"))?;
    Ok(())
}

/// Blocks until `pid` terminates and returns its status.
pub fn wait_for(pid: Pid) -> Result<i32, ExecError> {
    loop {
        match waitpid(pid, None) {
            Ok(status) => return Ok(status_code(status)),
            Err(Errno::EINTR) => continue,
            Err(e) => return Err(ExecError::sys("waitpid")(e)),
        }
    }
}

/// Blocks until any child terminates.
pub fn wait_any() -> Result<(Option<Pid>, i32), ExecError> {
    loop {
        match wait() {
            Ok(status) => {
                debug!(?status, "reaped child");
                return Ok((status.pid(), status_code(status)));
            }
            Err(Errno::EINTR) => continue,
            Err(e) => return Err(ExecError::sys("wait")(e)),
        }
    }
}

pub fn status_code(status: WaitStatus) -> i32 {
    match status {
        WaitStatus::Exited(_, code) => code,
        WaitStatus::Signaled(_, sig, _) => 128 + sig as i32,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code() {
        let pid = Pid::from_raw(42);
        assert_eq!(status_code(WaitStatus::Exited(pid, 0)), 0);
        assert_eq!(status_code(WaitStatus::Exited(pid, 3)), 3);
        assert_eq!(status_code(WaitStatus::Signaled(pid, Signal::SIGKILL, false)), 137);
        assert_eq!(status_code(WaitStatus::StillAlive), 1);
    }
}
