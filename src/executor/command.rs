use std::ffi::CString;

use nix::unistd::execvp;
use tracing::debug;

use super::builtins::BuiltinManager;
use super::process;
use crate::ast::CommandNode;
use crate::error::ExecError;
use crate::executor::{ExecOutcome, ExecStatus};

/// Runs one simple command: a builtin in this process, anything else in a
/// forked child that replaces itself with the program. Blocks until done.
pub fn exec_command(cmd: &CommandNode, builtins: &BuiltinManager) -> ExecStatus {
    let Some(name) = cmd.name() else {
        return Ok(ExecOutcome::Code(0));
    };

    if let Some(status) = builtins.execute(name, cmd.args()) {
        return status;
    }

    // Built before forking so the child only has to exec.
    let argv = to_cstrings(&cmd.argv)?;
    let pid = process::spawn(|| {
        process::reset_signals()?;
        let Err(source) = execvp(&argv[0], &argv);
        Err(ExecError::ExecFailed {
            name: name.to_string(),
            source,
        })
    })?;

    let code = process::wait_for(pid)?;
    debug!(command = name, code, "command finished");
    Ok(ExecOutcome::Code(code))
}

fn to_cstrings(argv: &[String]) -> Result<Vec<CString>, ExecError> {
    argv.iter()
        .map(|arg| {
            CString::new(arg.as_bytes())
                .map_err(|_| ExecError::InvalidArgument(format!("{}: contains a NUL byte", arg)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_is_noop() {
        let builtins = BuiltinManager::new();
        let status = exec_command(&CommandNode::default(), &builtins).unwrap();
        assert_eq!(status, ExecOutcome::Code(0));
    }

    #[test]
    fn test_builtin_runs_without_spawning() {
        let builtins = BuiltinManager::new();
        let cmd = CommandNode::new(vec!["exit".to_string()]);
        assert_eq!(exec_command(&cmd, &builtins).unwrap(), ExecOutcome::Exit(0));
    }

    #[test]
    fn test_nul_byte_is_rejected() {
        let err = to_cstrings(&["echo".to_string(), "a\0b".to_string()]).unwrap_err();
        assert!(matches!(err, ExecError::InvalidArgument(_)));
    }
}
