use std::os::fd::{AsRawFd, OwnedFd};

use nix::unistd::pipe;
use tracing::debug;

use super::process::{self, STDIN, STDOUT};
use crate::ast::AstNode;
use crate::error::ExecError;
use crate::executor::{ExecOutcome, ExecStatus, Executor};

pub struct PipelineHandler;

impl PipelineHandler {
    /// Runs every stage in its own process, stage `i` writing into pipe `i`
    /// and reading from pipe `i - 1`. Returns once all stages are reaped,
    /// with the status of the last one.
    pub fn exec_pipeline(stages: &[AstNode], executor: &mut dyn Executor) -> ExecStatus {
        let n = stages.len();
        if n < 2 {
            return match stages.first() {
                Some(stage) => executor.exec(stage),
                None => Ok(ExecOutcome::Code(0)),
            };
        }

        let mut pipes: Vec<(OwnedFd, OwnedFd)> = Vec::with_capacity(n - 1);
        for _ in 1..n {
            pipes.push(pipe().map_err(ExecError::sys("pipe"))?);
        }
        debug!(stages = n, pipes = pipes.len(), "starting pipeline");

        let mut children = Vec::with_capacity(n);
        let mut failure = None;

        for (i, stage) in stages.iter().enumerate() {
            let spawned = process::spawn(|| {
                if i > 0 {
                    process::redirect_fd(pipes[i - 1].0.as_raw_fd(), STDIN)?;
                }
                if i < n - 1 {
                    process::redirect_fd(pipes[i].1.as_raw_fd(), STDOUT)?;
                }
                // Every endpoint goes, including the ones just duplicated;
                // a stray write end would keep the next reader from seeing EOF.
                pipes.clear();
                executor.exec(stage)
            });
            match spawned {
                Ok(pid) => children.push(pid),
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }

        drop(pipes);

        let last = children.last().copied();
        let mut status = 0;
        for _ in 0..children.len() {
            let (pid, code) = process::wait_any()?;
            if pid.is_some() && pid == last {
                status = code;
            }
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(ExecOutcome::Code(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CommandNode;
    use crate::executor::tests::MockExecutor;

    #[test]
    fn test_single_stage_runs_in_process() {
        let mut mock = MockExecutor::new();
        let stages = vec![AstNode::Command(CommandNode::new(vec!["wc".into()]))];
        let res = PipelineHandler::exec_pipeline(&stages, &mut mock);
        assert_eq!(res.unwrap(), ExecOutcome::Code(0));
        assert_eq!(mock.log, vec!["command: wc"]);
    }

    #[test]
    fn test_empty_pipeline_is_noop() {
        let mut mock = MockExecutor::new();
        let res = PipelineHandler::exec_pipeline(&[], &mut mock);
        assert_eq!(res.unwrap(), ExecOutcome::Code(0));
        assert!(mock.log.is_empty());
    }
}
