use super::builtins::BuiltinManager;
use super::command::exec_command;
use super::pipeline::PipelineHandler;
use super::redirect::RedirectHandler;
use super::sequence::run_sequence;
use crate::ast::AstNode;
use crate::executor::{ExecStatus, Executor};

/// Executes a parsed line with real processes: one child per pipeline stage,
/// per redirected command and per external program.
pub struct DefaultExecutor {
    builtins: BuiltinManager,
}

impl DefaultExecutor {
    pub fn new() -> Self {
        DefaultExecutor {
            builtins: BuiltinManager::new(),
        }
    }

    pub fn with_builtins(builtins: BuiltinManager) -> Self {
        DefaultExecutor { builtins }
    }
}

impl Default for DefaultExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for DefaultExecutor {
    fn exec(&mut self, node: &AstNode) -> ExecStatus {
        match node {
            AstNode::Sequence(segments) => run_sequence(segments, self),
            AstNode::Pipeline(stages) => PipelineHandler::exec_pipeline(stages, self),
            AstNode::Redirect { node, input, output } => {
                RedirectHandler::handle_redirect(node, input.as_deref(), output.as_deref(), self)
            }
            AstNode::Command(cmd) => exec_command(cmd, &self.builtins),
        }
    }
}
