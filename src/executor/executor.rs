use crate::ast::AstNode;
use crate::error::ExecError;

pub type ExecStatus = Result<ExecOutcome, ExecError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    /// The unit finished with this status.
    Code(i32),
    /// The interpreter itself should terminate with this status.
    Exit(i32),
}

impl ExecOutcome {
    pub fn code(&self) -> i32 {
        match *self {
            ExecOutcome::Code(code) | ExecOutcome::Exit(code) => code,
        }
    }
}

pub trait Executor {
    fn exec(&mut self, node: &AstNode) -> ExecStatus;
}
