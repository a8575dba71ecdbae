use std::collections::HashMap;

use crate::ast::AstNode;
use crate::executor::{run_sequence, ExecOutcome, ExecStatus, Executor};

/// Records what it is asked to run instead of spawning anything.
pub struct MockExecutor {
    pub log: Vec<String>,
    responses: HashMap<String, ExecStatus>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self { log: Vec::new(), responses: HashMap::new() }
    }

    /// Makes the next run of command `name` return `status`.
    pub fn respond(&mut self, name: &str, status: ExecStatus) {
        self.responses.insert(name.to_string(), status);
    }
}

impl Executor for MockExecutor {
    fn exec(&mut self, node: &AstNode) -> ExecStatus {
        match node {
            AstNode::Command(cmd) => {
                self.log.push(format!("command: {}", cmd.argv.join(" ")).trim_end().to_string());
                let name = cmd.name().unwrap_or_default();
                self.responses
                    .remove(name)
                    .unwrap_or(Ok(ExecOutcome::Code(0)))
            }
            AstNode::Pipeline(stages) => {
                self.log.push(format!("pipeline: {} stages", stages.len()));
                Ok(ExecOutcome::Code(0))
            }
            AstNode::Redirect { input, output, .. } => {
                self.log.push(format!("redirect: {:?} {:?}", input, output));
                Ok(ExecOutcome::Code(0))
            }
            AstNode::Sequence(segments) => run_sequence(segments, self),
        }
    }
}
