use crate::ast::AstNode;
use crate::error::report;
use crate::executor::{ExecOutcome, ExecStatus, Executor};
use crate::parser::{ParseError, PARSE_ERROR_STATUS};

/// Runs segments strictly one after another. A failing segment, or one that
/// did not parse, is reported and the next one still runs; an `Exit`
/// outcome stops the sequence.
pub fn run_sequence(
    segments: &[Result<AstNode, ParseError>],
    executor: &mut dyn Executor,
) -> ExecStatus {
    let mut status = 0;
    for segment in segments {
        let segment = match segment {
            Ok(node) => node,
            Err(e) => {
                report(e);
                status = PARSE_ERROR_STATUS;
                continue;
            }
        };
        match executor.exec(segment) {
            Ok(ExecOutcome::Exit(code)) => return Ok(ExecOutcome::Exit(code)),
            Ok(ExecOutcome::Code(code)) => status = code,
            Err(e) => {
                report(&e);
                status = e.status();
            }
        }
    }
    Ok(ExecOutcome::Code(status))
}
