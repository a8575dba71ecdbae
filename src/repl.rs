use tracing::trace;

use crate::error::report;
use crate::executor::{DefaultExecutor, ExecOutcome, Executor};
use crate::lexer::Lexer;
use crate::parser::{DefaultParser, Parser, ParserLimits, PARSE_ERROR_STATUS};
use crate::prompt::ShellPrompt;

pub struct Shell<E: Executor = DefaultExecutor> {
    executor: E,
    limits: ParserLimits,
}

impl<E: Executor> Shell<E> {
    pub fn new(executor: E, limits: ParserLimits) -> Self {
        Shell { executor, limits }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Parses and runs one line, returning once every command in it is done.
    /// Segments that fail to parse are reported as they are reached.
    pub fn run_line(&mut self, line: &str) -> ExecOutcome {
        let tokens = Lexer::tokenize(line);
        let ast = match DefaultParser::with_limits(&tokens, self.limits).parse() {
            Ok(ast) => ast,
            Err(e) => {
                report(&e);
                return ExecOutcome::Code(PARSE_ERROR_STATUS);
            }
        };
        trace!(?ast, "parsed line");

        match self.executor.exec(&ast) {
            Ok(outcome) => outcome,
            Err(e) => {
                report(&e);
                ExecOutcome::Code(e.status())
            }
        }
    }

    /// Reads and runs lines until end of input or `exit`. Returns the status
    /// the interpreter should exit with.
    pub fn run(&mut self, prompt: &ShellPrompt) -> i32 {
        loop {
            prompt.show_prompt();
            let line = match prompt.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    report(&format_args!("read error: {}", e));
                    break;
                }
            };

            if let ExecOutcome::Exit(code) = self.run_line(&line) {
                return code;
            }
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::tests::MockExecutor;

    fn shell() -> Shell<MockExecutor> {
        Shell::new(MockExecutor::new(), ParserLimits::default())
    }

    #[test]
    fn test_blank_line_runs_nothing() {
        let mut sh = shell();
        assert_eq!(sh.run_line("   \t"), ExecOutcome::Code(0));
        assert!(sh.executor().log.is_empty());
    }

    #[test]
    fn test_segments_run_through_sequencer() {
        let mut sh = shell();
        assert_eq!(sh.run_line("a ; b"), ExecOutcome::Code(0));
        assert_eq!(sh.executor().log, vec!["command: a", "command: b"]);
    }

    #[test]
    fn test_parse_error_skips_only_its_segment() {
        let mut sh = shell();
        assert_eq!(sh.run_line("echo a ; cat < a < b"), ExecOutcome::Code(PARSE_ERROR_STATUS));
        assert_eq!(sh.executor().log, vec!["command: echo a"]);

        let mut sh = shell();
        assert_eq!(sh.run_line("ls > x > y ; echo b"), ExecOutcome::Code(0));
        assert_eq!(sh.executor().log, vec!["command: echo b"]);
    }

    #[test]
    fn test_limits_are_applied() {
        let limits = ParserLimits { max_args: None, max_stages: Some(2) };
        let mut sh = Shell::new(MockExecutor::new(), limits);
        assert_eq!(sh.run_line("a | b | c"), ExecOutcome::Code(PARSE_ERROR_STATUS));
        assert!(sh.executor().log.is_empty());
    }
}
