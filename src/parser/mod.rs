pub mod default;

use thiserror::Error;
use crate::ast::{AstNode, RedirectKind};

pub use default::DefaultParser;

pub trait Parser {
    fn parse(&mut self) -> Result<AstNode, ParseError>;
}

/// Status of a segment (or line) that failed to parse.
pub const PARSE_ERROR_STATUS: i32 = 2;

/// Optional hard caps on a line's shape. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserLimits {
    pub max_args: Option<usize>,
    pub max_stages: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing file name after '{}'", .kind.symbol())]
    MissingRedirectTarget { kind: RedirectKind },
    #[error("duplicate '{}' redirection in one command", .kind.symbol())]
    DuplicateRedirect { kind: RedirectKind },
    #[error("too many arguments (limit {limit})")]
    TooManyArguments { limit: usize },
    #[error("too many pipeline stages (limit {limit})")]
    TooManyStages { limit: usize },
    #[error("unexpected token '{found}' at position {pos}")]
    UnexpectedToken { found: String, pos: usize },
}
