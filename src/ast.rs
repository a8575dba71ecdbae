use crate::parser::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    Command(CommandNode),
    Pipeline(Vec<AstNode>),
    Redirect {
        node: Box<AstNode>,
        input: Option<String>,
        output: Option<String>,
    },
    /// `;`-separated segments. Each is parsed on its own, so a malformed
    /// segment does not keep its siblings from running.
    Sequence(Vec<Result<AstNode, ParseError>>),
}

/// A simple command. `argv[0]` is the program name; an empty argv is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandNode {
    pub argv: Vec<String>,
}

impl CommandNode {
    pub fn new(argv: Vec<String>) -> Self {
        CommandNode { argv }
    }

    pub fn name(&self) -> Option<&str> {
        self.argv.first().map(|s| s.as_str())
    }

    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectKind {
    In,
    Out,
}

impl RedirectKind {
    pub fn symbol(&self) -> char {
        match self {
            RedirectKind::In => '<',
            RedirectKind::Out => '>',
        }
    }
}
