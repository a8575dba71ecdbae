use crate::ast::{AstNode, CommandNode, RedirectKind};
use crate::lexer::TokenKind;
use crate::parser::{ParseError, Parser, ParserLimits};

pub struct DefaultParser<'a> {
    tokens: &'a [TokenKind],
    pos: usize,
    limits: ParserLimits,
}

impl<'a> DefaultParser<'a> {
    pub fn new(tokens: &'a [TokenKind]) -> Self {
        Self::with_limits(tokens, ParserLimits::default())
    }

    pub fn with_limits(tokens: &'a [TokenKind], limits: ParserLimits) -> Self {
        Self { tokens, pos: 0, limits }
    }

    fn peek(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos)
    }

    fn consume(&mut self, pat: &TokenKind) -> bool {
        if self.tokens.get(self.pos) == Some(pat) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_file(&mut self, kind: RedirectKind) -> Result<String, ParseError> {
        match self.peek() {
            Some(TokenKind::Word(s)) => {
                let file = s.clone();
                self.pos += 1;
                Ok(file)
            }
            _ => Err(ParseError::MissingRedirectTarget { kind }),
        }
    }

    fn skip_segment(&mut self) {
        while !matches!(self.peek(), None | Some(TokenKind::Semicolon) | Some(TokenKind::Eof)) {
            self.pos += 1;
        }
    }

    fn expect_eof(&self) -> Result<(), ParseError> {
        match self.peek() {
            None | Some(TokenKind::Eof) => Ok(()),
            Some(tok) => Err(ParseError::UnexpectedToken {
                found: tok.describe(),
                pos: self.pos,
            }),
        }
    }
}

// Top-down recursive descent parser
impl<'a> Parser for DefaultParser<'a> {
    fn parse(&mut self) -> Result<AstNode, ParseError> {
        self.parse_sequence()
    }
}

impl<'a> DefaultParser<'a> {
    fn parse_sequence(&mut self) -> Result<AstNode, ParseError> {
        let mut segments = Vec::new();
        loop {
            match self.parse_pipeline() {
                Ok(Some(node)) => segments.push(Ok(node)),
                Ok(None) => {}
                Err(e) => {
                    self.skip_segment();
                    segments.push(Err(e));
                }
            }
            if !self.consume(&TokenKind::Semicolon) {
                break;
            }
        }
        self.expect_eof()?;
        Ok(AstNode::Sequence(segments))
    }

    /// Returns `None` for a segment with nothing in it.
    fn parse_pipeline(&mut self) -> Result<Option<AstNode>, ParseError> {
        let mut stages = vec![self.parse_stage()?];
        while self.consume(&TokenKind::Pipe) {
            if let Some(limit) = self.limits.max_stages {
                if stages.len() >= limit {
                    return Err(ParseError::TooManyStages { limit });
                }
            }
            stages.push(self.parse_stage()?);
        }

        if stages.len() == 1 {
            let stage = stages.remove(0);
            return Ok(match stage {
                AstNode::Command(ref cmd) if cmd.is_empty() => None,
                stage => Some(stage),
            });
        }
        Ok(Some(AstNode::Pipeline(stages)))
    }

    // Words and at most one redirection of each kind, in any order
    fn parse_stage(&mut self) -> Result<AstNode, ParseError> {
        let mut argv = Vec::new();
        let mut input = None;
        let mut output = None;

        loop {
            match self.peek() {
                Some(TokenKind::Word(s)) => {
                    if let Some(limit) = self.limits.max_args {
                        if argv.len() >= limit {
                            return Err(ParseError::TooManyArguments { limit });
                        }
                    }
                    argv.push(s.clone());
                    self.pos += 1;
                }
                Some(TokenKind::RedirectIn) => {
                    self.pos += 1;
                    let file = self.expect_file(RedirectKind::In)?;
                    if input.replace(file).is_some() {
                        return Err(ParseError::DuplicateRedirect { kind: RedirectKind::In });
                    }
                }
                Some(TokenKind::RedirectOut) => {
                    self.pos += 1;
                    let file = self.expect_file(RedirectKind::Out)?;
                    if output.replace(file).is_some() {
                        return Err(ParseError::DuplicateRedirect { kind: RedirectKind::Out });
                    }
                }
                _ => break,
            }
        }

        let command = AstNode::Command(CommandNode::new(argv));
        if input.is_none() && output.is_none() {
            Ok(command)
        } else {
            Ok(AstNode::Redirect {
                node: Box::new(command),
                input,
                output,
            })
        }
    }
}
