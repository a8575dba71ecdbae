#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Word(String),  // command, argument or file name
    Pipe,          // |
    RedirectIn,    // <
    RedirectOut,   // >
    Semicolon,     // ;
    Eof,
}

impl TokenKind {
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Word(s) => s.clone(),
            TokenKind::Pipe => "|".to_string(),
            TokenKind::RedirectIn => "<".to_string(),
            TokenKind::RedirectOut => ">".to_string(),
            TokenKind::Semicolon => ";".to_string(),
            TokenKind::Eof => "end of line".to_string(),
        }
    }
}
