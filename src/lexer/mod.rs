mod token;

pub use token::TokenKind;

pub struct Lexer;

impl Lexer {
    fn is_blank(ch: char) -> bool {
        matches!(ch, ' ' | '\t' | '\r' | '\n')
    }

    fn operator(ch: char) -> Option<TokenKind> {
        match ch {
            '|' => Some(TokenKind::Pipe),
            '<' => Some(TokenKind::RedirectIn),
            '>' => Some(TokenKind::RedirectOut),
            ';' => Some(TokenKind::Semicolon),
            _ => None,
        }
    }

    /// Splits a line into words and operators. Runs of blanks separate words;
    /// operator characters end the current word wherever they appear.
    /// The returned stream always ends with `TokenKind::Eof`.
    pub fn tokenize(line: &str) -> Vec<TokenKind> {
        let mut tokens = Vec::new();
        let mut buf = String::new();

        for ch in line.chars() {
            if Self::is_blank(ch) {
                if !buf.is_empty() {
                    tokens.push(TokenKind::Word(std::mem::take(&mut buf)));
                }
            } else if let Some(op) = Self::operator(ch) {
                if !buf.is_empty() {
                    tokens.push(TokenKind::Word(std::mem::take(&mut buf)));
                }
                tokens.push(op);
            } else {
                buf.push(ch);
            }
        }

        if !buf.is_empty() {
            tokens.push(TokenKind::Word(buf));
        }
        tokens.push(TokenKind::Eof);

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> TokenKind {
        TokenKind::Word(s.to_string())
    }

    #[test]
    fn test_tokenize_basic() {
        let tokens = Lexer::tokenize("echo hello | grep world");
        assert_eq!(
            tokens,
            vec![word("echo"), word("hello"), TokenKind::Pipe, word("grep"), word("world"), TokenKind::Eof]
        );
    }

    #[test]
    fn test_whitespace_only_yields_no_words() {
        assert_eq!(Lexer::tokenize(" \t  \t"), vec![TokenKind::Eof]);
        assert_eq!(Lexer::tokenize(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_operators_split_without_spaces() {
        let tokens = Lexer::tokenize("sort<in.txt>out.txt;ls|wc");
        assert_eq!(
            tokens,
            vec![
                word("sort"),
                TokenKind::RedirectIn,
                word("in.txt"),
                TokenKind::RedirectOut,
                word("out.txt"),
                TokenKind::Semicolon,
                word("ls"),
                TokenKind::Pipe,
                word("wc"),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tabs_and_trailing_newline() {
        let tokens = Lexer::tokenize("\tls\t-l  /tmp\n");
        assert_eq!(tokens, vec![word("ls"), word("-l"), word("/tmp"), TokenKind::Eof]);
    }
}
