use std::io::{self, BufRead, IsTerminal, Write};

pub struct ShellPrompt {
    prompt: String,
}

impl ShellPrompt {
    pub fn new(prompt: impl Into<String>) -> Self {
        ShellPrompt { prompt: prompt.into() }
    }

    /// Written to stderr, and only for an interactive session.
    pub fn show_prompt(&self) {
        if io::stdin().is_terminal() {
            let mut stderr = io::stderr();
            let _ = write!(stderr, "{}", self.prompt);
            let _ = stderr.flush();
        }
    }

    /// Reads one line into a fresh buffer. `None` on end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        Self::read_from(&mut io::stdin().lock())
    }

    pub fn read_from<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let bytes_read = reader.read_line(&mut buf)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_then_eof() {
        let mut input = Cursor::new("echo a b c d e f\necho g\n");
        assert_eq!(
            ShellPrompt::read_from(&mut input).unwrap(),
            Some("echo a b c d e f".to_string())
        );
        // A shorter line never carries leftovers from the longer one.
        assert_eq!(ShellPrompt::read_from(&mut input).unwrap(), Some("echo g".to_string()));
        assert_eq!(ShellPrompt::read_from(&mut input).unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = Cursor::new("ls\r\npwd");
        assert_eq!(ShellPrompt::read_from(&mut input).unwrap(), Some("ls".to_string()));
        assert_eq!(ShellPrompt::read_from(&mut input).unwrap(), Some("pwd".to_string()));
        assert_eq!(ShellPrompt::read_from(&mut input).unwrap(), None);
    }
}
