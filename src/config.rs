use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::parser::ParserLimits;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub max_args: Option<usize>,
    pub max_stages: Option<usize>,
}

impl Config {
    pub fn limits(&self) -> ParserLimits {
        ParserLimits {
            max_args: self.max_args,
            max_stages: self.max_stages,
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn default_config() -> Config {
        Config {
            prompt: ">>> ".to_string(),
            max_args: None,
            max_stages: None,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let mut src = String::new();
        for line in BufReader::new(file).lines() {
            src.push_str(&line?);
            src.push('\n');
        }
        Self::load_from_str(&src)
    }

    /// Parses `key=value` lines. Blank lines and `#` comments are skipped;
    /// the prompt value is taken verbatim so it may end in a space.
    pub fn load_from_str(src: &str) -> Result<Config, ConfigError> {
        let mut config = Self::default_config();

        for (lineno, line) in src.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::Parse(format!("Line {}: No '=' found: {}", lineno + 1, line)));
            };

            match key.trim() {
                "prompt" => config.prompt = value.to_string(),
                "max_args" => config.max_args = Some(parse_limit(value, lineno)?),
                "max_stages" => config.max_stages = Some(parse_limit(value, lineno)?),
                k => return Err(ConfigError::Parse(format!("Line {}: Unknown key: {}", lineno + 1, k))),
            }
        }

        Ok(config)
    }
}

fn parse_limit(value: &str, lineno: usize) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Parse(format!(
            "Line {}: Expected a positive integer: {}",
            lineno + 1,
            value.trim()
        ))),
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_gives_defaults() {
        let config = ConfigLoader::load_from_str("").unwrap();
        assert_eq!(config, ConfigLoader::default_config());
        assert_eq!(config.limits(), ParserLimits::default());
    }

    #[test]
    fn test_all_keys() {
        let src = "# limits\nprompt=$ \n\nmax_args = 16\nmax_stages=10\n";
        let config = ConfigLoader::load_from_str(src).unwrap();
        assert_eq!(config.prompt, "$ ");
        assert_eq!(
            config.limits(),
            ParserLimits { max_args: Some(16), max_stages: Some(10) }
        );
    }

    #[test]
    fn test_unknown_key() {
        let err = ConfigLoader::load_from_str("history_max=5").unwrap_err();
        assert_eq!(err.to_string(), "Parse error: Line 1: Unknown key: history_max");
    }

    #[test]
    fn test_missing_equals() {
        let err = ConfigLoader::load_from_str("prompt=> \nmax_args").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(ref msg) if msg.starts_with("Line 2")));
    }

    #[test]
    fn test_limit_must_be_positive() {
        assert!(ConfigLoader::load_from_str("max_args=0").is_err());
        assert!(ConfigLoader::load_from_str("max_stages=lots").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigLoader::load_from_file("no_such_pipeshrc").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
