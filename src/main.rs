use std::path::{Path, PathBuf};

use anyhow::Context;
use argh::FromArgs;
use tracing_subscriber::EnvFilter;

use pipesh::config::{Config, ConfigLoader};
use pipesh::error::SHELL_NAME;
use pipesh::executor::DefaultExecutor;
use pipesh::prompt::ShellPrompt;
use pipesh::repl::Shell;

#[derive(FromArgs)]
/// A small command interpreter with `;` sequencing, `|` pipelines and
/// `<` / `>` redirection.
struct Args {
    /// path to a key=value configuration file (default: $HOME/.pipeshrc)
    #[argh(option)]
    config: Option<PathBuf>,

    /// run a single command line and exit with its status
    #[argh(option, short = 'c')]
    command: Option<String>,
}

fn main() {
    init_logging();
    let args: Args = argh::from_env();

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", SHELL_NAME, e);
            2
        }
    };
    std::process::exit(code);
}

fn run(args: Args) -> anyhow::Result<i32> {
    let config = load_config(args.config.as_deref())?;
    let mut shell = Shell::new(DefaultExecutor::new(), config.limits());

    if let Some(line) = args.command {
        return Ok(shell.run_line(&line).code());
    }

    let prompt = ShellPrompt::new(config.prompt.clone());
    Ok(shell.run(&prompt))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.is_file() => p,
            _ => return Ok(ConfigLoader::default_config()),
        },
    };
    ConfigLoader::load_from_file(&path)
        .with_context(|| format!("cannot load config {}", path.display()))
}

fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".pipeshrc"))
}

// Diagnostics meant for the user go straight to stderr; tracing output is
// opt-in through PIPESH_LOG.
fn init_logging() {
    let filter = EnvFilter::try_from_env("PIPESH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
