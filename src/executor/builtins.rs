use std::collections::HashMap;

use crate::error::ExecError;
use crate::executor::{ExecOutcome, ExecStatus};

pub trait BuiltinCommand {
    fn name(&self) -> &'static str;
    fn run(&self, args: &[String]) -> ExecStatus;
}

/// Commands the shell handles in its own process instead of spawning.
pub struct BuiltinManager {
    commands: HashMap<String, Box<dyn BuiltinCommand>>,
}

impl BuiltinManager {
    pub fn new() -> Self {
        let mut mgr = BuiltinManager {
            commands: HashMap::new(),
        };
        mgr.register(Box::new(CdCommand {}));
        mgr.register(Box::new(ExitCommand {}));
        mgr
    }

    pub fn register(&mut self, cmd: Box<dyn BuiltinCommand>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Runs `name` if it is a builtin; `None` means it is not one.
    pub fn execute(&self, name: &str, args: &[String]) -> Option<ExecStatus> {
        self.commands.get(name).map(|cmd| cmd.run(args))
    }
}

impl Default for BuiltinManager {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CdCommand;

impl BuiltinCommand for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }
    fn run(&self, args: &[String]) -> ExecStatus {
        let target = args
            .first()
            .ok_or_else(|| ExecError::MissingArgument(self.name().to_string()))?;
        std::env::set_current_dir(target).map_err(|source| ExecError::ChangeDir {
            path: target.clone(),
            source,
        })?;
        Ok(ExecOutcome::Code(0))
    }
}

/// Ends the process it runs in. Arguments are ignored.
pub struct ExitCommand;

impl BuiltinCommand for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }
    fn run(&self, _args: &[String]) -> ExecStatus {
        Ok(ExecOutcome::Exit(0))
    }
}
