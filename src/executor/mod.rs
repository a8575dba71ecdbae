mod executor;
mod default_executor;
mod builtins;
mod command;
mod pipeline;
mod process;
mod redirect;
mod sequence;

#[cfg(test)]
pub(crate) mod tests;

pub use executor::{Executor, ExecOutcome, ExecStatus};
pub use default_executor::DefaultExecutor;
pub use builtins::{BuiltinCommand, BuiltinManager};
pub use sequence::run_sequence;
