use crate::cli::Commands;
use anyhow::Result;

pub mod exec;
pub mod namespaces;

/// Dispatch command to appropriate handler, returning the exit code
pub fn dispatch(command: Commands, verbose: bool) -> Result<i32> {
    match command {
        Commands::Exec {
            pid,
            strict,
            command,
        } => exec::execute(&pid, &command, strict, verbose),

        Commands::Namespaces { pid } => {
            namespaces::execute(pid.as_deref())?;
            Ok(0)
        }
    }
}
