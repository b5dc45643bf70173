//! CLI argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nsjoin")]
#[command(about = "Run commands inside the namespaces of a running process", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a command inside the namespaces of a running process
    Exec {
        /// Target process ID
        pid: String,

        /// Skip the command unless every namespace was joined
        #[arg(long)]
        strict: bool,

        /// Command to run (joined with spaces, run by /bin/sh -c)
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Show namespace information
    Namespaces {
        /// Process ID (default: current process)
        #[arg(short, long)]
        pid: Option<String>,
    },
}
