//! Joining the namespaces of a running process
//!
//! This crate holds everything between reading the environment and deciding
//! the exit code:
//! - [`JoinConfig`] - target and command, read from `ddocker_pid` / `ddocker_cmd`
//! - [`NamespaceOpener`] - opens and joins `/proc/<pid>/ns/<kind>` files
//! - [`CommandRunner`] - runs the command through the shell
//! - [`join_and_exec`] - the whole sequence, returning a [`JoinReport`]
//! - [`NamespaceInfo`] - namespace identities of a process, for inspection

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod config;
pub mod executor;
pub mod inspect;
pub mod joiner;
pub mod opener;

pub use config::JoinConfig;
pub use executor::{CommandRunner, CommandStatus, ShellRunner, status_ignoring_interrupts};
pub use inspect::NamespaceInfo;
pub use joiner::{
    EXIT_CODE, ExecOutcome, JoinReport, NamespaceAttempt, NamespaceOutcome, STRICT_EXIT_CODE,
    join_and_exec, join_namespaces,
};
pub use opener::{NamespaceOpener, ProcNamespaceOpener};
