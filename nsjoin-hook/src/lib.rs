//! Load-time namespace join hook
//!
//! Linking this crate (or preloading its `cdylib`) installs a constructor that
//! runs before `main`. When both `ddocker_pid` and `ddocker_cmd` are set, it
//! joins the target's ipc, uts, net, pid and mnt namespaces, runs the command
//! with `/bin/sh -c` and exits the process with code 0. Otherwise it does
//! nothing and startup continues normally.
//!
//! Diagnostics are off unless `ddocker_log` holds a filter directive.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]

pub mod logging;
mod trigger;

use nsjoin_namespace::{
    CommandRunner, JoinConfig, NamespaceOpener, ProcNamespaceOpener, ShellRunner, join_and_exec,
};

pub use trigger::has_run;

/// Run the hook sequence against the real environment.
///
/// Returns `None` when the configuration is incomplete, meaning the caller
/// must carry on as if nothing happened. Otherwise returns the exit code the
/// process should terminate with.
#[must_use]
pub fn run_from_env() -> Option<i32> {
    let config = JoinConfig::from_env()?;

    // Only now: a process we hand back to normal startup may install its own subscriber
    logging::init_from_env();

    Some(run(
        &config,
        &mut ProcNamespaceOpener::new(),
        &mut ShellRunner::new(),
    ))
}

/// Join, run the command and report; returns the exit code
pub fn run<O, R>(config: &JoinConfig, opener: &mut O, runner: &mut R) -> i32
where
    O: NamespaceOpener,
    R: CommandRunner,
{
    let outcome = join_and_exec(config, opener, runner);
    logging::log_outcome(&outcome);
    outcome.exit_code
}
