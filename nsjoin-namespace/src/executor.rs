//! Running the configured command after the joins
//!
//! The command string goes to `/bin/sh -c` untouched. Nothing here quotes or
//! validates it: whoever sets `ddocker_cmd` owns its contents.

use nix::sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal, sigaction};
use nsjoin_core::Error;
use serde::Serialize;
use std::ffi::OsStr;
use std::io;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::{debug, warn};

use crate::config::TRIGGER_VARS;

/// How the command ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandStatus {
    /// Exited normally
    Exited {
        /// Exit code
        code: i32,
    },

    /// Killed by a signal
    Signaled {
        /// Signal number
        signal: i32,
    },

    /// The shell itself could not be started
    FailedToStart {
        /// Error message
        reason: String,
    },
}

impl CommandStatus {
    /// Whether the command exited with code 0
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self, Self::Exited { code: 0 })
    }
}

/// Runs a command line synchronously
pub trait CommandRunner {
    /// Run `command` and wait for it to finish
    fn run(&mut self, command: &OsStr) -> CommandStatus;
}

/// Runs commands through the system shell, like system(3)
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: PathBuf,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellRunner {
    /// Default shell
    pub const DEFAULT_SHELL: &'static str = "/bin/sh";

    /// Runner using `/bin/sh`
    #[must_use]
    pub fn new() -> Self {
        Self::with_shell(Self::DEFAULT_SHELL)
    }

    /// Runner using a specific shell
    #[must_use]
    pub fn with_shell(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    /// Shell in use
    #[must_use]
    pub fn shell(&self) -> &Path {
        &self.shell
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &OsStr) -> CommandStatus {
        debug!(
            shell = %self.shell.display(),
            command = %command.to_string_lossy(),
            "Running command"
        );

        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(command);

        // A child that also carries the hook must not join and run again
        for var in TRIGGER_VARS {
            cmd.env_remove(var);
        }

        match status_ignoring_interrupts(&mut cmd) {
            Ok(status) => {
                let result = status.code().map_or_else(
                    || CommandStatus::Signaled {
                        signal: status.signal().unwrap_or_default(),
                    },
                    |code| CommandStatus::Exited { code },
                );
                debug!(?result, "Command finished");
                result
            }
            Err(e) => {
                let err = Error::CommandExecution {
                    command: command.to_string_lossy().into_owned(),
                    message: e.to_string(),
                };
                warn!(error = %err, "Command failed to start");
                CommandStatus::FailedToStart {
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// SIGINT and SIGQUIT dispositions saved while they are ignored
struct IgnoredInterrupts {
    int: SigAction,
    quit: SigAction,
}

impl IgnoredInterrupts {
    fn install() -> nix::Result<Self> {
        let ignore = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());

        // SAFETY: SIG_IGN runs no handler code
        let int = unsafe { sigaction(Signal::SIGINT, &ignore)? };
        let quit = match unsafe { sigaction(Signal::SIGQUIT, &ignore) } {
            Ok(quit) => quit,
            Err(e) => {
                // SAFETY: puts back the disposition saved just above
                let _ = unsafe { sigaction(Signal::SIGINT, &int) };
                return Err(e);
            }
        };

        Ok(Self { int, quit })
    }
}

impl Drop for IgnoredInterrupts {
    fn drop(&mut self) {
        // SAFETY: restores dispositions previously returned by sigaction
        unsafe {
            let _ = sigaction(Signal::SIGINT, &self.int);
            let _ = sigaction(Signal::SIGQUIT, &self.quit);
        }
    }
}

/// Run `cmd` to completion the way system(3) waits for its child.
///
/// SIGINT and SIGQUIT are ignored by the calling process from before the
/// spawn until the child is reaped, so a Ctrl-C meant for the child cannot
/// kill the caller. The child gets the original dispositions back before exec.
pub fn status_ignoring_interrupts(cmd: &mut Command) -> io::Result<ExitStatus> {
    let saved = IgnoredInterrupts::install().map_err(io::Error::from)?;
    let (int, quit) = (saved.int, saved.quit);

    // SAFETY: only sigaction(2), which is async-signal-safe, runs between fork and exec
    unsafe {
        cmd.pre_exec(move || {
            sigaction(Signal::SIGINT, &int)?;
            sigaction(Signal::SIGQUIT, &quit)?;
            Ok(())
        });
    }

    let status = cmd.status();
    drop(saved);
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_true() {
        let status = ShellRunner::new().run(OsStr::new("true"));
        assert_eq!(status, CommandStatus::Exited { code: 0 });
        assert!(status.success());
    }

    #[test]
    fn test_exit_code_passthrough() {
        let status = ShellRunner::new().run(OsStr::new("exit 3"));
        assert_eq!(status, CommandStatus::Exited { code: 3 });
        assert!(!status.success());
    }

    #[test]
    fn test_unknown_command() {
        let status = ShellRunner::new().run(OsStr::new("nsjoin-no-such-command-here"));
        assert_eq!(status, CommandStatus::Exited { code: 127 });
    }

    #[test]
    fn test_signaled() {
        let status = ShellRunner::new().run(OsStr::new("kill -9 $$"));
        assert_eq!(status, CommandStatus::Signaled { signal: 9 });
    }

    #[test]
    fn test_missing_shell() {
        let mut runner = ShellRunner::with_shell("/nonexistent/sh");
        let status = runner.run(OsStr::new("true"));

        assert!(matches!(status, CommandStatus::FailedToStart { .. }));
        assert_eq!(runner.shell(), Path::new("/nonexistent/sh"));
    }

    #[test]
    fn test_trigger_vars_are_removed() {
        // SAFETY: sets the real trigger variable; no test in this crate reads
        // the environment through JoinConfig::from_env
        unsafe {
            std::env::set_var("ddocker_cmd", "echo leaked");
        }

        let status = ShellRunner::new().run(OsStr::new(r#"test -z "${ddocker_cmd+x}""#));
        assert!(status.success());

        // SAFETY: as above
        unsafe {
            std::env::remove_var("ddocker_cmd");
        }
    }
}
