//! Joining the target's namespaces and running the command
//!
//! Every failure is turned into a [`NamespaceOutcome`] or a [`CommandStatus`].
//! The loop never stops early and nothing is propagated as an error: callers
//! get a [`JoinReport`] and decide for themselves what to surface.

use nsjoin_core::{JOIN_ORDER, NamespaceKind, TargetPid};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::JoinConfig;
use crate::executor::{CommandRunner, CommandStatus};
use crate::inspect::NamespaceInfo;
use crate::opener::NamespaceOpener;

/// Exit code once the command has been attempted, whatever happened before
pub const EXIT_CODE: i32 = 0;

/// Exit code when strict mode refuses to run the command
pub const STRICT_EXIT_CODE: i32 = 1;

/// Result of one open-and-join attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NamespaceOutcome {
    /// The calling process is now in the target's namespace
    Joined,

    /// The namespace file could not be opened
    AccessError {
        /// Error message
        reason: String,
    },

    /// The file was opened but setns(2) failed
    JoinError {
        /// Error message
        reason: String,
    },
}

impl NamespaceOutcome {
    /// Whether the namespace was joined
    #[must_use]
    pub const fn is_joined(&self) -> bool {
        matches!(self, Self::Joined)
    }
}

/// One entry of a [`JoinReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceAttempt {
    /// Namespace kind
    pub kind: NamespaceKind,

    /// File that was opened
    #[serde(serialize_with = "serialize_path")]
    pub path: PathBuf,

    /// What happened
    #[serde(flatten)]
    pub outcome: NamespaceOutcome,
}

/// Outcome of every join attempt, in [`JOIN_ORDER`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinReport {
    /// Process whose namespaces were joined
    pub target: TargetPid,

    /// One attempt per kind
    pub attempts: Vec<NamespaceAttempt>,
}

impl JoinReport {
    /// Number of namespaces actually joined
    #[must_use]
    pub fn joined_count(&self) -> usize {
        self.attempts.iter().filter(|a| a.outcome.is_joined()).count()
    }

    /// Attempts that did not join
    pub fn failures(&self) -> impl Iterator<Item = &NamespaceAttempt> {
        self.attempts.iter().filter(|a| !a.outcome.is_joined())
    }

    /// Whether all five namespaces were joined
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.attempts.len() == JOIN_ORDER.len() && self.failures().next().is_none()
    }

    /// Outcome for a given kind
    #[must_use]
    pub fn outcome(&self, kind: NamespaceKind) -> Option<&NamespaceOutcome> {
        self.attempts
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| &a.outcome)
    }
}

/// Result of a full join-and-exec pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecOutcome {
    /// Join attempts
    pub report: JoinReport,

    /// Command result, `None` when strict mode skipped it
    pub command: Option<CommandStatus>,

    /// Code the hosting process should exit with
    pub exit_code: i32,
}

/// Join every namespace of `target`, in [`JOIN_ORDER`].
///
/// A failure on one kind never prevents the attempts on the next ones.
pub fn join_namespaces<O: NamespaceOpener>(target: &TargetPid, opener: &mut O) -> JoinReport {
    let attempts = JOIN_ORDER
        .into_iter()
        .map(|kind| {
            let path = target.ns_path(kind);
            let outcome = attempt(opener, kind, &path);
            NamespaceAttempt {
                kind,
                path,
                outcome,
            }
        })
        .collect();

    let report = JoinReport {
        target: target.clone(),
        attempts,
    };

    debug!(
        target = %report.target,
        joined = report.joined_count(),
        total = JOIN_ORDER.len(),
        "Namespace joins done"
    );

    // After a mnt join /proc/self may no longer resolve; missing ids stay None
    debug!(current = ?NamespaceInfo::current(), "Namespace identities after join");

    report
}

fn attempt<O: NamespaceOpener>(
    opener: &mut O,
    kind: NamespaceKind,
    path: &Path,
) -> NamespaceOutcome {
    let handle = match opener.open(kind, path) {
        Ok(handle) => handle,
        Err(e) => {
            debug!(kind = %kind, error = %e, "Namespace file not accessible");
            return NamespaceOutcome::AccessError {
                reason: e.to_string(),
            };
        }
    };

    let outcome = match opener.join(kind, &handle) {
        Ok(()) => {
            debug!(kind = %kind, path = %path.display(), "Joined namespace");
            NamespaceOutcome::Joined
        }
        Err(e) => {
            debug!(kind = %kind, error = %e, "Namespace join failed");
            NamespaceOutcome::JoinError {
                reason: e.to_string(),
            }
        }
    };

    // Released before the next kind is opened
    drop(handle);

    outcome
}

/// Join the namespaces named by `config`, then run its command.
///
/// The command runs even if no join succeeded and the exit code is
/// [`EXIT_CODE`], unless `config.strict` is set and a join failed: then the
/// command is skipped and the code is [`STRICT_EXIT_CODE`].
pub fn join_and_exec<O, R>(config: &JoinConfig, opener: &mut O, runner: &mut R) -> ExecOutcome
where
    O: NamespaceOpener,
    R: CommandRunner,
{
    info!(
        target = %config.target,
        command = %config.command_lossy(),
        strict = config.strict,
        "Joining namespaces"
    );

    let report = join_namespaces(&config.target, opener);

    if config.strict && !report.is_complete() {
        let failed: Vec<_> = report.failures().map(|a| a.kind).collect();
        warn!(
            target = %config.target,
            failed = ?failed,
            "Strict mode: not running command"
        );
        return ExecOutcome {
            report,
            command: None,
            exit_code: STRICT_EXIT_CODE,
        };
    }

    let status = runner.run(&config.command);
    debug!(status = ?status, "Command done");

    ExecOutcome {
        report,
        command: Some(status),
        exit_code: EXIT_CODE,
    }
}

fn serialize_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}
