//! Join configuration, read from the environment

use nsjoin_core::TargetPid;
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

/// Identifier of the process whose namespaces are joined
pub const ENV_PID: &str = "ddocker_pid";

/// Shell command run once the joins are done
pub const ENV_CMD: &str = "ddocker_cmd";

/// Opt-in: skip the command and fail if any join failed
pub const ENV_STRICT: &str = "ddocker_strict";

/// Opt-in diagnostics: an `EnvFilter` directive such as `debug`
pub const ENV_LOG: &str = "ddocker_log";

/// Variables that must not leak into the command's environment
pub const TRIGGER_VARS: [&str; 3] = [ENV_PID, ENV_CMD, ENV_STRICT];

/// Target and command for one join-and-exec pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinConfig {
    /// Process whose namespaces are joined
    pub target: TargetPid,

    /// Command line handed to the shell
    pub command: OsString,

    /// Refuse to run the command unless all five joins succeeded
    pub strict: bool,
}

impl JoinConfig {
    /// Create a configuration (strict mode off)
    #[must_use]
    pub fn new(target: impl Into<TargetPid>, command: impl Into<OsString>) -> Self {
        Self {
            target: target.into(),
            command: command.into(),
            strict: false,
        }
    }

    /// Enable or disable strict mode
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Read the configuration from the process environment.
    ///
    /// Returns `None` when either `ddocker_pid` or `ddocker_cmd` is unset, in
    /// which case nothing must be joined or run.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    ///
    /// Only presence matters: an empty value counts as set.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let Some(target) = lookup(ENV_PID) else {
            tracing::trace!(var = ENV_PID, "not set, nothing to join");
            return None;
        };

        let Some(command) = lookup(ENV_CMD) else {
            tracing::trace!(var = ENV_CMD, "not set, nothing to join");
            return None;
        };

        let strict = lookup(ENV_STRICT).is_some_and(|v| is_enabled(&v));

        Some(Self::new(TargetPid::new(target), command).with_strict(strict))
    }

    /// Command line for display and logs
    #[must_use]
    pub fn command_lossy(&self) -> Cow<'_, str> {
        self.command.to_string_lossy()
    }
}

fn is_enabled(value: &OsStr) -> bool {
    value.to_str().is_some_and(|v| {
        let v = v.trim();
        v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes")
    })
}
