//! Exec command implementation
//!
//! The current process cannot safely join a mount namespace once it has
//! started threads, so the work is handed to a fresh copy of this binary:
//! the hook linked into it joins the target before `main` ever runs.

use anyhow::{Context, Result, bail};
use nsjoin_core::TargetPid;
use nsjoin_namespace::config::{ENV_CMD, ENV_LOG, ENV_PID, ENV_STRICT};
use nsjoin_namespace::status_ignoring_interrupts;
use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::process::ExitStatusExt;
use std::process::Command;
use tracing::{debug, error, info};

const SELF_EXE: &str = "/proc/self/exe";

pub fn execute(pid: &str, command: &[String], strict: bool, verbose: bool) -> Result<i32> {
    if std::env::var_os(ENV_PID).is_some() {
        // Reached main with the trigger set: the hook is not linked in
        bail!("{ENV_PID} is set but the load-time hook did not take over");
    }

    if !nsjoin_hook::has_run() {
        bail!("load-time hook is not active in this binary");
    }

    let target = TargetPid::from(pid);
    let command_line = command.join(" ");

    info!(target = %target, command = %command_line, "Entering namespaces");

    let mut child = Command::new(SELF_EXE);
    child.arg("exec").arg(pid).arg("--").args(command);
    child.envs(target_environ(&target));
    child.env(ENV_PID, target.as_os_str()).env(ENV_CMD, &command_line);

    if strict {
        child.env(ENV_STRICT, "1");
    }
    if verbose {
        child.env(ENV_LOG, "debug");
    }

    // Ctrl-C belongs to the command; this process only waits for it
    let status = status_ignoring_interrupts(&mut child)
        .with_context(|| format!("Failed to re-execute {SELF_EXE}"))?;

    debug!(?status, "Helper process finished");

    Ok(status
        .code()
        .unwrap_or_else(|| 128 + status.signal().unwrap_or_default()))
}

/// Environment of the target process, so the command sees the same variables
fn target_environ(target: &TargetPid) -> Vec<(OsString, OsString)> {
    let path = format!("/proc/{target}/environ");

    match std::fs::read(&path) {
        Ok(bytes) => parse_environ(&bytes),
        Err(e) => {
            error!(path = %path, error = %e, "Cannot read target environment");
            Vec::new()
        }
    }
}

/// Split a NUL-separated `KEY=value` block
fn parse_environ(bytes: &[u8]) -> Vec<(OsString, OsString)> {
    bytes
        .split(|b| *b == 0)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let eq = entry.iter().position(|b| *b == b'=')?;
            let (key, value) = (&entry[..eq], &entry[eq + 1..]);
            (!key.is_empty()).then(|| {
                (
                    OsStr::from_bytes(key).to_os_string(),
                    OsStr::from_bytes(value).to_os_string(),
                )
            })
        })
        .collect()
}
