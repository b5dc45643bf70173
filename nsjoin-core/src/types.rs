//! Core type definitions

use serde::{Serialize, Serializer};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;

use crate::NamespaceKind;

/// Identifier of the process whose namespaces are joined.
///
/// Kept exactly as received. It is expected to hold a decimal PID but is
/// never checked; a bad value only shows up as failed opens under `/proc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TargetPid(OsString);

impl TargetPid {
    /// Wrap a raw identifier
    #[must_use]
    pub fn new(id: impl Into<OsString>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier
    #[must_use]
    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }

    /// Path of this target's namespace file for `kind`.
    ///
    /// Built by concatenation, so the result always starts with `/proc/`
    /// even when the identifier contains slashes.
    #[must_use]
    pub fn ns_path(&self, kind: NamespaceKind) -> PathBuf {
        let mut path = OsString::from("/proc/");
        path.push(&self.0);
        path.push("/ns/");
        path.push(kind.proc_name());
        PathBuf::from(path)
    }
}

impl fmt::Display for TargetPid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl From<i32> for TargetPid {
    fn from(pid: i32) -> Self {
        Self(pid.to_string().into())
    }
}

impl From<&str> for TargetPid {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl Serialize for TargetPid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string_lossy())
    }
}

impl AsRef<OsStr> for TargetPid {
    fn as_ref(&self) -> &OsStr {
        &self.0
    }
}
