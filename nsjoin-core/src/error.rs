//! Error types for nsjoin

use std::path::PathBuf;

use thiserror::Error;

use crate::NamespaceKind;

/// nsjoin error types
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A `/proc/<pid>/ns/<kind>` file could not be opened
    #[error("cannot open {kind} namespace file {}: {source}", .path.display())]
    NamespaceAccess {
        /// Namespace kind being opened
        kind: NamespaceKind,
        /// Path that failed to open
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// setns(2) refused an opened namespace file
    #[error("cannot join {kind} namespace: {source}")]
    NamespaceJoin {
        /// Namespace kind being joined
        kind: NamespaceKind,
        /// Underlying errno
        #[source]
        source: nix::Error,
    },

    /// The configured command could not be started
    #[error("cannot run command `{command}`: {message}")]
    CommandExecution {
        /// Command line as configured
        command: String,
        /// Error message
        message: String,
    },
}

/// Result type alias for nsjoin operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_access_display() {
        let err = Error::NamespaceAccess {
            kind: NamespaceKind::Net,
            path: PathBuf::from("/proc/999999/ns/net"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        let msg = err.to_string();
        assert!(msg.contains("net namespace"));
        assert!(msg.contains("/proc/999999/ns/net"));
    }

    #[test]
    fn test_namespace_join_display() {
        let err = Error::NamespaceJoin {
            kind: NamespaceKind::Mnt,
            source: nix::errno::Errno::EPERM,
        };

        assert!(err.to_string().starts_with("cannot join mnt namespace"));
    }
}
