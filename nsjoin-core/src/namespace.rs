//! The namespace kinds a target is joined through

use nix::sched::CloneFlags;
use serde::Serialize;
use std::fmt;

/// One of the five namespace kinds joined from a target process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceKind {
    /// Inter-process communication
    Ipc,
    /// Hostname and domain name
    Uts,
    /// Network stack
    Net,
    /// Process-ID space (takes effect for children)
    Pid,
    /// Mount table
    Mnt,
}

/// Order in which namespaces are joined.
///
/// `Mnt` must stay last: joining it swaps the `/proc` this process sees, so
/// any `/proc/<pid>/ns/*` path opened afterwards would resolve against the
/// target's mount table instead of ours.
pub const JOIN_ORDER: [NamespaceKind; 5] = [
    NamespaceKind::Ipc,
    NamespaceKind::Uts,
    NamespaceKind::Net,
    NamespaceKind::Pid,
    NamespaceKind::Mnt,
];

impl NamespaceKind {
    /// File name under `/proc/<pid>/ns/`
    #[must_use]
    pub const fn proc_name(self) -> &'static str {
        match self {
            Self::Ipc => "ipc",
            Self::Uts => "uts",
            Self::Net => "net",
            Self::Pid => "pid",
            Self::Mnt => "mnt",
        }
    }

    /// Clone flag identifying this kind to setns(2)
    #[must_use]
    pub const fn clone_flag(self) -> CloneFlags {
        match self {
            Self::Ipc => CloneFlags::CLONE_NEWIPC,
            Self::Uts => CloneFlags::CLONE_NEWUTS,
            Self::Net => CloneFlags::CLONE_NEWNET,
            Self::Pid => CloneFlags::CLONE_NEWPID,
            Self::Mnt => CloneFlags::CLONE_NEWNS,
        }
    }
}

impl fmt::Display for NamespaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.proc_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_order() {
        let names: Vec<_> = JOIN_ORDER.iter().map(|k| k.proc_name()).collect();
        assert_eq!(names, ["ipc", "uts", "net", "pid", "mnt"]);
    }

    #[test]
    fn test_mnt_is_last() {
        assert_eq!(JOIN_ORDER.last(), Some(&NamespaceKind::Mnt));
    }

    #[test]
    fn test_clone_flags_are_distinct() {
        let mut all = CloneFlags::empty();
        for kind in JOIN_ORDER {
            assert!(!all.intersects(kind.clone_flag()));
            all |= kind.clone_flag();
        }
        assert!(all.contains(CloneFlags::CLONE_NEWNS));
    }
}
