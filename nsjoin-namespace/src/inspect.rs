//! Namespace identities of a process

use nsjoin_core::{JOIN_ORDER, NamespaceKind, TargetPid};
use serde::Serialize;
use std::fs;

/// Namespace identities (`net:[4026531840]` style links) for the five kinds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NamespaceInfo {
    /// IPC namespace ID
    pub ipc: Option<String>,
    /// UTS namespace ID
    pub uts: Option<String>,
    /// Network namespace ID
    pub net: Option<String>,
    /// PID namespace ID
    pub pid: Option<String>,
    /// Mount namespace ID
    pub mnt: Option<String>,
}

impl NamespaceInfo {
    /// Namespaces of the calling process
    #[must_use]
    pub fn current() -> Self {
        Self::for_pid(&TargetPid::from("self"))
    }

    /// Namespaces of `target`; unreadable links are left as `None`
    #[must_use]
    pub fn for_pid(target: &TargetPid) -> Self {
        let mut info = Self::default();

        for kind in JOIN_ORDER {
            let path = target.ns_path(kind);
            match fs::read_link(&path) {
                Ok(link) => *info.slot(kind) = Some(link.to_string_lossy().into_owned()),
                Err(e) => tracing::debug!(
                    kind = %kind,
                    path = %path.display(),
                    error = %e,
                    "Cannot read namespace link"
                ),
            }
        }

        info
    }

    /// Identity for a given kind
    #[must_use]
    pub fn get(&self, kind: NamespaceKind) -> Option<&str> {
        match kind {
            NamespaceKind::Ipc => self.ipc.as_deref(),
            NamespaceKind::Uts => self.uts.as_deref(),
            NamespaceKind::Net => self.net.as_deref(),
            NamespaceKind::Pid => self.pid.as_deref(),
            NamespaceKind::Mnt => self.mnt.as_deref(),
        }
    }

    fn slot(&mut self, kind: NamespaceKind) -> &mut Option<String> {
        match kind {
            NamespaceKind::Ipc => &mut self.ipc,
            NamespaceKind::Uts => &mut self.uts,
            NamespaceKind::Net => &mut self.net,
            NamespaceKind::Pid => &mut self.pid,
            NamespaceKind::Mnt => &mut self.mnt,
        }
    }

    /// Whether no link could be read at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        JOIN_ORDER.iter().all(|kind| self.get(*kind).is_none())
    }

    /// Kinds known on both sides and equal
    #[must_use]
    pub fn shared_with(&self, other: &Self) -> Vec<NamespaceKind> {
        JOIN_ORDER
            .into_iter()
            .filter(|kind| {
                matches!(
                    (self.get(*kind), other.get(*kind)),
                    (Some(a), Some(b)) if a == b
                )
            })
            .collect()
    }
}

impl std::fmt::Display for NamespaceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Namespace Info:")?;
        for kind in JOIN_ORDER {
            if let Some(id) = self.get(kind) {
                writeln!(f, "  {:<4}  {id}", kind.proc_name().to_uppercase())?;
            }
        }
        Ok(())
    }
}
