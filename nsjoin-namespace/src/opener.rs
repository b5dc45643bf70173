//! Opening and joining namespace files

use nix::sched::setns;
use nsjoin_core::{Error, NamespaceKind, Result};
use std::fs::File;
use std::path::Path;

/// Access to namespace files and the setns(2) call.
///
/// A handle returned by [`open`](Self::open) is released when dropped, so the
/// joiner only has to let it go out of scope.
pub trait NamespaceOpener {
    /// Open namespace handle
    type Handle;

    /// Open the namespace file at `path` read-only
    fn open(&mut self, kind: NamespaceKind, path: &Path) -> Result<Self::Handle>;

    /// Move the calling process into the namespace behind `handle`
    fn join(&mut self, kind: NamespaceKind, handle: &Self::Handle) -> Result<()>;
}

/// Opener backed by the real `/proc` files and setns(2)
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcNamespaceOpener;

impl ProcNamespaceOpener {
    /// Create a new opener
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl NamespaceOpener for ProcNamespaceOpener {
    type Handle = File;

    fn open(&mut self, kind: NamespaceKind, path: &Path) -> Result<File> {
        File::open(path).map_err(|source| Error::NamespaceAccess {
            kind,
            path: path.to_path_buf(),
            source,
        })
    }

    fn join(&mut self, kind: NamespaceKind, handle: &File) -> Result<()> {
        // Passing the kind's flag makes the kernel reject a file of another type
        setns(handle, kind.clone_flag()).map_err(|source| Error::NamespaceJoin { kind, source })
    }
}
