//! Directory entry types.

use std::fs::Metadata;
use std::time::SystemTime;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Name of the synthetic parent-directory entry.
pub const PARENT_NAME: &str = "..";

/// Type of a directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Regular file.
    File {
        /// Whether any execute bit is set.
        executable: bool,
    },
    /// Directory.
    Directory,
    /// Symbolic link.
    Symlink {
        /// Link target as stored in the link.
        target: CompactString,
        /// Whether the target resolves to a directory.
        to_dir: bool,
        /// Whether the link target exists.
        broken: bool,
    },
    /// Sockets, devices, fifos.
    Other,
}

/// One filesystem object within a listed directory.
///
/// Entries are built fresh on every listing and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// File name (not the full path).
    pub name: CompactString,
    /// Entry type.
    pub kind: EntryKind,
    /// Size in bytes.
    pub size: u64,
    /// Permission bits (`0o7777` range).
    pub mode: u32,
    /// Last modification time.
    pub modified: SystemTime,
}

impl Entry {
    /// Create a regular file entry.
    pub fn file(name: impl Into<CompactString>, size: u64, mode: u32, modified: SystemTime) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File {
                executable: mode & 0o111 != 0,
            },
            size,
            mode,
            modified,
        }
    }

    /// Create a directory entry.
    pub fn directory(name: impl Into<CompactString>, mode: u32, modified: SystemTime) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            size: 0,
            mode,
            modified,
        }
    }

    /// Create the synthetic `..` entry.
    pub fn parent(modified: SystemTime) -> Self {
        Self::directory(PARENT_NAME, 0, modified)
    }

    /// Build an entry from filesystem metadata.
    ///
    /// `metadata` must come from `symlink_metadata` so links are reported as
    /// links; `link_target` is the stat of the link target, if it resolved.
    pub fn from_metadata(
        name: impl Into<CompactString>,
        metadata: &Metadata,
        link: Option<(CompactString, Option<Metadata>)>,
    ) -> Self {
        let name = name.into();
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        let mode = permission_bits(metadata);
        let file_type = metadata.file_type();

        let kind = if file_type.is_symlink() {
            let (target, resolved) = link.unwrap_or_default();
            EntryKind::Symlink {
                target,
                to_dir: resolved.as_ref().is_some_and(Metadata::is_dir),
                broken: resolved.is_none(),
            }
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File {
                executable: mode & 0o111 != 0,
            }
        } else {
            EntryKind::Other
        };

        let size = if matches!(kind, EntryKind::Directory) {
            0
        } else {
            metadata.len()
        };

        Self {
            name,
            kind,
            size,
            mode,
            modified,
        }
    }

    /// Whether this entry can be listed and descended into.
    pub fn is_dir(&self) -> bool {
        match &self.kind {
            EntryKind::Directory => true,
            EntryKind::Symlink { to_dir, .. } => *to_dir,
            _ => false,
        }
    }

    /// Whether this is the synthetic parent entry.
    pub fn is_parent(&self) -> bool {
        self.name == PARENT_NAME
    }

    /// Whether this entry is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        matches!(self.kind, EntryKind::Symlink { .. })
    }

    /// Whether this entry is an executable regular file.
    pub fn is_executable(&self) -> bool {
        matches!(self.kind, EntryKind::File { executable: true })
    }

    /// Render the mode as an `ls`-style string such as `drwxr-xr-x`.
    pub fn mode_string(&self) -> String {
        let type_char = match self.kind {
            EntryKind::Directory => 'd',
            EntryKind::Symlink { .. } => 'l',
            EntryKind::File { .. } => '-',
            EntryKind::Other => '?',
        };

        let mut out = String::with_capacity(10);
        out.push(type_char);
        for shift in [6u32, 3, 0] {
            let bits = (self.mode >> shift) & 0o7;
            out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
            out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
            out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
        }
        out
    }
}

#[cfg(unix)]
fn permission_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn permission_bits(metadata: &Metadata) -> u32 {
    // Approximate unix bits from the readonly flag
    let base = if metadata.is_dir() { 0o755 } else { 0o644 };
    if metadata.permissions().readonly() {
        base & !0o222
    } else {
        base
    }
}
