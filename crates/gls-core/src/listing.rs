//! Directory listing provider.
//!
//! The provider is the only place the navigation core touches the
//! filesystem for listings. Panes and the detail pane take it as a
//! `&dyn DirectoryProvider` so tests can swap in fixtures.

use std::cmp::Ordering;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use compact_str::CompactString;

use crate::config::ListingConfig;
use crate::entry::{Entry, EntryKind, PARENT_NAME};
use crate::error::ListError;

/// Source of directory listings.
pub trait DirectoryProvider {
    /// List the entries of `path` in a stable order.
    ///
    /// When `include_parent` is set and `path` is not a filesystem root,
    /// the first entry is the synthetic `..` entry.
    fn list(&self, path: &Path, include_parent: bool) -> Result<Vec<Entry>, ListError>;

    /// Change the process working directory and return the resolved path.
    fn change_directory(&self, path: &Path) -> Result<PathBuf, ListError>;
}

/// Provider backed by `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct FsProvider {
    config: ListingConfig,
}

impl FsProvider {
    /// Create a provider with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with the given configuration.
    pub fn with_config(config: ListingConfig) -> Self {
        Self { config }
    }

    fn read_entry(&self, dir_entry: &fs::DirEntry) -> std::io::Result<Entry> {
        let name = CompactString::from(dir_entry.file_name().to_string_lossy());
        let metadata = fs::symlink_metadata(dir_entry.path())?;

        let link = if metadata.file_type().is_symlink() {
            let target = fs::read_link(dir_entry.path())
                .map(|t| CompactString::from(t.to_string_lossy()))
                .unwrap_or_default();
            Some((target, fs::metadata(dir_entry.path()).ok()))
        } else {
            None
        };

        let mut entry = Entry::from_metadata(name, &metadata, link);
        if !self.config.follow_symlinks {
            if let EntryKind::Symlink { to_dir, .. } = &mut entry.kind {
                *to_dir = false;
            }
        }
        Ok(entry)
    }

    fn sort(&self, entries: &mut [Entry]) {
        let directories_first = self.config.directories_first;
        entries.sort_by(|a, b| {
            if directories_first {
                match (a.is_dir(), b.is_dir()) {
                    (true, false) => return Ordering::Less,
                    (false, true) => return Ordering::Greater,
                    _ => {}
                }
            }
            a.name.cmp(&b.name)
        });
    }
}

impl DirectoryProvider for FsProvider {
    fn list(&self, path: &Path, include_parent: bool) -> Result<Vec<Entry>, ListError> {
        let metadata = fs::metadata(path).map_err(|e| ListError::io(path, e))?;
        if !metadata.is_dir() {
            return Err(ListError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(path).map_err(|e| ListError::io(path, e))? {
            let dir_entry = match dir_entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            if self
                .config
                .should_skip_hidden(&dir_entry.file_name().to_string_lossy())
            {
                continue;
            }

            match self.read_entry(&dir_entry) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    // Entry vanished or became unreadable between readdir and stat
                    tracing::warn!(path = %dir_entry.path().display(), error = %e, "skipping entry");
                }
            }
        }

        self.sort(&mut entries);
        if let Some(max) = self.config.max_entries {
            entries.truncate(max);
        }

        if include_parent {
            if let Some(parent) = path.parent() {
                let modified = fs::metadata(parent)
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH);
                entries.insert(0, Entry::parent(modified));
            }
        }

        tracing::debug!(path = %path.display(), count = entries.len(), "listed directory");
        Ok(entries)
    }

    fn change_directory(&self, path: &Path) -> Result<PathBuf, ListError> {
        std::env::set_current_dir(path).map_err(|e| ListError::io(path, e))?;
        std::env::current_dir().map_err(|e| ListError::io(path, e))
    }
}

/// Join an entry name onto a directory, resolving `..` to the parent.
///
/// The parent is taken lexically when the last component is a name; a
/// path ending in `.` or `..` gets `..` appended. The root directory is its
/// own parent.
pub fn resolve_child(dir: &Path, name: &str) -> PathBuf {
    if name != PARENT_NAME {
        return dir.join(name);
    }

    match dir.components().next_back() {
        Some(Component::Normal(_)) => match dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
        Some(Component::RootDir | Component::Prefix(_)) => dir.to_path_buf(),
        Some(Component::CurDir | Component::ParentDir) | None => dir.join(PARENT_NAME),
    }
}
