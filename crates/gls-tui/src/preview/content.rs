//! Preview content types and loading.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use gls_core::{DirectoryProvider, Entry, EntryKind, ListError};
use thiserror::Error;

use crate::detail::DetailSelection;

/// Maximum file size to attempt preview (10 MB).
const MAX_PREVIEW_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum lines kept in memory for a text preview.
pub const MAX_PREVIEW_LINES: usize = 500;

/// Number of bytes to inspect for binary detection.
const BINARY_CHECK_BYTES: usize = 1024;

/// Tab size for display.
const TAB_SIZE: usize = 4;

/// Error that can occur during preview loading.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// File is too large to preview.
    #[error("File too large: {0} bytes")]
    TooLarge(u64),

    /// Entry type has no preview (sockets, devices, fifos).
    #[error("No preview available")]
    Unsupported,

    /// File could not be opened or read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory could not be listed.
    #[error(transparent)]
    Listing(#[from] ListError),
}

impl PreviewError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Content that can be displayed in the preview region.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PreviewContent {
    /// Decoded text lines.
    Text { lines: Vec<String> },
    /// Binary file (not rendered as text).
    Binary { size: u64 },
    /// Directory listing.
    Directory { entries: Vec<Entry> },
    /// Error message.
    Error(String),
    /// Nothing selected.
    #[default]
    Empty,
}

impl PreviewContent {
    /// Number of rows the content would occupy without a budget.
    pub fn line_count(&self) -> usize {
        match self {
            Self::Text { lines, .. } => lines.len(),
            Self::Directory { entries } => entries.len(),
            Self::Binary { .. } | Self::Error(_) => 1,
            Self::Empty => 0,
        }
    }
}

/// Loads preview content for a detail selection.
pub struct PreviewLoader;

impl PreviewLoader {
    /// Load the preview for a selection.
    ///
    /// Directories are listed through `provider` without a parent entry;
    /// files are read from disk.
    pub fn load(
        selection: &DetailSelection,
        provider: &dyn DirectoryProvider,
    ) -> Result<PreviewContent, PreviewError> {
        let path = selection.path();

        if selection.entry.is_dir() {
            let entries = provider.list(&path, false)?;
            return Ok(PreviewContent::Directory { entries });
        }

        match selection.entry.kind {
            EntryKind::File { .. } | EntryKind::Symlink { .. } => Self::load_file(&path),
            EntryKind::Directory | EntryKind::Other => Err(PreviewError::Unsupported),
        }
    }

    /// Load preview for a regular file.
    fn load_file(path: &Path) -> Result<PreviewContent, PreviewError> {
        let file = File::open(path).map_err(|e| PreviewError::io(path, e))?;
        let metadata = file.metadata().map_err(|e| PreviewError::io(path, e))?;

        if !metadata.is_file() {
            return Err(PreviewError::Unsupported);
        }
        if metadata.len() > MAX_PREVIEW_SIZE {
            return Err(PreviewError::TooLarge(metadata.len()));
        }

        let mut reader = BufReader::new(file);
        if Self::is_binary(&mut reader).map_err(|e| PreviewError::io(path, e))? {
            return Ok(PreviewContent::Binary {
                size: metadata.len(),
            });
        }

        reader
            .seek(SeekFrom::Start(0))
            .map_err(|e| PreviewError::io(path, e))?;

        let mut lines = Vec::new();
        let mut line_buf = Vec::new();

        while lines.len() < MAX_PREVIEW_LINES
            && reader
                .read_until(b'\n', &mut line_buf)
                .map_err(|e| PreviewError::io(path, e))?
                > 0
        {
            lines.push(clean_line(&String::from_utf8_lossy(&line_buf)));
            line_buf.clear();
        }

        Ok(PreviewContent::Text { lines })
    }

    /// Check if file content appears to be binary.
    fn is_binary(reader: &mut BufReader<File>) -> std::io::Result<bool> {
        let mut buf = [0u8; BINARY_CHECK_BYTES];
        let bytes_read = reader.read(&mut buf)?;
        Ok(buf[..bytes_read].contains(&0))
    }
}

/// Strip line endings, expand tabs and drop control characters.
fn clean_line(raw: &str) -> String {
    let trimmed = raw.trim_end_matches(['\r', '\n']);
    let mut out = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '\t' => out.push_str(&" ".repeat(TAB_SIZE)),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}
