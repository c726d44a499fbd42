//! Detail pane state.
//!
//! The detail pane is passive: panes push a [`DetailSelection`] into it and
//! it loads a preview of the selected entry. Preview failures become an
//! in-pane error instead of ending the session.

use std::path::PathBuf;

use gls_core::{resolve_child, DirectoryProvider, Entry};

use crate::app::constants::{INFO_REGION_HEIGHT, PREVIEW_MARGIN};
use crate::preview::{PreviewContent, PreviewLoader};

/// The entry currently previewed and the directory it lives in.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSelection {
    /// Directory containing the entry.
    pub source_dir: PathBuf,
    /// The selected entry.
    pub entry: Entry,
}

impl DetailSelection {
    /// Create a new selection.
    pub fn new(source_dir: impl Into<PathBuf>, entry: Entry) -> Self {
        Self {
            source_dir: source_dir.into(),
            entry,
        }
    }

    /// Full path of the selected entry.
    pub fn path(&self) -> PathBuf {
        resolve_child(&self.source_dir, &self.entry.name)
    }
}

/// Number of preview rows available in a detail area of the given height.
pub fn preview_line_budget(viewport_height: usize) -> usize {
    viewport_height.saturating_sub(INFO_REGION_HEIGHT + PREVIEW_MARGIN)
}

/// Detail pane: preview and metadata for the selected entry.
#[derive(Debug, Default)]
pub struct DetailPane {
    selection: Option<DetailSelection>,
    content: PreviewContent,
}

impl DetailPane {
    /// Create an empty detail pane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection and load its preview.
    pub fn select_entry(&mut self, selection: DetailSelection, provider: &dyn DirectoryProvider) {
        tracing::debug!(path = %selection.path().display(), "previewing entry");

        self.content = match PreviewLoader::load(&selection, provider) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %selection.path().display(), error = %e, "preview failed");
                PreviewContent::Error(e.to_string())
            }
        };
        self.selection = Some(selection);
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.selection = None;
        self.content = PreviewContent::Empty;
    }

    /// Current selection, if any.
    pub fn selection(&self) -> Option<&DetailSelection> {
        self.selection.as_ref()
    }

    /// Loaded preview content.
    pub fn content(&self) -> &PreviewContent {
        &self.content
    }

    /// Rows of preview shown in a detail area of `viewport_height` rows.
    pub fn visible_preview_rows(&self, viewport_height: usize) -> usize {
        self.content
            .line_count()
            .min(preview_line_budget(viewport_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    #[test]
    fn test_preview_line_budget() {
        assert_eq!(preview_line_budget(30), 30 - INFO_REGION_HEIGHT - PREVIEW_MARGIN);
        assert_eq!(preview_line_budget(3), 0);
        assert_eq!(preview_line_budget(0), 0);
    }

    #[test]
    fn test_selection_path_resolves_parent() {
        let sel = DetailSelection::new("/tmp/x", Entry::parent(SystemTime::UNIX_EPOCH));
        assert_eq!(sel.path(), PathBuf::from("/tmp"));

        let sel = DetailSelection::new(
            "/tmp/x",
            Entry::file("a.txt", 1, 0o644, SystemTime::UNIX_EPOCH),
        );
        assert_eq!(sel.path(), PathBuf::from("/tmp/x/a.txt"));
    }

    #[test]
    fn test_new_detail_is_empty() {
        let detail = DetailPane::new();
        assert!(detail.selection().is_none());
        assert_eq!(detail.content(), &PreviewContent::Empty);
        assert_eq!(detail.visible_preview_rows(40), 0);
    }
}
