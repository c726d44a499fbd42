//! Navigation pane state machine.
//!
//! A pane lists one directory and runs the two-stage confirm protocol:
//! the first Enter on an entry selects it and previews it in the detail
//! pane, a second Enter on the same directory opens it in the descent
//! target pane.

use std::path::{Path, PathBuf};

use gls_core::{resolve_child, DirectoryProvider, Entry, ListError};
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

use crate::app::constants::PAGE_SIZE;
use crate::detail::DetailSelection;

/// Which navigation pane this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, FromRepr)]
pub enum PaneRole {
    #[default]
    Primary,
    Secondary,
}

impl PaneRole {
    /// Pane that opens directories confirmed twice in this pane.
    pub fn descent_target(self) -> PaneRole {
        PaneRole::Secondary
    }

    /// Move to next pane (cyclic).
    pub fn next(self) -> Self {
        let next = (self as usize + 1) % Self::iter().count();
        Self::from_repr(next).unwrap_or_default()
    }

    /// Move to previous pane (cyclic).
    pub fn prev(self) -> Self {
        let count = Self::iter().count();
        let prev = (self as usize + count - 1) % count;
        Self::from_repr(prev).unwrap_or_default()
    }
}

/// Selection stage of a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneStatus {
    /// Nothing to point at.
    Browsing,
    /// Cursor is on an entry that has not been confirmed.
    Highlighted,
    /// Cursor is on the confirmed entry.
    Selected,
}

/// Result of a confirm on the cursor entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    /// Show the entry in the detail pane.
    Preview(DetailSelection),
    /// Open a directory in `target`.
    Descend { target: PaneRole, path: PathBuf },
    /// Nothing to do.
    Nothing,
}

/// One navigation pane.
#[derive(Debug, Clone)]
pub struct Pane {
    role: PaneRole,
    path: Option<PathBuf>,
    entries: Vec<Entry>,
    cursor: usize,
    selected: Option<usize>,
    error: Option<String>,
}

impl Pane {
    /// Create an empty pane with no directory.
    pub fn new(role: PaneRole) -> Self {
        Self {
            role,
            path: None,
            entries: Vec::new(),
            cursor: 0,
            selected: None,
            error: None,
        }
    }

    /// Create a pane from an existing listing.
    pub fn with_listing(role: PaneRole, path: impl Into<PathBuf>, entries: Vec<Entry>) -> Self {
        Self {
            path: Some(path.into()),
            entries,
            ..Self::new(role)
        }
    }

    pub fn role(&self) -> PaneRole {
        self.role
    }

    /// Directory shown by this pane.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the confirmed entry.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Listing error from the last `set_path`.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Entry under the cursor.
    pub fn highlighted(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    /// Current selection stage.
    pub fn status(&self) -> PaneStatus {
        if self.entries.is_empty() {
            PaneStatus::Browsing
        } else if self.selected == Some(self.cursor) {
            PaneStatus::Selected
        } else {
            PaneStatus::Highlighted
        }
    }

    fn max_index(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// Move the cursor down one row. Returns whether it moved.
    pub fn cursor_down(&mut self) -> bool {
        if self.cursor < self.max_index() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor up one row. Returns whether it moved.
    pub fn cursor_up(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn jump_to_top(&mut self) -> bool {
        self.move_to(0)
    }

    pub fn jump_to_bottom(&mut self) -> bool {
        self.move_to(self.max_index())
    }

    pub fn page_up(&mut self) -> bool {
        self.move_to(self.cursor.saturating_sub(PAGE_SIZE))
    }

    pub fn page_down(&mut self) -> bool {
        self.move_to((self.cursor + PAGE_SIZE).min(self.max_index()))
    }

    fn move_to(&mut self, index: usize) -> bool {
        let moved = index != self.cursor;
        self.cursor = index;
        moved
    }

    /// Advance the two-stage confirm protocol for the cursor entry.
    pub fn confirm(&mut self) -> ConfirmOutcome {
        let Some(dir) = self.path.as_deref() else {
            return ConfirmOutcome::Nothing;
        };
        let Some(entry) = self.entries.get(self.cursor) else {
            return ConfirmOutcome::Nothing;
        };

        if self.selected == Some(self.cursor) {
            if entry.is_dir() {
                let path = resolve_child(dir, &entry.name);
                tracing::debug!(pane = %self.role, path = %path.display(), "descend");
                return ConfirmOutcome::Descend {
                    target: self.role.descent_target(),
                    path,
                };
            }
            return ConfirmOutcome::Nothing;
        }

        let selection = DetailSelection::new(dir, entry.clone());
        self.selected = Some(self.cursor);
        tracing::debug!(pane = %self.role, index = self.cursor, "select");
        ConfirmOutcome::Preview(selection)
    }

    /// List `path` and reset cursor and selection.
    ///
    /// On failure the pane keeps `path` but shows the error instead of
    /// entries.
    pub fn set_path(
        &mut self,
        path: impl Into<PathBuf>,
        provider: &dyn DirectoryProvider,
    ) -> Result<(), ListError> {
        let path = path.into();
        self.cursor = 0;
        self.selected = None;

        let result = provider.list(&path, true);
        self.path = Some(path);
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(pane = %self.role, error = %e, "listing failed");
                self.entries.clear();
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Return to the empty startup state.
    pub fn clear(&mut self) {
        *self = Self::new(self.role);
    }

    /// First visible row for a viewport of `height` rows.
    pub fn scroll_offset(&self, height: usize) -> usize {
        if height == 0 {
            return self.cursor;
        }
        (self.cursor + 1).saturating_sub(height)
    }
}
