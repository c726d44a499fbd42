//! Application state types and messages.

use std::path::PathBuf;

use crate::detail::DetailSelection;
use crate::pane::PaneRole;

/// Application mode representing the current UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Help,
    Quit,
}

/// Work queued for the UI thread.
///
/// Key handlers only enqueue messages; the event loop drains them in order
/// before the next draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Something visible changed.
    Redraw,
    /// Push a selection into the detail pane.
    Preview(DetailSelection),
    /// Open `path` in the `target` pane.
    Descend { target: PaneRole, path: PathBuf },
    /// Move focus to a pane.
    Focus(PaneRole),
    /// Leave the event loop.
    Quit,
}
