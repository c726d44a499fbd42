//! File preview for the detail pane.
//!
//! Provides decoded text previews for files and listings for directories.

mod content;

pub use content::{PreviewContent, PreviewError, PreviewLoader, MAX_PREVIEW_LINES};
