//! Application constants.

/// Number of rows to move when pressing Page Up/Down.
pub const PAGE_SIZE: usize = 10;

/// Rows used by the detail pane's Info region (spacer, heading and four fields).
pub const INFO_REGION_HEIGHT: usize = 6;

/// Rows of the detail pane outside the preview and info regions ("Preview" heading).
pub const PREVIEW_MARGIN: usize = 1;

/// Event loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 250;
