//! UI components and widgets.

mod detail_view;
mod help;
mod pane_view;

pub use detail_view::DetailView;
pub use help::HelpOverlay;
pub use pane_view::PaneView;

use std::time::SystemTime;

use chrono::{DateTime, Local};
use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Layout areas for the application.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub primary: Rect,
    pub secondary: Rect,
    pub detail: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area: header, three equal columns, footer.
    pub fn new(area: Rect) -> Self {
        let [header, content, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let [primary, secondary, detail] = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .areas(content);

        Self {
            header,
            primary,
            secondary,
            detail,
            footer,
        }
    }
}

/// Format a byte size in human-readable form.
pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Format a timestamp in local time.
pub fn format_time(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%Y-%m-%d %H:%M:%S %z").to_string()
}

/// Cut `text` to at most `width` display columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
