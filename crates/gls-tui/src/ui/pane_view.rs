//! Navigation pane widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use crate::pane::Pane;
use crate::theme::Theme;
use crate::ui::truncate_to_width;

/// Width of the selection marker column.
const MARKER_WIDTH: usize = 2;

/// Renders one [`Pane`] as a bordered list.
pub struct PaneView<'a> {
    pane: &'a Pane,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> PaneView<'a> {
    pub fn new(pane: &'a Pane, theme: &'a Theme, focused: bool) -> Self {
        Self {
            pane,
            theme,
            focused,
        }
    }

    fn title(&self) -> String {
        let path = self
            .pane
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| self.pane.role().to_string());
        if self.focused {
            format!(" ● {path} ")
        } else {
            format!(" {path} ")
        }
    }

    fn render_placeholder(&self, inner: Rect, buf: &mut Buffer) {
        let line = if let Some(error) = self.pane.error() {
            Line::styled(error.to_string(), Style::default().fg(self.theme.error))
        } else if self.pane.path().is_none() {
            Line::styled("(no directory)", Style::default().fg(self.theme.muted))
        } else {
            Line::styled("(empty)", Style::default().fg(self.theme.muted))
        };
        Widget::render(line, Rect::new(inner.x, inner.y, inner.width, 1), buf);
    }
}

impl Widget for PaneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };
        let title_width = area.width.saturating_sub(2) as usize;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(truncate_to_width(&self.title(), title_width))
            .title_style(self.theme.title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let entries = self.pane.entries();
        if entries.is_empty() {
            self.render_placeholder(inner, buf);
            return;
        }

        let viewport_height = inner.height as usize;
        let offset = self.pane.scroll_offset(viewport_height);
        let end = (offset + viewport_height).min(entries.len());
        let name_width = (inner.width as usize).saturating_sub(MARKER_WIDTH);

        for (row, index) in (offset..end).enumerate() {
            let entry = &entries[index];
            let y = inner.y + row as u16;

            let marker = if self.pane.selected() == Some(index) {
                Span::styled("▶ ", self.theme.selected_marker)
            } else {
                Span::raw("  ")
            };

            let mut name = entry.name.to_string();
            if entry.is_dir() && !entry.is_parent() {
                name.push('/');
            }

            let mut name_style = self.theme.entry_style(entry);
            if let gls_core::EntryKind::Symlink { broken: true, .. } = entry.kind {
                name_style = name_style.add_modifier(Modifier::DIM);
            }

            let line = Line::from(vec![
                marker,
                Span::styled(truncate_to_width(&name, name_width), name_style),
            ]);
            let row_area = Rect::new(inner.x, y, inner.width, 1);
            if index == self.pane.cursor() {
                let cursor_style = if self.focused {
                    self.theme.cursor
                } else {
                    self.theme.cursor.add_modifier(Modifier::DIM)
                };
                buf.set_style(row_area, cursor_style);
            }
            Widget::render(line, row_area, buf);
        }
    }
}
