//! Detail pane widget: preview region followed by the info region.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use gls_core::Entry;

use crate::detail::{preview_line_budget, DetailPane};
use crate::preview::PreviewContent;
use crate::theme::Theme;
use crate::ui::{format_size, format_time, truncate_to_width};

/// Renders the [`DetailPane`].
pub struct DetailView<'a> {
    detail: &'a DetailPane,
    theme: &'a Theme,
}

impl<'a> DetailView<'a> {
    pub fn new(detail: &'a DetailPane, theme: &'a Theme) -> Self {
        Self { detail, theme }
    }

    fn preview_lines(&self, budget: usize, width: usize) -> Vec<Line<'static>> {
        match self.detail.content() {
            PreviewContent::Text { lines } => lines
                .iter()
                .take(budget)
                .map(|l| Line::raw(truncate_to_width(l, width)))
                .collect(),
            PreviewContent::Directory { entries } => entries
                .iter()
                .take(budget)
                .map(|e| self.entry_line(e, width))
                .collect(),
            PreviewContent::Binary { size } => vec![Line::styled(
                format!("Binary file ({})", format_size(*size)),
                Style::default().fg(self.theme.muted),
            )],
            PreviewContent::Error(message) => vec![Line::styled(
                truncate_to_width(message, width),
                Style::default().fg(self.theme.error),
            )],
            PreviewContent::Empty => Vec::new(),
        }
        .into_iter()
        .take(budget)
        .collect()
    }

    fn entry_line(&self, entry: &Entry, width: usize) -> Line<'static> {
        let mut name = entry.name.to_string();
        if entry.is_dir() {
            name.push('/');
        }
        Line::styled(truncate_to_width(&name, width), self.theme.entry_style(entry))
    }

    fn info_lines(&self, entry: &Entry, width: usize) -> Vec<Line<'static>> {
        let field = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(label, self.theme.help_desc),
                Span::raw(truncate_to_width(&value, width.saturating_sub(label.len()))),
            ])
        };

        vec![
            Line::raw(""),
            Line::styled("Info", self.theme.section),
            field("name: ", entry.name.to_string()),
            field("mode: ", entry.mode_string()),
            field(
                "size: ",
                format!("{} ({})", entry.size, format_size(entry.size)),
            ),
            field("modTime: ", format_time(entry.modified)),
        ]
    }
}

impl Widget for DetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = self
            .detail
            .selection()
            .map(|s| format!(" {} ", s.entry.name))
            .unwrap_or_else(|| " Detail ".to_string());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(truncate_to_width(&title, area.width.saturating_sub(2) as usize))
            .title_style(self.theme.title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = inner.width as usize;

        let Some(selection) = self.detail.selection() else {
            let hint = Line::styled(
                truncate_to_width("Press Enter to preview an entry", width),
                Style::default().fg(self.theme.muted),
            );
            Widget::render(hint, Rect::new(inner.x, inner.y, inner.width, 1), buf);
            return;
        };

        let budget = preview_line_budget(inner.height as usize);

        let mut lines = vec![Line::styled("Preview", self.theme.section)];
        lines.extend(self.preview_lines(budget, width));
        lines.extend(self.info_lines(&selection.entry, width));

        let bottom = inner.y + inner.height;
        for (row, line) in lines.into_iter().enumerate() {
            let y = inner.y + row as u16;
            if y >= bottom {
                break;
            }
            Widget::render(line, Rect::new(inner.x, y, inner.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::DetailSelection;
    use gls_core::FsProvider;
    use std::fs;
    use tempfile::TempDir;

    fn rows(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_placeholder_without_selection() {
        let detail = DetailPane::new();
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        DetailView::new(&detail, &theme).render(area, &mut buf);

        assert!(rows(&buf).iter().any(|r| r.contains("Press Enter")));
    }

    #[test]
    fn test_text_preview_respects_budget() {
        let temp = TempDir::new().unwrap();
        let body: String = (0..50).map(|i| format!("line-{i:02}\n")).collect();
        fs::write(temp.path().join("long.txt"), body).unwrap();

        let provider = FsProvider::new();
        let entries = gls_core::DirectoryProvider::list(&provider, temp.path(), false).unwrap();
        let entry = entries.into_iter().find(|e| e.name == "long.txt").unwrap();

        let mut detail = DetailPane::new();
        detail.select_entry(DetailSelection::new(temp.path(), entry), &provider);

        let theme = Theme::dark();
        let area = Rect::new(0, 0, 40, 22);
        let mut buf = Buffer::empty(area);
        DetailView::new(&detail, &theme).render(area, &mut buf);

        // Heading sits on the first inner row in the section style
        let heading = &buf[(1, 1)];
        assert_eq!(heading.symbol(), "P");
        assert!(heading.modifier.contains(theme.section.add_modifier));

        let rendered = rows(&buf);
        let shown = rendered.iter().filter(|r| r.contains("line-")).count();
        assert_eq!(shown, preview_line_budget(20));
        assert!(rendered.iter().any(|r| r.contains("name: long.txt")));
        assert!(rendered.iter().any(|r| r.contains("modTime: ")));
    }
}
