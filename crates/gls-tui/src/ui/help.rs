//! Help overlay widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Widget};

use crate::event::get_help_sections;
use crate::theme::Theme;

/// Help overlay showing key bindings organized by section.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sections = get_help_sections();
        let content_rows: usize = sections.iter().map(|s| s.bindings.len() + 2).sum();

        let popup_width = 48.min(area.width.saturating_sub(4));
        let popup_height = (content_rows as u16 + 2).min(area.height.saturating_sub(2));

        let popup_x = (area.width.saturating_sub(popup_width)) / 2 + area.x;
        let popup_y = (area.height.saturating_sub(popup_height)) / 2 + area.y;
        let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(" Help - Press ? or Esc to close ")
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);
        buf.set_style(inner, self.theme.help_desc.bg(self.theme.background));

        let bottom = inner.y + inner.height;
        let mut y = inner.y;

        for section in &sections {
            if y >= bottom {
                break;
            }

            let title = Line::from(Span::styled(
                section.title,
                self.theme.section.add_modifier(Modifier::BOLD),
            ));
            buf.set_line(inner.x, y, &title, inner.width);
            y += 1;

            for binding in &section.bindings {
                if y >= bottom {
                    break;
                }
                let line = Line::from(vec![
                    Span::styled(format!("{:>12}", binding.keys), self.theme.help_key),
                    Span::styled(format!(" {}", binding.description), self.theme.help_desc),
                ]);
                buf.set_line(inner.x, y, &line, inner.width);
                y += 1;
            }

            y += 1;
        }
    }
}
