//! Application rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::detail::DetailPane;
use crate::pane::{Pane, PaneRole};
use crate::theme::Theme;
use crate::ui::{truncate_to_width, AppLayout, DetailView, HelpOverlay, PaneView};

use super::state::AppMode;

/// Render context containing all the state needed for rendering.
pub struct RenderContext<'a> {
    pub mode: AppMode,
    pub theme: &'a Theme,
    pub primary: &'a Pane,
    pub secondary: &'a Pane,
    pub detail: &'a DetailPane,
    pub focus: PaneRole,
}

impl RenderContext<'_> {
    fn focused_pane(&self) -> &Pane {
        match self.focus {
            PaneRole::Primary => self.primary,
            PaneRole::Secondary => self.secondary,
        }
    }
}

/// Main render function for the application.
pub fn render_app(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let base_style = Style::default()
        .bg(ctx.theme.background)
        .fg(ctx.theme.foreground);
    buf.set_style(area, base_style);

    let layout = AppLayout::new(area);

    render_header(ctx, layout.header, buf);

    PaneView::new(ctx.primary, ctx.theme, ctx.focus == PaneRole::Primary)
        .render(layout.primary, buf);
    PaneView::new(ctx.secondary, ctx.theme, ctx.focus == PaneRole::Secondary)
        .render(layout.secondary, buf);
    DetailView::new(ctx.detail, ctx.theme).render(layout.detail, buf);

    render_footer(ctx, layout.footer, buf);

    if ctx.mode == AppMode::Help {
        HelpOverlay::new(ctx.theme).render(area, buf);
    }
}

fn render_header(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let title = Span::styled(" gls ", ctx.theme.title.add_modifier(Modifier::BOLD));

    let location = ctx
        .focused_pane()
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let room = (area.width as usize).saturating_sub(title.width() + 2);
    let location = Span::styled(
        format!(" {} ", truncate_to_width(&location, room)),
        ctx.theme.header,
    );

    buf.set_style(area, ctx.theme.header);
    Line::from(vec![title, location]).render(area, buf);
}

fn render_footer(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let keys: [(&str, &str); 5] = [
        ("j/k", "Nav"),
        ("Enter", "Open"),
        ("Tab", "Pane"),
        ("?", "Help"),
        ("q", "Quit"),
    ];

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(format!(" {} ", key), ctx.theme.help_key),
                Span::styled(format!("{} ", desc), ctx.theme.help_desc),
            ]
        })
        .collect();

    buf.set_style(area, ctx.theme.footer);
    Line::from(spans).render(area, buf);
}
