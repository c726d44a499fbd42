//! Color theme for the TUI.
//!
//! The theme is the single style context handed to every widget at render
//! time; there is no global formatting table.

use ratatui::style::{Color, Modifier, Style};

/// Theme variant (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Current theme variant.
    pub variant: ThemeVariant,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub error: Color,

    // Interactive elements
    /// Row under the cursor.
    pub cursor: Style,
    /// Marker for the confirmed (selected) row.
    pub selected_marker: Style,
    /// Section headings inside the detail pane ("Preview", "Info").
    pub section: Style,

    // UI elements
    pub border: Style,
    pub border_focused: Style,
    pub title: Style,
    pub help_key: Style,
    pub help_desc: Style,

    // Entry kinds
    pub directory: Style,
    pub file: Style,
    pub symlink: Style,
    pub executable: Style,

    // Header/Footer
    pub header: Style,
    pub footer: Style,
}

impl Theme {
    /// Dark theme using a slate-based palette.
    pub fn dark() -> Self {
        let slate_50 = Color::Rgb(248, 250, 252);
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_300 = Color::Rgb(203, 213, 225);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_800 = Color::Rgb(30, 41, 59);
        let slate_900 = Color::Rgb(15, 23, 42);

        let blue_400 = Color::Rgb(96, 165, 250);
        let blue_500 = Color::Rgb(59, 130, 246);
        let green_500 = Color::Rgb(34, 197, 94);
        let red_500 = Color::Rgb(239, 68, 68);
        let cyan_400 = Color::Rgb(34, 211, 238);
        let amber_500 = Color::Rgb(245, 158, 11);

        Self {
            variant: ThemeVariant::Dark,
            background: slate_900,
            foreground: slate_100,
            muted: slate_500,
            error: red_500,

            cursor: Style::new().bg(slate_700).fg(slate_50).add_modifier(Modifier::BOLD),
            selected_marker: Style::new().fg(amber_500).add_modifier(Modifier::BOLD),
            section: Style::new().add_modifier(Modifier::REVERSED | Modifier::BOLD),

            border: Style::new().fg(slate_600),
            border_focused: Style::new().fg(blue_400),
            title: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_400),

            directory: Style::new().fg(blue_500).add_modifier(Modifier::BOLD),
            file: Style::new().fg(slate_300),
            symlink: Style::new().fg(cyan_400),
            executable: Style::new().fg(green_500),

            header: Style::new().bg(slate_800).fg(slate_100).add_modifier(Modifier::BOLD),
            footer: Style::new().bg(slate_800).fg(slate_400),
        }
    }

    /// Light theme using a slate-based palette.
    pub fn light() -> Self {
        let slate_50 = Color::Rgb(248, 250, 252);
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_200 = Color::Rgb(226, 232, 240);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_800 = Color::Rgb(30, 41, 59);
        let slate_900 = Color::Rgb(15, 23, 42);

        let blue_600 = Color::Rgb(37, 99, 235);
        let blue_700 = Color::Rgb(29, 78, 216);
        let green_600 = Color::Rgb(22, 163, 74);
        let red_600 = Color::Rgb(220, 38, 38);
        let cyan_600 = Color::Rgb(8, 145, 178);
        let amber_600 = Color::Rgb(217, 119, 6);

        Self {
            variant: ThemeVariant::Light,
            background: slate_50,
            foreground: slate_900,
            muted: slate_500,
            error: red_600,

            cursor: Style::new().bg(slate_200).fg(slate_900).add_modifier(Modifier::BOLD),
            selected_marker: Style::new().fg(amber_600).add_modifier(Modifier::BOLD),
            section: Style::new().add_modifier(Modifier::REVERSED | Modifier::BOLD),

            border: Style::new().fg(slate_400),
            border_focused: Style::new().fg(blue_600),
            title: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_600),

            directory: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            file: Style::new().fg(slate_700),
            symlink: Style::new().fg(cyan_600),
            executable: Style::new().fg(green_600),

            header: Style::new().bg(slate_100).fg(slate_800).add_modifier(Modifier::BOLD),
            footer: Style::new().bg(slate_100).fg(slate_600),
        }
    }

    /// Create theme from variant.
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Toggle between dark and light themes.
    pub fn toggle(&self) -> Self {
        match self.variant {
            ThemeVariant::Dark => Self::light(),
            ThemeVariant::Light => Self::dark(),
        }
    }

    /// Style for an entry name based on its kind.
    pub fn entry_style(&self, entry: &gls_core::Entry) -> Style {
        if entry.is_dir() {
            self.directory
        } else if entry.is_symlink() {
            self.symlink
        } else if entry.is_executable() {
            self.executable
        } else {
            self.file
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
