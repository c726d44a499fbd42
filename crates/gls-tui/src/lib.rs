//! Terminal user interface for gls.
//!
//! This crate provides the three-pane directory explorer, built with
//! ratatui.
//!
//! # Overview
//!
//! - **Primary pane** - lists the starting directory
//! - **Secondary pane** - lists directories opened from either pane
//! - **Detail pane** - previews the selected file or directory and shows
//!   its metadata
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! gls_tui::run(PathBuf::from("/path/to/explore")).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `↑`/`↓` (or `k`/`j`) - Move the cursor
//! - `Enter` - Preview the entry; press again on a directory to open it
//! - `Tab` - Switch pane
//! - `?` - Help
//! - `q` / `Ctrl-c` - Quit

pub mod app;
pub mod detail;
mod event;
pub mod pane;
pub mod preview;
mod theme;
mod ui;

use std::time::Duration;

use gls_core::ListingConfig;

pub use app::{App, AppResult};
pub use detail::{DetailPane, DetailSelection};
pub use event::KeyAction;
pub use pane::{ConfirmOutcome, Pane, PaneRole, PaneStatus};
pub use theme::{Theme, ThemeVariant};

/// Configuration for the TUI.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Initial color theme.
    pub theme: ThemeVariant,
    /// Listing options for the filesystem provider.
    pub listing: ListingConfig,
    /// Event loop tick interval.
    pub tick_interval: Duration,
}

impl TuiConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial theme.
    pub fn with_theme(mut self, theme: ThemeVariant) -> Self {
        self.theme = theme;
        self
    }

    /// Set the listing options.
    pub fn with_listing(mut self, listing: ListingConfig) -> Self {
        self.listing = listing;
        self
    }

    /// Set the event loop tick interval.
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            listing: ListingConfig::default(),
            tick_interval: Duration::from_millis(app::constants::TICK_INTERVAL_MS),
        }
    }
}

/// Run the TUI application with default configuration.
pub fn run(path: std::path::PathBuf) -> AppResult<()> {
    run_with_config(path, TuiConfig::default())
}

/// Run the TUI application.
///
/// The starting directory is listed before the terminal is taken over, so
/// an unreadable start path is reported on the console.
pub fn run_with_config(path: std::path::PathBuf, config: TuiConfig) -> AppResult<()> {
    let app = App::with_config(path, config)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let terminal = ratatui::init();
    let result = rt.block_on(app.run(terminal));
    ratatui::restore();

    result
}
