//! Main application state and logic.
//!
//! `App` is the view coordinator: it owns both navigation panes, the
//! detail pane and the focus, turns key actions into queued [`Message`]s
//! and applies them on the UI thread.

pub(crate) mod constants;
mod render;
pub mod state;

use std::path::PathBuf;
use std::time::Duration;

use color_eyre::eyre::WrapErr;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;

use gls_core::{DirectoryProvider, FsProvider};

use crate::detail::DetailPane;
use crate::event::KeyAction;
use crate::pane::{ConfirmOutcome, Pane, PaneRole};
use crate::theme::Theme;
use crate::TuiConfig;

use self::render::{render_app, RenderContext};
pub use self::state::{AppMode, Message};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Main application state.
pub struct App {
    /// Pane listing the starting directory.
    primary: Pane,
    /// Pane receiving directory descents.
    secondary: Pane,
    /// Preview of the last confirmed entry.
    detail: DetailPane,
    /// Pane receiving navigation keys.
    focus: PaneRole,
    /// Current mode.
    mode: AppMode,
    /// Color theme.
    theme: Theme,
    /// Listing source shared by all panes.
    provider: Box<dyn DirectoryProvider>,
    /// Message queue producer.
    tx: mpsc::UnboundedSender<Message>,
    /// Message queue consumer (UI thread only).
    rx: mpsc::UnboundedReceiver<Message>,
    /// Flag indicating UI needs redraw.
    needs_redraw: bool,
    /// Event loop tick interval.
    tick_interval: Duration,
}

impl App {
    /// Create a new application with default config.
    pub fn new(path: PathBuf) -> AppResult<Self> {
        Self::with_config(path, TuiConfig::default())
    }

    /// Create a new application listing `path` through the filesystem.
    pub fn with_config(path: PathBuf, config: TuiConfig) -> AppResult<Self> {
        let provider = FsProvider::with_config(config.listing.clone());
        Self::with_provider(path, config, Box::new(provider))
    }

    /// Create a new application with a custom listing provider.
    ///
    /// Fails if the starting directory cannot be listed.
    pub fn with_provider(
        path: PathBuf,
        config: TuiConfig,
        provider: Box<dyn DirectoryProvider>,
    ) -> AppResult<Self> {
        let entries = provider
            .list(&path, true)
            .wrap_err_with(|| format!("Cannot open {}", path.display()))?;

        tracing::info!(path = %path.display(), entries = entries.len(), "starting");

        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            primary: Pane::with_listing(PaneRole::Primary, path, entries),
            secondary: Pane::new(PaneRole::Secondary),
            detail: DetailPane::new(),
            focus: PaneRole::Primary,
            mode: AppMode::default(),
            theme: Theme::from_variant(config.theme),
            provider,
            tx,
            rx,
            needs_redraw: true,
            tick_interval: config.tick_interval,
        })
    }

    /// Get a pane by role.
    pub fn pane(&self, role: PaneRole) -> &Pane {
        match role {
            PaneRole::Primary => &self.primary,
            PaneRole::Secondary => &self.secondary,
        }
    }

    fn pane_mut(&mut self, role: PaneRole) -> &mut Pane {
        match role {
            PaneRole::Primary => &mut self.primary,
            PaneRole::Secondary => &mut self.secondary,
        }
    }

    /// Pane currently receiving navigation keys.
    pub fn focus(&self) -> PaneRole {
        self.focus
    }

    pub fn detail(&self) -> &DetailPane {
        &self.detail
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether the event loop should keep running.
    pub fn is_running(&self) -> bool {
        self.mode != AppMode::Quit
    }

    /// Whether a draw is pending.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Queue a message for the UI thread.
    pub fn send(&self, message: Message) {
        // The receiver lives in `self`, so this only fails during teardown
        if self.tx.send(message).is_err() {
            tracing::error!("message queue closed");
        }
    }

    /// Translate a key action into queued messages.
    pub fn handle_action(&mut self, action: KeyAction) {
        if action == KeyAction::ForceQuit {
            self.send(Message::Quit);
            return;
        }

        if self.mode == AppMode::Help {
            if matches!(
                action,
                KeyAction::ToggleHelp | KeyAction::Cancel | KeyAction::Quit
            ) {
                self.mode = AppMode::Normal;
                self.send(Message::Redraw);
            }
            return;
        }

        let focus = self.focus;
        let moved = match action {
            KeyAction::MoveDown => self.pane_mut(focus).cursor_down(),
            KeyAction::MoveUp => self.pane_mut(focus).cursor_up(),
            KeyAction::JumpToTop => self.pane_mut(focus).jump_to_top(),
            KeyAction::JumpToBottom => self.pane_mut(focus).jump_to_bottom(),
            KeyAction::PageUp => self.pane_mut(focus).page_up(),
            KeyAction::PageDown => self.pane_mut(focus).page_down(),
            KeyAction::Confirm => {
                match self.pane_mut(focus).confirm() {
                    ConfirmOutcome::Preview(selection) => {
                        self.send(Message::Preview(selection));
                    }
                    ConfirmOutcome::Descend { target, path } => {
                        self.send(Message::Descend { target, path });
                    }
                    ConfirmOutcome::Nothing => {}
                }
                true
            }
            KeyAction::NextPane => {
                self.send(Message::Focus(focus.next()));
                false
            }
            KeyAction::PrevPane => {
                self.send(Message::Focus(focus.prev()));
                false
            }
            KeyAction::ToggleHelp => {
                self.mode = AppMode::Help;
                true
            }
            KeyAction::ToggleTheme => {
                self.theme = self.theme.toggle();
                true
            }
            KeyAction::Quit => {
                self.send(Message::Quit);
                false
            }
            KeyAction::Cancel | KeyAction::ForceQuit | KeyAction::None => false,
        };

        if moved {
            self.send(Message::Redraw);
        }
    }

    /// Apply every queued message.
    pub fn process_messages(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            self.handle_message(message);
        }
    }

    fn handle_message(&mut self, message: Message) {
        match message {
            Message::Redraw => {}
            Message::Preview(selection) => {
                self.detail.select_entry(selection, self.provider.as_ref());
            }
            Message::Descend { target, path } => {
                let pane = match target {
                    PaneRole::Primary => &mut self.primary,
                    PaneRole::Secondary => &mut self.secondary,
                };
                // A failed listing leaves the error in the target pane and
                // the preview of the vanished directory is stale
                if pane.set_path(path, self.provider.as_ref()).is_err() {
                    self.detail.clear();
                }
                self.send(Message::Focus(target));
            }
            Message::Focus(role) => {
                tracing::debug!(pane = %role, "focus");
                self.focus = role;
            }
            Message::Quit => {
                tracing::info!("quit");
                self.mode = AppMode::Quit;
            }
        }
        self.needs_redraw = true;
    }

    /// Run the application with async event loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        let mut interval = tokio::time::interval(self.tick_interval);
        let mut events = EventStream::new();

        while self.is_running() {
            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                Some(event) = events.next() => {
                    match event? {
                        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                            self.handle_action(KeyAction::from_key_event(key_event));
                        }
                        Event::Resize(_, _) => self.needs_redraw = true,
                        _ => {}
                    }
                }

                _ = interval.tick() => {}
            }

            self.process_messages();
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let ctx = RenderContext {
            mode: self.mode,
            theme: &self.theme,
            primary: &self.primary,
            secondary: &self.secondary,
            detail: &self.detail,
            focus: self.focus,
        };
        render_app(&ctx, frame.area(), frame.buffer_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "one\ntwo\n").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub").join("inner.txt"), "inner").unwrap();
        temp
    }

    fn press(app: &mut App, action: KeyAction) {
        app.handle_action(action);
        app.process_messages();
    }

    #[test]
    fn test_startup_state() {
        let temp = fixture();
        let app = App::new(temp.path().to_path_buf()).unwrap();

        assert_eq!(app.focus(), PaneRole::Primary);
        assert_eq!(app.pane(PaneRole::Primary).path(), Some(temp.path()));
        assert_eq!(app.pane(PaneRole::Primary).cursor(), 0);
        assert!(app.pane(PaneRole::Secondary).path().is_none());
        assert!(app.pane(PaneRole::Secondary).entries().is_empty());
        assert!(app.detail().selection().is_none());
        assert!(app.is_running());
    }

    #[test]
    fn test_startup_fails_for_missing_directory() {
        let temp = TempDir::new().unwrap();
        let result = App::new(temp.path().join("missing"));
        assert!(result.is_err());
    }

    #[test]
    fn test_focus_switch() {
        let temp = fixture();
        let mut app = App::new(temp.path().to_path_buf()).unwrap();

        press(&mut app, KeyAction::NextPane);
        assert_eq!(app.focus(), PaneRole::Secondary);
        press(&mut app, KeyAction::PrevPane);
        assert_eq!(app.focus(), PaneRole::Primary);
    }

    #[test]
    fn test_quit_actions() {
        let temp = fixture();
        let mut app = App::new(temp.path().to_path_buf()).unwrap();
        press(&mut app, KeyAction::ForceQuit);
        assert!(!app.is_running());

        let mut app = App::new(temp.path().to_path_buf()).unwrap();
        press(&mut app, KeyAction::Quit);
        assert_eq!(app.mode(), AppMode::Quit);
    }

    #[test]
    fn test_help_mode_swallows_navigation() {
        let temp = fixture();
        let mut app = App::new(temp.path().to_path_buf()).unwrap();

        press(&mut app, KeyAction::ToggleHelp);
        assert_eq!(app.mode(), AppMode::Help);

        press(&mut app, KeyAction::MoveDown);
        assert_eq!(app.pane(PaneRole::Primary).cursor(), 0);

        press(&mut app, KeyAction::Cancel);
        assert_eq!(app.mode(), AppMode::Normal);

        // Ctrl-c works from help too
        press(&mut app, KeyAction::ToggleHelp);
        press(&mut app, KeyAction::ForceQuit);
        assert!(!app.is_running());
    }

    #[test]
    fn test_toggle_theme() {
        let temp = fixture();
        let mut app = App::new(temp.path().to_path_buf()).unwrap();
        let before = app.theme().variant;
        press(&mut app, KeyAction::ToggleTheme);
        assert_ne!(app.theme().variant, before);
    }

    #[test]
    fn test_messages_are_queued_until_processed() {
        let temp = fixture();
        let mut app = App::new(temp.path().to_path_buf()).unwrap();

        // ".." -> "a.txt"
        app.handle_action(KeyAction::MoveDown);
        app.handle_action(KeyAction::Confirm);
        assert!(app.detail().selection().is_none());

        app.process_messages();
        let selection = app.detail().selection().unwrap();
        assert_eq!(selection.entry.name, "a.txt");
        assert!(app.needs_redraw());
    }
}
