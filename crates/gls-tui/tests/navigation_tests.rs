//! End-to-end navigation tests driving `App` with real directories.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use gls_core::{DirectoryProvider, Entry, FsProvider, ListError};
use gls_tui::preview::{PreviewContent, MAX_PREVIEW_LINES};
use gls_tui::{App, KeyAction, Pane, PaneRole, PaneStatus, TuiConfig};
use tempfile::TempDir;

/// `/x` with `a.txt` and `sub/` (holding `inner.txt` and `deeper/`).
fn fixture() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("x");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "alpha\n").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("inner.txt"), "inner\n").unwrap();
    fs::create_dir(root.join("sub").join("deeper")).unwrap();
    (temp, root)
}

fn press(app: &mut App, actions: &[KeyAction]) {
    for action in actions {
        app.handle_action(*action);
        app.process_messages();
    }
}

fn names(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_scenario_a_preview_directory() {
    let (_temp, root) = fixture();
    let mut app = App::new(root.clone()).unwrap();

    assert_eq!(names(app.pane(PaneRole::Primary).entries()), ["..", "a.txt", "sub"]);

    press(&mut app, &[KeyAction::MoveDown, KeyAction::MoveDown]);
    assert_eq!(app.pane(PaneRole::Primary).cursor(), 2);

    press(&mut app, &[KeyAction::Confirm]);
    let primary = app.pane(PaneRole::Primary);
    assert_eq!(primary.selected(), Some(2));
    assert_eq!(primary.status(), PaneStatus::Selected);

    let selection = app.detail().selection().unwrap();
    assert_eq!(selection.source_dir, root);
    assert_eq!(selection.entry.name, "sub");

    match app.detail().content() {
        PreviewContent::Directory { entries } => {
            assert_eq!(names(entries), ["deeper", "inner.txt"]);
        }
        other => panic!("expected directory preview, got {other:?}"),
    }
    // Focus stays put until a descent
    assert_eq!(app.focus(), PaneRole::Primary);
}

#[test]
fn test_scenario_b_descend_into_secondary() {
    let (_temp, root) = fixture();
    let mut app = App::new(root.clone()).unwrap();

    press(
        &mut app,
        &[KeyAction::MoveDown, KeyAction::MoveDown, KeyAction::Confirm, KeyAction::Confirm],
    );

    let secondary = app.pane(PaneRole::Secondary);
    assert_eq!(secondary.path(), Some(root.join("sub").as_path()));
    assert_eq!(secondary.cursor(), 0);
    assert_eq!(secondary.selected(), None);
    assert_eq!(names(secondary.entries()), ["..", "deeper", "inner.txt"]);
    assert_eq!(app.focus(), PaneRole::Secondary);

    // The primary pane keeps its listing and selection
    assert_eq!(app.pane(PaneRole::Primary).path(), Some(root.as_path()));
    assert_eq!(app.pane(PaneRole::Primary).selected(), Some(2));
}

#[test]
fn test_descent_from_secondary_resets_it() {
    let (_temp, root) = fixture();
    let mut app = App::new(root.clone()).unwrap();

    press(
        &mut app,
        &[KeyAction::MoveDown, KeyAction::MoveDown, KeyAction::Confirm, KeyAction::Confirm],
    );

    // Secondary: [.., deeper, inner.txt]; open "deeper" from inside it
    press(&mut app, &[KeyAction::MoveDown, KeyAction::Confirm, KeyAction::Confirm]);

    let secondary = app.pane(PaneRole::Secondary);
    assert_eq!(secondary.path(), Some(root.join("sub").join("deeper").as_path()));
    assert_eq!(secondary.cursor(), 0);
    assert_eq!(secondary.selected(), None);
    assert_eq!(names(secondary.entries()), [".."]);

    // ".." walks back up
    press(&mut app, &[KeyAction::Confirm, KeyAction::Confirm]);
    assert_eq!(
        app.pane(PaneRole::Secondary).path(),
        Some(root.join("sub").as_path())
    );
}

#[test]
fn test_scenario_c_empty_directory() {
    let (_temp, root) = fixture();
    let empty = root.join("sub").join("deeper");
    let mut app = App::new(empty).unwrap();

    assert_eq!(names(app.pane(PaneRole::Primary).entries()), [".."]);
    press(&mut app, &[KeyAction::MoveDown, KeyAction::MoveDown]);
    assert_eq!(app.pane(PaneRole::Primary).cursor(), 0);
}

#[test]
fn test_scenario_d_missing_directory_is_in_pane_error() {
    let (_temp, root) = fixture();
    let mut app = App::new(root.clone()).unwrap();

    press(&mut app, &[KeyAction::MoveDown, KeyAction::MoveDown, KeyAction::Confirm]);
    fs::remove_dir_all(root.join("sub")).unwrap();
    press(&mut app, &[KeyAction::Confirm]);

    let secondary = app.pane(PaneRole::Secondary);
    assert!(secondary.entries().is_empty());
    assert!(secondary.error().is_some());
    assert_eq!(secondary.status(), PaneStatus::Browsing);
    assert_eq!(app.focus(), PaneRole::Secondary);
    assert!(app.detail().selection().is_none());
    assert!(app.is_running());
}

#[test]
fn test_preview_of_vanished_file_is_in_pane_error() {
    let (_temp, root) = fixture();
    let mut app = App::new(root.clone()).unwrap();

    // [.., a.txt, sub]
    press(&mut app, &[KeyAction::MoveDown]);
    fs::remove_file(root.join("a.txt")).unwrap();
    press(&mut app, &[KeyAction::Confirm]);

    assert!(matches!(app.detail().content(), PreviewContent::Error(_)));
    assert_eq!(app.detail().selection().unwrap().entry.name, "a.txt");
    assert_eq!(app.pane(PaneRole::Primary).selected(), Some(1));
    assert!(app.is_running());

    // The session carries on: the next entry previews normally
    press(&mut app, &[KeyAction::MoveDown, KeyAction::Confirm]);
    assert!(matches!(app.detail().content(), PreviewContent::Directory { .. }));
}

#[test]
fn test_set_path_twice_yields_identical_entries() {
    let (_temp, root) = fixture();
    let provider = FsProvider::new();
    let mut pane = Pane::new(PaneRole::Secondary);

    pane.set_path(root.join("sub"), &provider).unwrap();
    let first = pane.entries().to_vec();
    pane.cursor_down();
    pane.set_path(root.join("sub"), &provider).unwrap();

    assert_eq!(pane.entries(), first.as_slice());
    assert_eq!(pane.cursor(), 0);
}

#[test]
fn test_set_path_reports_not_found() {
    let (_temp, root) = fixture();
    let provider = FsProvider::new();
    let mut pane = Pane::new(PaneRole::Secondary);

    let result = pane.set_path(root.join("nope"), &provider);
    assert!(matches!(result, Err(ListError::NotFound { .. })));
    assert!(pane.error().is_some());

    pane.set_path(root.clone(), &provider).unwrap();
    assert!(pane.error().is_none());
    assert_eq!(pane.entries()[0].name, "..");
}

#[test]
fn test_startup_on_missing_directory_fails() {
    let (_temp, root) = fixture();
    assert!(App::new(root.join("nope")).is_err());
}

#[test]
fn test_file_preview_text_and_binary() {
    let (_temp, root) = fixture();
    fs::write(root.join("blob.bin"), [0u8, 1, 2, 3, 0, 255]).unwrap();
    let mut app = App::new(root.clone()).unwrap();

    // [.., a.txt, blob.bin, sub]
    press(&mut app, &[KeyAction::MoveDown, KeyAction::Confirm]);
    match app.detail().content() {
        PreviewContent::Text { lines } => assert_eq!(lines, &["alpha".to_string()]),
        other => panic!("expected text preview, got {other:?}"),
    }

    // A second Enter on a file changes nothing
    press(&mut app, &[KeyAction::Confirm]);
    assert_eq!(app.detail().selection().unwrap().entry.name, "a.txt");
    assert!(app.pane(PaneRole::Secondary).path().is_none());

    press(&mut app, &[KeyAction::MoveDown, KeyAction::Confirm]);
    assert_eq!(app.detail().content(), &PreviewContent::Binary { size: 6 });
}

#[test]
fn test_long_file_preview_is_capped() {
    let (_temp, root) = fixture();
    let body: String = (0..MAX_PREVIEW_LINES + 100).map(|i| format!("{i}\n")).collect();
    fs::write(root.join("a.txt"), body).unwrap();
    let mut app = App::new(root).unwrap();

    press(&mut app, &[KeyAction::MoveDown, KeyAction::Confirm]);

    match app.detail().content() {
        PreviewContent::Text { lines } => {
            assert_eq!(lines.len(), MAX_PREVIEW_LINES);
            assert_eq!(lines[MAX_PREVIEW_LINES - 1], (MAX_PREVIEW_LINES - 1).to_string());
        }
        other => panic!("expected text preview, got {other:?}"),
    }
}

#[test]
fn test_preview_line_budget_limits_rows() {
    let (_temp, root) = fixture();
    let body: String = (0..200).map(|i| format!("{i}\n")).collect();
    fs::write(root.join("a.txt"), body).unwrap();
    let mut app = App::new(root).unwrap();

    press(&mut app, &[KeyAction::MoveDown, KeyAction::Confirm]);

    let detail = app.detail();
    assert_eq!(detail.content().line_count(), 200);
    assert_eq!(detail.visible_preview_rows(40), 40 - 6 - 1);
    assert_eq!(detail.visible_preview_rows(5), 0);
}

/// Fixed in-memory tree: `/` holds `docs/` and `readme`, `/docs` holds `a`.
struct MemoryProvider;

impl MemoryProvider {
    fn entries(path: &Path) -> Option<Vec<Entry>> {
        let t = SystemTime::UNIX_EPOCH;
        match path.to_str()? {
            "/" => Some(vec![
                Entry::directory("docs", 0o755, t),
                Entry::file("readme", 10, 0o644, t),
            ]),
            "/docs" => Some(vec![Entry::file("a", 1, 0o644, t)]),
            _ => None,
        }
    }
}

impl DirectoryProvider for MemoryProvider {
    fn list(&self, path: &Path, include_parent: bool) -> Result<Vec<Entry>, ListError> {
        let mut entries = Self::entries(path).ok_or_else(|| ListError::NotFound {
            path: path.to_path_buf(),
        })?;
        if include_parent && path.parent().is_some() {
            entries.insert(0, Entry::parent(SystemTime::UNIX_EPOCH));
        }
        Ok(entries)
    }

    fn change_directory(&self, path: &Path) -> Result<PathBuf, ListError> {
        Ok(path.to_path_buf())
    }
}

#[test]
fn test_custom_provider() {
    let mut app =
        App::with_provider(PathBuf::from("/"), TuiConfig::default(), Box::new(MemoryProvider))
            .unwrap();

    // The root has no ".." entry
    assert_eq!(names(app.pane(PaneRole::Primary).entries()), ["docs", "readme"]);

    press(&mut app, &[KeyAction::Confirm]);
    match app.detail().content() {
        PreviewContent::Directory { entries } => assert_eq!(names(entries), ["a"]),
        other => panic!("expected directory preview, got {other:?}"),
    }

    press(&mut app, &[KeyAction::Confirm]);
    let secondary = app.pane(PaneRole::Secondary);
    assert_eq!(secondary.path(), Some(Path::new("/docs")));
    assert_eq!(names(secondary.entries()), ["..", "a"]);
}
