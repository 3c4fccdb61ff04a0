//! App-level flows: commands, module keys and exports without the terminal

mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use delegate_dash::app::{App, InputMode, StatusLevel};
use delegate_dash::core::{Action, Command, Module, UiEvent};
use delegate_dash::domain::{Catalog, ViewKey};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn builtin_app() -> App {
    let mut app = App::new(Catalog::builtin());
    app.select_view("dashboard");
    app
}

fn run_command(app: &mut App, input: &str) {
    app.enter_command();
    assert_eq!(app.input_mode, InputMode::Command);
    app.command.input = input.to_string();
    app.apply_command();
}

fn press(app: &mut App, code: KeyCode) {
    let mut ctx = std::mem::take(&mut app.ctx);
    let action = app
        .active_module_mut()
        .map(|module| module.handle_key(key(code), &mut ctx))
        .unwrap_or(Action::None);
    app.ctx = ctx;
    app.apply_action(action);
}

#[test]
fn test_dashboard_activity_rows() {
    let mut app = builtin_app();
    assert_eq!(app.active_module_id(), Some("dashboard"));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.open_record().map(|r| r.id), Some(1));
    app.close_meeting();

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(!app.is_modal_open());

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.open_record().map(|r| r.id), Some(2));
}

#[test]
fn test_view_commands_switch_panels() {
    let mut app = builtin_app();
    run_command(&mut app, "meetings");
    assert_eq!(app.active_module_id(), Some("meetings"));
    assert_eq!(app.surface.title, "Meetings");

    run_command(&mut app, "view insights");
    assert_eq!(app.active_module_id(), Some("insights"));

    run_command(&mut app, "view reports");
    assert_eq!(app.active_module_id(), None);
    assert!(app.surface.active_panels.is_empty());
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_show_and_close_commands() {
    let mut app = builtin_app();
    run_command(&mut app, "show 3");
    assert!(app.is_modal_open());
    assert_eq!(app.surface.modal_title, "Graduate Student Housing Forum");

    run_command(&mut app, "show 999");
    assert_eq!(app.open_record().map(|r| r.id), Some(3));

    run_command(&mut app, "close");
    assert!(!app.is_modal_open());
    run_command(&mut app, "close");
    assert!(!app.is_modal_open());
}

#[test]
fn test_meetings_enter_opens_selected() {
    let mut app = builtin_app();
    app.select_view("meetings");
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.open_record().map(|r| r.id), Some(2));
}

#[test]
fn test_insights_enter_opens_source_meeting() {
    let mut app = builtin_app();
    app.select_view("insights");
    press(&mut app, KeyCode::Enter);
    let top = app.catalog.ranked_issues()[0].meeting;
    assert_eq!(app.open_record().map(|r| r.id), top);
}

#[test]
fn test_backdrop_event_from_app() {
    let mut app = builtin_app();
    app.open_meeting(1);
    app.dispatch(UiEvent::ContentClick);
    assert!(app.is_modal_open());
    app.dispatch(UiEvent::BackdropClick);
    assert!(!app.is_modal_open());
}

#[test]
fn test_fixture_catalog_substitutes_builtin() {
    let mut app = App::new(common::fixture_catalog());
    app.select_view("overview");
    assert_eq!(app.surface.subtitle, "Everything at a glance");
    assert_eq!(app.state.active_nav, Some(ViewKey::from("overview")));
    assert_eq!(app.active_module_id(), None);

    app.cycle_view(true);
    assert_eq!(app.surface.title, "Reports");
    app.cycle_view(true);
    assert!(app.surface.active_panels.is_empty());
    assert_eq!(app.surface.title, "");
}

#[test]
fn test_export_commands_write_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = builtin_app();
    app.export_dir = Some(dir.path().to_path_buf());

    run_command(&mut app, "export");
    assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Warn));

    app.open_meeting(1);
    let action = app.execute_command(&Command::Export);
    assert!(matches!(action, Action::Notify(_, _)));
    app.apply_action(action);
    assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Info));

    run_command(&mut app, "export-actions");
    assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Info));

    let mut extensions: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| {
            entry
                .unwrap()
                .path()
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
        })
        .collect();
    extensions.sort();
    assert_eq!(extensions, vec!["csv".to_string(), "json".to_string()]);
}

#[test]
fn test_help_and_quit_commands() {
    let mut app = builtin_app();
    run_command(&mut app, "help");
    assert!(app.help_open);
    run_command(&mut app, "q");
    assert!(app.should_quit);
}
