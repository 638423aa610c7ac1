use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskboard_tui::app::{App, AppMode};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn tasks(app: &App, board_index: usize) -> Vec<String> {
    app.store.board_at(board_index).unwrap().tasks.clone()
}

/// Two boards: "Todo" = [A, B, C], "In Progress" = [X]. Cursor on Todo/A.
fn sample_app() -> App {
    let mut app = App::new();
    let todo = app.store.add_board("Todo".to_string());
    let doing = app.store.add_board("In Progress".to_string());
    for t in ["A", "B", "C"] {
        app.store.add_task(todo, t.to_string()).unwrap();
    }
    app.store.add_task(doing, "X".to_string()).unwrap();
    app.board_selection.set(Some(0));
    app.task_selection.set(Some(0));
    app
}

#[test]
fn test_pick_up_and_drop_across_boards() {
    let mut app = sample_app();

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.mode, AppMode::DragTask);
    assert!(app.drag.is_some());

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, AppMode::Normal);
    assert!(app.drag.is_none());
    assert_eq!(tasks(&app, 0), vec!["A", "C"]);
    assert_eq!(tasks(&app, 1), vec!["B", "X"]);

    // Selection followed the task to its destination.
    assert_eq!(app.board_selection.get(), Some(1));
    assert_eq!(app.task_selection.get(), Some(0));
}

#[test]
fn test_drop_on_trash_deletes_everywhere() {
    let mut app = sample_app();

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('t'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(tasks(&app, 0), vec!["B", "C"]);
    assert_eq!(tasks(&app, 1), vec!["X"]);
    assert_eq!(app.mode, AppMode::Normal);
}

#[test]
fn test_escape_cancels_drag_without_mutation() {
    let mut app = sample_app();

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Esc);

    assert_eq!(tasks(&app, 0), vec!["A", "B", "C"]);
    assert_eq!(tasks(&app, 1), vec!["X"]);
    assert!(app.drag.is_none());
    assert_eq!(app.mode, AppMode::Normal);
}

#[test]
fn test_same_list_reorder_via_keys() {
    let mut app = sample_app();

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(tasks(&app, 0), vec!["B", "C", "A"]);
    assert_eq!(app.task_selection.get(), Some(2));
}

#[test]
fn test_drop_on_own_row_changes_nothing() {
    let mut app = sample_app();

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);

    assert_eq!(tasks(&app, 0), vec!["A", "B", "C"]);
    assert!(app.recent_updates.is_empty());
}

#[test]
fn test_append_into_empty_board() {
    let mut app = App::new();
    let todo = app.store.add_board("Todo".to_string());
    app.store.add_board("Done".to_string());
    app.store.add_task(todo, "A".to_string()).unwrap();
    app.board_selection.set(Some(0));
    app.task_selection.set(Some(0));

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    assert!(tasks(&app, 0).is_empty());
    assert_eq!(tasks(&app, 1), vec!["A"]);
}

#[test]
fn test_cannot_pick_up_from_empty_board() {
    let mut app = App::new();
    app.store.add_board("Empty".to_string());
    app.board_selection.set(Some(0));

    press(&mut app, KeyCode::Char(' '));

    assert_eq!(app.mode, AppMode::Normal);
    assert!(app.drag.is_none());
}

#[test]
fn test_append_slot_on_source_list_is_noop() {
    let mut app = sample_app();

    // Carry the last task below its own list's tail and drop.
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(tasks(&app, 0), vec!["A", "B", "C"]);
    assert!(app.recent_updates.is_empty());
}
