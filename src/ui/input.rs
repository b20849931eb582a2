use crate::todos::VisibilityFilter;
use crate::ui::app::App;
use crate::ui::editor::{EditorIntent, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.dispatch_editor(EditorIntent::ToggleFocus);
            return;
        }
        KeyCode::F(n) => {
            if let Some(filter) = filter_for_slot(n as usize) {
                app.set_filter(filter);
            }
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Input => handle_input_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Backspace => app.dispatch_editor(EditorIntent::Backspace),
        KeyCode::Esc => app.dispatch_editor(EditorIntent::ClearDraft),
        KeyCode::Down => app.dispatch_editor(EditorIntent::ToggleFocus),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_editor(EditorIntent::InsertChar(ch))
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('a') | KeyCode::Char('i') => app.dispatch_editor(EditorIntent::ToggleFocus),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            if let Some(filter) = ch.to_digit(10).and_then(|n| filter_for_slot(n as usize)) {
                app.set_filter(filter);
            }
        }
        _ => {}
    }
}

/// Filter for a 1-based footer slot.
fn filter_for_slot(slot: usize) -> Option<VisibilityFilter> {
    slot.checked_sub(1)
        .and_then(|index| VisibilityFilter::ALL.get(index))
        .copied()
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todos::{AppState, TodoStore};
    use crossterm::event::KeyEventState;
    use std::rc::Rc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..press(KeyCode::Char(ch))
        }
    }

    fn make_app() -> (Rc<TodoStore>, App) {
        let store = Rc::new(TodoStore::new(AppState::default()));
        let app = App::new(Rc::clone(&store));
        (store, app)
    }

    fn type_line(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_key(app, press(KeyCode::Char(ch)));
        }
        handle_key(app, press(KeyCode::Enter));
    }

    #[test]
    fn typing_and_enter_adds_todo() {
        let (store, mut app) = make_app();
        type_line(&mut app, "a");
        type_line(&mut app, "b");
        let state = store.state();
        assert_eq!(state.todos.len(), 2);
        assert_eq!(state.todos[1].text(), "b");
    }

    #[test]
    fn list_keys_toggle_and_filter() {
        let (store, mut app) = make_app();
        type_line(&mut app, "a");
        type_line(&mut app, "b");
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char(' ')));
        handle_key(&mut app, press(KeyCode::Char('2')));

        assert_eq!(store.state().visibility_filter, VisibilityFilter::ShowActive);
        let props = app.props();
        assert_eq!(props.visible_todos.len(), 1);
        assert_eq!(props.visible_todos[0].text(), "b");
    }

    #[test]
    fn function_keys_select_filters_from_any_focus() {
        let (store, mut app) = make_app();
        handle_key(&mut app, press(KeyCode::F(3)));
        assert_eq!(store.state().visibility_filter, VisibilityFilter::ShowCompleted);
        handle_key(&mut app, press(KeyCode::F(9)));
        assert_eq!(store.state().visibility_filter, VisibilityFilter::ShowCompleted);
    }

    #[test]
    fn q_is_text_while_editing_but_quits_in_list() {
        let (_store, mut app) = make_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.editor().draft, "q");

        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_q_quits() {
        let (_store, mut app) = make_app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let (_store, mut app) = make_app();
        let mut key = press(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.editor().draft.is_empty());
    }
}
