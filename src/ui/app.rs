use crate::store::Reducer;
use crate::todos::{RootProps, TodoStore, VisibilityFilter};
use crate::ui::connect::ConnectedRoot;
use crate::ui::editor::{EditorIntent, EditorReducer, EditorState, Focus};
use std::cell::Ref;
use std::rc::Rc;

/// Local reducer dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_local {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Root view state: the store connection plus local editor state.
pub struct App {
    should_quit: bool,
    root: ConnectedRoot,
    /// Focus, draft and cursor (local reducer, not part of the store).
    editor: EditorState,
}

impl App {
    pub fn new(store: Rc<TodoStore>) -> Self {
        Self {
            should_quit: false,
            root: ConnectedRoot::connect(store),
            editor: EditorState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn props(&self) -> Ref<'_, RootProps> {
        self.root.props()
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn focus(&self) -> Focus {
        self.editor.focus
    }

    pub fn dispatch_editor(&mut self, intent: EditorIntent) {
        dispatch_local!(self, editor, EditorReducer, intent);
    }

    pub fn on_paste(&mut self, text: &str) {
        if !self.editor.is_editing() {
            return;
        }
        for ch in text.chars().filter(|ch| *ch != '\n' && *ch != '\r') {
            self.dispatch_editor(EditorIntent::InsertChar(ch));
        }
    }

    /// Submit the draft as a new todo. Blank drafts are kept for editing.
    pub fn submit_draft(&mut self) {
        if self.editor.draft.trim().is_empty() {
            return;
        }
        let text = self.editor.draft.clone();
        self.root.callbacks().on_add_click(&text);
        self.dispatch_editor(EditorIntent::ClearDraft);
        self.sync_selection();
    }

    /// Toggle the todo under the list cursor.
    pub fn toggle_selected(&mut self) {
        let index = self.editor.selected;
        self.root.callbacks().on_todo_click(index);
        self.sync_selection();
    }

    pub fn set_filter(&mut self, filter: VisibilityFilter) {
        self.root.callbacks().on_filter_change(filter);
        self.sync_selection();
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.visible_len();
        let intent = if direction.is_negative() {
            EditorIntent::MoveUp { len }
        } else {
            EditorIntent::MoveDown { len }
        };
        self.dispatch_editor(intent);
    }

    fn visible_len(&self) -> usize {
        self.root.props().visible_todos.len()
    }

    /// Keep the list cursor inside the visible list after a store change.
    fn sync_selection(&mut self) {
        let len = self.visible_len();
        self.dispatch_editor(EditorIntent::Clamp { len });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todos::AppState;

    fn make_app(items: &[(&str, bool)]) -> (Rc<TodoStore>, App) {
        let state = AppState::preloaded(VisibilityFilter::ShowAll, items.iter().copied()).unwrap();
        let store = Rc::new(TodoStore::new(state));
        let app = App::new(Rc::clone(&store));
        (store, app)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.dispatch_editor(EditorIntent::InsertChar(ch));
        }
    }

    #[test]
    fn submit_draft_adds_todo_and_clears_input() {
        let (store, mut app) = make_app(&[]);
        type_text(&mut app, "buy milk");
        app.submit_draft();
        assert_eq!(store.state().todos[0].text(), "buy milk");
        assert!(app.editor().draft.is_empty());
        assert_eq!(app.props().visible_todos.len(), 1);
    }

    #[test]
    fn blank_draft_is_not_submitted() {
        let (store, mut app) = make_app(&[]);
        type_text(&mut app, "   ");
        app.submit_draft();
        assert_eq!(store.revision(), 0);
        assert_eq!(app.editor().draft, "   ");
    }

    #[test]
    fn selection_is_clamped_when_filter_hides_rows() {
        let (_store, mut app) = make_app(&[("a", false), ("b", false), ("c", true)]);
        app.dispatch_editor(EditorIntent::ToggleFocus);
        app.move_selection(-1);
        assert_eq!(app.editor().selected, 2);

        app.set_filter(VisibilityFilter::ShowActive);
        assert_eq!(app.editor().selected, 1);
    }

    #[test]
    fn toggle_selected_uses_visible_row() {
        let (store, mut app) = make_app(&[("a", true), ("b", false)]);
        app.set_filter(VisibilityFilter::ShowActive);
        app.dispatch_editor(EditorIntent::ToggleFocus);
        app.toggle_selected();
        let state = store.state();
        assert!(state.todos[0].completed());
        assert!(state.todos[1].completed());
        assert!(app.props().visible_todos.is_empty());
        assert_eq!(app.editor().selected, 0);
    }

    #[test]
    fn paste_only_applies_while_editing() {
        let (_store, mut app) = make_app(&[]);
        app.on_paste("milk\n");
        assert_eq!(app.editor().draft, "milk");
        app.dispatch_editor(EditorIntent::ToggleFocus);
        app.on_paste("eggs");
        assert_eq!(app.editor().draft, "milk");
        assert_eq!(app.focus(), Focus::List);
    }
}
