//! Reducer for the todo application state.

use crate::store::Reducer;

use super::action::TodoAction;
use super::model::{AppState, Todo};

/// Pure, total reducer for [`AppState`].
///
/// Actions that cannot apply (blank text, unknown id, unknown kind) return
/// the state unchanged.
pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = AppState;
    type Action = TodoAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            TodoAction::AddTodo { text } => match Todo::new(state.next_id(), &text) {
                Ok(todo) => {
                    state.todos.push(todo);
                    state
                }
                Err(err) => {
                    tracing::warn!(%err, "Ignoring ADD_TODO");
                    state
                }
            },
            TodoAction::CompleteTodo { id } => {
                match state.todos.iter_mut().find(|todo| todo.id() == id) {
                    Some(todo) => todo.toggle(),
                    None => tracing::debug!(%id, "COMPLETE_TODO for unknown id"),
                }
                state
            }
            TodoAction::SetVisibilityFilter { filter } => AppState {
                visibility_filter: filter,
                ..state
            },
            TodoAction::Unknown => state,
        }
    }
}
