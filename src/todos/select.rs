//! Derived data: which todos are visible and what the root view receives.

use serde::Serialize;

use super::model::{AppState, Todo, TodoError, VisibilityFilter};

/// Todos visible under `filter`, in their original order.
pub fn select_todos(todos: &[Todo], filter: VisibilityFilter) -> Vec<&Todo> {
    todos.iter().filter(|todo| filter.matches(todo)).collect()
}

/// Props handed to the root view on every state change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RootProps {
    pub visible_todos: Vec<Todo>,
    pub visibility_filter: VisibilityFilter,
}

impl RootProps {
    /// Todo at `index` in the visible list.
    pub fn visible_todo(&self, index: usize) -> Option<&Todo> {
        self.visible_todos.get(index)
    }
}

/// Map the whole state to root props without memoization.
pub fn select(state: &AppState) -> RootProps {
    RootProps {
        visible_todos: select_todos(&state.todos, state.visibility_filter)
            .into_iter()
            .cloned()
            .collect(),
        visibility_filter: state.visibility_filter,
    }
}

/// Memoizing form of [`select`].
///
/// Keeps the last `(todos, filter)` input and only recomputes the visible list
/// when one of them changed.
#[derive(Debug, Default)]
pub struct VisibleTodosSelector {
    last_todos: Vec<Todo>,
    last_props: Option<RootProps>,
    recomputations: usize,
}

impl VisibleTodosSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, state: &AppState) -> &RootProps {
        let stale = match &self.last_props {
            Some(props) => {
                props.visibility_filter != state.visibility_filter
                    || self.last_todos != state.todos
            }
            None => true,
        };

        if stale {
            self.recomputations += 1;
            self.last_todos = state.todos.clone();
            self.last_props = Some(select(state));
        }
        self.last_props.get_or_insert_with(|| select(state))
    }

    /// How many times the visible list was actually recomputed.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

/// Pre-render check of the props contract.
///
/// Every todo must carry non-empty text and must be visible under the active
/// filter.
pub fn validate_props(props: &RootProps) -> Result<(), TodoError> {
    for todo in &props.visible_todos {
        if todo.text().trim().is_empty() {
            return Err(TodoError::EmptyText);
        }
        if !props.visibility_filter.matches(todo) {
            return Err(TodoError::FilterMismatch {
                id: todo.id(),
                filter: props.visibility_filter,
            });
        }
    }
    Ok(())
}
