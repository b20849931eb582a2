use serde::{Deserialize, Serialize};

use crate::store::Action;

use super::model::{TodoId, VisibilityFilter};

/// Actions understood by [`super::TodoReducer`].
///
/// Serialized with an internal `type` tag, e.g.
/// `{"type":"ADD_TODO","text":"buy milk"}`. Unrecognized tags deserialize to
/// [`TodoAction::Unknown`], which reduces to the unchanged state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    AddTodo { text: String },
    CompleteTodo { id: TodoId },
    SetVisibilityFilter { filter: VisibilityFilter },
    #[serde(other)]
    Unknown,
}

impl Action for TodoAction {}

impl TodoAction {
    pub fn add_todo(text: impl Into<String>) -> Self {
        TodoAction::AddTodo { text: text.into() }
    }

    pub fn complete_todo(id: TodoId) -> Self {
        TodoAction::CompleteTodo { id }
    }

    pub fn set_visibility_filter(filter: VisibilityFilter) -> Self {
        TodoAction::SetVisibilityFilter { filter }
    }
}
