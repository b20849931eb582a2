use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::State;

/// Errors raised where todo data enters the application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Todo text must not be empty")]
    EmptyText,

    #[error("Unknown visibility filter '{value}' (expected SHOW_ALL, SHOW_COMPLETED or SHOW_ACTIVE)")]
    InvalidFilter { value: String },

    #[error("Todo {id} is not visible under {filter}")]
    FilterMismatch { id: TodoId, filter: VisibilityFilter },
}

/// Stable identifier of a todo, assigned by the reducer on add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    id: TodoId,
    text: String,
    completed: bool,
}

impl Todo {
    /// Build an active todo. Surrounding whitespace is trimmed and the
    /// remaining text must be non-empty.
    pub fn new(id: TodoId, text: impl AsRef<str>) -> Result<Self, TodoError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }
        Ok(Self {
            id,
            text: text.to_string(),
            completed: false,
        })
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Which todos the list shows. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    #[default]
    ShowAll,
    ShowCompleted,
    ShowActive,
}

impl VisibilityFilter {
    /// Footer order.
    pub const ALL: [VisibilityFilter; 3] = [
        VisibilityFilter::ShowAll,
        VisibilityFilter::ShowActive,
        VisibilityFilter::ShowCompleted,
    ];

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            VisibilityFilter::ShowAll => true,
            VisibilityFilter::ShowCompleted => todo.completed(),
            VisibilityFilter::ShowActive => !todo.completed(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VisibilityFilter::ShowAll => "SHOW_ALL",
            VisibilityFilter::ShowCompleted => "SHOW_COMPLETED",
            VisibilityFilter::ShowActive => "SHOW_ACTIVE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VisibilityFilter::ShowAll => "All",
            VisibilityFilter::ShowCompleted => "Completed",
            VisibilityFilter::ShowActive => "Active",
        }
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisibilityFilter {
    type Err = TodoError;

    /// Accepts the canonical names (`SHOW_ACTIVE`) in any case, plus the
    /// short forms `all`, `active` and `completed`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "SHOW_ALL" | "ALL" => Ok(VisibilityFilter::ShowAll),
            "SHOW_COMPLETED" | "COMPLETED" => Ok(VisibilityFilter::ShowCompleted),
            "SHOW_ACTIVE" | "ACTIVE" => Ok(VisibilityFilter::ShowActive),
            _ => Err(TodoError::InvalidFilter {
                value: value.to_string(),
            }),
        }
    }
}

/// The whole application state. Everything shown on screen is derived
/// from these two fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AppState {
    pub todos: Vec<Todo>,
    pub visibility_filter: VisibilityFilter,
}

impl State for AppState {}

impl AppState {
    /// Id the next added todo receives.
    pub fn next_id(&self) -> TodoId {
        self.todos
            .iter()
            .map(|todo| todo.id().0 + 1)
            .max()
            .map(TodoId)
            .unwrap_or(TodoId(0))
    }

    pub fn todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id() == id)
    }

    /// Build a preloaded state from `(text, completed)` pairs, assigning ids
    /// in order.
    pub fn preloaded<I, T>(filter: VisibilityFilter, todos: I) -> Result<Self, TodoError>
    where
        I: IntoIterator<Item = (T, bool)>,
        T: AsRef<str>,
    {
        let todos = todos
            .into_iter()
            .enumerate()
            .map(|(index, (text, completed))| {
                Todo::new(TodoId(index as u64), text).map(|todo| todo.with_completed(completed))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            todos,
            visibility_filter: filter,
        })
    }
}
