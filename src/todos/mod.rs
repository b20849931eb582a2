//! Todo list feature module.
//!
//! - `model.rs` - Todo, VisibilityFilter and the AppState tree
//! - `action.rs` - Actions (ADD_TODO, COMPLETE_TODO, SET_VISIBILITY_FILTER)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `select.rs` - Derived view data and the pre-render props check

mod action;
mod model;
mod reducer;
mod select;

pub use action::TodoAction;
pub use model::{AppState, Todo, TodoError, TodoId, VisibilityFilter};
pub use reducer::TodoReducer;
pub use select::{select, select_todos, validate_props, RootProps, VisibleTodosSelector};

/// The application store type.
pub type TodoStore = crate::store::Store<TodoReducer>;
