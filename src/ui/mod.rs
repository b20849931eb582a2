//! Terminal front end: the connected root view and its child widgets.

pub mod add_todo;
pub mod app;
pub mod connect;
pub mod editor;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod todo_list;
