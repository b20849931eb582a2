//! A todo list driven by a single store: actions go in, a reducer produces
//! the next state, and the connected views re-render from derived props.

pub mod config;
pub mod headless;
pub mod logging;
pub mod shutdown;
pub mod store;
pub mod todos;
pub mod ui;
