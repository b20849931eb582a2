//! Local UI state for the todo screen.
//!
//! Kept out of the application store: focus, the draft being typed and the
//! list cursor only matter to the terminal view.
//!
//! - `state.rs` - Focus, draft text and selected row
//! - `intent.rs` - Key-level edits (insert, backspace, move)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::{EditorState, Focus};
