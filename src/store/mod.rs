//! Unidirectional data flow primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Listeners ──→ View
//!    ↑                                            │
//!    └────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable-by-convention state tree
//! - **Action**: Tagged description of an intended change
//! - **Reducer**: Pure function that transforms state based on actions
//! - **Store**: Owns the state, runs the reducer, notifies subscribers

mod action;
mod container;
mod reducer;
mod state;

pub use action::Action;
pub use container::{ListenerId, Store, Subscription};
pub use reducer::Reducer;
pub use state::State;
