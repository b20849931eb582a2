//! Base trait for actions dispatched to a store.

use std::fmt::Debug;

/// Marker trait for action values.
///
/// Actions represent:
/// - User interactions (key presses, submitted input)
/// - Replayed commands (headless scripts)
///
/// Actions are immutable; reducers consume them to produce new states.
pub trait Action: Debug + 'static {}
