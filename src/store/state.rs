//! Base trait for state trees held by a store.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable by convention (Clone to create new states)
/// - Self-contained (all data needed to derive view props)
/// - Comparable (PartialEq for detecting changes)
pub trait State: Clone + PartialEq + Default + 'static {}
