//! Base trait for UI state in the MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Cheap to replace (the reducer consumes the old state)
/// - Comparable (PartialEq for detecting changes)
/// - Defaulted to the state a freshly bound form starts in
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
