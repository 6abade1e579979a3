//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (submitting the form)
/// - Outcomes of work started by an earlier intent (validation results,
///   storefront responses)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
