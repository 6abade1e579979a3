//! Scoped form lock for the duration of a submission.

use scopeguard::ScopeGuard;

use super::bindings::FormBindings;
use crate::dom::Document;

/// Locks the form and returns a guard that unlocks it when dropped.
///
/// The guard dereferences to the document so the submission can keep
/// updating it. Unlocking runs on every exit path, including early
/// returns, `?` and unwinding panics.
pub fn lock_form<'a>(
    document: &'a mut Document,
    bindings: &FormBindings,
) -> ScopeGuard<&'a mut Document, impl FnOnce(&'a mut Document)> {
    let bindings = bindings.clone();
    bindings.set_locked(document, true);
    tracing::debug!("Form locked");
    scopeguard::guard(document, move |document| {
        bindings.set_locked(document, false);
        tracing::debug!("Form unlocked");
    })
}
