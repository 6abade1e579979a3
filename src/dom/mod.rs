//! Minimal in-memory document the registration form is bound to.
//!
//! Only the slice of DOM behaviour the controller needs is modelled:
//! element lookup by id, class and tag, `closest`, class lists, form
//! control state, inline `display` style and text content.

mod document;
mod node;

pub use document::Document;
pub use node::{Element, ElementSpec, NodeId};
