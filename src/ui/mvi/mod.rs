//! Model-View-Intent (MVI) primitives.
//!
//! The form controller keeps its submit lifecycle as an MVI state so every
//! transition goes through one pure function.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Document
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of the lifecycle
//! - **Intent**: User actions or results of asynchronous work
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
