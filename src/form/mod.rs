//! Registration form controller and the pieces it is built from.
//!
//! ```text
//! host event ──→ dispatch ──→ listener table ──→ handler
//!                                                 │
//!            validation / strength / toggle ◄─────┤ (synchronous)
//!            submit flow (lock → request → banner → unlock) ◄┘ (async)
//! ```

pub mod bindings;
pub mod controller;
pub mod fields;
pub mod flow;
pub mod lock;
pub mod password;

pub use bindings::{Banner, FormBindings};
pub use controller::{
    DispatchOutcome, DomEvent, EventKind, Handler, Listener, RegistrationController, SubmitOutcome,
};
pub use fields::{FieldError, FieldName};
pub use flow::{FlowIntent, FlowReducer, FlowState};
pub use password::{PasswordRequirement, PasswordRequirementSet};
