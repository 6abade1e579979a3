//! Storefront API access for customer registration.

mod client;
mod error;
mod fallback;
mod graphql;
mod types;

pub use client::{storefront_endpoint, StorefrontClient, ACCESS_TOKEN_HEADER};
pub use error::StorefrontError;
pub use fallback::{DemoFallback, DEMO_SUCCESS_MESSAGE, EMAIL_TAKEN_MESSAGE};
pub use graphql::{GraphQlRequest, GraphQlResponse, CUSTOMER_CREATE_MUTATION, GRAPHQL_ERROR_MESSAGE, SUCCESS_MESSAGE};
pub use types::{CustomerRecord, FieldFeedback, RegistrationInput, SecureString, SubmissionResult};
