//! `customerCreate` request and response shapes.

use serde::{Deserialize, Serialize};

use super::error::StorefrontError;
use super::types::{CustomerRecord, FieldFeedback, RegistrationInput, SubmissionResult};
use crate::form::bindings::GENERIC_FAILURE_MESSAGE;
use crate::form::fields::map_backend_field;

pub const CUSTOMER_CREATE_MUTATION: &str = r#"
      mutation customerCreate($input: CustomerCreateInput!) {
        customerCreate(input: $input) {
          customer {
            id
            firstName
            lastName
            email
          }
          customerUserErrors {
            code
            field
            message
          }
        }
      }
    "#;

pub const SUCCESS_MESSAGE: &str =
    "Account created successfully! Please check your email to verify your account.";
pub const GRAPHQL_ERROR_MESSAGE: &str = "GraphQL error occurred";

/// `{query, variables}` body posted to the GraphQL endpoint.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'static str,
    pub variables: CustomerCreateVariables<'a>,
}

#[derive(Debug, Serialize)]
pub struct CustomerCreateVariables<'a> {
    pub input: CustomerCreateInput<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreateInput<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub accepts_marketing: bool,
}

impl<'a> GraphQlRequest<'a> {
    pub fn customer_create(input: &'a RegistrationInput) -> Self {
        Self {
            query: CUSTOMER_CREATE_MUTATION,
            variables: CustomerCreateVariables {
                input: CustomerCreateInput {
                    first_name: &input.first_name,
                    last_name: &input.last_name,
                    email: &input.email,
                    password: input.password.expose(),
                    accepts_marketing: true,
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<CustomerCreateData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreateData {
    #[serde(default)]
    pub customer_create: Option<CustomerCreatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreatePayload {
    #[serde(default)]
    pub customer: Option<CustomerRecord>,
    #[serde(default)]
    pub customer_user_errors: Option<Vec<CustomerUserError>>,
}

#[derive(Debug, Deserialize)]
pub struct CustomerUserError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub field: Option<Vec<String>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl GraphQlResponse {
    /// Turns a decoded response into a submission result.
    ///
    /// Backend-reported problems (top-level `errors`, `customerUserErrors`)
    /// become failed results. A response without a `customerCreate` payload
    /// is malformed and reported as a decode error.
    pub fn into_result(self) -> Result<SubmissionResult, StorefrontError> {
        if let Some(errors) = self.errors {
            tracing::error!(count = errors.len(), "GraphQL errors");
            let message = errors
                .into_iter()
                .next()
                .and_then(|e| e.message)
                .unwrap_or_else(|| GRAPHQL_ERROR_MESSAGE.to_string());
            return Ok(SubmissionResult::failed(message));
        }

        let payload = self
            .data
            .and_then(|data| data.customer_create)
            .ok_or_else(|| StorefrontError::Decode("response has no customerCreate payload".to_string()))?;

        let first_error = payload
            .customer_user_errors
            .and_then(|errors| errors.into_iter().next());
        if let Some(error) = first_error {
            tracing::warn!(
                code = error.code.as_deref().unwrap_or("-"),
                field = ?error.field,
                message = ?error.message,
                "Customer user error"
            );
            let message = error
                .message
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            // Nested paths such as ["input", "email"] name the input last
            let field = error
                .field
                .as_ref()
                .and_then(|path| path.last())
                .map(|name| map_backend_field(name).to_string());
            let result = SubmissionResult::failed(message.clone());
            return Ok(match field {
                Some(field) => result.with_field_error(FieldFeedback { field, message }),
                None => result,
            });
        }

        Ok(SubmissionResult::succeeded(SUCCESS_MESSAGE, payload.customer))
    }
}
