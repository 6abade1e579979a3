//! Storefront account registration form.
//!
//! A [`form::RegistrationController`] binds to a registration form in a
//! [`dom::Document`], validates the fields as the user types, and creates
//! the customer through the storefront GraphQL API, falling back to a demo
//! result when the API cannot be reached.

pub mod config;
pub mod dom;
pub mod form;
pub mod logging;
pub mod page;
pub mod storefront;
pub mod ui;
