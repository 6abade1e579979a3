//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::net::TcpListener;
use storefront_signup::config::Config;
use storefront_signup::dom::NodeId;
use storefront_signup::form::{DomEvent, RegistrationController};
use storefront_signup::page::registration_page;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Endpoint nothing listens on.
pub fn unreachable_endpoint() -> String {
    format!("http://127.0.0.1:{}/api/2024-01/graphql.json", free_port())
}

/// Config pointed at `endpoint` with a short timeout and no fallback delay.
pub fn test_config(endpoint: &str) -> Config {
    let mut config = Config::default();
    config.storefront.endpoint = Some(endpoint.to_string());
    config.storefront.timeout_seconds = 5;
    config.fallback.delay_ms = 0;
    config
}

pub fn controller(config: &Config) -> RegistrationController {
    RegistrationController::new(registration_page(), config, "localhost")
        .expect("Failed to create controller")
}

/// Controller for tests that never submit.
pub fn offline_controller() -> RegistrationController {
    controller(&test_config(&unreachable_endpoint()))
}

pub fn node(controller: &RegistrationController, id: &str) -> NodeId {
    controller
        .document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("missing #{id}"))
}

/// Types into `id` and leaves the field, like a user tabbing through.
pub async fn fill(controller: &mut RegistrationController, id: &str, value: &str) {
    let target = node(controller, id);
    controller.type_into(target, value).await;
    controller.dispatch(DomEvent::blur(target)).await;
}

pub async fn fill_valid(controller: &mut RegistrationController, email: &str) {
    fill(controller, "firstName", "Ada").await;
    fill(controller, "lastName", "Lovelace").await;
    fill(controller, "email", email).await;
    fill(controller, "password", "Secret123!").await;
    fill(controller, "confirmPassword", "Secret123!").await;
}

pub fn accept_terms(controller: &mut RegistrationController) {
    let terms = node(controller, "termsAccepted");
    controller.document_mut().set_checked(terms, true);
}

pub async fn submit(controller: &mut RegistrationController) -> storefront_signup::form::DispatchOutcome {
    let form = controller.bindings().expect("form is bound").form;
    controller.dispatch(DomEvent::submit(form)).await
}

/// Inline error text shown for `field`.
pub fn field_error(controller: &RegistrationController, field: &str) -> String {
    let slot = node(controller, &format!("{field}Error"));
    controller.document().text(slot).to_string()
}

pub fn has_error_class(controller: &RegistrationController, id: &str) -> bool {
    controller.document().has_class(node(controller, id), "error")
}
