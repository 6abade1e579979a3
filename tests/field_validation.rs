//! Inline validation, strength indicators and password matching.

mod common;

use common::{fill, field_error, has_error_class, node, offline_controller};
use storefront_signup::form::{DomEvent, PasswordRequirement};

#[tokio::test]
async fn short_name_shows_length_message() {
    let mut controller = offline_controller();
    fill(&mut controller, "firstName", "A").await;

    assert_eq!(field_error(&controller, "firstName"), "Must be at least 2 characters long");
    assert!(has_error_class(&controller, "firstName"));
    let slot = node(&controller, "firstNameError");
    assert_eq!(controller.document().display(slot), Some("block"));
}

#[tokio::test]
async fn name_with_digits_shows_charset_message() {
    let mut controller = offline_controller();
    fill(&mut controller, "lastName", "Lovelace2").await;

    assert_eq!(
        field_error(&controller, "lastName"),
        "Only letters, spaces, hyphens, and apostrophes are allowed"
    );
}

#[tokio::test]
async fn valid_name_clears_previous_error() {
    let mut controller = offline_controller();
    fill(&mut controller, "lastName", "L").await;
    assert!(has_error_class(&controller, "lastName"));

    fill(&mut controller, "lastName", "O'Neil-Smith").await;
    assert_eq!(field_error(&controller, "lastName"), "");
    assert!(!has_error_class(&controller, "lastName"));
    let slot = node(&controller, "lastNameError");
    assert_eq!(controller.document().display(slot), Some("none"));
}

#[tokio::test]
async fn typing_clears_the_error_until_next_blur() {
    let mut controller = offline_controller();
    fill(&mut controller, "email", "not-an-email").await;
    assert_eq!(field_error(&controller, "email"), "Please enter a valid email address");

    let email = node(&controller, "email");
    controller.type_into(email, "still-not-an-email").await;
    assert_eq!(field_error(&controller, "email"), "");
    assert!(!has_error_class(&controller, "email"));

    controller.dispatch(DomEvent::blur(email)).await;
    assert_eq!(field_error(&controller, "email"), "Please enter a valid email address");
}

#[tokio::test]
async fn email_rules() {
    let mut controller = offline_controller();
    for bad in ["userexample.com", "user@example", "user @example.com"] {
        fill(&mut controller, "email", bad).await;
        assert!(has_error_class(&controller, "email"), "{bad} should fail");
    }
    fill(&mut controller, "email", "user@example.com").await;
    assert!(!has_error_class(&controller, "email"));
}

#[tokio::test]
async fn password_length_rule() {
    let mut controller = offline_controller();
    fill(&mut controller, "password", "short").await;
    assert_eq!(
        field_error(&controller, "password"),
        "Password must be at least 8 characters long"
    );

    fill(&mut controller, "password", "longenough1").await;
    assert_eq!(field_error(&controller, "password"), "");
}

#[tokio::test]
async fn changing_password_invalidates_confirmation() {
    let mut controller = offline_controller();
    fill(&mut controller, "password", "Secret123!").await;
    fill(&mut controller, "confirmPassword", "Secret123!").await;
    assert!(!has_error_class(&controller, "confirmPassword"));

    fill(&mut controller, "password", "Different1!").await;
    let confirm = node(&controller, "confirmPassword");
    assert!(!controller.validate_field(confirm));
    assert_eq!(field_error(&controller, "confirmPassword"), "Passwords do not match");
}

#[tokio::test]
async fn confirmation_is_checked_on_every_keystroke() {
    let mut controller = offline_controller();
    fill(&mut controller, "password", "Secret123!").await;
    let confirm = node(&controller, "confirmPassword");

    controller.type_into(confirm, "Secret").await;
    assert_eq!(field_error(&controller, "confirmPassword"), "Passwords do not match");

    controller.type_into(confirm, "Secret123!").await;
    assert_eq!(field_error(&controller, "confirmPassword"), "");
}

#[tokio::test]
async fn strength_indicators_follow_the_password() {
    let mut controller = offline_controller();
    let password = node(&controller, "password");

    controller.type_into(password, "Abc123!@").await;
    for requirement in PasswordRequirement::ALL {
        let indicator = node(&controller, requirement.indicator_id());
        assert!(controller.document().has_class(indicator, "met"), "{requirement:?}");
    }

    controller.type_into(password, "abc").await;
    for requirement in PasswordRequirement::ALL {
        let indicator = node(&controller, requirement.indicator_id());
        let met = controller.document().has_class(indicator, "met");
        assert_eq!(met, requirement == PasswordRequirement::Lowercase, "{requirement:?}");
    }
}

#[tokio::test]
async fn fields_without_a_rule_pass() {
    let mut controller = offline_controller();
    let terms = node(&controller, "termsAccepted");
    assert!(controller.validate_field(terms));
}
