use scopeguard::ScopeGuard;

use super::bindings::{
    clear_field_error, show_field_error, Banner, FormBindings, GENERIC_FAILURE_MESSAGE,
    NETWORK_ERROR_MESSAGE,
};
use super::fields::{self, FieldError, FieldName};
use super::flow::{submission_guard, FlowIntent, FlowState};
use super::lock::lock_form;
use super::password::PasswordRequirementSet;
use crate::config::Config;
use crate::dom::{Document, NodeId};
use crate::storefront::{RegistrationInput, SecureString, StorefrontClient, StorefrontError, SubmissionResult};

pub const FORM_INPUT_CLASS: &str = "form-input";
pub const PASSWORD_ID: &str = "password";
pub const CONFIRM_PASSWORD_ID: &str = "confirmPassword";
pub const TERMS_ID: &str = "termsAccepted";
pub const TOGGLE_CLASS: &str = "password-toggle";
pub const TOGGLE_WRAPPER_CLASS: &str = "password-input-wrapper";
pub const EYE_OPEN_CLASS: &str = "eye-open";
pub const EYE_CLOSED_CLASS: &str = "eye-closed";
pub const MET_CLASS: &str = "met";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Submit,
    Blur,
    Input,
    Click,
}

/// An event delivered by the host to a single target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: NodeId,
}

impl DomEvent {
    pub fn submit(form: NodeId) -> Self {
        Self { kind: EventKind::Submit, target: form }
    }

    pub fn blur(target: NodeId) -> Self {
        Self { kind: EventKind::Blur, target }
    }

    pub fn input(target: NodeId) -> Self {
        Self { kind: EventKind::Input, target }
    }

    pub fn click(target: NodeId) -> Self {
        Self { kind: EventKind::Click, target }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Submit,
    ValidateField,
    ClearFieldError,
    CheckPasswordMatch,
    UpdatePasswordStrength,
    ToggleVisibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub target: NodeId,
    pub kind: EventKind,
    pub handler: Handler,
}

/// What a submit attempt ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No form bound, or the flow is not accepting submits.
    Ignored,
    /// Validation failed; no request was made.
    Invalid,
    Completed(SubmissionResult),
    /// The request failed and no fallback was available.
    NetworkError(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Number of listeners that ran.
    pub handled: usize,
    pub default_prevented: bool,
    pub submit: Option<SubmitOutcome>,
}

/// Registration form controller.
///
/// Owns the document it is bound to. The host feeds it events one at a
/// time through [`RegistrationController::dispatch`]; since dispatching
/// borrows the controller mutably, a submission in flight blocks every
/// other event until it resolves.
#[derive(Debug)]
pub struct RegistrationController {
    document: Document,
    bindings: Option<FormBindings>,
    client: StorefrontClient,
    listeners: Vec<Listener>,
    flow: FlowState,
}

impl RegistrationController {
    pub fn new(document: Document, config: &Config, page_host: &str) -> Result<Self, StorefrontError> {
        let client = StorefrontClient::from_config(config, page_host)?;
        Ok(Self::with_client(document, &config.form.form_id, client))
    }

    /// Binds to `form_id`. A missing form yields an inert controller.
    pub fn with_client(document: Document, form_id: &str, client: StorefrontClient) -> Self {
        let bindings = FormBindings::bind(&document, form_id);
        let listeners = match &bindings {
            Some(bindings) => register_listeners(&document, bindings),
            None => {
                tracing::debug!(form_id, "Registration form not found, controller is inert");
                Vec::new()
            }
        };

        Self {
            document,
            bindings,
            client,
            listeners,
            flow: FlowState::default(),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.bindings.is_some()
    }

    pub fn bindings(&self) -> Option<&FormBindings> {
        self.bindings.as_ref()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Direct document access for the host (e.g., to type into a field).
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn flow_state(&self) -> &FlowState {
        &self.flow
    }

    pub fn client(&self) -> &StorefrontClient {
        &self.client
    }

    /// Runs every listener registered for the event's target and kind, in
    /// registration order.
    pub async fn dispatch(&mut self, event: DomEvent) -> DispatchOutcome {
        let handlers: Vec<Handler> = self
            .listeners
            .iter()
            .filter(|l| l.target == event.target && l.kind == event.kind)
            .map(|l| l.handler)
            .collect();

        let mut outcome = DispatchOutcome::default();
        for handler in handlers {
            outcome.handled += 1;
            match handler {
                Handler::Submit => {
                    outcome.default_prevented = true;
                    outcome.submit = Some(self.handle_submit().await);
                }
                Handler::ValidateField => {
                    self.validate_field(event.target);
                }
                Handler::ClearFieldError => clear_field_error(&mut self.document, event.target),
                Handler::CheckPasswordMatch => {
                    self.check_password_match();
                }
                Handler::UpdatePasswordStrength => {
                    self.update_password_strength();
                }
                Handler::ToggleVisibility => {
                    outcome.default_prevented = true;
                    self.toggle_visibility(event.target);
                }
            }
        }
        outcome
    }

    /// Sets the value of `target` and dispatches an `input` event, the way
    /// a keystroke would.
    pub async fn type_into(&mut self, target: NodeId, value: &str) -> DispatchOutcome {
        self.document.set_value(target, value);
        self.dispatch(DomEvent::input(target)).await
    }

    /// Validates one field and shows or clears its inline error.
    pub fn validate_field(&mut self, input: NodeId) -> bool {
        let result = match self.document.element(input) {
            Some(element) => fields::validate_named(element.name(), element.value(), self.live_password()),
            None => Ok(()),
        };

        match result {
            Ok(()) => {
                clear_field_error(&mut self.document, input);
                true
            }
            Err(err) => {
                show_field_error(&mut self.document, input, &err.to_string());
                false
            }
        }
    }

    /// Recomputes the requirement set and updates the indicators.
    pub fn update_password_strength(&mut self) -> PasswordRequirementSet {
        let requirements = PasswordRequirementSet::evaluate(self.live_password());
        for (requirement, met) in requirements.iter() {
            if let Some(indicator) = self.document.get_element_by_id(requirement.indicator_id()) {
                self.document.toggle_class(indicator, MET_CLASS, met);
            }
        }
        requirements
    }

    /// Compares the raw password and confirmation values.
    pub fn check_password_match(&mut self) -> bool {
        let Some(confirm) = self.document.get_element_by_id(CONFIRM_PASSWORD_ID) else {
            return true;
        };
        let mismatch = self
            .document
            .get_element_by_id(PASSWORD_ID)
            .is_some_and(|password| self.document.value(password) != self.document.value(confirm));

        if mismatch {
            show_field_error(&mut self.document, confirm, &FieldError::PasswordMismatch.to_string());
        } else {
            clear_field_error(&mut self.document, confirm);
        }
        !mismatch
    }

    /// Flips the masking of the input paired with `toggle`.
    ///
    /// Returns `Some(true)` when the password is now shown in plain text,
    /// `Some(false)` when masked again, `None` when no input is paired.
    pub fn toggle_visibility(&mut self, toggle: NodeId) -> Option<bool> {
        let wrapper = self.document.closest_with_class(toggle, TOGGLE_WRAPPER_CLASS)?;
        let input = self.document.query_by_tag(wrapper, "input")?;
        let reveal = self.document.input_type(input) == "password";
        self.document
            .set_input_type(input, if reveal { "text" } else { "password" });

        let open_icon = self.document.query_by_class(toggle, EYE_OPEN_CLASS);
        let closed_icon = self.document.query_by_class(toggle, EYE_CLOSED_CLASS);
        if let (Some(open_icon), Some(closed_icon)) = (open_icon, closed_icon) {
            self.document
                .set_display(open_icon, if reveal { "none" } else { "block" });
            self.document
                .set_display(closed_icon, if reveal { "block" } else { "none" });
        }
        Some(reveal)
    }

    /// Validates, submits and renders the outcome.
    ///
    /// The form is locked for the duration of the request and unlocked on
    /// every exit path. Dropping the returned future mid-request unlocks the
    /// form and returns the flow to idle.
    pub async fn handle_submit(&mut self) -> SubmitOutcome {
        let Some(bindings) = self.bindings.clone() else {
            return SubmitOutcome::Ignored;
        };
        if !self.flow.accepts_submit() {
            tracing::debug!(state = ?self.flow, "Submit ignored");
            return SubmitOutcome::Ignored;
        }

        self.apply(FlowIntent::SubmitRequested);
        if !self.validate_all(bindings.form) {
            self.apply(FlowIntent::ValidationFailed);
            return SubmitOutcome::Invalid;
        }
        self.apply(FlowIntent::ValidationPassed);

        let input = self.collect_input();
        let flow = submission_guard(&mut self.flow);
        let outcome = {
            let mut guard = lock_form(&mut self.document, &bindings);
            let document: &mut Document = &mut guard;

            match self.client.register(&input).await {
                Ok(result) => {
                    if let Some(feedback) = &result.field_error {
                        if let Some(field) = document.get_element_by_id(&feedback.field) {
                            show_field_error(document, field, &feedback.message);
                        }
                    }
                    if result.success {
                        tracing::info!(user = ?result.user, "Registration successful");
                        bindings.show_banner(document, Banner::Success);
                    } else {
                        tracing::error!(message = ?result.message, "Registration failed");
                        let message = result.message.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE);
                        bindings.show_banner(document, Banner::Error(Some(message)));
                    }
                    SubmitOutcome::Completed(result)
                }
                Err(err) => {
                    tracing::error!(error = %err, "Registration error");
                    bindings.show_banner(document, Banner::Error(Some(NETWORK_ERROR_MESSAGE)));
                    SubmitOutcome::NetworkError(err.to_string())
                }
            }
        };

        let intent = match &outcome {
            SubmitOutcome::Completed(result) if result.success => FlowIntent::SubmissionSucceeded {
                user: result.user.clone(),
            },
            _ => FlowIntent::SubmissionFailed,
        };
        ScopeGuard::into_inner(flow).advance(intent);
        outcome
    }

    /// Assembles the submission payload from the current field values.
    pub fn collect_input(&self) -> RegistrationInput {
        RegistrationInput {
            first_name: self.value_of(FieldName::FirstName.as_str()).trim().to_string(),
            last_name: self.value_of(FieldName::LastName.as_str()).trim().to_string(),
            email: self.value_of(FieldName::Email.as_str()).trim().to_string(),
            password: SecureString::new(self.value_of(PASSWORD_ID)),
        }
    }

    fn validate_all(&mut self, form: NodeId) -> bool {
        let mut valid = true;
        for input in self.document.query_all_by_class(form, FORM_INPUT_CLASS) {
            if !self.validate_field(input) {
                valid = false;
            }
        }

        match self.document.get_element_by_id(TERMS_ID) {
            Some(terms) if self.document.checked(terms) => clear_field_error(&mut self.document, terms),
            Some(terms) => {
                show_field_error(&mut self.document, terms, &FieldError::TermsNotAccepted.to_string());
                valid = false;
            }
            None => valid = false,
        }

        if !valid {
            tracing::debug!("Registration form has validation errors");
        }
        valid
    }

    fn apply(&mut self, intent: FlowIntent) {
        self.flow.advance(intent);
    }

    fn live_password(&self) -> &str {
        self.value_of(PASSWORD_ID)
    }

    fn value_of(&self, id: &str) -> &str {
        self.document
            .get_element_by_id(id)
            .map(|node| self.document.value(node))
            .unwrap_or("")
    }
}

fn register_listeners(document: &Document, bindings: &FormBindings) -> Vec<Listener> {
    let listen = |target, kind, handler| Listener { target, kind, handler };
    let mut listeners = vec![listen(bindings.form, EventKind::Submit, Handler::Submit)];

    for input in document.query_all_by_class(bindings.form, FORM_INPUT_CLASS) {
        listeners.push(listen(input, EventKind::Blur, Handler::ValidateField));
        listeners.push(listen(input, EventKind::Input, Handler::ClearFieldError));
    }
    if let Some(confirm) = document.get_element_by_id(CONFIRM_PASSWORD_ID) {
        listeners.push(listen(confirm, EventKind::Input, Handler::CheckPasswordMatch));
    }
    if let Some(password) = document.get_element_by_id(PASSWORD_ID) {
        listeners.push(listen(password, EventKind::Input, Handler::UpdatePasswordStrength));
    }
    for toggle in document.query_all_by_class(document.root(), TOGGLE_CLASS) {
        listeners.push(listen(toggle, EventKind::Click, Handler::ToggleVisibility));
    }

    listeners
}
