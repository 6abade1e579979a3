//! Element handles bound at construction and the DOM updates made through them.

use crate::dom::{Document, NodeId};

pub const SUBMIT_BUTTON_ID: &str = "submitBtn";
pub const SUCCESS_BANNER_ID: &str = "successMessage";
pub const ERROR_BANNER_ID: &str = "errorMessage";
pub const ERROR_TEXT_ID: &str = "errorText";
pub const SPINNER_CLASS: &str = "loading-spinner";
pub const BUTTON_LABEL_CLASS: &str = "button-text";
pub const ERROR_CLASS: &str = "error";
pub const LOADING_CLASS: &str = "loading";
pub const FIELD_ERROR_SUFFIX: &str = "Error";

pub const IDLE_LABEL: &str = "Create Account";
pub const WORKING_LABEL: &str = "Creating Account...";
pub const GENERIC_FAILURE_MESSAGE: &str = "Registration failed. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Which banner to reveal after a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner<'a> {
    Success,
    Error(Option<&'a str>),
}

/// Handles of the bound form and its feedback elements.
///
/// Every handle except the form itself is optional; updates aimed at a
/// missing element are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBindings {
    pub form: NodeId,
    pub submit_button: Option<NodeId>,
    pub spinner: Option<NodeId>,
    pub button_label: Option<NodeId>,
    pub success_banner: Option<NodeId>,
    pub error_banner: Option<NodeId>,
    pub error_text: Option<NodeId>,
}

impl FormBindings {
    /// Binds to the form with `form_id`. Returns `None` when it is absent.
    pub fn bind(document: &Document, form_id: &str) -> Option<Self> {
        let form = document.get_element_by_id(form_id)?;
        let submit_button = document.query_by_id(form, SUBMIT_BUTTON_ID);
        let spinner = submit_button.and_then(|button| document.query_by_class(button, SPINNER_CLASS));
        let button_label =
            submit_button.and_then(|button| document.query_by_class(button, BUTTON_LABEL_CLASS));

        Some(Self {
            form,
            submit_button,
            spinner,
            button_label,
            success_banner: document.get_element_by_id(SUCCESS_BANNER_ID),
            error_banner: document.get_element_by_id(ERROR_BANNER_ID),
            error_text: document.get_element_by_id(ERROR_TEXT_ID),
        })
    }

    /// Disables or re-enables every input and button in the form and
    /// switches the submit control between its idle and working looks.
    pub fn set_locked(&self, document: &mut Document, locked: bool) {
        for control in document.query_all_by_tag(self.form, &["input", "button"]) {
            document.set_disabled(control, locked);
        }

        let Some(button) = self.submit_button else {
            return;
        };
        document.toggle_class(button, LOADING_CLASS, locked);
        if let Some(spinner) = self.spinner {
            document.set_display(spinner, if locked { "inline-block" } else { "none" });
        }
        if let Some(label) = self.button_label {
            document.set_text(label, if locked { WORKING_LABEL } else { IDLE_LABEL });
        }
    }

    pub fn show_banner(&self, document: &mut Document, banner: Banner<'_>) {
        for node in [self.success_banner, self.error_banner].into_iter().flatten() {
            document.set_display(node, "none");
        }

        match banner {
            Banner::Success => {
                if let Some(node) = self.success_banner {
                    document.set_display(node, "flex");
                }
                document.set_display(self.form, "none");
            }
            Banner::Error(message) => {
                if let Some(node) = self.error_banner {
                    document.set_display(node, "flex");
                }
                if let (Some(node), Some(message)) = (self.error_text, message) {
                    document.set_text(node, message);
                }
            }
        }
    }
}

fn error_slot(document: &Document, input: NodeId) -> Option<NodeId> {
    let name = document.element(input)?.name();
    document.get_element_by_id(&format!("{}{}", name, FIELD_ERROR_SUFFIX))
}

/// Marks `input` invalid and fills its `{name}Error` slot.
pub fn show_field_error(document: &mut Document, input: NodeId, message: &str) {
    if let Some(slot) = error_slot(document, input) {
        document.set_text(slot, message);
        document.set_display(slot, "block");
    }
    document.add_class(input, ERROR_CLASS);
}

/// Clears the invalid mark on `input` and empties its error slot.
pub fn clear_field_error(document: &mut Document, input: NodeId) {
    if let Some(slot) = error_slot(document, input) {
        document.set_text(slot, "");
        document.set_display(slot, "none");
    }
    document.remove_class(input, ERROR_CLASS);
}
