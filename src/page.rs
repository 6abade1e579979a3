//! The registration page markup the controller expects, as a document.

use crate::dom::{Document, ElementSpec, NodeId};
use crate::form::controller::{
    CONFIRM_PASSWORD_ID, EYE_CLOSED_CLASS, EYE_OPEN_CLASS, FORM_INPUT_CLASS, PASSWORD_ID, TERMS_ID,
    TOGGLE_CLASS, TOGGLE_WRAPPER_CLASS,
};
use crate::form::bindings::{
    BUTTON_LABEL_CLASS, ERROR_BANNER_ID, ERROR_TEXT_ID, FIELD_ERROR_SUFFIX, IDLE_LABEL, SPINNER_CLASS, SUBMIT_BUTTON_ID,
    SUCCESS_BANNER_ID,
};
use crate::form::PasswordRequirement;

pub const REGISTRATION_FORM_ID: &str = "registrationForm";

/// Builds a page with the standard registration form bound to
/// `registrationForm`.
pub fn registration_page() -> Document {
    registration_page_with_form_id(REGISTRATION_FORM_ID)
}

pub fn registration_page_with_form_id(form_id: &str) -> Document {
    let mut doc = Document::new();
    let body = doc.append(doc.root(), ElementSpec::new("body"));

    doc.append(
        body,
        ElementSpec::new("div").id(SUCCESS_BANNER_ID).class("success-message").display("none"),
    );
    let error_banner = doc.append(
        body,
        ElementSpec::new("div").id(ERROR_BANNER_ID).class("error-message").display("none"),
    );
    doc.append(error_banner, ElementSpec::new("span").id(ERROR_TEXT_ID));

    let form = doc.append(body, ElementSpec::new("form").id(form_id).class("registration-form"));

    text_field(&mut doc, form, "firstName", "text");
    text_field(&mut doc, form, "lastName", "text");
    text_field(&mut doc, form, "email", "email");
    password_field(&mut doc, form, PASSWORD_ID);
    password_field(&mut doc, form, CONFIRM_PASSWORD_ID);

    let requirements = doc.append(form, ElementSpec::new("ul").class("password-requirements"));
    for requirement in PasswordRequirement::ALL {
        doc.append(requirements, ElementSpec::new("li").id(requirement.indicator_id()));
    }

    let terms = doc.append(form, ElementSpec::new("div").class("form-group checkbox-group"));
    doc.append(
        terms,
        ElementSpec::new("input").id(TERMS_ID).name(TERMS_ID).input_type("checkbox"),
    );
    error_slot(&mut doc, terms, TERMS_ID);

    let button = doc.append(
        form,
        ElementSpec::new("button").id(SUBMIT_BUTTON_ID).input_type("submit").class("submit-button"),
    );
    doc.append(button, ElementSpec::new("span").class(BUTTON_LABEL_CLASS).text(IDLE_LABEL));
    doc.append(button, ElementSpec::new("span").class(SPINNER_CLASS).display("none"));

    doc
}

fn text_field(doc: &mut Document, form: NodeId, name: &str, input_type: &str) {
    let group = doc.append(form, ElementSpec::new("div").class("form-group"));
    doc.append(
        group,
        ElementSpec::new("input").id(name).name(name).class(FORM_INPUT_CLASS).input_type(input_type),
    );
    error_slot(doc, group, name);
}

fn password_field(doc: &mut Document, form: NodeId, name: &str) {
    let group = doc.append(form, ElementSpec::new("div").class("form-group"));
    let wrapper = doc.append(group, ElementSpec::new("div").class(TOGGLE_WRAPPER_CLASS));
    doc.append(
        wrapper,
        ElementSpec::new("input").id(name).name(name).class(FORM_INPUT_CLASS).input_type("password"),
    );
    let toggle = doc.append(
        wrapper,
        ElementSpec::new("button").input_type("button").class(TOGGLE_CLASS),
    );
    doc.append(toggle, ElementSpec::new("svg").class(EYE_OPEN_CLASS).display("block"));
    doc.append(toggle, ElementSpec::new("svg").class(EYE_CLOSED_CLASS).display("none"));
    error_slot(doc, group, name);
}

fn error_slot(doc: &mut Document, parent: NodeId, name: &str) {
    doc.append(
        parent,
        ElementSpec::new("span").id(&format!("{}{}", name, FIELD_ERROR_SUFFIX)).class("error-text").display("none"),
    );
}
