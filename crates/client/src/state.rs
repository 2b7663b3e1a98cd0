//! Form state and the reducer that advances it.
//!
//! ```text
//! Idle --SubmitRequested(valid)--> Submitting --SubmitSucceeded--> Submitted (terminal)
//!   ^                                   |
//!   +----SubmitRejected / NetworkFailed-+
//! ```
//!
//! Every transition produces a new [`FormState`]; nothing mutates in place.

use verity_core::enrollment::{EnrollmentForm, FieldUpdate, FormField};
use verity_core::validation::{validate_form, ValidationErrors};

/// Shown on the email field when the request could not complete.
pub const MSG_NETWORK_ERROR: &str = "Network error. Please check your connection.";
/// Shown on the email field when the server rejects without a message.
pub const MSG_SUBMISSION_FAILED: &str = "Submission failed. Please try again.";

/// Server and network errors are always attached to this field; the form
/// has no separate error banner.
pub const SERVER_ERROR_FIELD: FormField = FormField::Email;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Editable. Errors from a previous attempt may be present.
    Idle,
    /// A request is in flight.
    Submitting,
    /// Enrollment accepted; the form is closed for this session.
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// One field edited. Clears that field's error only.
    FieldChanged(FieldUpdate),
    /// Re-run every rule and replace the error mapping.
    ValidateRequested,
    /// Validate, and enter `Submitting` if the draft is clean.
    SubmitRequested,
    /// The endpoint answered 2xx.
    SubmitSucceeded,
    /// The endpoint answered non-2xx with this message.
    SubmitRejected(String),
    /// The request did not complete.
    NetworkFailed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    form: EnrollmentForm,
    errors: ValidationErrors,
    submitting: bool,
    submitted: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &EnrollmentForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn phase(&self) -> Phase {
        if self.submitted {
            Phase::Submitted
        } else if self.submitting {
            Phase::Submitting
        } else {
            Phase::Idle
        }
    }
}

/// Apply one event to a state, returning the next state.
///
/// `Submitted` absorbs every event. `SubmitRequested` is ignored while a
/// request is already in flight.
pub fn reduce(state: &FormState, event: FormEvent) -> FormState {
    if state.submitted {
        return state.clone();
    }

    match event {
        FormEvent::FieldChanged(update) => FormState {
            errors: state.errors.without(update.field()),
            form: state.form.with(update),
            ..state.clone()
        },
        FormEvent::ValidateRequested => FormState {
            errors: validate_form(&state.form),
            ..state.clone()
        },
        FormEvent::SubmitRequested if state.submitting => state.clone(),
        FormEvent::SubmitRequested => {
            let errors = validate_form(&state.form);
            FormState {
                submitting: errors.is_empty(),
                errors,
                ..state.clone()
            }
        }
        FormEvent::SubmitSucceeded => FormState {
            submitting: false,
            submitted: true,
            ..state.clone()
        },
        FormEvent::SubmitRejected(message) => FormState {
            errors: ValidationErrors::single(SERVER_ERROR_FIELD, message),
            submitting: false,
            ..state.clone()
        },
        FormEvent::NetworkFailed => FormState {
            errors: ValidationErrors::single(SERVER_ERROR_FIELD, MSG_NETWORK_ERROR),
            submitting: false,
            ..state.clone()
        },
    }
}
