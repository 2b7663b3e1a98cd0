//! Submission lifecycle for the enrollment form.

use verity_core::enrollment::FieldUpdate;
use verity_core::validation::ValidationErrors;

use crate::state::{reduce, FormEvent, FormState, Phase};
use crate::transport::EnrollmentTransport;

/// Owns the current [`FormState`] and the transport used to submit it.
pub struct FormController<T> {
    transport: T,
    state: FormState,
}

impl<T: EnrollmentTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: FormState::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        self.state.errors()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn dispatch(&mut self, event: FormEvent) {
        self.state = reduce(&self.state, event);
    }

    /// Write one field and clear its error. Does not validate.
    pub fn set_field(&mut self, update: FieldUpdate) {
        self.dispatch(FormEvent::FieldChanged(update));
    }

    /// Re-run every rule; `true` when the draft is clean.
    pub fn validate(&mut self) -> bool {
        self.dispatch(FormEvent::ValidateRequested);
        self.state.errors().is_empty()
    }

    /// Validate and, if clean, send the draft once.
    ///
    /// Returns the phase reached: `Submitted` on a 2xx answer, otherwise
    /// `Idle` with the reason recorded in [`Self::errors`]. Nothing is sent
    /// when validation fails or the form is not idle.
    pub async fn submit(&mut self) -> Phase {
        if self.phase() != Phase::Idle {
            return self.phase();
        }

        self.dispatch(FormEvent::SubmitRequested);
        if !self.state.is_submitting() {
            tracing::debug!(
                error_count = self.state.errors().len(),
                "Submission blocked by validation",
            );
            return self.phase();
        }

        let outcome = match self.transport.post_enrollment(self.state.form()).await {
            Ok(response) if response.is_success() => FormEvent::SubmitSucceeded,
            Ok(response) => match response.rejection_message() {
                Ok(message) => {
                    tracing::warn!(status = response.status, %message, "Enrollment rejected");
                    FormEvent::SubmitRejected(message)
                }
                Err(err) => {
                    tracing::warn!(status = response.status, error = %err, "Enrollment rejected with unreadable body");
                    FormEvent::NetworkFailed
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "Enrollment request failed");
                FormEvent::NetworkFailed
            }
        };

        self.dispatch(outcome);
        self.phase()
    }
}
