//! Handler for beta-program enrollment.
//!
//! The endpoint trusts the payload: it only checks what JSON parsing
//! enforces, stamps `created_at`, and performs one insert. Any failure on
//! the way becomes the uniform 400 envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use verity_core::enrollment::EnrollmentForm;
use verity_core::error::CoreError;
use verity_core::options::LeadVolume;
use verity_core::types::Timestamp;
use verity_core::validation::validate_form;
use verity_db::models::enrollment::NewEnrollment;

use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// JSON body of `POST /api/enroll`.
///
/// Every field is optional at the parse level so that a sparse payload
/// reaches the store, whose constraints decide what is acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentPayload {
    pub email: Option<String>,
    pub company: Option<String>,
    pub crm: Option<String>,
    pub data_pain: Option<String>,
    pub lead_volume: Option<String>,
    pub commitment: Option<bool>,
}

impl EnrollmentPayload {
    /// Map the payload onto an insert record stamped with `created_at`.
    /// Values pass through unchanged apart from lead volume aliases.
    pub fn into_new_enrollment(self, created_at: Timestamp) -> NewEnrollment {
        NewEnrollment {
            email: self.email,
            company: self.company,
            crm: self.crm,
            data_pain: self.data_pain,
            lead_volume: self.lead_volume.map(LeadVolume::canonicalize),
            commitment: self.commitment,
            created_at,
        }
    }

    /// View the payload as a form draft; absent values become empty/false.
    pub fn to_form(&self) -> EnrollmentForm {
        EnrollmentForm {
            email: self.email.clone().unwrap_or_default(),
            company: self.company.clone().unwrap_or_default(),
            crm: self.crm.clone().unwrap_or_default(),
            data_pain: self.data_pain.clone().unwrap_or_default(),
            lead_volume: self.lead_volume.clone().unwrap_or_default(),
            commitment: self.commitment.unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// POST /api/enroll
// ---------------------------------------------------------------------------

/// Record one enrollment.
pub async fn enroll(
    State(state): State<AppState>,
    payload: Result<Json<EnrollmentPayload>, JsonRejection>,
) -> AppResult<Json<SuccessResponse>> {
    match record_enrollment(&state, payload).await {
        Ok(()) => Ok(Json(SuccessResponse::enrolled())),
        Err(err) => {
            tracing::error!(error = %err, "Enrollment failed");
            Err(err)
        }
    }
}

async fn record_enrollment(
    state: &AppState,
    payload: Result<Json<EnrollmentPayload>, JsonRejection>,
) -> AppResult<()> {
    let Json(payload) = payload?;

    tracing::info!(
        email = payload.email.as_deref().unwrap_or_default(),
        company = payload.company.as_deref().unwrap_or_default(),
        crm = payload.crm.as_deref().unwrap_or_default(),
        "New beta enrollment received",
    );

    if state.config.strict_validation {
        let errors = validate_form(&payload.to_form());
        let first = errors.iter().next().map(|(field, message)| (field, message.to_string()));
        if let Some((field, message)) = first {
            tracing::debug!(%field, "Enrollment failed server-side validation");
            return Err(AppError::Core(CoreError::Validation(message)));
        }
    }

    let record = payload.into_new_enrollment(Utc::now());
    state.store.insert(&record).await?;

    tracing::info!(created_at = %record.created_at, "Enrollment stored");
    Ok(())
}
