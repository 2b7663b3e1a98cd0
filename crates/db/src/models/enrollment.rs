//! Enrollment entity model and insert DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use verity_core::types::{DbId, Timestamp};

/// A row from the `enrollments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub email: String,
    pub company: String,
    pub crm: String,
    pub data_pain: String,
    pub lead_volume: String,
    pub commitment: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting an enrollment.
///
/// Payload fields are carried as received. Absent values are bound as NULL
/// and left for the table constraints to reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEnrollment {
    pub email: Option<String>,
    pub company: Option<String>,
    pub crm: Option<String>,
    pub data_pain: Option<String>,
    pub lead_volume: Option<String>,
    pub commitment: Option<bool>,
    pub created_at: Timestamp,
}
