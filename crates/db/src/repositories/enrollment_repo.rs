//! Repository for the `enrollments` table.

use sqlx::PgPool;

use crate::models::enrollment::{Enrollment, NewEnrollment};

/// Column list for `enrollments` queries.
const COLUMNS: &str = "\
    id, email, company, crm, data_pain, lead_volume, commitment, created_at";

/// Append-only access to enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert one enrollment, returning the stored row.
    pub async fn create(pool: &PgPool, input: &NewEnrollment) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments \
                (email, company, crm, data_pain, lead_volume, commitment, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(&input.email)
            .bind(&input.company)
            .bind(&input.crm)
            .bind(&input.data_pain)
            .bind(&input.lead_volume)
            .bind(input.commitment)
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }
}
