//! Persistence seam for enrollments.
//!
//! The endpoint only needs "insert one row, tell me if it failed", so the
//! handler talks to an [`EnrollmentStore`] trait object. PostgreSQL backs it
//! in production; [`MemoryEnrollmentStore`] serves local runs without a
//! database and the test suites.

use std::sync::Mutex;

use async_trait::async_trait;
use verity_db::models::enrollment::NewEnrollment;
use verity_db::{DbPool, EnrollmentRepo};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// A failed write or health probe against the backing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Error reported by sqlx (connection, constraint, protocol, ...).
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The store refused the record with a descriptive message.
    #[error("{0}")]
    Rejected(String),
}

impl StoreError {
    /// Message suitable for the response envelope.
    ///
    /// For database-reported errors this is the server's own message
    /// (e.g. the violated constraint), without sqlx's wrapper prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Database(sqlx::Error::Database(db_err)) => db_err.message().to_string(),
            other => other.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// Insert exactly one enrollment.
    async fn insert(&self, record: &NewEnrollment) -> Result<(), StoreError>;

    /// Confirm the store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

pub struct PgEnrollmentStore {
    pool: DbPool,
}

impl PgEnrollmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentStore for PgEnrollmentStore {
    async fn insert(&self, record: &NewEnrollment) -> Result<(), StoreError> {
        let row = EnrollmentRepo::create(&self.pool, record).await?;
        tracing::debug!(enrollment_id = row.id, "Enrollment row inserted");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        verity_db::health_check(&self.pool).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Process-local store. Mirrors the table's NOT NULL constraints so a
/// payload missing a field fails the same way it would against PostgreSQL.
#[derive(Default)]
pub struct MemoryEnrollmentStore {
    records: Mutex<Vec<NewEnrollment>>,
}

impl MemoryEnrollmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record, oldest first.
    pub fn records(&self) -> Vec<NewEnrollment> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<NewEnrollment>> {
        // Push is the only mutation, so a poisoned Vec is still consistent.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn first_null_column(record: &NewEnrollment) -> Option<&'static str> {
    [
        ("email", record.email.is_none()),
        ("company", record.company.is_none()),
        ("crm", record.crm.is_none()),
        ("data_pain", record.data_pain.is_none()),
        ("lead_volume", record.lead_volume.is_none()),
        ("commitment", record.commitment.is_none()),
    ]
    .into_iter()
    .find_map(|(column, missing)| missing.then_some(column))
}

#[async_trait]
impl EnrollmentStore for MemoryEnrollmentStore {
    async fn insert(&self, record: &NewEnrollment) -> Result<(), StoreError> {
        if let Some(column) = first_null_column(record) {
            return Err(StoreError::Rejected(format!(
                "null value in column \"{column}\" of relation \"enrollments\" violates not-null constraint"
            )));
        }
        self.lock().push(record.clone());
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
