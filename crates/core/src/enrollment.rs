//! Enrollment form draft and field addressing.
//!
//! [`EnrollmentForm`] is the draft the client holds while the user fills in
//! the page. Choice fields stay plain strings so the draft can hold whatever
//! the user picked (including nothing); they are checked against the closed
//! sets in [`crate::options`] at validation time. Lead volume aliases are
//! rewritten to the canonical label as they are entered.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::options::LeadVolume;

/// Client-held enrollment draft. Serialized with the camelCase keys the
/// `/api/enroll` endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentForm {
    pub email: String,
    pub company: String,
    pub crm: String,
    pub data_pain: String,
    pub lead_volume: String,
    pub commitment: bool,
}

impl EnrollmentForm {
    /// Return a copy of the draft with one field replaced.
    pub fn with(&self, update: FieldUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FieldUpdate::Email(v) => next.email = v,
            FieldUpdate::Company(v) => next.company = v,
            FieldUpdate::Crm(v) => next.crm = v,
            FieldUpdate::DataPain(v) => next.data_pain = v,
            FieldUpdate::LeadVolume(v) => next.lead_volume = LeadVolume::canonicalize(v),
            FieldUpdate::Commitment(v) => next.commitment = v,
        }
        next
    }
}

/// The six form fields. Ordering follows the page layout and determines the
/// iteration order of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Email,
    Company,
    Crm,
    DataPain,
    LeadVolume,
    Commitment,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        Self::Email,
        Self::Company,
        Self::Crm,
        Self::DataPain,
        Self::LeadVolume,
        Self::Commitment,
    ];

    /// JSON key of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Company => "company",
            Self::Crm => "crm",
            Self::DataPain => "dataPain",
            Self::LeadVolume => "leadVolume",
            Self::Commitment => "commitment",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-field edit carrying the new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Email(String),
    Company(String),
    Crm(String),
    DataPain(String),
    LeadVolume(String),
    Commitment(bool),
}

impl FieldUpdate {
    /// The field this update writes to.
    pub fn field(&self) -> FormField {
        match self {
            Self::Email(_) => FormField::Email,
            Self::Company(_) => FormField::Company,
            Self::Crm(_) => FormField::Crm,
            Self::DataPain(_) => FormField::DataPain,
            Self::LeadVolume(_) => FormField::LeadVolume,
            Self::Commitment(_) => FormField::Commitment,
        }
    }
}
