//! Field rules for the enrollment form.
//!
//! Every rule is evaluated independently, so [`validate_form`] always
//! reports every failing field at once rather than stopping at the first.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::enrollment::{EnrollmentForm, FormField};
use crate::options::{Crm, DataPain, LeadVolume};

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_EMAIL_REQUIRED: &str = "Work email is required.";
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const MSG_COMPANY_REQUIRED: &str = "Company name is required.";
pub const MSG_CRM_REQUIRED: &str = "Please select your current CRM.";
pub const MSG_DATA_PAIN_REQUIRED: &str = "Please select your primary data pain.";
pub const MSG_LEAD_VOLUME_REQUIRED: &str = "Please select your monthly lead volume.";
pub const MSG_COMMITMENT_REQUIRED: &str = "Please confirm your commitment.";

// ---------------------------------------------------------------------------
// Email
// ---------------------------------------------------------------------------

/// `local@domain.tld`: no whitespace, exactly one `@`, at least one dot after it.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

// ---------------------------------------------------------------------------
// ValidationErrors
// ---------------------------------------------------------------------------

/// Field name -> human-readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mapping holding exactly one entry.
    pub fn single(field: FormField, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Copy of the mapping with `field` removed; other entries are untouched.
    pub fn without(&self, field: FormField) -> Self {
        let mut next = self.clone();
        next.0.remove(&field);
        next
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Evaluate all six field rules against a draft.
pub fn validate_form(form: &EnrollmentForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.email.is_empty() {
        errors.insert(FormField::Email, MSG_EMAIL_REQUIRED);
    } else if !is_valid_email(&form.email) {
        errors.insert(FormField::Email, MSG_EMAIL_INVALID);
    }
    if form.company.is_empty() {
        errors.insert(FormField::Company, MSG_COMPANY_REQUIRED);
    }
    if form.crm.parse::<Crm>().is_err() {
        errors.insert(FormField::Crm, MSG_CRM_REQUIRED);
    }
    if form.data_pain.parse::<DataPain>().is_err() {
        errors.insert(FormField::DataPain, MSG_DATA_PAIN_REQUIRED);
    }
    if form.lead_volume.parse::<LeadVolume>().is_err() {
        errors.insert(FormField::LeadVolume, MSG_LEAD_VOLUME_REQUIRED);
    }
    if !form.commitment {
        errors.insert(FormField::Commitment, MSG_COMMITMENT_REQUIRED);
    }

    errors
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
