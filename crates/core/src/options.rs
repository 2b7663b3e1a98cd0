//! Closed option sets offered by the enrollment form.
//!
//! The client validates against these enums and any server-side enforcement
//! must use the same ones, so the string forms live here and nowhere else.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// CRM
// ---------------------------------------------------------------------------

pub const CRM_HUBSPOT: &str = "HubSpot";
pub const CRM_SALESFORCE: &str = "Salesforce";
pub const CRM_PIPEDRIVE: &str = "Pipedrive";
pub const CRM_ZOHO: &str = "Zoho";
pub const CRM_OTHER: &str = "Other";

/// All valid CRM names, in display order.
pub const VALID_CRMS: &[&str] = &[CRM_HUBSPOT, CRM_SALESFORCE, CRM_PIPEDRIVE, CRM_ZOHO, CRM_OTHER];

/// CRM product currently used by the enrolling team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crm {
    HubSpot,
    Salesforce,
    Pipedrive,
    Zoho,
    Other,
}

impl Crm {
    pub const ALL: [Crm; 5] = [
        Self::HubSpot,
        Self::Salesforce,
        Self::Pipedrive,
        Self::Zoho,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HubSpot => CRM_HUBSPOT,
            Self::Salesforce => CRM_SALESFORCE,
            Self::Pipedrive => CRM_PIPEDRIVE,
            Self::Zoho => CRM_ZOHO,
            Self::Other => CRM_OTHER,
        }
    }
}

impl FromStr for Crm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CRM_HUBSPOT => Ok(Self::HubSpot),
            CRM_SALESFORCE => Ok(Self::Salesforce),
            CRM_PIPEDRIVE => Ok(Self::Pipedrive),
            CRM_ZOHO => Ok(Self::Zoho),
            CRM_OTHER => Ok(Self::Other),
            other => Err(CoreError::Validation(format!(
                "Unknown CRM: '{other}'. Valid CRMs: {}",
                VALID_CRMS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for Crm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Data pain
// ---------------------------------------------------------------------------

/// Schema changes breaking reports.
pub const PAIN_SILENT_DRIFT: &str = "silent_drift";
/// Records nobody owns or refreshes.
pub const PAIN_STALE_RECORDS: &str = "stale_records";
/// Manual entry mistakes.
pub const PAIN_HUMAN_ERROR: &str = "human_error";
/// Team members clashing on the same records.
pub const PAIN_OVERWRITES: &str = "overwrites";

/// All valid data pain codes.
pub const VALID_DATA_PAINS: &[&str] = &[
    PAIN_SILENT_DRIFT,
    PAIN_STALE_RECORDS,
    PAIN_HUMAN_ERROR,
    PAIN_OVERWRITES,
];

/// Category of data-quality problem the enrolling team suffers most from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataPain {
    SilentDrift,
    StaleRecords,
    HumanError,
    Overwrites,
}

impl DataPain {
    pub const ALL: [DataPain; 4] = [
        Self::SilentDrift,
        Self::StaleRecords,
        Self::HumanError,
        Self::Overwrites,
    ];

    /// Return the wire/database code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SilentDrift => PAIN_SILENT_DRIFT,
            Self::StaleRecords => PAIN_STALE_RECORDS,
            Self::HumanError => PAIN_HUMAN_ERROR,
            Self::Overwrites => PAIN_OVERWRITES,
        }
    }

    /// Short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SilentDrift => "Silent Drift",
            Self::StaleRecords => "Stale Records",
            Self::HumanError => "Human Error",
            Self::Overwrites => "Overwrites",
        }
    }

    /// One-line description shown under the label.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SilentDrift => "Schema changes breaking reports",
            Self::StaleRecords => "The \"Accountability Gap\"",
            Self::HumanError => "Manual entry mistakes",
            Self::Overwrites => "Team members clashing on records",
        }
    }
}

impl FromStr for DataPain {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PAIN_SILENT_DRIFT => Ok(Self::SilentDrift),
            PAIN_STALE_RECORDS => Ok(Self::StaleRecords),
            PAIN_HUMAN_ERROR => Ok(Self::HumanError),
            PAIN_OVERWRITES => Ok(Self::Overwrites),
            other => Err(CoreError::Validation(format!(
                "Unknown data pain: '{other}'. Valid codes: {}",
                VALID_DATA_PAINS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for DataPain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Lead volume
// ---------------------------------------------------------------------------

pub const VOLUME_UNDER_100: &str = "<100";
pub const VOLUME_100_TO_1000: &str = "100–1,000";
pub const VOLUME_OVER_1000: &str = "1,000+";

/// Spaced spelling of the middle bucket used by the landing page markup.
pub const VOLUME_100_TO_1000_SPACED: &str = "100 – 1,000";

/// All valid lead volume labels (canonical spellings only).
pub const VALID_LEAD_VOLUMES: &[&str] = &[VOLUME_UNDER_100, VOLUME_100_TO_1000, VOLUME_OVER_1000];

/// Monthly inbound lead volume bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadVolume {
    Under100,
    From100To1000,
    Over1000,
}

impl LeadVolume {
    pub const ALL: [LeadVolume; 3] = [Self::Under100, Self::From100To1000, Self::Over1000];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under100 => VOLUME_UNDER_100,
            Self::From100To1000 => VOLUME_100_TO_1000,
            Self::Over1000 => VOLUME_OVER_1000,
        }
    }

    /// Rewrite a known spelling to its canonical label; anything else is
    /// returned unchanged.
    pub fn canonicalize(value: String) -> String {
        match value.parse::<Self>() {
            Ok(volume) => volume.as_str().to_string(),
            Err(_) => value,
        }
    }
}

impl FromStr for LeadVolume {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            VOLUME_UNDER_100 => Ok(Self::Under100),
            VOLUME_100_TO_1000 | VOLUME_100_TO_1000_SPACED => Ok(Self::From100To1000),
            VOLUME_OVER_1000 => Ok(Self::Over1000),
            other => Err(CoreError::Validation(format!(
                "Unknown lead volume: '{other}'. Valid volumes: {}",
                VALID_LEAD_VOLUMES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for LeadVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn every_crm_parses_from_its_own_string() {
        for crm in Crm::ALL {
            assert_eq!(crm.as_str().parse::<Crm>().unwrap(), crm);
        }
        assert_eq!(Crm::ALL.len(), VALID_CRMS.len());
    }

    #[test]
    fn crm_names_are_case_sensitive() {
        assert_matches!("hubspot".parse::<Crm>(), Err(CoreError::Validation(_)));
        assert!("".parse::<Crm>().is_err());
    }

    #[test]
    fn every_data_pain_parses_from_its_code() {
        for pain in DataPain::ALL {
            assert_eq!(pain.as_str().parse::<DataPain>().unwrap(), pain);
        }
        assert!("Silent Drift".parse::<DataPain>().is_err());
    }

    #[test]
    fn data_pain_codes_are_snake_case() {
        assert_eq!(DataPain::StaleRecords.to_string(), "stale_records");
        assert_eq!(DataPain::StaleRecords.label(), "Stale Records");
    }

    #[test]
    fn lead_volume_accepts_spaced_alias() {
        assert_eq!(
            "100 – 1,000".parse::<LeadVolume>().unwrap(),
            LeadVolume::From100To1000
        );
    }

    #[test]
    fn canonicalize_rewrites_spaced_alias_only() {
        assert_eq!(LeadVolume::canonicalize("100 – 1,000".into()), "100–1,000");
        assert_eq!(LeadVolume::canonicalize("1,000+".into()), "1,000+");
        assert_eq!(LeadVolume::canonicalize("lots".into()), "lots");
        assert_eq!(LeadVolume::canonicalize(String::new()), "");
    }

    #[test]
    fn unknown_lead_volume_lists_valid_values() {
        let err = "lots".parse::<LeadVolume>().unwrap_err();
        assert!(err.to_string().contains("<100, 100–1,000, 1,000+"));
    }
}
