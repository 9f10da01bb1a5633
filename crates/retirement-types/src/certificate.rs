//! Display-ready certificate record.
//!
//! Serialized with camelCase keys; the same shape is used by the static
//! certificate files and by the HTTP API. Every field defaults when missing so
//! partially populated files still load.

use serde::{Deserialize, Serialize};

use crate::lenient::display_string;

/// Unit used when the certificate metadata carries none.
pub const DEFAULT_AMOUNT_UNIT: &str = "tonnes";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateData {
    pub id: String,
    pub title: String,
    pub background_image: String,
    pub amount: Amount,
    pub retirement_date: String,
    pub retirement_time: String,
    pub protocol: String,
    pub category: String,
    pub standard: String,
    pub retired_by: String,
    pub beneficiary: Beneficiary,
    pub credit_source: String,
    pub quote: String,
    pub retirement_details: RetirementDetails,
    pub on_chain_details: OnChainDetails,
    pub project_details: ProjectDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Amount {
    #[serde(deserialize_with = "display_string")]
    pub value: String,
    pub unit: String,
}

impl Default for Amount {
    fn default() -> Self {
        Self {
            value: String::new(),
            unit: DEFAULT_AMOUNT_UNIT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Beneficiary {
    pub name: String,
    pub wallet_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetirementDetails {
    pub credit_category: String,
    pub amount_retired: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnChainDetails {
    pub retirement_transaction: String,
    pub project_specific_token: String,
    pub token_smart_contract: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDetails {
    pub carbon_standard: String,
    pub project_location: String,
    pub project_id: String,
    pub vintage: String,
    pub methodology: String,
    pub url: String,
}
