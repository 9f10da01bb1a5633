//! Raw retirement transaction → [`CertificateData`].
//!
//! A retirement transaction bundles several transfer legs: the non-fungible
//! certificate mint, which carries the descriptive metadata, and the fungible
//! credit movement, which identifies the beneficiary wallet and the credit
//! token contract. Normalization picks those legs apart and never fails on
//! missing or malformed nested data; each field degrades to `""` on its own.

use crate::attributes::AttributeBag;
use crate::certificate::{
    Amount, Beneficiary, CertificateData, DEFAULT_AMOUNT_UNIT, OnChainDetails, ProjectDetails,
    RetirementDetails,
};
use crate::standard::canonicalize_standard;
use crate::timestamp::split_timestamp;
use crate::transaction::{RawTransaction, TokenTransfer};

/// Token type of the fungible credit leg.
pub const FUNGIBLE_TOKEN_TYPE: &str = "ERC-20";

/// Decoded call parameter naming the beneficiary.
pub const PARAM_BENEFICIARY: &str = "beneficiaryString";
/// Decoded call parameter holding the retirement message.
pub const PARAM_RETIREMENT_MESSAGE: &str = "retirementMessage";

/// Certificate metadata trait names.
pub mod traits {
    pub const AMOUNT: &str = "Amount";
    pub const UNIT: &str = "Unit";
    pub const CATEGORY: &str = "Category";
    pub const CARBON_STANDARD: &str = "Carbon standard";
    pub const LOCATION: &str = "Location";
    pub const PROJECT_ID: &str = "Project ID";
    pub const VINTAGE: &str = "Vintage";
    pub const METHODOLOGY: &str = "Methodology";
    pub const URL: &str = "URL";
}

/// Build the certificate record for `certificate_id` from its retirement
/// transaction. Returns `None` when there is no transaction or it carries no
/// transfer legs.
pub fn normalize(certificate_id: &str, raw: Option<&RawTransaction>) -> Option<CertificateData> {
    let tx = raw?;
    let transfers = tx.transfers();
    if transfers.is_empty() {
        return None;
    }

    let certificate_leg = transfers.iter().find(|t| t.metadata().is_some());
    let value_leg = transfers
        .iter()
        .find(|t| t.token_type() == Some(FUNGIBLE_TOKEN_TYPE));

    let metadata = certificate_leg.and_then(TokenTransfer::metadata);
    let attrs = AttributeBag::from_metadata(metadata);
    let params = AttributeBag::from_decoded_input(tx.decoded_input.as_ref());

    let title = metadata.and_then(|m| m.name.clone()).unwrap_or_default();
    let background_image = metadata.and_then(|m| m.image.clone()).unwrap_or_default();
    let protocol = certificate_leg
        .and_then(|t| t.token.as_ref())
        .and_then(|t| t.symbol.clone())
        .unwrap_or_default();

    let amount_value = attrs.lookup(traits::AMOUNT).to_string();
    let unit = attrs
        .non_empty(traits::UNIT)
        .unwrap_or(DEFAULT_AMOUNT_UNIT)
        .to_string();
    let category = attrs.lookup(traits::CATEGORY).to_string();
    let standard = canonicalize_standard(attrs.lookup(traits::CARBON_STANDARD));

    let (retirement_date, retirement_time) = split_timestamp(tx.timestamp.as_deref());

    Some(CertificateData {
        id: certificate_id.to_string(),
        title: title.clone(),
        background_image,
        amount: Amount {
            value: amount_value.clone(),
            unit,
        },
        retirement_date,
        retirement_time,
        protocol,
        category: category.clone(),
        standard: standard.clone(),
        retired_by: tx.sender().unwrap_or_default().to_string(),
        beneficiary: Beneficiary {
            name: params.lookup(PARAM_BENEFICIARY).to_string(),
            wallet_address: value_leg
                .and_then(TokenTransfer::sender)
                .unwrap_or_default()
                .to_string(),
        },
        credit_source: title,
        quote: params.lookup(PARAM_RETIREMENT_MESSAGE).to_string(),
        retirement_details: RetirementDetails {
            credit_category: category,
            amount_retired: amount_value,
        },
        on_chain_details: OnChainDetails {
            retirement_transaction: tx.hash.clone().unwrap_or_default(),
            project_specific_token: project_specific_token(&attrs),
            token_smart_contract: value_leg
                .and_then(|t| t.token.as_ref())
                .and_then(|t| t.address.clone())
                .unwrap_or_default(),
        },
        project_details: ProjectDetails {
            carbon_standard: standard,
            project_location: attrs.lookup(traits::LOCATION).to_string(),
            project_id: attrs.lookup(traits::PROJECT_ID).to_string(),
            vintage: attrs.lookup(traits::VINTAGE).to_string(),
            methodology: attrs.lookup(traits::METHODOLOGY).to_string(),
            url: attrs.lookup(traits::URL).to_string(),
        },
    })
}

/// `CO2E-<projectId>-<vintage>` when both traits are non-empty, otherwise the
/// raw project id (`""` when absent).
pub fn project_specific_token(attrs: &AttributeBag) -> String {
    match (
        attrs.non_empty(traits::PROJECT_ID),
        attrs.non_empty(traits::VINTAGE),
    ) {
        (Some(project_id), Some(vintage)) => format!("CO2E-{project_id}-{vintage}"),
        _ => attrs.lookup(traits::PROJECT_ID).to_string(),
    }
}
