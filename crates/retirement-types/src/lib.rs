//! Data model and pure-logic utilities for carbon retirement certificates.
//! No I/O; usable by the explorer service, static tooling and tests alike.

mod attributes;
mod certificate;
mod lenient;
mod normalize;
mod standard;
mod summary;
mod timestamp;
mod transaction;

pub use attributes::AttributeBag;
pub use certificate::{
    Amount, Beneficiary, CertificateData, DEFAULT_AMOUNT_UNIT, OnChainDetails, ProjectDetails,
    RetirementDetails,
};
pub use normalize::{
    FUNGIBLE_TOKEN_TYPE, PARAM_BENEFICIARY, PARAM_RETIREMENT_MESSAGE, normalize,
    project_specific_token, traits,
};
pub use standard::canonicalize_standard;
pub use summary::{CertificateSummary, DEFAULT_TITLE, RETIRED_BY_PLACEHOLDER};
pub use timestamp::split_timestamp;
pub use transaction::{
    AddressRef, DecodedInput, DecodedParameter, RawAttribute, RawTransaction, TokenInfo,
    TokenInstance, TokenMetadata, TokenTransfer, TransferTotal,
};
