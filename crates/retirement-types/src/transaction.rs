//! Raw explorer transaction model (Blockscout v2 shape).
//!
//! Every field is optional and decoded leniently; see [`crate::lenient`].

use serde::Deserialize;
use serde_json::Value;

use crate::lenient::{object, object_sequence, optional, optional_scalar};

/// Full transaction detail as returned by `GET /transactions/{hash}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTransaction {
    #[serde(default, deserialize_with = "optional")]
    pub hash: Option<String>,
    #[serde(default, deserialize_with = "optional")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "object")]
    pub from: Option<AddressRef>,
    #[serde(default, deserialize_with = "object")]
    pub decoded_input: Option<DecodedInput>,
    #[serde(default, deserialize_with = "object_sequence")]
    pub token_transfers: Option<Vec<TokenTransfer>>,
}

impl RawTransaction {
    /// Decode from an arbitrary JSON value. Never fails: a non-object value
    /// yields an empty transaction.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Transfer legs, empty when the key is absent.
    pub fn transfers(&self) -> &[TokenTransfer] {
        self.token_transfers.as_deref().unwrap_or_default()
    }

    /// Address that submitted the transaction.
    pub fn sender(&self) -> Option<&str> {
        self.from.as_ref().and_then(AddressRef::as_str)
    }
}

/// `{ "hash": "0x..." }` wrapper used for every address in the explorer API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressRef {
    #[serde(default, deserialize_with = "optional")]
    pub hash: Option<String>,
}

impl AddressRef {
    pub fn as_str(&self) -> Option<&str> {
        self.hash.as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DecodedInput {
    #[serde(default, deserialize_with = "object_sequence")]
    pub parameters: Option<Vec<DecodedParameter>>,
}

/// One decoded ABI argument.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DecodedParameter {
    #[serde(default, deserialize_with = "optional")]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

/// One leg of a transaction's token-transfer list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenTransfer {
    #[serde(default, deserialize_with = "object")]
    pub token: Option<TokenInfo>,
    #[serde(default, deserialize_with = "object")]
    pub from: Option<AddressRef>,
    #[serde(default, deserialize_with = "object")]
    pub total: Option<TransferTotal>,
    #[serde(default, deserialize_with = "optional")]
    pub transaction_hash: Option<String>,
}

impl TokenTransfer {
    /// Metadata of the transferred token instance, present only on
    /// non-fungible legs.
    pub fn metadata(&self) -> Option<&TokenMetadata> {
        self.total
            .as_ref()
            .and_then(|t| t.token_instance.as_ref())
            .and_then(|i| i.metadata.as_ref())
    }

    pub fn token_type(&self) -> Option<&str> {
        self.token.as_ref().and_then(|t| t.token_type.as_deref())
    }

    pub fn sender(&self) -> Option<&str> {
        self.from.as_ref().and_then(AddressRef::as_str)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenInfo {
    #[serde(default, deserialize_with = "optional")]
    pub symbol: Option<String>,
    /// `ERC-20`, `ERC-721`, `ERC-1155`.
    #[serde(rename = "type", default, deserialize_with = "optional")]
    pub token_type: Option<String>,
    /// Newer explorer releases name this `address_hash`.
    #[serde(alias = "address_hash", default, deserialize_with = "optional")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferTotal {
    #[serde(default, deserialize_with = "object")]
    pub token_instance: Option<TokenInstance>,
}

/// A non-fungible token instance, as embedded in a transfer or returned by
/// `GET /tokens/{contract}/instances/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenInstance {
    #[serde(default, deserialize_with = "optional_scalar")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "object")]
    pub metadata: Option<TokenMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenMetadata {
    #[serde(default, deserialize_with = "optional")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "object_sequence")]
    pub attributes: Option<Vec<RawAttribute>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAttribute {
    #[serde(default, deserialize_with = "optional")]
    pub trait_type: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}
