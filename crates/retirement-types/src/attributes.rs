//! Name → value lookup over the loosely-shaped lists found in explorer
//! payloads (token metadata attributes, decoded call parameters).

use crate::lenient::scalar_to_string;
use crate::transaction::{DecodedInput, DecodedParameter, RawAttribute, TokenMetadata};

/// Ordered bag of named string values. Names are matched by exact,
/// case-sensitive equality and the earliest entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeBag {
    entries: Vec<(String, String)>,
}

impl AttributeBag {
    /// Entries without a name are skipped; a non-scalar value is kept as `""`
    /// so that it still shadows later entries of the same name.
    pub fn from_attributes(attributes: &[RawAttribute]) -> Self {
        let entries = attributes
            .iter()
            .filter_map(|a| {
                let name = a.trait_type.as_ref()?;
                let value = a.value.as_ref().and_then(scalar_to_string).unwrap_or_default();
                Some((name.clone(), value))
            })
            .collect();
        Self { entries }
    }

    pub fn from_metadata(metadata: Option<&TokenMetadata>) -> Self {
        metadata
            .and_then(|m| m.attributes.as_deref())
            .map(Self::from_attributes)
            .unwrap_or_default()
    }

    pub fn from_parameters(parameters: &[DecodedParameter]) -> Self {
        let entries = parameters
            .iter()
            .filter_map(|p| {
                let name = p.name.as_ref()?;
                let value = p.value.as_ref().and_then(scalar_to_string).unwrap_or_default();
                Some((name.clone(), value))
            })
            .collect();
        Self { entries }
    }

    pub fn from_decoded_input(input: Option<&DecodedInput>) -> Self {
        input
            .and_then(|i| i.parameters.as_deref())
            .map(Self::from_parameters)
            .unwrap_or_default()
    }

    /// First value recorded under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`get`](Self::get), with `""` for a missing name.
    pub fn lookup(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Present and non-empty.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
