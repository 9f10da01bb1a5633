//! Service configuration.

use serde::Deserialize;

/// Configuration for the certificate server.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Explorer REST API root, e.g. `https://polygon.blockscout.com/api/v2`.
    #[serde(default = "defaults::api_base_url")]
    pub api_base_url: String,

    /// Certificate NFT contract whose instances are listed.
    #[serde(default = "defaults::contract_address")]
    pub contract_address: String,

    #[serde(default = "defaults::bind_address")]
    pub bind_address: String,

    /// Directory of `<id>.json` static certificates.
    #[serde(default = "defaults::certificates_dir")]
    pub certificates_dir: String,

    #[serde(default = "defaults::request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: defaults::api_base_url(),
            contract_address: defaults::contract_address(),
            bind_address: defaults::bind_address(),
            certificates_dir: defaults::certificates_dir(),
            request_timeout_secs: defaults::request_timeout_secs(),
        }
    }
}

impl Config {
    /// The subset handed to the [`TransactionResolver`](crate::TransactionResolver).
    pub fn explorer(&self) -> ExplorerConfig {
        ExplorerConfig {
            api_base_url: self.api_base_url.clone(),
            contract_address: self.contract_address.clone(),
        }
    }
}

/// Explorer endpoint and certificate contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    pub api_base_url: String,
    pub contract_address: String,
}

impl ExplorerConfig {
    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

mod defaults {
    pub fn api_base_url() -> String {
        // Priority: RETIREMENT_API_BASE_URL (via config) > BLOCKSCOUT_URL > public Polygon
        if let Ok(url) = std::env::var("BLOCKSCOUT_URL") {
            if !url.is_empty() {
                return url;
            }
        }
        "https://polygon.blockscout.com/api/v2".into()
    }

    pub fn contract_address() -> String {
        "0x3224304c75C5118af069bA7ce0b290aCd067E46E".into()
    }

    pub fn bind_address() -> String {
        "0.0.0.0:3050".into()
    }

    pub fn certificates_dir() -> String {
        "data/retirement".into()
    }

    pub fn request_timeout_secs() -> u64 {
        15
    }
}
