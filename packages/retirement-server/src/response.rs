//! Response types for the certificate API.

use serde::Serialize;

/// Response from the health endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub explorer: &'static str,
    pub api_base_url: String,
    pub contract_address: String,
    pub certificates_dir: String,
    pub uptime_secs: u64,
    pub requests: u64,
}

/// Entry of the static certificate id list.
#[derive(Serialize)]
pub struct CertificateParam {
    pub id: String,
}
