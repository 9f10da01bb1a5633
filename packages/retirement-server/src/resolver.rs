//! Block explorer client: certificate id → retirement transaction.

use crate::config::ExplorerConfig;
use crate::metrics::METRICS;
use reqwest::{StatusCode, Url};
use retirement_types::{RawTransaction, TokenInstance, TokenTransfer};
use serde_json::Value;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Explorer client scoped to one certificate contract.
pub struct TransactionResolver {
    http: reqwest::Client,
    base: Url,
    config: ExplorerConfig,
}

impl TransactionResolver {
    pub fn new(config: ExplorerConfig, timeout: Duration) -> Result<Self, crate::Error> {
        let base = Url::parse(config.base()).map_err(|e| {
            crate::Error::Config(format!("Invalid explorer URL {}: {e}", config.api_base_url))
        })?;
        if base.cannot_be_a_base() {
            return Err(crate::Error::Config(format!(
                "Explorer URL cannot be a base: {}",
                config.api_base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| crate::Error::Config(format!("HTTP client build failed: {e}")))?;

        info!(
            explorer = %base,
            contract = %config.contract_address,
            "Explorer client initialized"
        );

        Ok(Self { http, base, config })
    }

    /// Ids of every certificate instance minted by the contract.
    pub async fn list_certificate_ids(&self) -> Result<Vec<String>, crate::Error> {
        let page = self
            .get_json(&["tokens", self.config.contract_address.as_str(), "instances"])
            .await?;
        Ok(items::<TokenInstance>(page)
            .into_iter()
            .filter_map(|instance| instance.id)
            .collect())
    }

    /// Token instance record (id + metadata) for one certificate.
    pub async fn fetch_instance(&self, certificate_id: &str) -> Result<TokenInstance, crate::Error> {
        require_non_empty(certificate_id, "certificate id")?;
        let value = self
            .get_json(&[
                "tokens",
                self.config.contract_address.as_str(),
                "instances",
                certificate_id,
            ])
            .await?;
        Ok(match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => TokenInstance::default(),
        })
    }

    /// Hash of the transaction behind the certificate's first transfer record.
    /// `Ok(None)` when the certificate has no transfer history.
    pub async fn resolve_transaction_hash(
        &self,
        certificate_id: &str,
    ) -> Result<Option<String>, crate::Error> {
        require_non_empty(certificate_id, "certificate id")?;
        let page = match self
            .get_json(&[
                "tokens",
                self.config.contract_address.as_str(),
                "instances",
                certificate_id,
                "transfers",
            ])
            .await
        {
            Ok(page) => page,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        let hash = items::<TokenTransfer>(page)
            .into_iter()
            .find_map(|t| t.transaction_hash.filter(|h| !h.is_empty()));
        debug!(id = certificate_id, tx_hash = ?hash, "Resolved certificate transaction");
        Ok(hash)
    }

    /// Full transaction detail. `Error::NotFound` when the explorer has no
    /// such transaction.
    pub async fn fetch_transaction_detail(
        &self,
        tx_hash: &str,
    ) -> Result<RawTransaction, crate::Error> {
        require_non_empty(tx_hash, "transaction hash")?;
        let value = self.get_json(&["transactions", tx_hash]).await?;
        Ok(RawTransaction::from_value(value))
    }

    /// Quick connectivity check against the contract's instance list.
    pub async fn health_check(&self) -> Result<&'static str, crate::Error> {
        self.get_json(&["tokens", self.config.contract_address.as_str(), "instances"])
            .await
            .map(|_| "ok")
    }

    fn url(&self, segments: &[&str]) -> Result<Url, crate::Error> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| crate::Error::Config(format!("Explorer URL cannot be a base: {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, segments: &[&str]) -> Result<Value, crate::Error> {
        let url = self.url(segments)?;
        let start = Instant::now();
        METRICS.explorer_requests.fetch_add(1, Ordering::Relaxed);

        let result = self.send(&url).await;
        METRICS.record_explorer_duration(start);

        if let Err(e) = &result {
            if !e.is_not_found() {
                METRICS.explorer_errors.fetch_add(1, Ordering::Relaxed);
                warn!(url = %url, error = %e, "Explorer request failed");
            }
        }
        result
    }

    async fn send(&self, url: &Url) -> Result<Value, crate::Error> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| crate::Error::Transport(format!("GET {url}: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(crate::Error::NotFound(url.path().to_string()));
        }
        if !status.is_success() {
            return Err(crate::Error::Transport(format!("GET {url}: HTTP {status}")));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| crate::Error::Transport(format!("GET {url}: invalid body: {e}")))
    }
}

/// Leniently decoded `items[]` of a paginated explorer response.
fn items<T: serde::de::DeserializeOwned>(page: Value) -> Vec<T> {
    match page {
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn require_non_empty(value: &str, what: &str) -> Result<(), crate::Error> {
    if value.trim().is_empty() {
        return Err(crate::Error::InvalidInput(format!("{what} must not be empty")));
    }
    Ok(())
}
