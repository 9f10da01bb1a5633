//! Certificate lookups over the explorer: resolve → fetch → normalize.

use crate::metrics::METRICS;
use crate::resolver::TransactionResolver;
use retirement_types::{
    normalize, traits, AttributeBag, CertificateData, CertificateSummary, DEFAULT_TITLE,
    RETIRED_BY_PLACEHOLDER,
};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct CertificateService {
    resolver: Arc<TransactionResolver>,
}

impl CertificateService {
    pub fn new(resolver: Arc<TransactionResolver>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &TransactionResolver {
        &self.resolver
    }

    /// Explorer-derived certificate. `Error::NotFound` when the id has no
    /// transfer history or its transaction carries no transfer legs.
    pub async fn certificate(&self, certificate_id: &str) -> Result<CertificateData, crate::Error> {
        METRICS.lookups_total.fetch_add(1, Ordering::Relaxed);
        let result = lookup(&self.resolver, certificate_id).await;
        if matches!(&result, Err(e) if e.is_not_found()) {
            METRICS.lookups_not_found.fetch_add(1, Ordering::Relaxed);
        }
        result
    }

    /// Certificate index. Entries are resolved concurrently and each degrades
    /// on its own; only a failure to list the ids fails the whole index.
    pub async fn list(&self) -> Result<Vec<CertificateSummary>, crate::Error> {
        METRICS.listings_total.fetch_add(1, Ordering::Relaxed);
        let ids = self.resolver.list_certificate_ids().await?;

        let mut handles = tokio::task::JoinSet::new();
        for (index, id) in ids.iter().enumerate() {
            let resolver = Arc::clone(&self.resolver);
            let id = id.clone();
            handles.spawn(async move { (index, summarize(&resolver, &id).await) });
        }

        let mut rows: Vec<Option<CertificateSummary>> = vec![None; ids.len()];
        while let Some(result) = handles.join_next().await {
            match result {
                Ok((index, row)) => rows[index] = Some(row),
                Err(e) => warn!(error = %e, "Certificate summary task panicked"),
            }
        }

        let rows: Vec<CertificateSummary> = rows
            .into_iter()
            .zip(ids)
            .map(|(row, id)| row.unwrap_or_else(|| CertificateSummary::placeholder(id)))
            .collect();

        let degraded = rows.iter().filter(|r| !r.is_resolved()).count();
        METRICS
            .listing_degraded_entries
            .fetch_add(degraded as u64, Ordering::Relaxed);
        info!(count = rows.len(), degraded, "Certificate index built");
        Ok(rows)
    }
}

async fn lookup(
    resolver: &TransactionResolver,
    certificate_id: &str,
) -> Result<CertificateData, crate::Error> {
    let tx_hash = resolver
        .resolve_transaction_hash(certificate_id)
        .await?
        .ok_or_else(|| crate::Error::NotFound(format!("certificate {certificate_id} has no transfers")))?;

    let tx = resolver.fetch_transaction_detail(&tx_hash).await?;
    normalize(certificate_id, Some(&tx)).ok_or_else(|| {
        crate::Error::NotFound(format!("transaction {tx_hash} carries no token transfers"))
    })
}

/// One index row. Instance metadata and the retiring address are fetched
/// independently so either can fail without hiding the other.
async fn summarize(resolver: &TransactionResolver, id: &str) -> CertificateSummary {
    let (instance, retired_by) = tokio::join!(resolver.fetch_instance(id), retired_by(resolver, id));

    let (title, amount) = match instance {
        Ok(instance) => {
            let metadata = instance.metadata.as_ref();
            let title = metadata
                .and_then(|m| m.name.clone())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string());
            let amount = AttributeBag::from_metadata(metadata)
                .lookup(traits::AMOUNT)
                .to_string();
            (title, amount)
        }
        Err(e) => {
            warn!(id, error = %e, "Certificate instance unavailable");
            (DEFAULT_TITLE.to_string(), String::new())
        }
    };

    CertificateSummary {
        id: id.to_string(),
        title,
        amount,
        retired_by: retired_by.unwrap_or_else(|| RETIRED_BY_PLACEHOLDER.to_string()),
    }
}

async fn retired_by(resolver: &TransactionResolver, id: &str) -> Option<String> {
    let tx_hash = match resolver.resolve_transaction_hash(id).await {
        Ok(Some(hash)) => hash,
        Ok(None) => {
            debug!(id, "Certificate has no transfer history");
            return None;
        }
        Err(e) => {
            warn!(id, error = %e, "Transaction resolution failed");
            return None;
        }
    };

    match resolver.fetch_transaction_detail(&tx_hash).await {
        Ok(tx) => tx.sender().filter(|s| !s.is_empty()).map(str::to_string),
        Err(e) => {
            warn!(id, tx_hash = %tx_hash, error = %e, "Transaction fetch failed");
            None
        }
    }
}
