//! Application state shared across handlers.

use crate::certificates::CertificateService;
use crate::config::Config;
use crate::resolver::TransactionResolver;
use crate::store::CertificateStore;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub certificates: CertificateService,
    pub store: CertificateStore,
    pub start_time: Instant,
    pub request_count: AtomicU64,
}

impl AppState {
    /// Create application state from configuration.
    pub fn new(config: Config) -> Result<Self, crate::Error> {
        let resolver = TransactionResolver::new(
            config.explorer(),
            Duration::from_secs(config.request_timeout_secs),
        )?;
        let store = CertificateStore::new(&config.certificates_dir);

        info!(dir = %store.dir().display(), "Static certificate store configured");

        Ok(Self {
            certificates: CertificateService::new(Arc::new(resolver)),
            store,
            config,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        })
    }
}
