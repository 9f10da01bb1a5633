//! HTTP request handlers.

use crate::metrics::METRICS;
use crate::middleware::RequestId;
use crate::response::{CertificateParam, HealthResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use retirement_types::{CertificateData, CertificateSummary};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Health check with explorer reachability.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let explorer = match state.certificates.resolver().health_check().await {
        Ok(status) => status,
        Err(e) => {
            warn!(error = %e, "Explorer health check failed");
            "unavailable"
        }
    };

    // Static certificates keep working without the explorer.
    let status = if explorer == "ok" { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        explorer,
        api_base_url: state.config.api_base_url.clone(),
        contract_address: state.config.contract_address.clone(),
        certificates_dir: state.config.certificates_dir.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        requests: state.request_count.load(Ordering::Relaxed),
    })
}

/// Prometheus metrics in text exposition format.
pub async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = METRICS.render(state.store.list_ids().await.len());
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4",
        )],
        body,
    )
}

/// Certificate index from the explorer. `GET /certificates`
pub async fn list_certificates(
    State(state): State<Arc<AppState>>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<CertificateSummary>>, crate::Error> {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    let rows = state.certificates.list().await.inspect_err(|e| {
        error!(req_id = %req_id.0, error = %e, "Certificate index unavailable");
    })?;
    Ok(Json(rows))
}

/// Explorer-resolved certificate. `GET /certificates/{id}`
pub async fn get_certificate(
    State(state): State<Arc<AppState>>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<CertificateData>, crate::Error> {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    match state.certificates.certificate(&id).await {
        Ok(cert) => {
            info!(req_id = %req_id.0, id = %id, tx_hash = %cert.on_chain_details.retirement_transaction, "Certificate resolved");
            Ok(Json(cert))
        }
        Err(e) => {
            if e.is_not_found() {
                info!(req_id = %req_id.0, id = %id, "Certificate not found");
            } else {
                error!(req_id = %req_id.0, id = %id, error = %e, "Certificate lookup failed");
            }
            Err(e)
        }
    }
}

/// All static certificates. `GET /api/certificate`
pub async fn list_static_certificates(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<CertificateData>> {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    Json(state.store.load_all().await)
}

/// Static certificate ids. `GET /api/certificate/ids`
pub async fn static_certificate_ids(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<CertificateParam>> {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    let ids = state.store.list_ids().await;
    Json(ids.into_iter().map(|id| CertificateParam { id }).collect())
}

/// One static certificate. `GET /api/certificate/{id}`
pub async fn get_static_certificate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CertificateData>, crate::Error> {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    state.store.load(&id).await.map(Json)
}
