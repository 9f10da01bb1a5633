//! # Retirement Certificate Server
//!
//! Resolves carbon retirement certificates into display-ready records, either
//! from the block explorer (certificate id → retirement transaction →
//! normalized record) or from a directory of static certificate files.
//!
//! ## Quick Start
//! ```bash
//! RETIREMENT_API_BASE_URL=https://polygon.blockscout.com/api/v2 cargo run --bin retirement-server
//! ```
//!
//! ## Endpoints
//! - `GET /health` - Health check with explorer status
//! - `GET /metrics` - Prometheus metrics
//! - `GET /certificates` - Certificate index from the explorer
//! - `GET /certificates/{id}` - Explorer-resolved certificate
//! - `GET /api/certificate` - All static certificates
//! - `GET /api/certificate/ids` - Static certificate ids
//! - `GET /api/certificate/{id}` - One static certificate

pub mod certificates;
pub mod config;
mod error;
mod handlers;
pub mod metrics;
pub mod middleware;
mod response;
pub mod resolver;
mod router;
mod state;
pub mod store;

pub use certificates::CertificateService;
pub use config::{Config, ExplorerConfig};
pub use error::Error;
pub use resolver::TransactionResolver;
pub use router::create as create_router;
pub use state::AppState;
pub use store::CertificateStore;
