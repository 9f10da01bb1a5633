//! Static certificate files: one `<id>.json` per certificate.

use retirement_types::CertificateData;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const EXTENSION: &str = "json";

/// Directory-backed certificate source.
pub struct CertificateStore {
    dir: PathBuf,
}

impl CertificateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Sorted ids of every `*.json` file. An unreadable directory yields an
    /// empty list.
    pub async fn list_ids(&self) -> Vec<String> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %self.dir.display(), error = %e, "Certificate directory unreadable");
                return Vec::new();
            }
        };

        let mut ids = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let path = entry.path();
                    if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                        continue;
                    }
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        ids.push(stem.to_string());
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(dir = %self.dir.display(), error = %e, "Failed to read directory entry");
                    break;
                }
            }
        }
        ids.sort();
        ids
    }

    /// Load one certificate. Missing, unreadable or unparsable files, and ids
    /// that could escape the directory, are all `Error::NotFound`.
    pub async fn load(&self, id: &str) -> Result<CertificateData, crate::Error> {
        let path = self
            .path_for(id)
            .ok_or_else(|| crate::Error::NotFound(format!("certificate {id:?}")))?;

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|_| crate::Error::NotFound(format!("certificate {id}")))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Certificate file is not valid JSON");
            crate::Error::NotFound(format!("certificate {id}"))
        })
    }

    /// Every parsable certificate, ordered by id. Bad files are skipped.
    pub async fn load_all(&self) -> Vec<CertificateData> {
        let ids = self.list_ids().await;
        let mut certificates = Vec::with_capacity(ids.len());
        for id in &ids {
            match self.load(id).await {
                Ok(cert) => certificates.push(cert),
                Err(e) => warn!(id = %id, error = %e, "Skipping certificate file"),
            }
        }
        info!(dir = %self.dir.display(), count = certificates.len(), "Static certificates loaded");
        certificates
    }

    /// File for `id`, or `None` when the id is not a plain file stem. Every
    /// id `list_ids` yields maps back to its own file.
    fn path_for(&self, id: &str) -> Option<PathBuf> {
        if id.is_empty() || id == ".." || id.contains(['/', '\\']) {
            return None;
        }
        Some(self.dir.join(format!("{id}.{EXTENSION}")))
    }
}
