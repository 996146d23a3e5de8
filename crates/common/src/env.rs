//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{info, warn};

/// Create the static root, the upload directory and, for a file-backed SQLite store, its data directory.
pub async fn ensure_env(static_dir: &str, upload_dir: &str, data_dir: Option<&Path>) -> anyhow::Result<()> {
    if tokio::fs::metadata(static_dir).await.is_err() {
        warn!(%static_dir, "static directory not found; creating it");
    }
    let mut dirs = vec![Path::new(static_dir), Path::new(upload_dir)];
    dirs.extend(data_dir);
    for dir in dirs {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    }
    info!(%static_dir, %upload_dir, data_dir = ?data_dir, "runtime directories ready");
    Ok(())
}
