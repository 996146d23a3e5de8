//! Uploaded files: stored under a random name, addressed by a public URL path.
use std::path::{Path, PathBuf};

use tracing::info;
use uuid::Uuid;

use crate::errors::ServiceError;

#[derive(Debug, Clone)]
pub struct MediaStore {
    upload_dir: PathBuf,
    public_prefix: String,
}

impl MediaStore {
    pub fn new(upload_dir: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        let public_prefix: String = public_prefix.into();
        Self { upload_dir: upload_dir.into(), public_prefix: public_prefix.trim_end_matches('/').to_string() }
    }

    /// Write `bytes` as `<uuid><.ext>`, keeping the extension of `original_name`,
    /// and return the public path, e.g. `/static/uploads/<uuid>.png`.
    pub async fn save(&self, original_name: Option<&str>, bytes: &[u8]) -> Result<String, ServiceError> {
        let file_name = format!("{}{}", Uuid::new_v4(), extension_of(original_name));
        tokio::fs::create_dir_all(&self.upload_dir).await?;
        tokio::fs::write(self.upload_dir.join(&file_name), bytes).await?;
        info!(file = %file_name, size = bytes.len(), "file stored");
        Ok(format!("{}/{}", self.public_prefix, file_name))
    }
}

impl From<&configs::MediaConfig> for MediaStore {
    fn from(cfg: &configs::MediaConfig) -> Self {
        Self::new(&cfg.upload_dir, cfg.public_prefix.clone())
    }
}

/// `.ext` including the dot, or empty when the name has none.
fn extension_of(original_name: Option<&str>) -> String {
    original_name
        .map(Path::new)
        .and_then(Path::extension)
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_kept() {
        assert_eq!(extension_of(Some("photo.png")), ".png");
        assert_eq!(extension_of(Some("archive.tar.gz")), ".gz");
        assert_eq!(extension_of(Some("README")), "");
        assert_eq!(extension_of(None), "");
    }

    #[tokio::test]
    async fn saves_bytes_under_public_path() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("remont-media-{}", Uuid::new_v4()));
        let store = MediaStore::new(&dir, "/static/uploads/");

        let url = store.save(Some("photo.png"), b"\x89PNG fake").await?;
        let name = url.strip_prefix("/static/uploads/").expect("public prefix");
        assert!(name.ends_with(".png"));
        assert!(Uuid::parse_str(name.trim_end_matches(".png")).is_ok());
        assert_eq!(tokio::fs::read(dir.join(name)).await?, b"\x89PNG fake");

        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }
}
