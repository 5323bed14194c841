// Local Artifact Store - writes reports to disk instead of S3

use crate::Result;
use crate::error::InventoryError;
use crate::services::ArtifactStore;
use async_trait::async_trait;
use std::path::PathBuf;

/// Stores artifacts under `{root}/{bucket}/{key}`
#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    root: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Filesystem path an artifact lands at
    pub fn path_for(&self, bucket: &str, key: &str) -> PathBuf {
        let mut path = self.root.join(bucket);
        for segment in key.split('/').filter(|s| !s.is_empty() && *s != "..") {
            path.push(segment);
        }
        path
    }
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        let path = self.path_for(bucket, key);
        let write_error = |e: std::io::Error| InventoryError::ArtifactWrite {
            key: path.display().to_string(),
            message: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
        }
        tokio::fs::write(&path, body).await.map_err(write_error)?;

        tracing::debug!("Stored {} ({}) locally", path.display(), content_type);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_for_keeps_key_segments() {
        let store = LocalArtifactStore::new("/tmp/reports");
        assert_eq!(
            store.path_for("bucket", "acm-inventory/report.json"),
            PathBuf::from("/tmp/reports/bucket/acm-inventory/report.json")
        );
    }

    #[test]
    fn test_path_for_drops_parent_segments() {
        let store = LocalArtifactStore::new("/tmp/reports");
        assert_eq!(
            store.path_for("bucket", "../../etc/passwd"),
            PathBuf::from("/tmp/reports/bucket/etc/passwd")
        );
    }

    #[tokio::test]
    async fn test_put_writes_file() -> Result<()> {
        let dir = TempDir::new()?;
        let store = LocalArtifactStore::new(dir.path());

        store
            .put("reports", "acm-inventory/a.csv", b"arn\r\n".to_vec(), "text/csv")
            .await?;

        let written = std::fs::read_to_string(dir.path().join("reports/acm-inventory/a.csv"))?;
        assert_eq!(written, "arn\r\n");
        Ok(())
    }
}
