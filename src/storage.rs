//! Profile picture storage.
//!
//! Uploads go through [`ProfilePictureStorage`] so the object store can be
//! swapped out; the shipped backend writes into a local directory that the
//! server also exposes as static files.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;

/// Where uploaded profile pictures end up
#[async_trait]
pub trait ProfilePictureStorage: Send + Sync + 'static {
    /// Store the bytes under `filename` and return the public URL
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<String>;
}

/// Stores pictures as files in a directory, served under `base_url`
#[derive(Debug, Clone)]
pub struct LocalDirStorage {
    dir: PathBuf,
    base_url: String,
}

impl LocalDirStorage {
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ProfilePictureStorage for LocalDirStorage {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<String> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(filename), bytes).await?;

        tracing::debug!("Stored {} ({} bytes) in {:?}", filename, bytes.len(), self.dir);

        Ok(format!("{}{}", self.base_url, filename))
    }
}

/// Reduce a client-supplied filename to a safe single path component
///
/// Directory parts are dropped, whitespace becomes `_`, anything outside
/// `[A-Za-z0-9._-]` is removed and leading/trailing dots and underscores are
/// trimmed. May return an empty string.
pub fn secure_filename(filename: &str) -> String {
    let base = filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}
