//! Filesystem-backed attachment store.
//!
//! Uploaded bytes live under a configured root directory, one subdirectory
//! per project, one object per attachment named `{file_id}{extension}`. The
//! storage path is derived from generated ids, never from the client-supplied
//! filename, so a hostile filename cannot escape the root or collide with
//! another object. The original filename is kept only as metadata for
//! display and download.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::types::DbId;

/// Longest extension carried over from the original filename.
const MAX_EXTENSION_LEN: usize = 16;

/// Handle to the on-disk attachment store.
///
/// Cheap to clone; constructed once at startup and injected into application
/// state. Object keys are paths relative to the root (`{project_id}/{file_id}{ext}`),
/// which is also what gets persisted in attachment metadata.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if it does not exist yet.
    pub async fn ensure_root(&self) -> Result<(), CoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to create upload root: {e}")))
    }

    /// Derive the storage key for a new attachment.
    ///
    /// The key is `{project_id}/{file_id}{extension}` where the extension is
    /// taken from the original filename only if it is plain ASCII
    /// alphanumerics (anything else is dropped).
    pub fn object_key(project_id: DbId, file_id: DbId, original_filename: &str) -> String {
        match sanitized_extension(original_filename) {
            Some(ext) => format!("{project_id}/{file_id}.{ext}"),
            None => format!("{project_id}/{file_id}"),
        }
    }

    /// Absolute path of an object key under the store root.
    pub fn absolute_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Write an object's bytes, creating the per-project directory on demand.
    pub async fn save(&self, key: &str, data: &[u8]) -> Result<(), CoreError> {
        let path = self.absolute_path(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::Storage(format!("Failed to save file: {e}")))?;
        }
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to save file: {e}")))
    }

    /// Whether the object currently exists on disk.
    pub async fn exists(&self, key: &str) -> bool {
        tokio::fs::try_exists(self.absolute_path(key))
            .await
            .unwrap_or(false)
    }

    /// Open an object for reading, returning the file handle and its size.
    pub async fn open(&self, key: &str) -> Result<(tokio::fs::File, u64), CoreError> {
        let path = self.absolute_path(key);
        let file = tokio::fs::File::open(&path)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to open file: {e}")))?;
        let len = file
            .metadata()
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to stat file: {e}")))?
            .len();
        Ok((file, len))
    }

    /// Remove an object from disk.
    ///
    /// Returns `Ok(true)` if the object was removed, `Ok(false)` if it was
    /// already absent. Any other IO failure is a [`CoreError::Storage`].
    pub async fn delete(&self, key: &str) -> Result<bool, CoreError> {
        match tokio::fs::remove_file(self.absolute_path(key)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CoreError::Storage(format!("Failed to delete file: {e}"))),
        }
    }
}

/// Extract a safe extension from an uploaded filename.
///
/// Only plain ASCII alphanumeric extensions up to [`MAX_EXTENSION_LEN`]
/// characters are kept, lowercased. Everything else returns `None`.
fn sanitized_extension(filename: &str) -> Option<String> {
    let ext = Path::new(filename).extension()?.to_str()?;
    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
