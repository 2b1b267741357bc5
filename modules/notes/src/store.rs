//! NoteStore — flat-file note collection
//!
//! The whole collection lives in one JSON file as a pretty-printed array of
//! strings. Every read loads the full file; every append rewrites it.

use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("notes file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("notes file is not a JSON array of strings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// File-backed note collection shared by all request handlers
pub struct NoteStore {
    path: PathBuf,
    /// Held across the read-modify-write of an append.
    write_lock: Mutex<()>,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the backing file holds a JSON array, resetting it to `[]`
    /// when it is missing, unreadable, empty or not an array.
    pub async fn initialize(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let reason = match fs::read_to_string(&self.path).await {
            Ok(content) => match serde_json::from_str::<serde_json::Value>(&content) {
                Ok(value) if value.is_array() => return Ok(()),
                Ok(_) => "contents are not a JSON array".to_string(),
                Err(e) => format!("contents are not valid JSON ({})", e),
            },
            Err(e) => format!("file could not be read ({})", e),
        };

        log::warn!(
            "[NOTES] Resetting {} to an empty collection: {}",
            self.path.display(),
            reason
        );

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        self.write(&[]).await
    }

    /// Load the full note collection
    pub async fn read_all(&self) -> Result<Vec<String>, StorageError> {
        let content = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Append one note and return the updated collection
    pub async fn append_one(&self, text: &str) -> Result<Vec<String>, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut notes = self.read_all().await?;
        notes.push(text.to_string());
        self.write(&notes).await?;

        log::debug!("[NOTES] Stored note #{} in {}", notes.len(), self.path.display());
        Ok(notes)
    }

    /// Write the collection to a sibling temp file, then rename it over the
    /// backing file so readers never see a half-written array.
    async fn write(&self, notes: &[String]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(notes)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json).await?;
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            fs::remove_file(&tmp).await.ok();
            return Err(e.into());
        }
        Ok(())
    }
}
