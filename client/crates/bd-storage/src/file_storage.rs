use crate::{DurableStorage, StorageError, StorageResult};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// All keys live in one JSON object on disk.
///
/// Reads go to disk every time. Every access holds the file lock: writes
/// are read-modify-write, and a read that finds the file corrupted moves it
/// aside exactly once. Writes land through a temp file + fsync + rename so a
/// crash mid-write never leaves a torn file behind.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    file_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> StorageResult<BTreeMap<String, String>> {
        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|e| StorageError::file_read(self.path.clone(), e))?;
        if !exists {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::file_read(self.path.clone(), e))?;

        match serde_json::from_str(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Storage file corrupted at {:?}: {e}", self.path);
                self.backup_corrupted().await?;
                Ok(BTreeMap::new())
            }
        }
    }

    async fn write_entries(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::dir_creation(parent.to_path_buf(), e))?;
        }

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "storage.json".to_string());
        let temp_path = self
            .path
            .with_file_name(format!("{file_name}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::atomic_rename(temp_path, self.path.clone(), e));
        }

        Ok(())
    }

    /// Moves an unreadable file aside as `<name>.corrupted.<timestamp>`.
    async fn backup_corrupted(&self) -> StorageResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.path.with_extension(format!("corrupted.{timestamp}"));

        fs::rename(&self.path, &backup_path)
            .await
            .map_err(StorageError::backup_failed)?;

        warn!("Backed up corrupted storage file to {backup_path:?}");
        Ok(backup_path)
    }
}

#[async_trait]
impl DurableStorage for FileStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let _guard = self.file_lock.lock().await;

        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.file_lock.lock().await;

        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await?;

        debug!("Stored key '{key}' in {:?}", self.path);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let _guard = self.file_lock.lock().await;

        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries).await?;

        debug!("Removed key '{key}' from {:?}", self.path);
        Ok(())
    }
}
