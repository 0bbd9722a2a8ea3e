use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::SessionStore;
use crate::error::StoreError;

/// Record kept as a single JSON object file, readable by its owner only.
///
/// Writes go through a temp file and a rename so readers see either the old
/// record or the new one.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Current contents for a read-modify-write; an unreadable record is replaced.
    async fn read_for_update(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match self.read().await {
            Ok(map) => Ok(map),
            Err(StoreError::Json(e)) => {
                tracing::warn!(
                    "Discarding unparseable session file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn write(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("json.tmp");
        let contents = serde_json::to_string_pretty(map)?;
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&tmp).await?;
        // a temp file left behind by an older process keeps its old mode
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))
                .await?;
        }
        file.write_all(contents.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut map = self.read().await?;
        Ok(map.remove(key))
    }

    async fn set_all(&self, entries: &[(&str, String)]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut map = self.read_for_update().await?;
        for (key, value) in entries {
            map.insert((*key).to_string(), value.clone());
        }
        self.write(&map).await
    }

    async fn remove_all(&self, keys: &[&str]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut map = self.read_for_update().await?;
        for key in keys {
            map.remove(*key);
        }

        if map.is_empty() {
            match fs::remove_file(&self.path).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        } else {
            self.write(&map).await
        }
    }
}
