//! JSON File Repository
//!
//! One pretty-printed JSON array per list, `{data_dir}/{list}.json`.
//!
//! Appends are serialized per list name with an async mutex and always
//! replace the whole file through a temp file + rename, so readers never see
//! a half-written list. Reads take no lock.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::traits::OptionListRepository;
use crate::domain::{DomainError, DomainResult, ListCatalog, ListOption};

/// File-backed implementation of [`OptionListRepository`]
pub struct JsonFileRepository {
    data_dir: PathBuf,
    catalog: ListCatalog,
    locks: HashMap<String, Arc<Mutex<()>>>,
    lock_timeout: Duration,
}

impl JsonFileRepository {
    pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(2);

    pub fn new(data_dir: impl Into<PathBuf>, catalog: ListCatalog) -> Self {
        let locks = catalog
            .names()
            .map(|name| (name.to_string(), Arc::new(Mutex::new(()))))
            .collect();
        Self {
            data_dir: data_dir.into(),
            catalog,
            locks,
            lock_timeout: Self::DEFAULT_LOCK_TIMEOUT,
        }
    }

    /// Upper bound on waiting for another append to the same list
    pub fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
        self.lock_timeout = lock_timeout;
        self
    }

    pub fn list_path(&self, list: &str) -> PathBuf {
        self.data_dir.join(format!("{list}.json"))
    }

    fn temp_path(&self, list: &str) -> PathBuf {
        self.data_dir.join(format!(".{list}.json.tmp"))
    }

    pub(crate) fn lock_for(&self, list: &str) -> DomainResult<Arc<Mutex<()>>> {
        self.locks
            .get(list)
            .cloned()
            .ok_or_else(|| DomainError::InvalidListName(list.to_string()))
    }

    fn check_name(&self, list: &str) -> DomainResult<()> {
        if self.catalog.contains(list) {
            Ok(())
        } else {
            Err(DomainError::InvalidListName(list.to_string()))
        }
    }

    async fn read_list(&self, list: &str) -> DomainResult<Vec<ListOption>> {
        let content = match fs::read_to_string(self.list_path(list)).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DomainError::read(list, e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| DomainError::read(list, e))
    }

    async fn write_list(&self, list: &str, options: &[ListOption]) -> DomainResult<()> {
        let mut json =
            serde_json::to_string_pretty(options).map_err(|e| DomainError::write(list, e))?;
        json.push('\n');

        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| DomainError::write(list, e))?;

        let tmp = self.temp_path(list);
        let replaced = match write_synced(&tmp, json.as_bytes()).await {
            Ok(()) => fs::rename(&tmp, self.list_path(list)).await,
            Err(e) => Err(e),
        };

        if let Err(e) = replaced {
            // Target file is still the previous version
            let _ = fs::remove_file(&tmp).await;
            return Err(DomainError::write(list, e));
        }
        Ok(())
    }
}

async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

#[async_trait]
impl OptionListRepository for JsonFileRepository {
    fn catalog(&self) -> &ListCatalog {
        &self.catalog
    }

    async fn get(&self, list: &str) -> DomainResult<Vec<ListOption>> {
        self.check_name(list)?;
        self.read_list(list).await
    }

    async fn append_if_absent(
        &self,
        list: &str,
        option: &ListOption,
    ) -> DomainResult<Vec<ListOption>> {
        self.check_name(list)?;
        let option = option.normalized()?;

        let lock = self.lock_for(list)?;
        let _guard = tokio::time::timeout(self.lock_timeout, lock.lock())
            .await
            .map_err(|_| {
                tracing::warn!(
                    list,
                    timeout_ms = self.lock_timeout.as_millis() as u64,
                    "list lock wait timed out"
                );
                DomainError::write(list, "timed out waiting for list lock")
            })?;

        let mut options = self.read_list(list).await?;

        if let Some(existing) = options.iter().find(|o| o.collides_with(&option)) {
            tracing::info!(
                list,
                label = %option.label,
                existing = %existing.label,
                "option already exists, skipping"
            );
            return Ok(options);
        }

        options.push(option);
        self.write_list(list, &options).await?;

        if let Some(added) = options.last() {
            tracing::info!(list, label = %added.label, value = %added.value, "option added");
        }
        Ok(options)
    }
}
