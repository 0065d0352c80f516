//! Application State
//!
//! Built once per process and shared by every request handler.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

use crate::config::{AppConfig, ConfigError};
use crate::repository::{JsonFileRepository, OptionListRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repo: Arc<dyn OptionListRepository>,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AppState {
    pub fn new(config: AppConfig, repo: Arc<dyn OptionListRepository>) -> Self {
        Self {
            config: Arc::new(config),
            repo,
        }
    }

    /// Prepare the data directory and check every configured list once.
    ///
    /// Unreadable lists are logged; they keep failing per request until fixed.
    pub async fn initialize(config: AppConfig) -> Result<Self, StartupError> {
        tokio::fs::create_dir_all(&config.data_dir)
            .await
            .map_err(|source| StartupError::DataDir {
                path: config.data_dir.display().to_string(),
                source,
            })?;

        let repo = JsonFileRepository::new(config.data_dir.clone(), config.lists.clone())
            .with_lock_timeout(config.lock_timeout);

        for list in config.lists.names() {
            match repo.get(list).await {
                Ok(options) => tracing::info!(list, count = options.len(), "option list loaded"),
                Err(e) => tracing::error!(list, error = %e, "option list unreadable"),
            }
        }

        Ok(Self::new(config, Arc::new(repo)))
    }
}

static SHARED: OnceCell<AppState> = OnceCell::const_new();

/// Process-wide state, initialized on first use.
///
/// Concurrent first callers wait on the same initialization. A failed
/// initialization leaves the cell empty so a later call can retry.
pub async fn shared_state() -> Result<AppState, StartupError> {
    SHARED
        .get_or_try_init(|| async {
            let config = AppConfig::from_env()?;
            AppState::initialize(config).await
        })
        .await
        .cloned()
}
