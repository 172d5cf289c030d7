//! Local persistence of the signed-in user and UI preferences
//!
//! Two long-lived values survive restarts: the current user record and
//! whether the sidebar is shown. They are read and written through the
//! [`Storage`] trait so hosts can pick a backing store.
//!
//! # File format
//!
//! ```json
//! {
//!   "meta": { "last_modified": "...", "version": 1 },
//!   "data": { "current_user": { ... }, "is_showing_sidebar": true }
//! }
//! ```

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deck_client::User;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tokio::sync::Mutex as AsyncMutex;

use crate::app_config::BuildKind;
use crate::paths;

const STORAGE_VERSION: u32 = 1;

/// Persistence collaborator for the user record and sidebar flag
#[async_trait]
pub trait Storage: Send + Sync {
    /// Remember the user that just signed in
    async fn login_current_user(&self, user: &User) -> Result<()>;

    /// Replace the stored user after a profile edit
    async fn update_current_user(&self, user: &User) -> Result<()>;

    async fn get_current_user(&self) -> Result<Option<User>>;

    /// Forget everything, including preferences
    async fn logout_user(&self) -> Result<()>;

    /// Whether the sidebar is shown; `true` when never set
    async fn is_showing_sidebar(&self) -> Result<bool>;

    async fn set_is_showing_sidebar(&self, showing: bool) -> Result<()>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// The persisted values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredData {
    #[serde(default)]
    pub current_user: Option<User>,
    #[serde(default)]
    pub is_showing_sidebar: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageFile {
    meta: StorageMeta,
    #[serde(default)]
    data: StoredData,
}

impl Default for StorageFile {
    fn default() -> Self {
        Self {
            meta: StorageMeta {
                last_modified: Utc::now(),
                version: STORAGE_VERSION,
            },
            data: StoredData::default(),
        }
    }
}

/// JSON file backed storage
///
/// Every write rewrites the whole file; `file_lock` serializes access so
/// a read-modify-write cycle never loses a concurrent one.
pub struct FileStorage {
    path: PathBuf,
    build: BuildKind,
    file_lock: AsyncMutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>, build: BuildKind) -> Self {
        Self {
            path: path.into(),
            build,
            file_lock: AsyncMutex::new(()),
        }
    }

    /// Storage at the default location in the config directory
    pub fn open_default(build: BuildKind) -> Result<Self> {
        Ok(Self::new(paths::storage_path()?, build))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<StorageFile> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No storage file at {:?}, using defaults", self.path);
                return Ok(StorageFile::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read storage file: {:?}", self.path))
            }
        };
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse storage file: {:?}", self.path))
    }

    async fn save(&self, mut file: StorageFile) -> Result<()> {
        file.meta.last_modified = Utc::now();
        let content = serde_json::to_string_pretty(&file).context("Failed to serialize storage")?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write storage file: {:?}", self.path))?;

        log::debug!("Saved storage to {:?}", self.path);
        Ok(())
    }

    async fn update(&self, f: impl FnOnce(&mut StoredData) + Send) -> Result<()> {
        let _guard = self.file_lock.lock().await;
        let mut file = self.load().await?;
        f(&mut file.data);
        self.save(file).await
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn login_current_user(&self, user: &User) -> Result<()> {
        let user = user.clone();
        self.update(move |data| data.current_user = Some(user)).await
    }

    async fn update_current_user(&self, user: &User) -> Result<()> {
        let user = user.clone();
        self.update(move |data| data.current_user = Some(user)).await
    }

    async fn get_current_user(&self) -> Result<Option<User>> {
        let _guard = self.file_lock.lock().await;
        Ok(self.load().await?.data.current_user)
    }

    async fn logout_user(&self) -> Result<()> {
        log::info!("Clearing stored user data");
        let _guard = self.file_lock.lock().await;
        self.save(StorageFile::default()).await
    }

    async fn is_showing_sidebar(&self) -> Result<bool> {
        if self.build == BuildKind::Desktop {
            return Ok(true);
        }
        let _guard = self.file_lock.lock().await;
        Ok(self.load().await?.data.is_showing_sidebar.unwrap_or(true))
    }

    async fn set_is_showing_sidebar(&self, showing: bool) -> Result<()> {
        if self.build == BuildKind::Desktop {
            return Ok(());
        }
        self.update(move |data| data.is_showing_sidebar = Some(showing))
            .await
    }
}

/// In-process storage for tests and hosts without a writable disk
#[derive(Default)]
pub struct MemoryStorage {
    data: Mutex<StoredData>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> StoredData {
        self.data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn with_data<T>(&self, f: impl FnOnce(&mut StoredData) -> T) -> T {
        let mut data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut data)
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn login_current_user(&self, user: &User) -> Result<()> {
        self.with_data(|data| data.current_user = Some(user.clone()));
        Ok(())
    }

    async fn update_current_user(&self, user: &User) -> Result<()> {
        self.with_data(|data| data.current_user = Some(user.clone()));
        Ok(())
    }

    async fn get_current_user(&self) -> Result<Option<User>> {
        Ok(self.with_data(|data| data.current_user.clone()))
    }

    async fn logout_user(&self) -> Result<()> {
        self.with_data(|data| *data = StoredData::default());
        Ok(())
    }

    async fn is_showing_sidebar(&self) -> Result<bool> {
        Ok(self.with_data(|data| data.is_showing_sidebar.unwrap_or(true)))
    }

    async fn set_is_showing_sidebar(&self, showing: bool) -> Result<()> {
        self.with_data(|data| data.is_showing_sidebar = Some(showing));
        Ok(())
    }
}
