use serde::{Serialize, de::DeserializeOwned};
use std::{io::ErrorKind, path::PathBuf};
use tokio::{fs, sync::Mutex};
use uuid::Uuid;

use crate::{config::StorageConfig, error::Result};

/// A JSON document persisted as a single file in the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Products,
    Settings,
    Activity,
}

impl Document {
    pub fn file_name(&self) -> &'static str {
        match self {
            Document::Products => "products.json",
            Document::Settings => "settings.json",
            Document::Activity => "activity.json",
        }
    }
}

/// File-backed document store.
///
/// Every write goes to a uniquely named temp file in the same directory and is
/// renamed over the target, so readers never see a half-written document.
/// [`FileStore::update`] holds the store mutex across read-modify-write; two
/// processes sharing a data directory still race, last writer wins.
#[derive(Debug)]
pub struct FileStore {
    data_dir: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path_of(&self, document: Document) -> PathBuf {
        self.data_dir.join(document.file_name())
    }

    /// Reads `document`, seeding it with `fallback` when the file is missing.
    pub async fn read<T, F>(&self, document: Document, fallback: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        if let Some(value) = self.load(document).await? {
            return Ok(value);
        }

        let _guard = self.lock.lock().await;
        self.load_or_seed(document, fallback).await
    }

    pub async fn write<T: Serialize>(&self, document: Document, value: &T) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.persist(document, value).await
    }

    /// Read-modify-write of one document under the store lock.
    ///
    /// Nothing is written when `mutate` fails.
    pub async fn update<T, F, M, R>(&self, document: Document, fallback: F, mutate: M) -> Result<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
        M: FnOnce(&mut T) -> Result<R>,
    {
        let _guard = self.lock.lock().await;
        let mut value = self.load_or_seed(document, fallback).await?;
        let output = mutate(&mut value)?;
        self.persist(document, &value).await?;
        Ok(output)
    }

    pub async fn check_health(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).await?;
        let metadata = fs::metadata(&self.data_dir).await?;
        if !metadata.is_dir() {
            return Err(std::io::Error::new(
                ErrorKind::NotADirectory,
                format!("{} is not a directory", self.data_dir.display()),
            )
            .into());
        }
        Ok(())
    }

    async fn load<T: DeserializeOwned>(&self, document: Document) -> Result<Option<T>> {
        match fs::read_to_string(self.path_of(document)).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn load_or_seed<T, F>(&self, document: Document, fallback: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        if let Some(value) = self.load(document).await? {
            return Ok(value);
        }

        let value = fallback();
        self.persist(document, &value).await?;
        tracing::info!("Seeded {}", document.file_name());
        Ok(value)
    }

    async fn persist<T: Serialize>(&self, document: Document, value: &T) -> Result<()> {
        fs::create_dir_all(&self.data_dir).await?;

        let target = self.path_of(document);
        let tmp_path = self
            .data_dir
            .join(format!(".{}-{}.tmp", document.file_name(), Uuid::new_v4()));
        let payload = serde_json::to_string_pretty(value)?;

        fs::write(&tmp_path, payload).await?;
        if let Err(e) = fs::rename(&tmp_path, &target).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        Ok(())
    }
}

pub fn open(config: &StorageConfig) -> FileStore {
    tracing::info!("Using data directory {}", config.data_dir.display());
    FileStore::new(&config.data_dir)
}
