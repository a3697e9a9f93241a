//! Key-value persistence for the logical collections.
//!
//! A collection is loaded and saved whole; there is no partial write.

use crate::services::metrics::STORAGE_OPERATION_DURATION;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use service_core::error::AppError;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Logical collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Clients,
    Invoices,
    Payments,
}

impl Collection {
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Clients => "facturaspro_clients",
            Collection::Invoices => "facturaspro_invoices",
            Collection::Payments => "facturaspro_payments",
        }
    }
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Load every record of a collection. A collection never saved is empty.
    async fn load(&self, collection: Collection) -> Result<Vec<Value>, AppError>;

    /// Replace a collection with `records`.
    async fn save(&self, collection: Collection, records: Vec<Value>) -> Result<(), AppError>;

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Load and decode a collection, failing on the first malformed record.
pub async fn load_records<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    collection: Collection,
) -> Result<Vec<T>, AppError> {
    store
        .load(collection)
        .await?
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| {
                AppError::DataCorruption(anyhow::anyhow!(
                    "Malformed record #{} in '{}': {}",
                    index,
                    collection.key(),
                    e
                ))
            })
        })
        .collect()
}

/// Encode and save a whole collection.
pub async fn save_records<T: Serialize>(
    store: &dyn KeyValueStore,
    collection: Collection,
    records: &[T],
) -> Result<(), AppError> {
    let values = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            AppError::InternalError(anyhow::anyhow!(
                "Failed to encode '{}': {}",
                collection.key(),
                e
            ))
        })?;
    store.save(collection, values).await
}

/// Process-local store, used for tests and ephemeral runs.
#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Value>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn load(&self, collection: Collection) -> Result<Vec<Value>, AppError> {
        Ok(self
            .collections
            .read()
            .await
            .get(&collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(&self, collection: Collection, records: Vec<Value>) -> Result<(), AppError> {
        self.collections.write().await.insert(collection, records);
        Ok(())
    }
}

/// One pretty-printed JSON array per collection under `base_path`.
pub struct JsonFileStore {
    base_path: PathBuf,
}

impl JsonFileStore {
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let base_path = base_path.into();
        if !base_path.exists() {
            fs::create_dir_all(&base_path).await?;
        }
        Ok(Self { base_path })
    }

    fn path_for(&self, collection: Collection) -> PathBuf {
        self.base_path.join(format!("{}.json", collection.key()))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    #[instrument(skip(self), fields(collection = collection.key()))]
    async fn load(&self, collection: Collection) -> Result<Vec<Value>, AppError> {
        let timer = STORAGE_OPERATION_DURATION
            .with_label_values(&["load", collection.key()])
            .start_timer();

        let path = self.path_for(collection);
        if !path.exists() {
            timer.observe_duration();
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&path).await?;
        let records: Vec<Value> = serde_json::from_str(&raw).map_err(|e| {
            AppError::DataCorruption(anyhow::anyhow!(
                "Collection file {} is not a JSON array: {}",
                path.display(),
                e
            ))
        })?;

        timer.observe_duration();
        debug!(count = records.len(), "Collection loaded");

        Ok(records)
    }

    #[instrument(skip(self, records), fields(collection = collection.key(), count = records.len()))]
    async fn save(&self, collection: Collection, records: Vec<Value>) -> Result<(), AppError> {
        let timer = STORAGE_OPERATION_DURATION
            .with_label_values(&["save", collection.key()])
            .start_timer();

        let body = serde_json::to_vec_pretty(&records).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!(
                "Failed to serialize '{}': {}",
                collection.key(),
                e
            ))
        })?;

        // Write then rename so a reader never sees a half-written file.
        let path = self.path_for(collection);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, body).await?;
        fs::rename(&tmp, &path).await?;

        timer.observe_duration();
        debug!("Collection saved");

        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        fs::metadata(&self.base_path).await?;
        Ok(())
    }
}
