use async_trait::async_trait;
use serde_json::{Map, Value};
use std::{collections::BTreeMap, path::Path, path::PathBuf};
use thiserror::Error;
use tokio::{fs, sync::Mutex};
use tracing::error;

/// A flat key/value document.
pub type Document = Map<String, Value>;

type Collections = BTreeMap<String, BTreeMap<String, Document>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store encoding failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no document {collection}/{key}")]
    NotFound { collection: String, key: String },
}

/// The document database the tracker reads and mutates.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Document>, StoreError>;

    /// All documents of a collection, in key order.
    async fn list(&self, collection: &str) -> Result<Vec<(String, Document)>, StoreError>;

    /// Creates or replaces a document.
    async fn set(&self, collection: &str, key: &str, document: Document) -> Result<(), StoreError>;

    /// Merges `patch` into an existing document; fields not named keep their values.
    async fn update(&self, collection: &str, key: &str, patch: Document) -> Result<(), StoreError>;
}

/// Collections of documents kept in memory and written out as one JSON file
/// after every change. Without a path nothing touches the disk.
pub struct JsonStore {
    path: Option<PathBuf>,
    collections: Mutex<Collections>,
}

impl JsonStore {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            collections: Mutex::new(Collections::new()),
        }
    }

    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let collections = load_collections(&path).await;
        Self {
            path: Some(path),
            collections: Mutex::new(collections),
        }
    }

    async fn persist(&self, collections: &Collections) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let payload = serde_json::to_vec_pretty(collections)?;
        fs::write(path, payload).await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonStore {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.lock().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(key))
            .cloned())
    }

    async fn list(&self, collection: &str) -> Result<Vec<(String, Document)>, StoreError> {
        let collections = self.collections.lock().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(key, doc)| (key.clone(), doc.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn set(&self, collection: &str, key: &str, document: Document) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;
        let mut staged = collections.clone();
        staged
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), document);
        self.persist(&staged).await?;
        *collections = staged;
        Ok(())
    }

    async fn update(&self, collection: &str, key: &str, patch: Document) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;
        // Memory only changes once the file write has succeeded.
        let mut staged = collections.clone();
        let doc = staged
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(key))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                key: key.to_string(),
            })?;
        doc.extend(patch);
        self.persist(&staged).await?;
        *collections = staged;
        Ok(())
    }
}

async fn load_collections(path: &Path) -> Collections {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(collections) => collections,
            Err(err) => {
                error!("failed to parse data file: {err}");
                Collections::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Collections::new(),
        Err(err) => {
            error!("failed to read data file: {err}");
            Collections::new()
        }
    }
}
