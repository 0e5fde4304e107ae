//! Name-keyed company store.
//!
//! `CompanyStore` is the seam the resolver depends on; `MemoryStore` is the
//! default backend: a process-local map, optionally mirrored to a pretty-printed
//! JSON file so generated analyses survive restarts.
//!
//! No isolation between concurrent writers to the same name: last write wins.
//! The mirror file is written outside the map lock, so readers never wait on
//! disk; each snapshot carries a revision and an older one never overwrites a
//! newer one.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info};

use crate::company::models::CompanyRecord;
use crate::company::reserved::RESERVED_KEYS;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Normalized store key: trimmed, lowercased.
pub fn store_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[async_trait]
pub trait CompanyStore: Send + Sync {
    async fn get(&self, name: &str) -> Option<CompanyRecord>;

    /// Replaces any existing record for `name` wholesale.
    async fn put(&self, name: &str, record: CompanyRecord) -> Result<(), StoreError>;

    async fn list(&self) -> BTreeMap<String, CompanyRecord>;
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<Entries>,
    mirror: Option<PathBuf>,
    /// Revision of the snapshot currently on disk. Held while writing.
    written: Mutex<u64>,
}

#[derive(Default)]
struct Entries {
    records: HashMap<String, CompanyRecord>,
    /// Bumped on every change.
    revision: u64,
}

struct Snapshot {
    revision: u64,
    json: String,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a store mirrored to `path`, seeded from the file when it exists.
    /// An unreadable or corrupt file is logged and the store starts empty.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_mirror(&path).await {
            Ok(Some(entries)) => {
                info!(
                    "Loaded {} companies from {}",
                    entries.len(),
                    path.display()
                );
                entries
            }
            Ok(None) => HashMap::new(),
            Err(e) => {
                error!("Error initializing company store: {e}");
                HashMap::new()
            }
        };

        Self {
            entries: RwLock::new(Entries {
                records: entries,
                revision: 0,
            }),
            mirror: Some(path),
            written: Mutex::new(0),
        }
    }

    /// Drops every entry that is not a reserved company and rewrites the mirror.
    /// Returns the removed keys, sorted.
    pub async fn purge_generated(&self) -> Result<Vec<String>, StoreError> {
        let (removed, snapshot) = {
            let mut entries = self.entries.write().await;
            let mut removed: Vec<String> = entries
                .records
                .keys()
                .filter(|k| !RESERVED_KEYS.contains(&k.as_str()))
                .cloned()
                .collect();
            removed.sort();
            for key in &removed {
                entries.records.remove(key);
            }
            entries.revision += 1;
            (removed, self.snapshot(&entries)?)
        };
        self.write_mirror(snapshot).await?;
        Ok(removed)
    }

    /// Serializes the map for the mirror; `None` when there is no mirror.
    fn snapshot(&self, entries: &Entries) -> Result<Option<Snapshot>, StoreError> {
        if self.mirror.is_none() {
            return Ok(None);
        }
        let sorted: BTreeMap<&String, &CompanyRecord> = entries.records.iter().collect();
        Ok(Some(Snapshot {
            revision: entries.revision,
            json: serde_json::to_string_pretty(&sorted)?,
        }))
    }

    async fn write_mirror(&self, snapshot: Option<Snapshot>) -> Result<(), StoreError> {
        let (Some(path), Some(snapshot)) = (&self.mirror, snapshot) else {
            return Ok(());
        };
        let mut written = self.written.lock().await;
        if snapshot.revision <= *written {
            return Ok(());
        }
        tokio::fs::write(path, snapshot.json)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
        *written = snapshot.revision;
        Ok(())
    }
}

async fn read_mirror(path: &Path) -> Result<Option<HashMap<String, CompanyRecord>>, StoreError> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Ok(None);
    }
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let parsed: HashMap<String, CompanyRecord> = serde_json::from_str(&raw)?;
    Ok(Some(
        parsed
            .into_iter()
            .map(|(name, record)| (store_key(&name), record))
            .collect(),
    ))
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn get(&self, name: &str) -> Option<CompanyRecord> {
        self.entries.read().await.records.get(&store_key(name)).cloned()
    }

    /// The in-memory entry is kept even when the mirror write fails.
    async fn put(&self, name: &str, record: CompanyRecord) -> Result<(), StoreError> {
        let snapshot = {
            let mut entries = self.entries.write().await;
            entries.records.insert(store_key(name), record);
            entries.revision += 1;
            self.snapshot(&entries)?
        };
        self.write_mirror(snapshot).await
    }

    async fn list(&self) -> BTreeMap<String, CompanyRecord> {
        self.entries
            .read()
            .await
            .records
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
