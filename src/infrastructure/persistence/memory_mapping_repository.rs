//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

#[derive(Default)]
struct Store {
    // short_code -> Mapping; long_url -> short_code
    by_code: HashMap<String, Mapping>,
    by_url: HashMap<String, String>,
    next_id: i64,
}

/// In-memory repository backed by hash maps under a mutex.
///
/// Enforces the same uniqueness semantics as the SQL schema (both
/// `short_code` and `long_url` are unique, inserts surface
/// [`AppError::Conflict`]) so it can stand in for PostgreSQL in integration
/// tests and ephemeral runs. State does not survive a restart.
pub struct MemoryMappingRepository {
    store: Mutex<Store>,
}

impl MemoryMappingRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, AppError> {
        self.store
            .lock()
            .map_err(|_| AppError::internal("Mapping store mutex poisoned", json!({})))
    }
}

impl Default for MemoryMappingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MappingRepository for MemoryMappingRepository {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Mapping>, AppError> {
        let store = self.lock()?;
        Ok(store
            .by_url
            .get(long_url)
            .and_then(|code| store.by_code.get(code))
            .cloned())
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Mapping>, AppError> {
        let store = self.lock()?;
        Ok(store.by_code.get(short_code).cloned())
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let mut store = self.lock()?;

        if store.by_code.contains_key(&new_mapping.short_code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "mappings_short_code_key" }),
            ));
        }
        if store.by_url.contains_key(&new_mapping.long_url) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "mappings_long_url_key" }),
            ));
        }

        store.next_id += 1;
        let now = Utc::now();
        let mapping = Mapping::new(
            store.next_id,
            new_mapping.short_code.clone(),
            new_mapping.long_url.clone(),
            now,
            now,
        );

        store
            .by_url
            .insert(new_mapping.long_url, new_mapping.short_code.clone());
        store.by_code.insert(new_mapping.short_code, mapping.clone());

        Ok(mapping)
    }

    async fn find_latest(&self) -> Result<Option<Mapping>, AppError> {
        let store = self.lock()?;
        Ok(store
            .by_code
            .values()
            .max_by_key(|mapping| mapping.id)
            .cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
