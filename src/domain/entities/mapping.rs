//! Mapping entity associating a short code with its long URL.

use chrono::{DateTime, Utc};

/// A persisted short-code/long-URL pair.
///
/// Mappings are created exactly once, on the first successful shorten request
/// for a given long URL, and are never mutated afterwards. `id` is assigned
/// monotonically by the storage engine and never reused; `created_at` and
/// `updated_at` are set by the storage layer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Mapping {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Mapping {
    pub fn new(
        id: i64,
        short_code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub short_code: String,
    pub long_url: String,
}
