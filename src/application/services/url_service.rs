//! URL shortening and resolution service.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use metrics::counter;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::base62;
use crate::utils::url_normalizer::normalize_url;

/// Baseline for the allocation counter.
///
/// Seeding well above zero keeps even the earliest codes several significant
/// symbols wide; the consumed offset of the `62^7` address space has no
/// correctness function.
pub const COUNTER_SEED: u64 = 100_000_000_000;

/// Service owning the allocation counter and the long/short mapping.
///
/// The counter is exclusively owned here: `shorten` advances it with a single
/// atomic `fetch_add`, so no two callers ever observe the same pre-increment
/// value, and `resolve` never touches it. Exactly-once mapping creation per
/// long URL is enforced by the check-then-insert sequence backed by the
/// storage uniqueness constraints; a lost race surfaces as a conflict and is
/// resolved by one idempotent re-read.
pub struct UrlService {
    repository: Arc<dyn MappingRepository>,
    counter: AtomicU64,
}

impl std::fmt::Debug for UrlService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlService")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

impl UrlService {
    /// Creates a service whose counter starts at `seed`.
    pub fn new(repository: Arc<dyn MappingRepository>, seed: u64) -> Self {
        Self {
            repository,
            counter: AtomicU64::new(seed),
        }
    }

    /// Creates a service whose counter resumes after the newest persisted code.
    ///
    /// Decodes the short code of the most recently issued mapping and starts
    /// at one past it, floored at `seed`. A restart therefore cannot re-issue
    /// a code that already exists in storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if storage is unreachable or holds a
    /// code the codec cannot decode.
    pub async fn with_recovered_counter(
        repository: Arc<dyn MappingRepository>,
        seed: u64,
    ) -> Result<Self, AppError> {
        let next = match repository.find_latest().await? {
            Some(latest) => {
                let value = base62::decode(&latest.short_code).map_err(|e| {
                    AppError::internal(
                        "Persisted short code is not decodable",
                        json!({ "short_code": latest.short_code, "reason": e.to_string() }),
                    )
                })?;
                seed.max(value + 1)
            }
            None => seed,
        };

        debug!(counter = next, "Allocation counter initialized");

        Ok(Self::new(repository, next))
    }

    /// Shortens a long URL, reusing any existing mapping.
    ///
    /// Repeated submissions of the same URL are idempotent: the existing code
    /// is returned without allocating. On a miss, the next counter value is
    /// claimed atomically, encoded, and persisted. If the insert loses a race
    /// (uniqueness violation on either column), the existence check is re-run
    /// once and the winner's mapping is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed or oversized URLs,
    /// [`AppError::Internal`] on storage failures, on address-space
    /// exhaustion, or if a conflict recurs past the single retry.
    pub async fn shorten(&self, long_url: &str) -> Result<Mapping, AppError> {
        let normalized = normalize_url(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing) = self.repository.find_by_long_url(&normalized).await? {
            debug!(short_code = %existing.short_code, "URL already shortened");
            return Ok(existing);
        }

        // Claimed values are consumed even if the insert below is abandoned;
        // gaps in the sequence are fine, reuse is not.
        let value = self.counter.fetch_add(1, Ordering::SeqCst);
        if value >= base62::CAPACITY {
            return Err(AppError::internal(
                "Short code address space exhausted",
                json!({ "counter": value }),
            ));
        }
        let short_code = base62::encode(value);

        let new_mapping = NewMapping {
            short_code: short_code.clone(),
            long_url: normalized.clone(),
        };

        match self.repository.insert(new_mapping).await {
            Ok(mapping) => {
                counter!("urls_created_total").increment(1);
                info!(short_code = %mapping.short_code, "New mapping created");
                Ok(mapping)
            }
            Err(AppError::Conflict { .. }) => {
                // The uniqueness constraint is the arbiter of check-then-insert
                // races: another request won, so the mapping must exist now.
                match self.repository.find_by_long_url(&normalized).await? {
                    Some(existing) => {
                        debug!(short_code = %existing.short_code, "Lost insert race, reusing winner");
                        Ok(existing)
                    }
                    None => {
                        warn!(short_code = %short_code, "Insert conflicted with no existing mapping");
                        Err(AppError::internal(
                            "Mapping insert conflicted but no existing mapping was found",
                            json!({ "short_code": short_code }),
                        ))
                    }
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Resolves a short code back to its mapping.
    ///
    /// This path never touches the counter and never allocates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code contains symbols outside
    /// the base-62 alphabet, [`AppError::NotFound`] if no mapping exists for
    /// it, and [`AppError::Internal`] on storage failures.
    pub async fn resolve(&self, short_code: &str) -> Result<Mapping, AppError> {
        base62::decode(short_code).map_err(|e| {
            AppError::bad_request("Invalid short code", json!({ "reason": e.to_string() }))
        })?;

        self.repository
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short code not found", json!({ "short_code": short_code }))
            })
    }

    /// Probes the backing store, for the health endpoint.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, base_url: &str, short_code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), short_code)
    }
}
