//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// PostgreSQL repository for mapping storage and retrieval.
///
/// Uses runtime-checked SQLx queries with bound parameters; unique-constraint
/// violations are converted into [`AppError::Conflict`] by the shared sqlx
/// error mapping, which the service layer treats as a lost allocation race.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Mapping>, AppError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT id, short_code, long_url, created_at, updated_at
            FROM mappings
            WHERE long_url = $1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Mapping>, AppError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT id, short_code, long_url, created_at, updated_at
            FROM mappings
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            INSERT INTO mappings (short_code, long_url)
            VALUES ($1, $2)
            RETURNING id, short_code, long_url, created_at, updated_at
            "#,
        )
        .bind(&new_mapping.short_code)
        .bind(&new_mapping.long_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_latest(&self) -> Result<Option<Mapping>, AppError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT id, short_code, long_url, created_at, updated_at
            FROM mappings
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
