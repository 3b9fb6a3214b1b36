//! Repository implementations.
//!
//! - [`PgMappingRepository`] - PostgreSQL storage, the system of record
//! - [`MemoryMappingRepository`] - hash-map storage for tests and ephemeral runs

pub mod memory_mapping_repository;
pub mod pg_mapping_repository;

pub use memory_mapping_repository::MemoryMappingRepository;
pub use pg_mapping_repository::PgMappingRepository;
