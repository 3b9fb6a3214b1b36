//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! payloads are separate structs (`NewMapping`) so the storage-assigned
//! fields never appear half-initialized.

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
