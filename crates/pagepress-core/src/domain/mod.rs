//! Domain entities and business logic
//!
//! This module contains the core domain types for pagepress:
//! - Newtypes for type-safe identifiers and validated domain values
//! - Remote page representation shared by the builder and the store port
//! - Local document snapshots
//! - Sync run lifecycle tracking
//! - Domain-specific error types

pub mod document;
pub mod errors;
pub mod newtypes;
pub mod page;
pub mod run;

// Re-export commonly used types
pub use document::LocalDocument;
pub use errors::DomainError;
pub use newtypes::{FolderPath, PageId, RunId, SpaceKey};
pub use page::{BodyRepresentation, PageBody, RemotePage, SearchResults};
pub use run::{RunStatus, SyncRun};
