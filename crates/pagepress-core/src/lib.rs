//! pagepress Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `RemotePage`, `LocalDocument`, `SyncRun`
//! - **Newtypes** - `PageId`, `SpaceKey`, `FolderPath`, `RunId`
//! - **Port definitions** - Traits for adapters: `RemotePageStore`,
//!   `LocalTree`, `ProgressReporter`
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure business logic with no external dependencies.
//! Ports define trait interfaces that adapter crates implement; the sync
//! engine in `pagepress-sync` orchestrates domain entities through them.

pub mod config;
pub mod domain;
pub mod ports;
