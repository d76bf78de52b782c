//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the engine depends
//! on, but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`RemotePageStore`] - Remote page operations (Confluence adapter)
//! - [`LocalTree`] - Enumeration of local documents (vault adapter)
//! - [`ProgressReporter`] - Progress display (CLI status line)

pub mod local_tree;
pub mod page_store;
pub mod progress;

pub use local_tree::LocalTree;
pub use page_store::RemotePageStore;
pub use progress::{NullProgress, ProgressReporter};
