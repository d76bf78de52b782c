//! Domain error types
//!
//! This module defines error types specific to domain operations,
//! including validation failures and invalid run-state transitions.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid page identifier (empty or whitespace-only)
    #[error("Invalid page id: {0:?}")]
    InvalidPageId(String),

    /// Invalid space key format
    #[error("Invalid space key: {0:?}")]
    InvalidSpaceKey(String),

    /// Invalid folder path segment (empty segment or path separator inside one)
    #[error("Invalid folder path: {0}")]
    InvalidFolderPath(String),

    /// Invalid document title
    #[error("Invalid document title: {0:?}")]
    InvalidTitle(String),

    /// Invalid run-state transition attempt
    #[error("Invalid run state transition from {from} to {to}")]
    InvalidState {
        /// The current state
        from: String,
        /// The attempted target state
        to: String,
    },

    /// ID parsing error
    #[error("Invalid ID format: {0}")]
    InvalidId(String),
}
