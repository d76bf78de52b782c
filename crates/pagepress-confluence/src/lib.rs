//! pagepress Confluence - Confluence REST API adapter
//!
//! Provides the async HTTP adapter for the remote page store port:
//! - Title and CQL label searches
//! - Page create / update / delete
//! - Label attachment
//! - Open, basic, and bearer authentication
//!
//! ## Modules
//!
//! - [`client`] - Confluence REST HTTP client
//! - [`wire`] - JSON wire types and RemotePage mapping
//! - [`store`] - `RemotePageStore` port implementation

pub mod client;
pub mod store;
pub mod wire;

use thiserror::Error;

/// Errors that can occur when communicating with the Confluence REST API
#[derive(Debug, Error)]
pub enum ConfluenceError {
    /// The request never produced a usable response
    /// (connection, TLS, or body read/serialization failure)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    ///
    /// `messages` carries the server-reported error messages when the
    /// response body was JSON and contained any; otherwise it is empty.
    #[error("HTTP status {status}: {}", format_messages(.messages))]
    Status {
        /// HTTP status code
        status: u16,
        /// Server-reported error messages, if any
        messages: Vec<String>,
    },

    /// The response had a success status but an unusable shape
    #[error("Unexpected response: {0}")]
    Unexpected(String),
}

fn format_messages(messages: &[String]) -> String {
    if messages.is_empty() {
        "(no server message)".to_string()
    } else {
        messages.join("; ")
    }
}

impl ConfluenceError {
    /// Returns the HTTP status code for status errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ConfluenceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
