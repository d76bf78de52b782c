//! Domain newtypes with validation
//!
//! This module provides strongly-typed wrappers for domain identifiers and
//! values. Each newtype ensures data validity at construction time.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::DomainError;

// ============================================================================
// PageId
// ============================================================================

/// Opaque identifier for a remote page, assigned by the page store.
///
/// Never synthesized locally; only values returned by the store are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Creates a `PageId` from a store-assigned identifier string.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidPageId`] if the value is empty or
    /// whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidPageId(id));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ============================================================================
// SpaceKey
// ============================================================================

/// Key of the target space (the remote namespace pages are published into).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceKey(String);

impl SpaceKey {
    /// Creates a `SpaceKey`.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidSpaceKey`] if the value is empty or
    /// contains whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidSpaceKey(key));
        }
        Ok(Self(key))
    }

    /// Returns the key as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SpaceKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SpaceKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ============================================================================
// FolderPath
// ============================================================================

/// Ordered sequence of folder names identifying a folder in the local tree.
///
/// The empty sequence is the vault root. Identity is the *full* path:
/// two folders named `notes` under different parents are distinct values,
/// so parent-cache lookups keyed on `FolderPath` never merge them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderPath(Vec<String>);

impl FolderPath {
    /// The vault root (empty path)
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Creates a `FolderPath` from ordered segments.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidFolderPath`] if any segment is empty
    /// or contains a `/` separator.
    pub fn new<I, S>(segments: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        for segment in &segments {
            if segment.is_empty() || segment.contains('/') {
                return Err(DomainError::InvalidFolderPath(format!(
                    "bad segment {segment:?}"
                )));
            }
        }
        Ok(Self(segments))
    }

    /// Parses a `/`-separated path, ignoring empty segments.
    ///
    /// `""` and `"/"` both parse to the root.
    pub fn parse(path: &str) -> Result<Self, DomainError> {
        Self::new(path.split('/').filter(|s| !s.is_empty()))
    }

    /// Returns true if this is the vault root
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the last segment (the folder's own name), or `None` for root
    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Returns the parent path, or `None` for root
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Returns this path extended with one more segment
    pub fn child(&self, segment: impl Into<String>) -> Result<Self, DomainError> {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self::new(segments)
    }

    /// Returns true if `prefix` is an ancestor of (or equal to) this path
    #[must_use]
    pub fn starts_with(&self, prefix: &FolderPath) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }

    /// Returns the path segments
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl Display for FolderPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "/")
        } else {
            write!(f, "/{}", self.0.join("/"))
        }
    }
}

impl FromStr for FolderPath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// RunId
// ============================================================================

/// Identifier for a single sync run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(Uuid);

impl RunId {
    /// Creates a new random `RunId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Gets the inner UUID value
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RunId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RunId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| DomainError::InvalidId(format!("Invalid UUID: {e}")))
    }
}
