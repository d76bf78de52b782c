//! Local document snapshot
//!
//! A [`LocalDocument`] is an immutable snapshot of one note taken at the
//! start of a run: its folder, its title (file stem, extension stripped),
//! and its raw content. The vault adapter in `pagepress-sync` produces
//! these; the engine never touches the filesystem again afterwards.

use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::newtypes::FolderPath;

/// An immutable snapshot of one local note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalDocument {
    /// Folder the note lives in (root for top-level notes)
    pub folder: FolderPath,
    /// Title derived from the file name with the extension stripped
    pub title: String,
    /// Raw note content
    pub content: String,
}

impl LocalDocument {
    /// Creates a document snapshot.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidTitle`] if the title is empty.
    pub fn new(
        folder: FolderPath,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::InvalidTitle(title));
        }
        Ok(Self {
            folder,
            title,
            content: content.into(),
        })
    }

    /// Derives a title from a file name by stripping the final extension.
    ///
    /// `"a.md"` becomes `"a"`; a name without an extension is returned
    /// unchanged; a leading dot is not treated as an extension separator.
    #[must_use]
    pub fn title_from_file_name(file_name: &str) -> &str {
        match file_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => file_name,
        }
    }

    /// Full display path of the document, for diagnostics
    #[must_use]
    pub fn display_path(&self) -> String {
        if self.folder.is_root() {
            format!("/{}", self.title)
        } else {
            format!("{}/{}", self.folder, self.title)
        }
    }
}
