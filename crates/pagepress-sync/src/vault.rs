//! Filesystem vault adapter.
//!
//! Implements [`LocalTree`] over a directory of Markdown files. The walk
//! snapshots the tree once per run: enumeration is recursive and
//! sequential, content reads happen concurrently afterwards. Hidden
//! entries (leading dot) are skipped, as is anything without a `.md`
//! extension.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use anyhow::Context;
use futures_util::future;
use tracing::debug;

use pagepress_core::domain::document::LocalDocument;
use pagepress_core::domain::newtypes::FolderPath;
use pagepress_core::ports::local_tree::LocalTree;

/// A local vault rooted at one directory.
pub struct VaultTree {
    root: PathBuf,
}

/// One markdown file found during the walk, before its content is read.
struct FoundNote {
    folder: FolderPath,
    title: String,
    path: PathBuf,
}

impl VaultTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait::async_trait]
impl LocalTree for VaultTree {
    async fn list_documents(
        &self,
        scope: Option<&FolderPath>,
    ) -> anyhow::Result<Vec<LocalDocument>> {
        let mut found = Vec::new();
        walk(self.root.clone(), FolderPath::root(), &mut found).await?;

        if let Some(scope) = scope {
            found.retain(|note| note.folder.starts_with(scope));
        }
        // Deterministic order: parents sort before their children's notes.
        found.sort_by(|a, b| {
            (a.folder.segments(), &a.title).cmp(&(b.folder.segments(), &b.title))
        });
        debug!(count = found.len(), root = %self.root.display(), "enumerated vault");

        let reads = found.iter().map(|note| {
            let path = note.path.clone();
            async move {
                tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("failed to read {}", path.display()))
            }
        });
        let contents = future::join_all(reads).await;

        found
            .into_iter()
            .zip(contents)
            .map(|(note, content)| {
                LocalDocument::new(note.folder, note.title, content?).map_err(Into::into)
            })
            .collect()
    }
}

fn walk<'a>(
    dir: PathBuf,
    folder: FolderPath,
    found: &'a mut Vec<FoundNote>,
) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>> {
    Box::pin(async move {
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .with_context(|| format!("failed to read directory {}", dir.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let file_type = entry.file_type().await?;
            if file_type.is_dir() {
                let child = folder
                    .child(&name)
                    .with_context(|| format!("bad folder name {name:?}"))?;
                walk(entry.path(), child, found).await?;
            } else if Path::new(&name)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
            {
                found.push(FoundNote {
                    folder: folder.clone(),
                    title: LocalDocument::title_from_file_name(&name).to_string(),
                    path: entry.path(),
                });
            }
        }
        Ok(())
    })
}
