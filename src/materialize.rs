use crate::types::ExtractedFileBlock;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes extracted blocks under a base directory.
#[derive(Debug)]
pub struct Materializer {
    base_dir: PathBuf,
    dry_run: bool,
}

impl Materializer {
    pub fn new(base_dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            base_dir: base_dir.into(),
            dry_run,
        }
    }

    /// Where `rel_path` lands. An absolute path is used as-is.
    pub fn resolve(&self, rel_path: &str) -> PathBuf {
        self.base_dir.join(rel_path)
    }

    /// Create missing parent directories, then overwrite the file with the
    /// block content. Errors carry the block's relative path.
    pub fn materialize(&self, block: &ExtractedFileBlock) -> Result<()> {
        let path = self.resolve(&block.rel_path);

        if self.dry_run {
            if let Some(blocker) = blocking_ancestor(&path) {
                bail!(
                    "Error processing file {}: {} exists and is not a directory",
                    block.rel_path,
                    blocker.display()
                );
            }
            info!("Would write file: {}", path.display());
            return Ok(());
        }

        if let Some(dir) = ensure_parent_dir(&path)
            .with_context(|| format!("Error processing file {}", block.rel_path))?
        {
            info!("Created directory: {}", dir.display());
        }

        fs::write(&path, &block.content)
            .with_context(|| format!("Error processing file {}", block.rel_path))?;
        info!("Successfully wrote file: {}", path.display());
        Ok(())
    }
}

/// `mkdir -p` on the parent of `path`. Returns the directory when it had to
/// be created.
fn ensure_parent_dir(path: &Path) -> std::io::Result<Option<PathBuf>> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            fs::create_dir_all(dir)?;
            Ok(Some(dir.to_path_buf()))
        }
        _ => Ok(None),
    }
}

/// The nearest existing ancestor of `path` when it is not a directory, i.e.
/// the thing a real write would trip over.
fn blocking_ancestor(path: &Path) -> Option<&Path> {
    path.ancestors()
        .skip(1)
        .filter(|p| !p.as_os_str().is_empty())
        .find(|p| p.exists())
        .filter(|p| !p.is_dir())
}
