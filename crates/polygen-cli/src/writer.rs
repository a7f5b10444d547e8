//! Persisting artifacts beneath the output root
//!
//! Each file is written to a temporary file in its target directory and then
//! renamed into place, so a reader never sees a half-written artifact.

use anyhow::{Context, Result};
use polygen::EmittedArtifact;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Write every artifact to `<root>/<profile>/output/<category>/<file>`.
pub fn write_artifacts(
    root: &Path,
    category: &str,
    artifacts: &[EmittedArtifact],
) -> Result<Vec<PathBuf>> {
    artifacts
        .iter()
        .map(|artifact| {
            let path = root.join(artifact.relative_path(category));
            write_atomic(&path, artifact.contents.as_bytes())?;
            tracing::debug!(path = %path.display(), "wrote artifact");
            Ok(path)
        })
        .collect()
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .with_context(|| format!("Output path has no parent: {path:?}"))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {dir:?}"))?;

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {dir:?}"))?;
    file.write_all(contents)
        .with_context(|| format!("Failed to write {path:?}"))?;
    file.persist(path)
        .with_context(|| format!("Failed to move output into place: {path:?}"))?;

    Ok(())
}
