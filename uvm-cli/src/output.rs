//! Artifact output
//!
//! Artifacts are staged in a temporary file next to their destination and
//! renamed into place only once every artifact of a command is ready.
//! Committing several artifacts is all-or-nothing: a failed rename rolls
//! back the ones already moved.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempPath};
use tracing::warn;

/// An artifact written to disk but not yet moved into place
pub struct Staged {
    file: NamedTempFile,
    target: PathBuf,
}

fn staging_dir(target: &Path) -> &Path {
    target
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Write `contents` to a temporary sibling of `target`
pub fn stage(target: &Path, contents: &[u8]) -> Result<Staged> {
    let dir = staging_dir(target);

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(contents)
        .and_then(|()| file.as_file().sync_all())
        .with_context(|| format!("Failed to write {}", target.display()))?;

    Ok(Staged {
        file,
        target: target.to_path_buf(),
    })
}

impl Staged {
    /// Rename the staged file to its destination
    pub fn commit(self) -> Result<()> {
        self.file
            .persist(&self.target)
            .with_context(|| format!("Failed to write {}", self.target.display()))?;
        Ok(())
    }

    /// Copy of the current destination, if there is one
    fn backup(&self) -> Result<Option<TempPath>> {
        if !self.target.is_file() {
            return Ok(None);
        }
        let backup = NamedTempFile::new_in(staging_dir(&self.target))
            .context("Failed to create backup file")?
            .into_temp_path();
        fs::copy(&self.target, &backup)
            .with_context(|| format!("Failed to back up {}", self.target.display()))?;
        Ok(Some(backup))
    }
}

/// Stage and commit a single artifact
pub fn write_atomic(target: &Path, contents: &[u8]) -> Result<()> {
    stage(target, contents)?.commit()
}

/// Commit staged artifacts in order.
///
/// If any of them fails, the ones already committed get their previous
/// contents back (or are removed if they did not exist before).
pub fn commit_all(staged: Vec<Staged>) -> Result<()> {
    let mut committed: Vec<(PathBuf, Option<TempPath>)> = Vec::with_capacity(staged.len());

    for artifact in staged {
        let target = artifact.target.clone();
        match artifact
            .backup()
            .and_then(|backup| artifact.commit().map(|()| backup))
        {
            Ok(backup) => committed.push((target, backup)),
            Err(err) => {
                rollback(committed);
                return Err(err);
            }
        }
    }
    Ok(())
}

fn rollback(committed: Vec<(PathBuf, Option<TempPath>)>) {
    for (target, backup) in committed.into_iter().rev() {
        let restored = match backup {
            Some(backup) => backup.persist(&target).map_err(|err| err.error),
            None => fs::remove_file(&target),
        };
        if let Err(err) = restored {
            warn!(path = %target.display(), %err, "Failed to roll back artifact");
        }
    }
}
