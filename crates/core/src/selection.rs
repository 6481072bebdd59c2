//! Expansion of a user selection into an ordered list of note files.

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::vault::{VaultWalker, VaultWalkerError};

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("selected path does not exist: {0}")]
    Missing(PathBuf),

    #[error(transparent)]
    Walk(#[from] VaultWalkerError),
}

/// Expand selected files and directories into the files to compose.
///
/// Files are kept in selection order. A directory contributes every markdown
/// file beneath it, sorted by relative path. Paths are canonicalized and
/// duplicates dropped, keeping the first occurrence.
pub fn expand_selection(selected: &[PathBuf]) -> Result<Vec<PathBuf>, SelectionError> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for path in selected {
        let path = path.canonicalize().map_err(|_| SelectionError::Missing(path.clone()))?;

        if path.is_dir() {
            for walked in VaultWalker::new(&path)?.walk()? {
                if seen.insert(walked.absolute_path.clone()) {
                    files.push(walked.absolute_path);
                }
            }
        } else if seen.insert(path.clone()) {
            files.push(path);
        }
    }

    Ok(files)
}
