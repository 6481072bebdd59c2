//! Composer inputs and errors.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::section::HeadingRef;
use crate::selection::SelectionError;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("failed to read document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Filters and layout toggles applied to every composed document.
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    /// Keep only these sections (when at least one matches).
    pub include: Vec<HeadingRef>,
    /// Drop these sections.
    pub exclude: Vec<HeadingRef>,
    /// Delete these heading lines, keeping their bodies.
    pub suppress: Vec<HeadingRef>,
    /// Prefix each document with `# <title>`.
    pub show_file_title: bool,
    /// Follow each document with a `---` rule.
    pub show_separator: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            suppress: Vec::new(),
            show_file_title: true,
            show_separator: true,
        }
    }
}

/// A note read from disk for one composition run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub body: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, body: impl Into<String>) -> Self {
        Self { path: path.into(), body: body.into() }
    }

    pub fn load(path: &Path) -> Result<Self, ComposeError> {
        let body = fs::read_to_string(path)
            .map_err(|source| ComposeError::Read { path: path.to_path_buf(), source })?;
        Ok(Self::new(path, body))
    }

    /// File name without its extension.
    pub fn title(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
