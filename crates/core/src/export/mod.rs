//! Writing composed output as Markdown or converting it to Word.

pub mod pandoc;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub use pandoc::PandocConverter;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run converter '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("converter exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
}

/// Turns Markdown text into a binary document at `output`.
pub trait DocumentConverter {
    fn convert(&self, markdown: &str, output: &Path) -> Result<(), ExportError>;
}

/// Strip `- - -` rule artifacts the converter would otherwise render as text.
pub fn prepare_for_conversion(markdown: &str) -> String {
    markdown.replace("- - -", "")
}

/// Convert `markdown` to a `.docx` file, appending the extension if missing.
pub fn export_word<C: DocumentConverter + ?Sized>(
    converter: &C,
    markdown: &str,
    output: &Path,
) -> Result<PathBuf, ExportError> {
    let output = with_extension(output, "docx");
    converter.convert(&prepare_for_conversion(markdown), &output)?;
    info!("exported word document to {}", output.display());
    Ok(output)
}

/// Write `markdown` verbatim to a `.md` file, appending the extension if missing.
pub fn export_markdown(markdown: &str, output: &Path) -> Result<PathBuf, ExportError> {
    let output = with_extension(output, "md");
    fs::write(&output, markdown)
        .map_err(|source| ExportError::Write { path: output.clone(), source })?;
    info!("exported markdown to {}", output.display());
    Ok(output)
}

fn with_extension(path: &Path, ext: &str) -> PathBuf {
    if path.extension().is_some_and(|e| e == ext) {
        path.to_path_buf()
    } else {
        let mut s = path.as_os_str().to_os_string();
        s.push(".");
        s.push(ext);
        PathBuf::from(s)
    }
}
