//! Word conversion through an external `pandoc` process.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use super::{DocumentConverter, ExportError};

/// Converter that pipes Markdown into `pandoc -f markdown -t docx`.
#[derive(Debug, Clone)]
pub struct PandocConverter {
    program: String,
}

impl Default for PandocConverter {
    fn default() -> Self {
        Self { program: "pandoc".to_string() }
    }
}

impl PandocConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl DocumentConverter for PandocConverter {
    fn convert(&self, markdown: &str, output: &Path) -> Result<(), ExportError> {
        debug!(program = %self.program, output = %output.display(), "running converter");

        let spawn_err =
            |source| ExportError::Spawn { program: self.program.clone(), source };

        let mut child = Command::new(&self.program)
            .args(["-f", "markdown", "-t", "docx", "-o"])
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(markdown.as_bytes()).map_err(spawn_err)?;
        }

        let result = child.wait_with_output().map_err(spawn_err)?;
        if !result.status.success() {
            return Err(ExportError::Failed {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
