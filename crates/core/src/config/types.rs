use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::compose::ComposeOptions;
use crate::section::HeadingRef;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub vault_root: String,
    /// Folders ignored by embed lookup (relative to vault_root).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
    /// Headings whose sections are kept, e.g. "## Summary".
    #[serde(default)]
    pub include: Vec<HeadingRef>,
    /// Headings whose sections are dropped.
    #[serde(default)]
    pub exclude: Vec<HeadingRef>,
    /// Heading lines removed from the output, bodies kept.
    #[serde(default)]
    pub suppress: Vec<HeadingRef>,
    #[serde(default = "default_true")]
    pub show_file_title: bool,
    #[serde(default = "default_true")]
    pub show_separator: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Program used for Word conversion.
    #[serde(default = "default_pandoc")]
    pub pandoc: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { pandoc: default_pandoc() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_true() -> bool {
    true
}

fn default_pandoc() -> String {
    "pandoc".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_root: PathBuf,
    /// Excluded folders resolved to absolute paths.
    pub excluded_folders: Vec<PathBuf>,
    pub compose: ComposeOptions,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Settings used when no config file exists: default options over `vault_root`.
    pub fn with_root(vault_root: PathBuf) -> Self {
        Self {
            active_profile: "default".to_string(),
            vault_root,
            excluded_folders: Vec::new(),
            compose: ComposeOptions::default(),
            export: ExportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
