//! Compose command implementation.

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, bail};
use mdbind_core::config::{ConfigError, ConfigLoader, ResolvedConfig};
use mdbind_core::export::{PandocConverter, export_markdown, export_word};
use mdbind_core::{ComposeOptions, HeadingRef, VaultCorpus, compose};
use tracing::info;

use crate::{ComposeArgs, ExportFormat, logging};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ComposeArgs) -> Result<()> {
    let rc = load_config(config, profile, args)?;
    let _log_guard = logging::init(&rc.logging).wrap_err("failed to set up logging")?;

    let options = build_options(&rc.compose, args)?;
    let corpus = VaultCorpus::with_exclusions(&rc.vault_root, rc.excluded_folders.clone())
        .wrap_err("failed to open vault")?;

    info!(
        profile = %rc.active_profile,
        root = %corpus.root().display(),
        selected = args.paths.len(),
        "composing"
    );
    let text = compose(&args.paths, &options, &corpus)?;

    let format = resolve_format(args.format, args.output.as_deref());
    match (&args.output, format) {
        (None, ExportFormat::Markdown) => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
        (None, ExportFormat::Docx) => bail!("--format docx requires --output"),
        (Some(path), ExportFormat::Markdown) => {
            let written = export_markdown(&text, path)?;
            println!("{}", written.display());
        }
        (Some(path), ExportFormat::Docx) => {
            let converter = PandocConverter::new(rc.export.pandoc.clone());
            let written = export_word(&converter, &text, path)?;
            println!("{}", written.display());
        }
    }

    Ok(())
}

/// Load the active profile; without a config file, fall back to defaults
/// rooted at `--root` or the current directory.
fn load_config(
    config: Option<&Path>,
    profile: Option<&str>,
    args: &ComposeArgs,
) -> Result<ResolvedConfig> {
    let mut rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(ConfigError::NotFound(_)) if config.is_none() => {
            ResolvedConfig::with_root(env::current_dir()?)
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(root) = &args.root {
        rc.excluded_folders = rebase_exclusions(&rc.excluded_folders, &rc.vault_root, root);
        rc.vault_root.clone_from(root);
    }
    Ok(rc)
}

/// Move exclusions that lived under the profile root onto `new_root`.
/// Exclusions outside the old root are kept as configured.
fn rebase_exclusions(excluded: &[PathBuf], old_root: &Path, new_root: &Path) -> Vec<PathBuf> {
    excluded
        .iter()
        .map(|p| match p.strip_prefix(old_root) {
            Ok(rel) => new_root.join(rel),
            Err(_) => p.clone(),
        })
        .collect()
}

fn build_options(base: &ComposeOptions, args: &ComposeArgs) -> Result<ComposeOptions> {
    let mut options = base.clone();
    options.include.extend(HeadingRef::parse_all(&args.include)?);
    options.exclude.extend(HeadingRef::parse_all(&args.exclude)?);
    options.suppress.extend(HeadingRef::parse_all(&args.suppress)?);
    if args.no_title {
        options.show_file_title = false;
    }
    if args.no_separator {
        options.show_separator = false;
    }
    Ok(options)
}

fn resolve_format(explicit: Option<ExportFormat>, output: Option<&Path>) -> ExportFormat {
    explicit.unwrap_or_else(|| {
        if output.and_then(Path::extension).is_some_and(|e| e == "docx") {
            ExportFormat::Docx
        } else {
            ExportFormat::Markdown
        }
    })
}
