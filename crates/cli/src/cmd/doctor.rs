use mdbind_core::config::loader::{ConfigLoader, default_config_path};
use std::path::Path;

use crate::logging;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            let _log_guard = match logging::init(&rc.logging) {
                Ok(guard) => guard,
                Err(e) => {
                    eprintln!("Failed to set up logging: {e}");
                    std::process::exit(1);
                }
            };
            tracing::debug!(profile = %rc.active_profile, "configuration loaded");

            println!("OK   mdb doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("vault_root: {}", rc.vault_root.display());
            if !rc.vault_root.is_dir() {
                println!("warning: vault_root is not a directory");
            }
            println!("include: {}", join_headings(&rc.compose.include));
            println!("exclude: {}", join_headings(&rc.compose.exclude));
            println!("suppress: {}", join_headings(&rc.compose.suppress));
            println!("show_file_title: {}", rc.compose.show_file_title);
            println!("show_separator: {}", rc.compose.show_separator);
            println!("export.pandoc: {}", rc.export.pandoc);
        }
        Err(e) => {
            println!("FAIL mdb doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

fn join_headings(items: &[mdbind_core::HeadingRef]) -> String {
    if items.is_empty() {
        return "(none)".to_string();
    }
    items.iter().map(|h| format!("\"{h}\"")).collect::<Vec<_>>().join(", ")
}
