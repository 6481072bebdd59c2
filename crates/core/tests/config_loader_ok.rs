use mdbind_core::config::loader::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r####"
version = 1
profile = "default"

[profiles.default]
vault_root = "/tmp/vault"
excluded_folders = ["{{vault_root}}/templates", "archive"]
include = ["## Summary", "Decisions"]
exclude = ["## Private"]
suppress = ["### Notes"]
show_separator = false
"####;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.vault_root.display().to_string(), "/tmp/vault");
    assert_eq!(
        rc.excluded_folders,
        vec![PathBuf::from("/tmp/vault/templates"), PathBuf::from("/tmp/vault/archive")]
    );

    let include: Vec<_> = rc.compose.include.iter().map(|h| h.as_str()).collect();
    assert_eq!(include, vec!["## Summary", "Decisions"]);
    assert_eq!(rc.compose.include[1].level(), 0);
    assert_eq!(rc.compose.exclude[0].level(), 2);
    assert_eq!(rc.compose.suppress[0].as_str(), "### Notes");
    assert!(rc.compose.show_file_title);
    assert!(!rc.compose.show_separator);
    assert_eq!(rc.export.pandoc, "pandoc");
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("mdbind/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
vault_root = "/tmp/def"

[profiles.work]
vault_root = "/tmp/work"
show_file_title = false

[export]
pandoc = "/opt/pandoc/bin/pandoc"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("work")).expect("should load");
    assert_eq!(rc.active_profile, "work");
    assert_eq!(rc.vault_root.display().to_string(), "/tmp/work");
    assert!(!rc.compose.show_file_title);
    assert!(rc.compose.include.is_empty());
    assert_eq!(rc.export.pandoc, "/opt/pandoc/bin/pandoc");
}

#[test]
fn logging_file_expands_vault_root() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
[profiles.default]
vault_root = "/tmp/v"

[logging]
level = "debug"
file = "{{vault_root}}/.mdbind/mdbind.log"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file, Some(PathBuf::from("/tmp/v/.mdbind/mdbind.log")));
}
