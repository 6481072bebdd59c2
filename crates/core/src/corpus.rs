//! Lookup of note bodies by file name, used when resolving embeds.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::vault::{VaultWalker, VaultWalkerError};

/// Read-only name → body lookup over a set of notes.
pub trait Corpus {
    /// Body of the note whose file name (extension included) equals
    /// `file_name`, if any.
    fn lookup(&self, file_name: &str) -> Option<String>;
}

/// In-memory corpus keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    notes: BTreeMap<String, String>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file_name: impl Into<String>, body: impl Into<String>) {
        self.notes.insert(file_name.into(), body.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryCorpus {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { notes: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl Corpus for MemoryCorpus {
    fn lookup(&self, file_name: &str) -> Option<String> {
        self.notes.get(file_name).cloned()
    }
}

/// Corpus backed by the markdown files under a vault root.
///
/// Every lookup walks the tree afresh and reads the file from disk. When
/// several files share a name, the one closest to the root wins, then the
/// lexicographically smallest relative path.
#[derive(Debug)]
pub struct VaultCorpus {
    walker: VaultWalker,
}

impl VaultCorpus {
    pub fn open(root: &Path) -> Result<Self, VaultWalkerError> {
        Ok(Self { walker: VaultWalker::new(root)? })
    }

    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, VaultWalkerError> {
        Ok(Self { walker: VaultWalker::with_exclusions(root, excluded_folders)? })
    }

    pub fn root(&self) -> &Path {
        self.walker.root()
    }

    /// Path of the file `lookup` would read for `file_name`.
    pub fn locate(&self, file_name: &str) -> Option<PathBuf> {
        let files = match self.walker.walk() {
            Ok(files) => files,
            Err(e) => {
                warn!("failed to scan corpus {}: {}", self.root().display(), e);
                return None;
            }
        };

        files
            .into_iter()
            .filter(|f| f.file_name == file_name)
            .min_by(|a, b| {
                a.depth()
                    .cmp(&b.depth())
                    .then_with(|| a.relative_path.cmp(&b.relative_path))
            })
            .map(|f| f.absolute_path)
    }
}

impl Corpus for VaultCorpus {
    fn lookup(&self, file_name: &str) -> Option<String> {
        let path = self.locate(file_name)?;
        debug!(file = %file_name, path = %path.display(), "resolved embed target");
        match fs::read_to_string(&path) {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("failed to read embed target {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_vault() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::write(root.join("Note.md"), "top level").unwrap();
        fs::create_dir_all(root.join("a/deep")).unwrap();
        fs::write(root.join("a/deep/Note.md"), "deep").unwrap();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("b/Shared.md"), "from b").unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("a/Shared.md"), "from a").unwrap();
        fs::create_dir(root.join(".obsidian")).unwrap();
        fs::write(root.join(".obsidian/Hidden.md"), "hidden").unwrap();

        dir
    }

    #[test]
    fn memory_lookup() {
        let corpus: MemoryCorpus = [("Note.md", "body text")].into_iter().collect();
        assert_eq!(corpus.lookup("Note.md").as_deref(), Some("body text"));
        assert_eq!(corpus.lookup("Other.md"), None);
    }

    #[test]
    fn vault_lookup_prefers_shallowest() {
        let vault = create_test_vault();
        let corpus = VaultCorpus::open(vault.path()).unwrap();
        assert_eq!(corpus.lookup("Note.md").as_deref(), Some("top level"));
    }

    #[test]
    fn vault_lookup_breaks_ties_lexicographically() {
        let vault = create_test_vault();
        let corpus = VaultCorpus::open(vault.path()).unwrap();
        assert_eq!(corpus.lookup("Shared.md").as_deref(), Some("from a"));
    }

    #[test]
    fn vault_lookup_skips_hidden_folders() {
        let vault = create_test_vault();
        let corpus = VaultCorpus::open(vault.path()).unwrap();
        assert_eq!(corpus.lookup("Hidden.md"), None);
    }

    #[test]
    fn vault_lookup_sees_new_files() {
        let vault = create_test_vault();
        let corpus = VaultCorpus::open(vault.path()).unwrap();
        assert_eq!(corpus.lookup("Late.md"), None);
        fs::write(vault.path().join("Late.md"), "late").unwrap();
        assert_eq!(corpus.lookup("Late.md").as_deref(), Some("late"));
    }

    #[test]
    fn vault_lookup_respects_exclusions() {
        let vault = create_test_vault();
        let corpus =
            VaultCorpus::with_exclusions(vault.path(), vec![PathBuf::from("a")]).unwrap();
        assert_eq!(corpus.lookup("Shared.md").as_deref(), Some("from b"));
    }

    #[test]
    fn vault_lookup_finds_notes_in_build_named_folders() {
        let vault = create_test_vault();
        fs::create_dir(vault.path().join("target")).unwrap();
        fs::write(vault.path().join("target/goals.md"), "ship it").unwrap();

        let corpus = VaultCorpus::open(vault.path()).unwrap();
        assert_eq!(corpus.lookup("goals.md").as_deref(), Some("ship it"));
    }
}
