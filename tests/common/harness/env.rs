//! Isolated test environment with temp directory.

use super::{JotCommand, TestNote};
use jot::store::{FileStore, KeyValueStore, NoteStore, STORAGE_KEY};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Provides methods for seeding notes and building commands against it.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the data directory
    data_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path of the file backing the storage slot.
    pub fn slot_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_KEY)
    }

    /// Adds a test note to the environment's storage slot.
    pub fn add_note(&self, test_note: &TestNote) {
        let note = test_note.to_note();
        let payload =
            serde_json::to_string(&vec![note]).expect("Failed to serialize test note");

        let mut store = NoteStore::open(FileStore::open(&self.data_dir));
        store
            .import_merge(&payload)
            .expect("Failed to seed test note");
    }

    /// Overwrites the storage slot with raw text (for corruption tests).
    pub fn write_slot_raw(&self, blob: &str) {
        let mut kv = FileStore::open(&self.data_dir);
        kv.set(STORAGE_KEY, blob).expect("Failed to write slot");
    }

    /// Opens the note store over this environment's slot.
    pub fn open_store(&self) -> NoteStore<FileStore> {
        NoteStore::open(FileStore::open(&self.data_dir))
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new().data_dir(&self.data_dir)
    }

    /// Writes a file to the test environment and returns its path.
    ///
    /// Useful for creating import payloads.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.data_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.data_dir().exists(), "data directory should exist");
        assert!(env.data_dir().is_dir(), "data directory should be a directory");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.data_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_reaches_the_slot() {
        let env = TestEnv::new();
        env.add_note(&TestNote::new("Seeded").id("seed-1"));

        assert!(env.slot_path().exists(), "slot file should be created");
        let store = env.open_store();
        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0].title(), "Seeded");
    }

    #[test]
    fn test_env_add_multiple_notes_preserves_order() {
        let env = TestEnv::new();
        env.add_note(&TestNote::new("First").id("a"));
        env.add_note(&TestNote::new("Second").id("b"));

        let store = env.open_store();
        let titles: Vec<&str> = store.notes().iter().map(|n| n.title()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--data-dir");
        assert_eq!(args[1], env.data_dir().to_string_lossy());
    }
}
