use smartnotes::infrastructure::{FileKeyValueStore, LocalNoteRepository};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for a note store in a temporary directory
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub store_dir: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let store_dir = temp_dir.path().join("store");
        Ok(Self {
            _temp_dir: temp_dir,
            store_dir,
        })
    }

    /// Open a repository on this store; every call reads the files afresh
    pub fn open_repository(&self) -> LocalNoteRepository<FileKeyValueStore> {
        LocalNoteRepository::new(FileKeyValueStore::new(&self.store_dir))
    }

    pub fn collection_path(&self) -> PathBuf {
        self.store_dir.join("smart-notes.json")
    }
}

/// Canned completions in the shape the model returns
#[allow(dead_code)]
pub mod completions {
    pub const SUMMARY: &str = "Photosynthesis turns light into chemical energy in plants.";

    pub const FLASHCARDS: &str = "Here are your flashcards:\n\n\
        Q: What does photosynthesis produce?\n\
        A: Glucose and oxygen.\n\n\
        Q: Where does it happen?\n\
        A: In the chloroplasts.\n\n\
        Q: What pigment absorbs light?";

    pub const SOURCE_TEXT: &str = "Photosynthesis is the process by which green plants use sunlight \
        to synthesize foods from carbon dioxide and water. It happens in chloroplasts.";
}
