//! File-based CharacterStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::{CharacterStore, RepositoryError, Result};
use crate::character::{Character, CharacterId};

/// File-based implementation of CharacterStore.
///
/// # File Layout
///
/// ```text
/// base_dir/
/// ├── characters.json   (pretty JSON array of characters)
/// └── selection         (id of the selected character, if any)
/// ```
///
/// Writes go to a `.tmp` sibling first and are renamed into place, so a crash
/// mid-save leaves the previous file intact.
pub struct FileCharacterStore {
    base_dir: PathBuf,
}

impl FileCharacterStore {
    pub const CHARACTERS_FILE: &'static str = "characters.json";
    pub const SELECTION_FILE: &'static str = "selection";

    /// Create a new file-based store, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn characters_path(&self) -> PathBuf {
        self.base_dir.join(Self::CHARACTERS_FILE)
    }

    fn selection_path(&self) -> PathBuf {
        self.base_dir.join(Self::SELECTION_FILE)
    }
}

/// Write `contents` to `path` through a temp file and rename.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");
    let temp_path = PathBuf::from(temp_path);

    fs::write(&temp_path, contents)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

impl CharacterStore for FileCharacterStore {
    fn load(&self) -> Result<Vec<Character>> {
        let path = self.characters_path();
        if !path.exists() {
            tracing::debug!("No character file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)?;
        let characters: Vec<Character> = serde_json::from_str(&contents).map_err(|e| {
            RepositoryError::CorruptedData(format!("{}: {}", path.display(), e))
        })?;

        tracing::debug!(
            "Loaded {} characters from {}",
            characters.len(),
            path.display()
        );
        Ok(characters)
    }

    fn save(&self, characters: &[Character]) -> Result<()> {
        let path = self.characters_path();
        let json = serde_json::to_vec_pretty(characters)?;
        write_atomic(&path, &json)?;

        tracing::debug!("Saved {} characters to {}", characters.len(), path.display());
        Ok(())
    }

    fn load_selection(&self) -> Result<Option<CharacterId>> {
        let path = self.selection_path();
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse()
            .map(Some)
            .map_err(|e| RepositoryError::CorruptedData(format!("{}: {}", path.display(), e)))
    }

    fn save_selection(&self, selection: Option<CharacterId>) -> Result<()> {
        let path = self.selection_path();
        match selection {
            Some(id) => write_atomic(&path, id.to_string().as_bytes()),
            None if path.exists() => Ok(fs::remove_file(&path)?),
            None => Ok(()),
        }
    }
}
