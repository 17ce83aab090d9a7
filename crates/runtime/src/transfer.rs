//! Single-character JSON import and export.

use std::fs;
use std::path::Path;

use crate::character::{Character, CharacterFactory};
use crate::repository::{RepositoryError, Result};

/// Write `character` to `path` as pretty JSON.
pub fn export_character(character: &Character, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(character)?;
    fs::write(path, json)?;
    tracing::info!(id = %character.id, path = %path.display(), "exported character");
    Ok(())
}

/// Read a character exported by [`export_character`] (or an older, partial
/// record). The result always carries a fresh id.
pub fn import_character(path: &Path) -> Result<Character> {
    let contents = fs::read_to_string(path)?;
    let imported: Character = serde_json::from_str(&contents)
        .map_err(|e| RepositoryError::CorruptedData(format!("{}: {}", path.display(), e)))?;
    let character = CharacterFactory::from_import(imported);
    tracing::info!(id = %character.id, path = %path.display(), "imported character");
    Ok(character)
}

/// File name for an export: the lowercased name with every run of
/// non-alphanumeric characters collapsed to `-`.
pub fn export_file_name(character: &Character) -> String {
    let mut stem = String::with_capacity(character.name.len());
    for c in character.name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            stem.push(c);
        } else if !stem.is_empty() && !stem.ends_with('-') {
            stem.push('-');
        }
    }
    let stem = stem.trim_end_matches('-');
    if stem.is_empty() {
        format!("character-{}.json", character.id)
    } else {
        format!("{stem}.json")
    }
}
