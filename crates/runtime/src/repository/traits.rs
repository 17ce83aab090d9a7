//! Repository contracts for saving and loading characters.

use super::Result;
use crate::character::{Character, CharacterId};

/// Backend holding the full character list.
///
/// Implementations replace the stored list wholesale on every save; the
/// roster keeps the working copy in memory between calls.
pub trait CharacterStore: Send + Sync {
    /// Load every stored character. An empty store yields an empty list.
    fn load(&self) -> Result<Vec<Character>>;

    /// Replace the stored characters with `characters`.
    fn save(&self, characters: &[Character]) -> Result<()>;

    /// Load the id of the selected character, if the backend remembers one.
    fn load_selection(&self) -> Result<Option<CharacterId>> {
        Ok(None)
    }

    /// Remember the selected character across sessions.
    fn save_selection(&self, _selection: Option<CharacterId>) -> Result<()> {
        Ok(())
    }
}

impl<T: CharacterStore + ?Sized> CharacterStore for Box<T> {
    fn load(&self) -> Result<Vec<Character>> {
        (**self).load()
    }

    fn save(&self, characters: &[Character]) -> Result<()> {
        (**self).save(characters)
    }

    fn load_selection(&self) -> Result<Option<CharacterId>> {
        (**self).load_selection()
    }

    fn save_selection(&self, selection: Option<CharacterId>) -> Result<()> {
        (**self).save_selection(selection)
    }
}
