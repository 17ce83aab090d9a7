use std::sync::RwLock;

use super::{CharacterStore, RepositoryError, Result};
use crate::character::{Character, CharacterId};

/// In-memory implementation of CharacterStore
#[derive(Default)]
pub struct InMemoryCharacterStore {
    characters: RwLock<Vec<Character>>,
    selection: RwLock<Option<CharacterId>>,
}

impl InMemoryCharacterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_characters(characters: Vec<Character>) -> Self {
        Self {
            characters: RwLock::new(characters),
            selection: RwLock::new(None),
        }
    }
}

impl CharacterStore for InMemoryCharacterStore {
    fn load(&self) -> Result<Vec<Character>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters.clone())
    }

    fn save(&self, characters: &[Character]) -> Result<()> {
        let mut current = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = characters.to_vec();
        Ok(())
    }

    fn load_selection(&self) -> Result<Option<CharacterId>> {
        let selection = self
            .selection
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(*selection)
    }

    fn save_selection(&self, selection: Option<CharacterId>) -> Result<()> {
        *self
            .selection
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)? = selection;
        Ok(())
    }
}
