//! Working set of characters backed by a [`CharacterStore`].

use std::collections::HashSet;

use sheet_core::{
    Detached, InventoryController, InventoryOutcome, ItemCollection, PlacementEngine,
    PlacementViolation, SheetError, Viewport,
};

use super::{CharacterStore, RepositoryError, Result};
use crate::character::{Character, CharacterId};

/// The list of characters plus the current selection.
///
/// Mutations only touch the in-memory list; call [`CharacterRoster::save`]
/// to persist them.
pub struct CharacterRoster<S> {
    store: S,
    characters: Vec<Character>,
    current: Option<CharacterId>,
}

impl<S: CharacterStore> CharacterRoster<S> {
    /// Empty roster over `store`. Nothing is read until [`Self::load`].
    pub fn new(store: S) -> Self {
        Self {
            store,
            characters: Vec::new(),
            current: None,
        }
    }

    /// Replace the working set with the stored characters and selection.
    ///
    /// Duplicate ids keep their first occurrence. A stored selection that no
    /// longer names a character is dropped.
    pub fn load(&mut self) -> Result<usize> {
        let mut seen = HashSet::new();
        let mut characters = self.store.load()?;
        characters.retain(|character| {
            let fresh = seen.insert(character.id);
            if !fresh {
                tracing::warn!(id = %character.id, "dropping character with duplicate id");
            }
            fresh
        });

        self.current = self
            .store
            .load_selection()?
            .filter(|id| characters.iter().any(|c| c.id == *id));
        self.characters = characters;

        tracing::info!(
            count = self.characters.len(),
            selected = ?self.current,
            "character roster loaded"
        );
        Ok(self.characters.len())
    }

    /// Persist the working set and selection.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.characters)?;
        self.store.save_selection(self.current)?;
        tracing::debug!(count = self.characters.len(), "character roster saved");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Append `character` and make it the current selection.
    ///
    /// A character whose id is already present replaces the existing entry.
    pub fn add(&mut self, character: Character) -> CharacterId {
        let id = character.id;
        match self.position(id) {
            Some(index) => self.characters[index] = character,
            None => self.characters.push(character),
        }
        self.current = Some(id);
        id
    }

    /// Apply `f` to the character named by `id`. The id cannot be changed.
    pub fn update<F>(&mut self, id: CharacterId, f: F) -> Result<&Character>
    where
        F: FnOnce(&mut Character),
    {
        let index = self
            .position(id)
            .ok_or(RepositoryError::CharacterNotFound(id))?;
        let character = &mut self.characters[index];
        f(character);
        character.id = id;
        Ok(character)
    }

    /// Store a committed inventory snapshot on the character.
    pub fn replace_inventory(&mut self, id: CharacterId, items: ItemCollection) -> Result<()> {
        self.update(id, |character| character.inventory = items)
            .map(|_| ())
    }

    /// Remove a character, clearing the selection if it was current.
    pub fn delete(&mut self, id: CharacterId) -> Result<Character> {
        let index = self
            .position(id)
            .ok_or(RepositoryError::CharacterNotFound(id))?;
        if self.current == Some(id) {
            self.current = None;
        }
        Ok(self.characters.remove(index))
    }

    pub fn select(&mut self, id: CharacterId) -> Result<&Character> {
        let index = self
            .position(id)
            .ok_or(RepositoryError::CharacterNotFound(id))?;
        self.current = Some(id);
        Ok(&self.characters[index])
    }

    pub fn current(&self) -> Option<&Character> {
        self.current.and_then(|id| self.get(id))
    }

    pub fn current_id(&self) -> Option<CharacterId> {
        self.current
    }

    pub fn clear_selection(&mut self) {
        self.current = None;
    }

    /// Pull every scratch item back inside `viewport`'s scratch area.
    ///
    /// Returns how many characters had an item moved. Nothing is saved.
    pub fn fit_to_viewport(&mut self, viewport: Viewport) -> usize {
        let mut controller = InventoryController::new(viewport, Detached);
        let mut changed = 0;
        for character in &mut self.characters {
            if let InventoryOutcome::Changed(items) =
                controller.set_viewport(&character.inventory, viewport)
            {
                character.inventory = items;
                changed += 1;
            }
        }
        if changed > 0 {
            tracing::info!(
                changed,
                profile = %viewport.metrics.profile,
                "scratch items re-clamped into the visible area"
            );
        }
        changed
    }

    /// Check every inventory against the grid rules, logging each violation.
    pub fn audit(&self, engine: &PlacementEngine) -> Vec<(CharacterId, PlacementViolation)> {
        let mut violations = Vec::new();
        for character in &self.characters {
            for violation in engine.audit(character.inventory.as_slice()) {
                tracing::warn!(
                    character = %character.id,
                    item = %violation.item,
                    code = violation.error_code(),
                    severity = violation.severity().as_str(),
                    error = %violation.error,
                    "stored inventory breaks grid placement"
                );
                violations.push((character.id, violation));
            }
        }
        violations
    }

    fn position(&self, id: CharacterId) -> Option<usize> {
        self.characters.iter().position(|c| c.id == id)
    }
}
