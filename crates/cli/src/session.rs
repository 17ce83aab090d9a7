//! Bootstrap shared by every command: content, layout and the roster.

use anyhow::{Context, Result, anyhow, bail};
use console::style;
use sheet_content::{CatalogLoader, ContentFactory, ItemCatalog, LayoutConfig, LayoutLoader};
use sheet_core::{
    InventoryController, InventoryOutcome, Item, ItemCollection, ItemId, PlacementEngine, Viewport,
};
use sheet_runtime::{
    Character, CharacterId, CharacterRoster, CharacterStore, FileCharacterStore,
    InMemoryCharacterStore, SheetConfig, StorageKind,
};

pub struct Session {
    pub config: SheetConfig,
    pub catalog: ItemCatalog,
    pub layout: LayoutConfig,
    pub roster: CharacterRoster<Box<dyn CharacterStore>>,
}

impl Session {
    pub fn open(config: SheetConfig) -> Result<Self> {
        let content = ContentFactory::new(&config.data_dir);

        let catalog = match &config.catalog {
            Some(path) => CatalogLoader::load(path)?,
            None => content.load_catalog()?,
        };
        let layout = match &config.layout {
            Some(path) => LayoutLoader::load(path)?,
            None => content.load_layout()?,
        };

        let store: Box<dyn CharacterStore> = match config.storage {
            StorageKind::File => Box::new(
                FileCharacterStore::new(&config.data_dir).with_context(|| {
                    format!("Failed to open data directory {}", config.data_dir.display())
                })?,
            ),
            StorageKind::Memory => Box::new(InMemoryCharacterStore::new()),
        };
        let mut roster = CharacterRoster::new(store);
        roster.load().context("Failed to load characters")?;

        let viewport = Viewport::stacked(layout.metrics(config.profile), layout.dims());
        roster.audit(&PlacementEngine::new(viewport.dims));
        if roster.fit_to_viewport(viewport) > 0 {
            roster.save().context("Failed to save re-clamped inventories")?;
        }

        tracing::debug!(
            data_dir = %config.data_dir.display(),
            storage = %config.storage,
            profile = %config.profile,
            catalog_entries = catalog.len(),
            "session opened"
        );

        Ok(Self {
            config,
            catalog,
            layout,
            roster,
        })
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::stacked(self.layout.metrics(self.config.profile), self.layout.dims())
    }

    pub fn controller(&self) -> InventoryController {
        InventoryController::new(self.viewport(), sheet_core::Detached)
    }

    /// Resolve a character by id or case-insensitive name, defaulting to the
    /// current selection.
    pub fn character_id(&self, query: Option<&str>) -> Result<CharacterId> {
        let Some(query) = query else {
            return self.roster.current_id().ok_or_else(|| {
                anyhow!("No character selected. Run `sheet select <name>` first.")
            });
        };

        if let Ok(id) = query.parse::<CharacterId>() {
            if self.roster.get(id).is_some() {
                return Ok(id);
            }
        }

        let matches: Vec<&Character> = self
            .roster
            .characters()
            .iter()
            .filter(|c| c.name.eq_ignore_ascii_case(query))
            .collect();
        match matches.as_slice() {
            [only] => Ok(only.id),
            [] => bail!("No character named {query:?}"),
            _ => bail!("Several characters are named {query:?}; use the id instead"),
        }
    }

    pub fn character(&self, id: CharacterId) -> Result<&Character> {
        self.roster
            .get(id)
            .ok_or_else(|| anyhow!("Character {id} not found"))
    }

    /// Resolve an item by id or case-insensitive name within `items`.
    pub fn item_id(items: &ItemCollection, query: &str) -> Result<ItemId> {
        if let Ok(id) = query.parse::<ItemId>() {
            if items.contains(id) {
                return Ok(id);
            }
        }

        let matches: Vec<&Item> = items
            .iter()
            .filter(|item| item.name.eq_ignore_ascii_case(query))
            .collect();
        match matches.as_slice() {
            [only] => Ok(only.id),
            [] => bail!("No item named {query:?}"),
            _ => bail!("Several items are named {query:?}; use the id instead"),
        }
    }

    /// Store a committed snapshot and save, or fail with the reason nothing
    /// changed.
    pub fn commit(&mut self, id: CharacterId, outcome: InventoryOutcome) -> Result<()> {
        match outcome {
            InventoryOutcome::Changed(items) => {
                self.roster.replace_inventory(id, items)?;
                self.save()
            }
            InventoryOutcome::Unchanged(reason) => Err(reason.into()),
        }
    }

    pub fn save(&self) -> Result<()> {
        self.roster.save().context("Failed to save characters")?;
        if self.config.storage == StorageKind::Memory {
            eprintln!(
                "{}",
                style("Memory storage: changes are discarded on exit").dim()
            );
        }
        Ok(())
    }
}
