//! Character persistence around the inventory engine.
//!
//! - [`character`] defines the saved character record and its factories
//! - [`repository`] stores characters (file or memory) behind
//!   [`CharacterStore`] and exposes the working [`CharacterRoster`]
//! - [`transfer`] imports and exports single characters as JSON
//! - [`config`] reads runtime settings from the environment
pub mod character;
pub mod config;
pub mod repository;
pub mod transfer;

pub use character::{Character, CharacterFactory, CharacterId, Hireling, HirelingFactory};
pub use config::{SheetConfig, StorageKind, default_data_dir};
pub use repository::{
    CharacterRoster, CharacterStore, FileCharacterStore, InMemoryCharacterStore,
    RepositoryError, Result,
};
pub use transfer::{export_character, export_file_name, import_character};
